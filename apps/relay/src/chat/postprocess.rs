//! Response post-processing: keyword-triggered suggestions and action items.
//!
//! Both lists come from declarative rule tables: an ordered list of
//! (trigger → contributions) pairs consumed by one matcher, `apply_rules`.
//! Matches are additive in table order and truncation keeps the earliest entries.

use crate::chat::models::{ActionItem, Priority};

pub const SUGGESTION_LIMIT: usize = 4;
pub const ACTION_ITEM_LIMIT: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Rule table machinery
// ────────────────────────────────────────────────────────────────────────────

/// Condition under which a rule contributes its entries.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Fires when the lowercased user message contains any of the keywords.
    AnyKeyword(&'static [&'static str]),
    /// Fires when the request carries at least one attached file.
    HasAttachments,
}

#[derive(Debug)]
pub struct Rule<T: 'static> {
    pub trigger: Trigger,
    pub contributions: &'static [T],
}

/// What the rules are evaluated against.
#[derive(Debug, Clone)]
pub struct Signals {
    message_lower: String,
    has_attachments: bool,
}

impl Signals {
    pub fn new(message: &str, has_attachments: bool) -> Self {
        Self {
            message_lower: message.to_lowercase(),
            has_attachments,
        }
    }

    fn fires(&self, trigger: &Trigger) -> bool {
        match trigger {
            Trigger::AnyKeyword(keywords) => {
                keywords.iter().any(|k| self.message_lower.contains(k))
            }
            Trigger::HasAttachments => self.has_attachments,
        }
    }
}

/// Concatenates the contributions of every firing rule, in table order, up to `cap`.
pub fn apply_rules<T: 'static>(
    rules: &[Rule<T>],
    signals: &Signals,
    cap: usize,
) -> Vec<&'static T> {
    rules
        .iter()
        .filter(|rule| signals.fires(&rule.trigger))
        .flat_map(|rule| rule.contributions.iter())
        .take(cap)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestions
// ────────────────────────────────────────────────────────────────────────────

pub static SUGGESTION_RULES: &[Rule<&str>] = &[
    Rule {
        trigger: Trigger::AnyKeyword(&["literature", "review", "sources"]),
        contributions: &[
            "Create literature review outline",
            "Find relevant databases",
            "Set up search alerts",
        ],
    },
    Rule {
        trigger: Trigger::AnyKeyword(&["methodology", "method", "approach"]),
        contributions: &[
            "Design research framework",
            "Choose data collection methods",
            "Plan ethical approval",
        ],
    },
    Rule {
        trigger: Trigger::AnyKeyword(&["data", "analysis", "statistics"]),
        contributions: &[
            "Select statistical software",
            "Plan data visualization",
            "Design analysis workflow",
        ],
    },
    Rule {
        trigger: Trigger::AnyKeyword(&["writing", "write", "paper", "publish"]),
        contributions: &[
            "Create paper outline",
            "Find target journals",
            "Plan writing schedule",
        ],
    },
];

/// Returned when no suggestion rule fires and the fallback is enabled.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Explore research methodology options",
    "Review relevant literature",
    "Consider data collection methods",
    "Plan analysis approach",
];

pub fn generate_suggestions(signals: &Signals, use_fallback: bool) -> Vec<String> {
    let matched = apply_rules(SUGGESTION_RULES, signals, SUGGESTION_LIMIT);
    if matched.is_empty() && use_fallback {
        return DEFAULT_SUGGESTIONS
            .iter()
            .take(SUGGESTION_LIMIT)
            .map(|s| s.to_string())
            .collect();
    }
    matched.into_iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Action items
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct ActionTemplate {
    pub task: &'static str,
    pub priority: Priority,
    pub estimated_time: &'static str,
}

impl ActionTemplate {
    fn to_item(&self) -> ActionItem {
        ActionItem {
            task: self.task.to_string(),
            priority: self.priority,
            estimated_time: self.estimated_time.to_string(),
        }
    }
}

pub static ACTION_RULES: &[Rule<ActionTemplate>] = &[
    Rule {
        trigger: Trigger::AnyKeyword(&["start", "begin", "plan"]),
        contributions: &[ActionTemplate {
            task: "Define research question and objectives",
            priority: Priority::High,
            estimated_time: "2-3 hours",
        }],
    },
    Rule {
        trigger: Trigger::AnyKeyword(&["literature"]),
        contributions: &[ActionTemplate {
            task: "Conduct systematic literature search",
            priority: Priority::High,
            estimated_time: "4-6 hours",
        }],
    },
    Rule {
        trigger: Trigger::AnyKeyword(&["methodology"]),
        contributions: &[ActionTemplate {
            task: "Select appropriate research design",
            priority: Priority::Medium,
            estimated_time: "2-4 hours",
        }],
    },
    Rule {
        trigger: Trigger::AnyKeyword(&["analyze", "analysis", "data"]),
        contributions: &[ActionTemplate {
            task: "Clean and prepare data for analysis",
            priority: Priority::Medium,
            estimated_time: "3-5 hours",
        }],
    },
    Rule {
        trigger: Trigger::HasAttachments,
        contributions: &[ActionTemplate {
            task: "Review key insights from attached files",
            priority: Priority::Medium,
            estimated_time: "30-60 minutes",
        }],
    },
];

pub fn generate_action_items(signals: &Signals) -> Vec<ActionItem> {
    apply_rules(ACTION_RULES, signals, ACTION_ITEM_LIMIT)
        .into_iter()
        .map(ActionTemplate::to_item)
        .collect()
}
