//! Research helpers: templated single-turn prompts relayed through the chat pipeline.

pub mod handlers;
pub mod prompts;

use serde::Deserialize;

use prompts::{
    ANALYZE_DATA_TEMPLATE, ANALYZE_GENERAL_TEMPLATE, ANALYZE_PAPER_TEMPLATE, OUTLINE_TEMPLATE,
};

/// What kind of material `/api/analyze-research` is given.
/// Unknown values fall back to a general analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Paper,
    Data,
    #[default]
    #[serde(other)]
    General,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "type", default)]
    pub kind: AnalysisKind,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct OutlineRequest {
    #[serde(default)]
    pub topic: String,
    /// paper, proposal, thesis, ...
    #[serde(rename = "type", default = "default_document_type")]
    pub document_type: String,
}

fn default_document_type() -> String {
    "paper".to_string()
}

pub fn build_analysis_prompt(kind: AnalysisKind, content: &str) -> String {
    let template = match kind {
        AnalysisKind::Paper => ANALYZE_PAPER_TEMPLATE,
        AnalysisKind::Data => ANALYZE_DATA_TEMPLATE,
        AnalysisKind::General => ANALYZE_GENERAL_TEMPLATE,
    };
    fill(template, &[("content", content)])
}

pub fn build_outline_prompt(topic: &str, document_type: &str) -> String {
    fill(
        OUTLINE_TEMPLATE,
        &[("document_type", document_type), ("topic", topic)],
    )
}

/// Substitutes `{key}` placeholders in one left-to-right pass. Substituted
/// values are never rescanned, so user text containing `{topic}` stays literal.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_kind_parses_known_and_unknown() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"type": "paper", "content": "x"}"#).unwrap();
        assert_eq!(req.kind, AnalysisKind::Paper);
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"type": "poem", "content": "x"}"#).unwrap();
        assert_eq!(req.kind, AnalysisKind::General);
        let req: AnalyzeRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(req.kind, AnalysisKind::General);
        assert!(req.content.is_empty());
    }

    #[test]
    fn test_paper_prompt_embeds_content() {
        let prompt = build_analysis_prompt(AnalysisKind::Paper, "Transformers for proteins");
        assert!(prompt.starts_with("Analyze this research paper content"));
        assert!(prompt.ends_with("Content: Transformers for proteins"));
    }

    #[test]
    fn test_data_prompt_uses_data_description() {
        let prompt = build_analysis_prompt(AnalysisKind::Data, "survey of 300");
        assert!(prompt.contains("Data description: survey of 300"));
    }

    #[test]
    fn test_general_prompt() {
        assert_eq!(
            build_analysis_prompt(AnalysisKind::General, "bees"),
            "Provide research analysis for: bees"
        );
    }

    #[test]
    fn test_outline_does_not_rescan_substituted_values() {
        let prompt = build_outline_prompt("tides", "{topic} review");
        assert!(prompt.starts_with("Create a detailed outline for a {topic} review on the topic: tides"));

        let prompt = build_analysis_prompt(AnalysisKind::General, "see {content} and {x}");
        assert_eq!(prompt, "Provide research analysis for: see {content} and {x}");
    }

    #[test]
    fn test_outline_defaults_to_paper() {
        let req: OutlineRequest = serde_json::from_str(r#"{"topic": "soil carbon"}"#).unwrap();
        assert_eq!(req.document_type, "paper");
        let prompt = build_outline_prompt(&req.topic, &req.document_type);
        assert!(prompt.starts_with("Create a detailed outline for a paper on the topic: soil carbon"));
    }
}
