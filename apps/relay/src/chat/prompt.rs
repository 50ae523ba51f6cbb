//! Prompt assembly: system instruction, trimmed history, then the user turn.

use crate::llm_client::ChatMessage;

/// Default number of history entries forwarded upstream.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Builds the exact message sequence submitted to the provider:
/// `[system] + last `window` history entries + [user: message (+ file context)]`.
///
/// History order is preserved; nothing is reordered or deduplicated.
pub fn assemble_messages(
    system: &str,
    history: &[ChatMessage],
    window: usize,
    user_message: &str,
    file_context: Option<&str>,
) -> Vec<ChatMessage> {
    let recent = &history[history.len().saturating_sub(window)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatMessage::system(system));
    messages.extend(recent.iter().cloned());

    let content = match file_context {
        Some(context) if !context.is_empty() => format!("{user_message}\n\n{context}"),
        _ => user_message.to_string(),
    };
    messages.push(ChatMessage::user(content));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::Role;

    fn history(n: usize) -> Vec<ChatMessage> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("turn {i}"))
                } else {
                    ChatMessage::assistant(format!("turn {i}"))
                }
            })
            .collect()
    }

    #[test]
    fn test_long_history_keeps_last_ten_in_order() {
        let h = history(15);
        let messages = assemble_messages("sys", &h, DEFAULT_HISTORY_WINDOW, "now", None);

        assert_eq!(messages.len(), 12);
        assert_eq!(messages[0], ChatMessage::system("sys"));
        assert_eq!(&messages[1..11], &h[5..]);
        assert_eq!(messages[11], ChatMessage::user("now"));
    }

    #[test]
    fn test_short_history_passes_through_whole() {
        let h = history(3);
        let messages = assemble_messages("sys", &h, DEFAULT_HISTORY_WINDOW, "now", None);

        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(&messages[1..4], &h[..]);
    }

    #[test]
    fn test_empty_history_is_system_then_user() {
        let messages = assemble_messages("sys", &[], DEFAULT_HISTORY_WINDOW, "now", None);
        assert_eq!(
            messages,
            vec![ChatMessage::system("sys"), ChatMessage::user("now")]
        );
    }

    #[test]
    fn test_history_exactly_window_is_untouched() {
        let h = history(10);
        let messages = assemble_messages("sys", &h, 10, "now", None);
        assert_eq!(&messages[1..11], &h[..]);
    }

    #[test]
    fn test_system_turns_in_history_are_kept_after_instruction() {
        let h = vec![ChatMessage::system("earlier note"), ChatMessage::user("q")];
        let messages = assemble_messages("sys", &h, 10, "now", None);
        assert_eq!(messages[0].content, "sys");
        assert_eq!(messages[1].content, "earlier note");
    }

    #[test]
    fn test_file_context_appended_to_user_turn() {
        let messages = assemble_messages("sys", &[], 10, "look", Some("Attached files:\n- a.pdf"));
        assert_eq!(
            messages.last().unwrap().content,
            "look\n\nAttached files:\n- a.pdf"
        );
    }

    #[test]
    fn test_zero_window_drops_all_history() {
        let messages = assemble_messages("sys", &history(4), 0, "now", None);
        assert_eq!(messages.len(), 2);
    }
}
