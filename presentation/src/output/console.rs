//! Console output formatter for FAQ results

use campus_application::{GenerateFromInboxOutput, SentMessage};
use campus_domain::{FaqResult, Notification, StoredFaq};
use colored::Colorize;

/// Shown when a consolidation succeeded but produced nothing
pub const NO_FAQS_MESSAGE: &str = "No FAQs could be generated";

/// Shown when the backend call failed; details go to the log
pub const FAILURE_MESSAGE: &str = "FAQ generation failed. Please try again later.";

/// Added to the failure notice when a retry will not help
pub const CONFIG_HINT: &str = "Check the generator settings (run with -v for details).";

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a consolidation result
    pub fn format_result(result: &FaqResult) -> String {
        if result.is_empty() {
            return format!("{}\n", NO_FAQS_MESSAGE.yellow());
        }

        let mut output = String::new();
        output.push_str(&Self::header("Frequently Asked Questions"));
        output.push('\n');

        for (i, faq) in result.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("{}.", i + 1).cyan().bold(),
                faq.question().bold(),
                Self::indent(faq.answer(), "   ")
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a consolidation result as JSON: `{"faqs": [...]}`
    pub fn format_result_json(result: &FaqResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{\"faqs\":[]}".to_string())
    }

    /// Format the outcome of an inbox run
    pub fn format_inbox(output: &GenerateFromInboxOutput) -> String {
        let mut text = format!(
            "{} {}\n",
            "Questions used:".cyan().bold(),
            output.questions.len()
        );

        if output.questions.is_empty() {
            text.push_str(&format!("{}\n", "Inbox has no matching messages.".dimmed()));
            return text;
        }

        text.push('\n');
        text.push_str(&Self::format_result(&output.result));

        if !output.published.is_empty() {
            text.push_str(&format!(
                "\n{} {}\n",
                "Published:".green().bold(),
                output
                    .published
                    .iter()
                    .map(|f| f.id.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        if output.marked_read > 0 {
            text.push_str(&format!(
                "{} {}\n",
                "Marked read:".green().bold(),
                output.marked_read
            ));
        }
        text
    }

    pub fn format_inbox_json(output: &GenerateFromInboxOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the FAQ store listing
    pub fn format_stored(faqs: &[StoredFaq]) -> String {
        if faqs.is_empty() {
            return format!("{}\n", "No FAQs published yet.".dimmed());
        }

        let mut output = String::new();
        for faq in faqs {
            output.push_str(&Self::format_stored_one(faq));
            output.push('\n');
        }
        output
    }

    pub fn format_stored_one(faq: &StoredFaq) -> String {
        format!(
            "{} {}\n{}\n",
            format!("[{}]", faq.id).dimmed(),
            faq.question.bold(),
            Self::indent(&faq.answer, "  ")
        )
    }

    /// Format an inbox listing, newest first
    pub fn format_notifications(notifications: &[Notification]) -> String {
        if notifications.is_empty() {
            return format!("{}\n", "Inbox has no matching messages.".dimmed());
        }

        let mut output = String::new();
        for n in notifications {
            let marker = if n.read { " ".normal() } else { "*".yellow().bold() };
            output.push_str(&format!(
                "{} {} {} {}\n{}\n\n",
                marker,
                format!("[{}]", n.id).dimmed(),
                n.from.cyan(),
                n.date.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                Self::indent(&n.message, "  ")
            ));
        }
        output
    }

    /// Confirmation for a delivered message
    pub fn format_sent(sent: &SentMessage) -> String {
        format!(
            "{} {} {}\n",
            "Sent to".green().bold(),
            sent.to,
            format!("[{}]", sent.notification.id).dimmed()
        )
    }

    pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    }

    /// Generic failure notice for a failed backend call
    ///
    /// Non-transient failures (bad key, unknown model) get a hint to look at
    /// the configuration instead of retrying.
    pub fn format_failure(transient: bool) -> String {
        let notice = format!("{} {}", "Error:".red().bold(), FAILURE_MESSAGE);
        if transient {
            notice
        } else {
            format!("{}\n{}", notice, CONFIG_HINT.dimmed())
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::{FaqId, FaqItem};

    fn plain() {
        colored::control::set_override(false);
    }

    fn result() -> FaqResult {
        FaqResult::new(vec![
            FaqItem::try_new("When is the deadline?", "Friday at 5pm.").unwrap(),
            FaqItem::try_new("Is the exam open book?", "No.\nBring a pen.").unwrap(),
        ])
    }

    #[test]
    fn test_format_result_lists_items_in_order() {
        plain();
        let text = ConsoleFormatter::format_result(&result());

        let first = text.find("1. When is the deadline?").unwrap();
        let second = text.find("2. Is the exam open book?").unwrap();
        assert!(first < second);
        assert!(text.contains("   Bring a pen."));
    }

    #[test]
    fn test_empty_result_message() {
        plain();
        let text = ConsoleFormatter::format_result(&FaqResult::empty());
        assert_eq!(text.trim(), NO_FAQS_MESSAGE);
    }

    #[test]
    fn test_result_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_result_json(&result())).unwrap();
        assert_eq!(value["faqs"][1]["answer"], "No.\nBring a pen.");
    }

    #[test]
    fn test_format_stored() {
        plain();
        let faqs = vec![StoredFaq {
            id: FaqId::new("faq-1-0"),
            question: "Where is the library?".to_string(),
            answer: "East wing.".to_string(),
        }];

        let text = ConsoleFormatter::format_stored(&faqs);
        assert!(text.contains("[faq-1-0] Where is the library?"));
        assert!(text.contains("  East wing."));
        assert!(ConsoleFormatter::format_stored(&[]).contains("No FAQs published yet."));
    }

    #[test]
    fn test_format_inbox_with_no_messages() {
        plain();
        let output = GenerateFromInboxOutput {
            questions: vec![],
            result: FaqResult::empty(),
            published: vec![],
            marked_read: 0,
        };

        let text = ConsoleFormatter::format_inbox(&output);
        assert!(text.contains("Questions used: 0"));
        assert!(text.contains("Inbox has no matching messages."));
    }

    #[test]
    fn test_failure_notice_hides_details() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_failure(true),
            format!("Error: {}", FAILURE_MESSAGE)
        );
        assert_eq!(
            ConsoleFormatter::format_failure(false),
            format!("Error: {}\n{}", FAILURE_MESSAGE, CONFIG_HINT)
        );
    }

    #[test]
    fn test_format_notifications() {
        plain();
        let date = "2024-05-01T10:00:00Z".parse().unwrap();
        let mut read = Notification::new("s1@test.com", "Is the lab open?", date);
        read.read = true;
        let unread = Notification::new("s2@test.com", "When is the deadline?", date);

        let text = ConsoleFormatter::format_notifications(&[unread.clone(), read]);
        let first = text.find("s2@test.com").unwrap();
        let second = text.find("s1@test.com").unwrap();
        assert!(first < second);
        assert!(text.starts_with(&format!("* [{}] s2@test.com 2024-05-01 10:00", unread.id)));
        assert!(text.contains("  Is the lab open?"));
        assert!(ConsoleFormatter::format_notifications(&[]).contains("no matching messages"));
    }

    #[test]
    fn test_format_sent_names_recipient() {
        plain();
        let date = "2024-05-01T10:00:00Z".parse().unwrap();
        let sent = SentMessage {
            to: "s1@test.com".to_string(),
            notification: Notification::new("t@test.com", "Re: Until 8pm.", date),
        };

        let text = ConsoleFormatter::format_sent(&sent);
        assert_eq!(text, format!("Sent to s1@test.com [{}]\n", sent.notification.id));
    }
}
