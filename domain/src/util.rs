//! Shared utility functions.

/// One-line preview of free text for log messages.
///
/// Line breaks are folded into spaces and the result is cut to at most
/// `max_chars` characters, with `...` appended when something was dropped.
pub fn preview(text: &str, max_chars: usize) -> String {
    let single_line: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if single_line.chars().count() <= max_chars {
        return single_line;
    }

    let mut cut: String = single_line.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
