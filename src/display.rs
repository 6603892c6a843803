use console::style;
use ecommerce_helper::{Message, Role};
use std::fmt::Display;

fn box_width(max: usize) -> usize {
    let term = console::Term::stdout();
    let terminal_width = term.size().1 as usize;
    std::cmp::min(terminal_width.saturating_sub(4), max).max(40)
}

/// Breaks `text` into lines of at most `max_len` characters, preferring spaces.
pub fn wrap_lines(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut wrapped = Vec::new();

    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() <= max_len {
            wrapped.push(line.to_string());
            continue;
        }

        let mut remaining = chars.as_slice();
        while remaining.len() > max_len {
            let break_pos = remaining[..=max_len]
                .iter()
                .rposition(|c| *c == ' ')
                .filter(|pos| *pos > 0)
                .unwrap_or(max_len);
            wrapped.push(remaining[..break_pos].iter().collect());
            remaining = &remaining[break_pos..];
            while remaining.first() == Some(&' ') {
                remaining = &remaining[1..];
            }
        }
        if !remaining.is_empty() {
            wrapped.push(remaining.iter().collect());
        }
    }

    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}

/// Display a reply in a formatted box
pub fn display_response(response: &str) {
    let max_width = box_width(120);
    let wrapped_lines = wrap_lines(response, max_width.saturating_sub(4));

    let content_max_len = wrapped_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = std::cmp::min(max_width, content_max_len + 4).max(4);

    let top_border = "┌".to_string() + &"─".repeat(width - 2) + "┐";
    let bottom_border = "└".to_string() + &"─".repeat(width - 2) + "┘";

    println!("{}", style(&top_border).dim().blue());
    for line in wrapped_lines {
        let padding = width.saturating_sub(line.chars().count() + 3);
        println!("│ {}{}│", style(&line).bold().white(), " ".repeat(padding));
    }
    println!("{}", style(&bottom_border).dim().blue());
}

/// Plain reply output for one-shot and piped use
pub fn print_plain(response: &str) {
    println!("{}", response);
}

pub fn display_error(err: &impl Display) {
    eprintln!("{} {}", style("Error:").bold().red(), err);
}

pub fn display_info(text: &str) {
    println!("{}", style(text).dim());
}

pub fn format_history(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| {
            let label = match msg.role {
                Role::System => style("System").bold().yellow(),
                Role::User => style("User").bold().cyan(),
                Role::Assistant => style("Assistant").bold().green(),
            };
            format!("{}: {}", label, msg.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(wrap_lines("Current stock:\n{}", 40), vec!["Current stock:", "{}"]);
    }

    #[test]
    fn long_lines_break_at_spaces() {
        assert_eq!(
            wrap_lines("You had 7 sales in the last 7 days.", 12),
            vec!["You had 7", "sales in the", "last 7 days."]
        );
    }

    #[test]
    fn words_longer_than_the_limit_are_cut() {
        assert_eq!(wrap_lines("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap_lines("", 10), vec![String::new()]);
    }

    #[test]
    fn history_lists_roles_in_order() {
        console::set_colors_enabled(false);
        let text = format_history(&[Message::user("hi"), Message::assistant("hello")]);
        assert_eq!(text, "User: hi\nAssistant: hello");
    }
}
