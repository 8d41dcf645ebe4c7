//! Shared rendering utilities.
//!
//! Components draw into a `String` frame buffer with absolute cursor moves;
//! the renderer prints the finished frame in one go. Text measurement counts
//! `char`s, which matches the terminal width of the accented Latin text and
//! the `★`/`●` glyphs the carousel draws.
//!
//! # Example
//!
//! ```rust
//! use testimonial_carousel::ui::helpers::{truncate, wrap_text};
//!
//! assert_eq!(wrap_text("uno dos tres", 7), vec!["uno dos", "tres"]);
//! assert_eq!(truncate("Fontanería", 6), "Fonta…");
//! ```

/// Appends a cursor move to `row`, `col` (1-indexed) to the frame.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Display width of `text`, in terminal columns.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` columns, ending with `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = vec![];
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line.is_empty() {
            word.len()
        } else {
            text_width(&line) + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Centers `text` in `width` columns, padding both sides with spaces.
///
/// Odd leftovers go to the right. Text wider than `width` is truncated.
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = text_width(&text);
    let left = (width - len) / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(width - len - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_spaces() {
        let lines = wrap_text("Trabajo impecable y muy rápido", 12);
        assert_eq!(lines, vec!["Trabajo", "impecable y", "muy rápido"]);
        assert!(lines.iter().all(|l| text_width(l) <= 12));
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("a abcdefgh", 3), vec!["a", "abc", "def", "gh"]);
        assert!(wrap_text("anything", 0).is_empty());
        assert!(wrap_text("   ", 5).is_empty());
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("★★★★★", 5), "★★★★★");
        assert_eq!(truncate("electricista", 5), "elec…");
        assert_eq!(truncate("x", 0), "");
    }

    #[test]
    fn centered_pads_to_width() {
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(centered("abc", 6), " abc  ");
        assert_eq!(text_width(&centered("too long for this", 5)), 5);
    }

    #[test]
    fn cursor_moves_are_one_indexed() {
        let mut out = String::new();
        position_cursor(&mut out, 3, 7);
        assert_eq!(out, "\u{1b}[3;7H");
    }
}
