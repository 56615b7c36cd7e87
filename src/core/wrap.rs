/// Number of words drawn on each caption line.
pub const WORDS_PER_LINE: usize = 6;

/// Every word is followed by a space; every `WORDS_PER_LINE`th word also by a newline.
pub fn add_line_breaks(text: &str) -> String {
    let mut formatted = String::with_capacity(text.len() + text.len() / WORDS_PER_LINE + 1);

    for (index, word) in text.split_whitespace().enumerate() {
        formatted.push_str(word);
        formatted.push(' ');
        if (index + 1) % WORDS_PER_LINE == 0 {
            formatted.push('\n');
        }
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_after_sixth_word() {
        assert_eq!(add_line_breaks("a b c d e f g"), "a b c d e f \ng ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(add_line_breaks(""), "");
        assert_eq!(add_line_breaks("   "), "");
    }

    #[test]
    fn test_break_count_and_positions() {
        let words: Vec<String> = (1..=13).map(|i| format!("w{}", i)).collect();
        let formatted = add_line_breaks(&words.join(" "));

        assert_eq!(formatted.matches('\n').count(), 13 / WORDS_PER_LINE);

        let lines: Vec<&str> = formatted.split('\n').collect();
        assert_eq!(lines[0], "w1 w2 w3 w4 w5 w6 ");
        assert_eq!(lines[1], "w7 w8 w9 w10 w11 w12 ");
        assert_eq!(lines[2], "w13 ");
    }

    #[test]
    fn test_words_and_order_preserved() {
        let text = "Shares of the company rose sharply after the quarterly earnings beat expectations";
        let formatted = add_line_breaks(text);

        let original: Vec<&str> = text.split_whitespace().collect();
        let wrapped: Vec<&str> = formatted.split_whitespace().collect();
        assert_eq!(original, wrapped);
    }

    #[test]
    fn test_exact_multiple_ends_with_break() {
        assert_eq!(add_line_breaks("one two three four five six"), "one two three four five six \n");
    }

    #[test]
    fn test_irregular_whitespace_collapses() {
        assert_eq!(add_line_breaks("  alpha\tbeta\n\ngamma  "), "alpha beta gamma ");
    }
}
