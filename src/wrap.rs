//! Greedy line wrapping for quote text.
//!
//! Character count is the only width metric; there is no hyphenation,
//! justification or glyph measurement. Two calls with the same input must
//! produce identical line breaks, since downstream layout is derived from
//! the line count.

/// Breaks `text` into lines of at most `max_chars_per_line` characters using
/// greedy line fill. Splits on single spaces only, so runs of spaces produce
/// empty words rather than collapsing. A word longer than the bound is never
/// split; it lands alone on its own, overflowing line. Empty input yields a
/// single empty line.
pub fn wrap(text: &str, max_chars_per_line: usize) -> Vec<String> {
    let mut words = text.split(' ');

    // split(' ') always yields at least one item, possibly "".
    let mut current = words.next().unwrap_or_default().to_string();
    let mut current_len = current.chars().count();
    let mut lines = Vec::new();

    for word in words {
        let word_len = word.chars().count();
        if current_len + 1 + word_len <= max_chars_per_line {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_fill_matches_fixture() {
        assert_eq!(
            wrap("The quick brown fox jumps", 10),
            vec!["The quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn long_word_is_not_split() {
        let lines = wrap("Supercalifragilisticexpialidocious is long", 10);
        assert_eq!(lines[0], "Supercalifragilisticexpialidocious");
        assert_eq!(lines[1..], ["is long"]);
    }

    #[test]
    fn empty_input_yields_single_empty_line() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn single_word_fits_on_one_line() {
        assert_eq!(wrap("amen", 20), vec!["amen"]);
    }

    #[test]
    fn wrapping_is_deterministic() {
        let text = "In the beginning was the Word, and the Word was with God";
        assert_eq!(wrap(text, 20), wrap(text, 20));
    }

    #[test]
    fn joining_lines_reconstructs_the_input() {
        let text = "Be still and know that I am God";
        for bound in [5, 10, 20, 80] {
            assert_eq!(wrap(text, bound).join(" "), text);
        }
    }

    #[test]
    fn boundary_word_exactly_fills_the_line() {
        // "abc def" is exactly 7 chars, so it fits at bound 7 but not 6.
        assert_eq!(wrap("abc def", 7), vec!["abc def"]);
        assert_eq!(wrap("abc def", 6), vec!["abc", "def"]);
    }

    #[test]
    fn double_spaces_survive_as_empty_words() {
        assert_eq!(wrap("a  b", 10), vec!["a  b"]);
    }
}
