/// The 32 ASCII punctuation symbols removed before splitting.
pub const PUNCTUATION: &[u8; 32] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

fn is_punctuation(c: char) -> bool {
    c.is_ascii() && PUNCTUATION.contains(&(c as u8))
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strips ASCII punctuation, lowercases, and splits on whitespace runs.
///
/// Punctuation is deleted rather than replaced, so `don't` becomes `dont` and
/// `well-known` becomes `wellknown`. Non-ASCII punctuation passes through.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text.chars().filter(|c| !is_punctuation(*c)).collect();
    cleaned
        .to_lowercase()
        .split(is_separator)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

/// Query words are only lowercased; validation belongs to the caller.
pub fn normalize_query(word: &str) -> String {
    word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_table_is_exactly_ascii_punctuation() {
        let expected: Vec<u8> = (0u8..128).filter(u8::is_ascii_punctuation).collect();
        let mut actual = PUNCTUATION.to_vec();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(normalize("The cat sat."), vec!["the", "cat", "sat"]);
        assert_eq!(normalize("Don't STOP-now!"), vec!["dont", "stopnow"]);
    }

    #[test]
    fn splits_on_any_whitespace_run() {
        assert_eq!(normalize("  one\ttwo\n\nthree  "), vec!["one", "two", "three"]);
    }

    #[test]
    fn empty_and_punctuation_only_input_yield_nothing() {
        assert!(normalize("").is_empty());
        assert!(normalize("... !!! ---").is_empty());
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(normalize("b a b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn ascii_separator_controls_split_words() {
        assert_eq!(
            normalize("alpha\u{1f}beta\u{1c}gamma \u{1d}\u{1e} delta"),
            vec!["alpha", "beta", "gamma", "delta"]
        );
    }

    #[test]
    fn unicode_punctuation_is_left_alone() {
        assert_eq!(normalize("café «bien»"), vec!["café", "«bien»"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let text = "It's a Truth, universally ACKNOWLEDGED; that a man...";
        let once = normalize(text);
        let twice = normalize(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn query_is_only_lowercased() {
        assert_eq!(normalize_query("Dog!"), "dog!");
    }
}
