#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeSet;

/// Splits strings on a class of separator characters.
///
/// Every character of every delimiter string is a separator on its own, so
/// `"ab"` splits on `a` and on `b` rather than on the substring `ab`. Runs of
/// separators collapse and never yield empty tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DelimiterSplitter {
    /// flattened separator characters
    separators: BTreeSet<char>,
}

impl DelimiterSplitter {
    /// Builds a splitter from a collection of delimiter strings.
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let separators = delimiters
            .into_iter()
            .flat_map(|d| d.as_ref().chars().collect::<Vec<_>>())
            .collect();
        Self { separators }
    }

    /// Returns the separator characters in sorted order.
    pub fn separators(&self) -> impl Iterator<Item = char> + '_ {
        self.separators.iter().copied()
    }

    /// Whether `c` separates tokens.
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Lazily yields the non-empty tokens of `source`, in order.
    pub fn tokens<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        source
            .split(move |c: char| self.is_separator(c))
            .filter(|token| !token.is_empty())
    }

    /// Splits `source` into owned, non-empty tokens, in order.
    pub fn split(&self, source: &str) -> Vec<String> {
        let tokens: Vec<String> = self.tokens(source).map(str::to_owned).collect();
        tracing::trace!(
            "Split {} char(s) into {} token(s) using {} separator(s)",
            source.chars().count(),
            tokens.len(),
            self.separators.len()
        );
        tokens
    }
}

/// Splits `source` on every character contained in `delimiters`.
pub fn split_by_delimiters<I, S>(source: &str, delimiters: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DelimiterSplitter::new(delimiters).split(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_character_delimiters_are_flattened() {
        let splitter = DelimiterSplitter::new(["ab", ", "]);
        assert_eq!(splitter.separators().collect::<String>(), " ,ab");
        assert!(splitter.is_separator('b'));
        assert!(!splitter.is_separator('c'));
    }

    #[test]
    fn tokens_borrow_from_source() {
        let splitter = DelimiterSplitter::new(["-"]);
        let source = String::from("--x-y--");
        let tokens: Vec<&str> = splitter.tokens(&source).collect();
        assert_eq!(tokens, vec!["x", "y"]);
    }
}
