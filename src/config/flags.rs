// src/config/flags.rs

/// Union of the flag letters found across all matched flag tokens.
///
/// Token boundaries, order and repetition do not matter: a letter is active
/// if it occurs anywhere in any matched token.
///
/// # Examples
///
/// ```
/// use dirsum::config::FlagSet;
///
/// let flags = FlagSet::from_tokens(["-nr", "-r"]);
/// assert!(flags.numeric && flags.reverse);
/// assert!(!flags.total && !flags.verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet {
    /// `n`: sort by count.
    pub numeric: bool,
    /// `r`: reverse the active sort order.
    pub reverse: bool,
    /// `t`: print the total.
    pub total: bool,
    /// `v`: verbose, same as `n` and `t` together.
    pub verbose: bool,
}

impl FlagSet {
    /// Builds the set by testing each letter for containment in the joined tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            numeric: joined.contains('n'),
            reverse: joined.contains('r'),
            total: joined.contains('t'),
            verbose: joined.contains('v'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens() {
        let flags = FlagSet::from_tokens(Vec::<String>::new());
        assert_eq!(flags, FlagSet::default());
    }

    #[test]
    fn test_letters_union_across_tokens() {
        let split = FlagSet::from_tokens(["-n", "-r", "-t"]);
        let chained = FlagSet::from_tokens(["-trn"]);
        assert_eq!(split, chained);
        assert!(!split.verbose);
    }

    #[test]
    fn test_repeated_letters_are_harmless() {
        let flags = FlagSet::from_tokens(["-nnvv", "-v"]);
        assert!(flags.numeric);
        assert!(flags.verbose);
        assert!(!flags.reverse);
        assert!(!flags.total);
    }

    #[test]
    fn test_letters_anywhere_in_token_count() {
        // Matching tokens are searched as text, not parsed letter by letter.
        let flags = FlagSet::from_tokens(["my-notes"]);
        assert!(flags.numeric);
        assert!(flags.total);
        assert!(!flags.reverse);
        assert!(!flags.verbose);
    }

    #[test]
    fn test_all_letters() {
        let flags = FlagSet::from_tokens(["-nrtv"]);
        assert_eq!(
            flags,
            FlagSet {
                numeric: true,
                reverse: true,
                total: true,
                verbose: true
            }
        );
    }
}
