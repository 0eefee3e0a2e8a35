//! Argument grouping.
//!
//! The flat argument list is cut on the separator token; each non-empty run
//! is one action invocation (`name operand...`).

/// Token delimiting action groups.
pub const SEPARATOR: &str = "^";

/// Split `args` into non-empty action groups, left to right.
///
/// The separator itself is never part of a group. Empty runs (leading,
/// trailing or doubled separators) are skipped. A final run without a
/// trailing separator still forms a group.
pub fn split_groups<'a, S: AsRef<str>>(args: &'a [S]) -> impl Iterator<Item = &'a [S]> {
    args.split(|token: &S| token.as_ref() == SEPARATOR)
        .filter(|group: &&[S]| !group.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<'a>(args: &'a [&'a str]) -> Vec<Vec<&'a str>> {
        split_groups(args).map(|g| g.to_vec()).collect()
    }

    #[test]
    fn test_single_group_without_separator() {
        assert_eq!(collect(&["hex", "01", "02"]), vec![vec!["hex", "01", "02"]]);
    }

    #[test]
    fn test_multiple_groups() {
        let args = ["mac", "bc", "^", "vlan", "5", "^", "zero", "2"];
        assert_eq!(
            collect(&args),
            vec![vec!["mac", "bc"], vec!["vlan", "5"], vec!["zero", "2"]]
        );
    }

    #[test]
    fn test_leading_and_doubled_separators_skipped() {
        assert_eq!(collect(&["^", "^", "hex", "01", "^"]), vec![vec!["hex", "01"]]);
        assert_eq!(
            collect(&["x", "1", "^", "^", "^", "x", "2"]),
            vec![vec!["x", "1"], vec!["x", "2"]]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(&[]).is_empty());
        assert!(collect(&["^"]).is_empty());
        assert!(collect(&["^", "^"]).is_empty());
    }

    #[test]
    fn test_separator_must_match_exactly() {
        // "^^" and " ^" are ordinary tokens
        assert_eq!(collect(&["x", "^^", " ^"]), vec![vec!["x", "^^", " ^"]]);
    }

    #[test]
    fn test_owned_strings() {
        let args: Vec<String> = ["z", "1", "^", "z", "2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let groups: Vec<&[String]> = split_groups(&args).collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1][1], "2");
    }
}
