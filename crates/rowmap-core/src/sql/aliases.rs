use super::{Lexer, Token};
use std::collections::BTreeSet;

/// Returns the distinct table aliases `expr` qualifies columns with.
///
/// An alias is an identifier directly followed by `.` and another
/// identifier. Only the head of a dotted chain counts (`a.b.c` yields `a`),
/// a qualified name followed by `(` is a function call, and identifiers
/// inside literals are never seen.
pub fn referenced_aliases(expr: &str) -> BTreeSet<String> {
    let tokens: Vec<Token<'_>> = Lexer::new(expr).collect();
    let mut aliases = BTreeSet::new();

    for (i, window) in tokens.windows(3).enumerate() {
        let [qualifier, dot, column] = window else {
            continue;
        };

        if !qualifier.is_identifier() || !dot.is_punct(".") || !column.is_identifier() {
            continue;
        }

        if i > 0 && tokens[i - 1].is_punct(".") {
            continue;
        }

        if tokens.get(i + 3).is_some_and(|next| next.is_punct("(")) {
            continue;
        }

        aliases.insert(qualifier.name().to_string());
    }

    aliases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases(expr: &str) -> Vec<String> {
        referenced_aliases(expr).into_iter().collect()
    }

    #[test]
    fn single_alias() {
        assert_eq!(aliases("T0.Name"), vec!["T0"]);
    }

    #[test]
    fn distinct_aliases_across_operators() {
        assert_eq!(
            aliases("T0.Firstname + ' ' + c.Name + T0.Lastname"),
            vec!["T0", "c"]
        );
    }

    #[test]
    fn literals_and_numbers_are_ignored() {
        assert!(aliases("'x.y' + 1.5").is_empty());
    }

    #[test]
    fn quoted_aliases_are_unquoted() {
        assert_eq!(aliases("[c].[Name] + \"d\".Code"), vec!["c", "d"]);
    }

    #[test]
    fn function_calls_and_chains() {
        assert_eq!(aliases("dbo.Fn(x.Col) + s.t.Col"), vec!["s", "x"]);
    }
}
