use super::{Lexer, Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "AND", "AS", "BETWEEN", "CASE", "ELSE", "END", "EXISTS", "IN", "IS", "LIKE", "NOT", "NULL",
    "ON", "OR", "THEN", "WHEN",
];

/// Renders SQL text in a canonical form so that fragments differing only in
/// formatting compare equal.
///
/// Tokens are separated by a single space, except around `.`, inside
/// parentheses, and before `,`. Every parameter placeholder becomes `@p`,
/// keywords are upper-cased, and quoted identifiers that need no quoting are
/// written bare.
pub fn canonicalize(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut prev: Option<Token<'_>> = None;

    for token in Lexer::new(sql) {
        if let Some(prev) = &prev {
            if needs_space(prev, &token) {
                out.push(' ');
            }
        }

        match token.kind {
            TokenKind::Param => out.push_str("@p"),
            TokenKind::Ident if is_keyword(token.text) => {
                out.push_str(&token.text.to_ascii_uppercase())
            }
            TokenKind::QuotedIdent if is_plain_identifier(token.name()) => {
                out.push_str(token.name())
            }
            _ => out.push_str(token.text),
        }

        prev = Some(token);
    }

    out
}

fn needs_space(prev: &Token<'_>, next: &Token<'_>) -> bool {
    !(prev.is_punct(".")
        || prev.is_punct("(")
        || next.is_punct(".")
        || next.is_punct(",")
        || next.is_punct(")"))
}

fn is_keyword(ident: &str) -> bool {
    KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(ident))
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !is_keyword(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(
            canonicalize("  c.TheCountryID   =\n\tT0.CountryID "),
            "c.TheCountryID = T0.CountryID"
        );
        assert_eq!(
            canonicalize("c.TheCountryID=T0.CountryID"),
            "c.TheCountryID = T0.CountryID"
        );
    }

    #[test]
    fn parameters_are_ignored() {
        assert_eq!(canonicalize("x.A = @p1"), canonicalize("x.A = :value"));
        assert_eq!(canonicalize("x.A = $2"), "x.A = @p");
    }

    #[test]
    fn keywords_and_quoting() {
        assert_eq!(
            canonicalize("[c].[Name] is not null and ( c.A in (1,2) )"),
            "c.Name IS NOT NULL AND (c.A IN (1, 2))"
        );
    }

    #[test]
    fn quoting_kept_when_needed() {
        assert_eq!(canonicalize("[c].[Full Name]"), "c.[Full Name]");
        assert_eq!(canonicalize("[c].[Not]"), "c.[Not]");
    }
}
