#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare identifier or keyword
    Ident,

    /// Identifier wrapped in `[..]`, `".."` or `` `..` ``
    QuotedIdent,

    /// String literal, including its quotes
    String,

    /// Numeric literal
    Number,

    /// Parameter placeholder: `@name`, `:name`, `$1`, `?` or `?1`
    Param,

    /// Operator or punctuation
    Punct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,

    /// Source text of the token
    pub text: &'a str,
}

/// Splits SQL text into tokens, skipping whitespace and comments.
///
/// Unterminated literals and quoted identifiers run to the end of the input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

const MULTI_CHAR_PUNCT: &[&str] = &["<>", "<=", ">=", "!=", "||", "::"];

impl<'a> Token<'a> {
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == punct
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Ident | TokenKind::QuotedIdent)
    }

    /// The identifier with any quoting removed. Other tokens return their
    /// source text.
    pub fn name(&self) -> &'a str {
        if self.kind != TokenKind::QuotedIdent {
            return self.text;
        }

        let inner = &self.text[1..];
        match inner.char_indices().last() {
            Some((end, c)) if matches!(c, ']' | '"' | '`') => &inner[..end],
            _ => inner,
        }
    }
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            if rest.starts_with(char::is_whitespace) {
                self.bump_while(char::is_whitespace);
            } else if rest.starts_with("--") {
                self.bump_while(|c| c != '\n');
            } else if rest.starts_with("/*") {
                match rest[2..].find("*/") {
                    Some(end) => self.pos += end + 4,
                    None => self.pos = self.src.len(),
                }
            } else {
                return;
            }
        }
    }

    /// Consumes a delimited token starting at the opening delimiter. A doubled
    /// closing delimiter is an escape.
    fn bump_delimited(&mut self, close: char) {
        self.bump();
        while let Some(c) = self.peek() {
            self.bump();
            if c == close {
                if self.peek() == Some(close) {
                    self.bump();
                } else {
                    return;
                }
            }
        }
    }

    fn bump_number(&mut self) {
        self.bump_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            self.bump_while(|c| c.is_ascii_digit());
        }
    }

    fn bump_punct(&mut self) {
        let rest = self.rest();
        match MULTI_CHAR_PUNCT.iter().find(|op| rest.starts_with(**op)) {
            Some(op) => self.pos += op.len(),
            None => self.bump(),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.skip_trivia();

        let start = self.pos;
        let c = self.peek()?;
        let second = self.peek_second();

        let kind = match c {
            '\'' => {
                self.bump_delimited('\'');
                TokenKind::String
            }
            '"' | '`' => {
                self.bump_delimited(c);
                TokenKind::QuotedIdent
            }
            '[' => {
                self.bump_delimited(']');
                TokenKind::QuotedIdent
            }
            '@' | ':' if second.is_some_and(is_ident_start) => {
                self.bump();
                self.bump_while(is_ident_continue);
                TokenKind::Param
            }
            '$' if second.is_some_and(|c| c.is_ascii_digit()) => {
                self.bump();
                self.bump_while(|c| c.is_ascii_digit());
                TokenKind::Param
            }
            '?' => {
                self.bump();
                self.bump_while(|c| c.is_ascii_digit());
                TokenKind::Param
            }
            c if is_ident_start(c) => {
                self.bump_while(is_ident_continue);
                TokenKind::Ident
            }
            c if c.is_ascii_digit() => {
                self.bump_number();
                TokenKind::Number
            }
            _ => {
                self.bump_punct();
                TokenKind::Punct
            }
        };

        Some(Token {
            kind,
            text: &self.src[start..self.pos],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(src).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn qualified_columns() {
        use TokenKind::*;

        assert_eq!(
            kinds("c.TheCountryID = T0.CountryID"),
            vec![
                (Ident, "c"),
                (Punct, "."),
                (Ident, "TheCountryID"),
                (Punct, "="),
                (Ident, "T0"),
                (Punct, "."),
                (Ident, "CountryID"),
            ]
        );
    }

    #[test]
    fn literals_swallow_dots_and_escaped_quotes() {
        use TokenKind::*;

        assert_eq!(
            kinds("'it''s x.y' || 1.5"),
            vec![(String, "'it''s x.y'"), (Punct, "||"), (Number, "1.5")]
        );
    }

    #[test]
    fn quoted_identifier_names() {
        let tokens: Vec<_> = Lexer::new("[c].\"Name\"").collect();
        assert_eq!(tokens[0].kind, TokenKind::QuotedIdent);
        assert_eq!(tokens[0].name(), "c");
        assert_eq!(tokens[2].name(), "Name");
    }

    #[test]
    fn parameters() {
        let params: Vec<_> = Lexer::new("@p1 :name $2 ? ?3 a::int")
            .filter(|t| t.kind == TokenKind::Param)
            .map(|t| t.text)
            .collect();
        assert_eq!(params, vec!["@p1", ":name", "$2", "?", "?3"]);
    }

    #[test]
    fn comments_are_skipped() {
        let texts: Vec<_> = Lexer::new("a -- trailing\n/* block */ b")
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn unterminated_literal_runs_to_end() {
        let tokens: Vec<_> = Lexer::new("x = 'open").collect();
        assert_eq!(tokens.last().map(|t| t.text), Some("'open"));
    }
}
