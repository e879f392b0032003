//! Lexical analysis of SQL fragments.
//!
//! Expressions and join criteria are opaque SQL text. Nothing here parses
//! them; the lexer only splits text into tokens well enough to find the table
//! aliases an expression references and to render a whitespace-insensitive
//! canonical form.

mod aliases;
pub use aliases::referenced_aliases;

mod canonical;
pub use canonical::canonicalize;

mod lexer;
pub use lexer::{Lexer, Token, TokenKind};
