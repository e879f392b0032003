use super::Value;
use std::fmt;

/// Collects parameter values while a criteria expression is rendered.
pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

/// A numbered parameter placeholder, rendered as `@p{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@p{}", self.0)
    }
}
