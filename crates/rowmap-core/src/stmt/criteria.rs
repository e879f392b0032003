use super::{BinaryOp, Params, Value};
use crate::sql;
use std::collections::BTreeSet;

/// A boolean SQL condition, such as a join's `ON` clause.
///
/// Criteria are either opaque SQL text ([`Criteria::Raw`]) or a small tree
/// built with the combinators below. Either way they render to SQL with
/// numbered parameters, or to canonical text for formatting-insensitive
/// comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// SQL text taken as is
    Raw(String),

    /// A column reference, optionally qualified by a table alias
    Column(ColumnRef),

    /// A parameter value
    Value(Value),

    /// A binary comparison
    Binary {
        lhs: Box<Criteria>,
        op: BinaryOp,
        rhs: Box<Criteria>,
    },

    /// All conditions hold
    And(Vec<Criteria>),

    /// Any condition holds
    Or(Vec<Criteria>),

    /// The condition does not hold
    Not(Box<Criteria>),

    /// The operand is null
    IsNull(Box<Criteria>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub alias: Option<String>,
    pub name: String,
}

impl Criteria {
    pub fn raw(sql: impl Into<String>) -> Criteria {
        Criteria::Raw(sql.into())
    }

    pub fn column(alias: impl Into<String>, name: impl Into<String>) -> Criteria {
        Criteria::Column(ColumnRef {
            alias: Some(alias.into()),
            name: name.into(),
        })
    }

    pub fn unqualified(name: impl Into<String>) -> Criteria {
        Criteria::Column(ColumnRef {
            alias: None,
            name: name.into(),
        })
    }

    pub fn value(value: impl Into<Value>) -> Criteria {
        Criteria::Value(value.into())
    }

    pub fn binary_op(self, op: BinaryOp, rhs: impl Into<Criteria>) -> Criteria {
        Criteria::Binary {
            lhs: Box::new(self),
            op,
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn eq(self, rhs: impl Into<Criteria>) -> Criteria {
        self.binary_op(BinaryOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl Into<Criteria>) -> Criteria {
        self.binary_op(BinaryOp::Ne, rhs)
    }

    pub fn lt(self, rhs: impl Into<Criteria>) -> Criteria {
        self.binary_op(BinaryOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl Into<Criteria>) -> Criteria {
        self.binary_op(BinaryOp::Le, rhs)
    }

    pub fn gt(self, rhs: impl Into<Criteria>) -> Criteria {
        self.binary_op(BinaryOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl Into<Criteria>) -> Criteria {
        self.binary_op(BinaryOp::Ge, rhs)
    }

    pub fn like(self, rhs: impl Into<Criteria>) -> Criteria {
        self.binary_op(BinaryOp::Like, rhs)
    }

    pub fn is_null(self) -> Criteria {
        Criteria::IsNull(Box::new(self))
    }

    /// Combines two conditions with `AND`, flattening nested conjunctions.
    pub fn and(self, rhs: impl Into<Criteria>) -> Criteria {
        let mut operands = match self {
            Criteria::And(operands) => operands,
            lhs => vec![lhs],
        };

        match rhs.into() {
            Criteria::And(rhs) => operands.extend(rhs),
            rhs => operands.push(rhs),
        }

        Criteria::And(operands)
    }

    /// Combines two conditions with `OR`, flattening nested disjunctions.
    pub fn or(self, rhs: impl Into<Criteria>) -> Criteria {
        let mut operands = match self {
            Criteria::Or(operands) => operands,
            lhs => vec![lhs],
        };

        match rhs.into() {
            Criteria::Or(rhs) => operands.extend(rhs),
            rhs => operands.push(rhs),
        }

        Criteria::Or(operands)
    }

    /// Renders the condition as SQL, pushing parameter values to `params`.
    pub fn to_sql(&self, params: &mut impl Params) -> String {
        let mut dst = String::new();
        self.write_sql(&mut dst, params);
        dst
    }

    /// Renders the condition with parameters replaced by a fixed
    /// placeholder and whitespace normalized.
    ///
    /// Two criteria with the same canonical text express the same condition
    /// up to formatting and parameter values.
    pub fn to_canonical_text(&self) -> String {
        let mut params: Vec<Value> = vec![];
        sql::canonicalize(&self.to_sql(&mut params))
    }

    /// The table aliases the condition qualifies columns with.
    pub fn referenced_aliases(&self) -> BTreeSet<String> {
        let mut params: Vec<Value> = vec![];
        sql::referenced_aliases(&self.to_sql(&mut params))
    }

    fn write_sql(&self, dst: &mut String, params: &mut impl Params) {
        match self {
            Criteria::Raw(sql) => dst.push_str(sql.trim()),
            Criteria::Column(column) => {
                if let Some(alias) = &column.alias {
                    dst.push_str(alias);
                    dst.push('.');
                }
                dst.push_str(&column.name);
            }
            Criteria::Value(value) => {
                let placeholder = params.push(value);
                dst.push_str(&placeholder.to_string());
            }
            Criteria::Binary { lhs, op, rhs } => {
                lhs.write_operand(dst, params);
                dst.push(' ');
                dst.push_str(op.as_sql());
                dst.push(' ');
                rhs.write_operand(dst, params);
            }
            Criteria::And(operands) => write_list(dst, params, operands, " AND ", "1 = 1"),
            Criteria::Or(operands) => write_list(dst, params, operands, " OR ", "1 = 0"),
            Criteria::Not(operand) => {
                dst.push_str("NOT ");
                operand.write_operand(dst, params);
            }
            Criteria::IsNull(operand) => {
                operand.write_operand(dst, params);
                dst.push_str(" IS NULL");
            }
        }
    }

    fn write_operand(&self, dst: &mut String, params: &mut impl Params) {
        if self.needs_parens() {
            dst.push('(');
            self.write_sql(dst, params);
            dst.push(')');
        } else {
            self.write_sql(dst, params);
        }
    }

    fn needs_parens(&self) -> bool {
        match self {
            Criteria::Raw(sql) => sql.trim().contains(char::is_whitespace),
            Criteria::Column(_) | Criteria::Value(_) => false,
            Criteria::And(operands) | Criteria::Or(operands) => match operands.as_slice() {
                [only] => only.needs_parens(),
                _ => true,
            },
            Criteria::Binary { .. } | Criteria::Not(_) | Criteria::IsNull(_) => true,
        }
    }
}

fn write_list(
    dst: &mut String,
    params: &mut impl Params,
    operands: &[Criteria],
    separator: &str,
    empty: &str,
) {
    if operands.is_empty() {
        dst.push_str(empty);
        return;
    }

    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            dst.push_str(separator);
        }

        if operands.len() == 1 {
            operand.write_sql(dst, params);
        } else {
            operand.write_operand(dst, params);
        }
    }
}

impl std::ops::Not for Criteria {
    type Output = Criteria;

    fn not(self) -> Criteria {
        Criteria::Not(Box::new(self))
    }
}

impl From<&str> for Criteria {
    fn from(sql: &str) -> Criteria {
        Criteria::Raw(sql.to_string())
    }
}

impl From<String> for Criteria {
    fn from(sql: String) -> Criteria {
        Criteria::Raw(sql)
    }
}

impl From<Value> for Criteria {
    fn from(value: Value) -> Criteria {
        Criteria::Value(value)
    }
}

impl From<ColumnRef> for Criteria {
    fn from(column: ColumnRef) -> Criteria {
        Criteria::Column(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_equality() {
        let on = Criteria::column("c", "TheCountryID").eq(Criteria::column("T0", "CountryID"));
        let mut params: Vec<Value> = vec![];
        assert_eq!(on.to_sql(&mut params), "c.TheCountryID = T0.CountryID");
        assert!(params.is_empty());
    }

    #[test]
    fn parameters_are_numbered() {
        let mut params: Vec<Value> = vec![];
        let on = Criteria::column("c", "A")
            .eq(Criteria::value(1))
            .and(Criteria::column("c", "B").eq(Criteria::value("x")));

        assert_eq!(on.to_sql(&mut params), "(c.A = @p1) AND (c.B = @p2)");
        assert_eq!(params, vec![Value::I32(1), Value::from("x")]);
    }

    #[test]
    fn canonical_text_ignores_parameters() {
        let a = Criteria::column("c", "A").eq(Criteria::value(1));
        let b = Criteria::raw("c.A=@other");
        assert_eq!(a.to_canonical_text(), b.to_canonical_text());
    }

    #[test]
    fn and_flattens() {
        let on = Criteria::raw("a.X = 1")
            .and("b.Y = 2")
            .and(Criteria::raw("c.Z = 3").and("d.W = 4"));

        let Criteria::And(operands) = &on else {
            panic!("expected AND; actual={on:?}");
        };
        assert_eq!(operands.len(), 4);
    }

    #[test]
    fn nested_or_is_parenthesized() {
        let on = Criteria::column("a", "X")
            .is_null()
            .or(Criteria::column("a", "X").eq(Criteria::column("b", "X")))
            .and(!Criteria::column("a", "Deleted").eq(Criteria::value(true)));

        assert_eq!(
            on.to_canonical_text(),
            "((a.X IS NULL) OR (a.X = b.X)) AND (NOT (a.Deleted = @p))"
        );
    }

    #[test]
    fn referenced_aliases() {
        let on = Criteria::raw("c.TheCountryID = T0.CountryID");
        assert_eq!(
            on.referenced_aliases().into_iter().collect::<Vec<_>>(),
            vec!["T0", "c"]
        );
    }
}
