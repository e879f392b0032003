//! Classifies field expressions by the table aliases they reference.

use super::FieldFlags;
use crate::sql;
use std::collections::BTreeSet;

/// Flags derived from a field's expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFlags {
    /// Distinct aliases the expression qualifies columns with
    pub aliases: BTreeSet<String>,

    /// Some alias other than the base alias is referenced
    pub foreign: bool,

    /// Two or more distinct aliases are referenced
    pub calculated: bool,
}

/// Derives the `FOREIGN` and `CALCULATED` flags of an expression.
///
/// ```
/// # use rowmap_core::schema::flags;
/// let derived = flags::derive("CONCAT(T0.Name, ' ', c.Name)", "T0");
/// assert!(derived.foreign);
/// assert!(derived.calculated);
///
/// let derived = flags::derive("c.Name", "T0");
/// assert!(derived.foreign);
/// assert!(!derived.calculated);
/// ```
pub fn derive(expression: &str, base_alias: &str) -> DerivedFlags {
    let aliases = sql::referenced_aliases(expression);
    let foreign = aliases.iter().any(|alias| alias != base_alias);
    let calculated = aliases.len() >= 2;

    DerivedFlags {
        aliases,
        foreign,
        calculated,
    }
}

impl DerivedFlags {
    /// Replaces the derived bits of `flags`. Other bits are untouched.
    pub fn apply(&self, flags: FieldFlags) -> FieldFlags {
        let mut flags = flags - (FieldFlags::FOREIGN | FieldFlags::CALCULATED);
        flags.set(FieldFlags::FOREIGN, self.foreign);
        flags.set(FieldFlags::CALCULATED, self.calculated);
        flags
    }

    /// The only non-base alias referenced, if there is exactly one.
    pub fn join_alias(&self, base_alias: &str) -> Option<&str> {
        let mut foreign = self.aliases.iter().filter(|alias| *alias != base_alias);
        match (foreign.next(), foreign.next()) {
            (Some(alias), None) => Some(alias),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_alias_only() {
        let derived = derive("T0.Name", "T0");
        assert!(!derived.foreign);
        assert!(!derived.calculated);
        assert_eq!(derived.join_alias("T0"), None);
    }

    #[test]
    fn repeated_alias_counts_once() {
        let derived = derive("c.FirstName + ' ' + c.LastName", "T0");
        assert!(derived.foreign);
        assert!(!derived.calculated);
        assert_eq!(derived.join_alias("T0"), Some("c"));
    }

    #[test]
    fn two_foreign_aliases() {
        let derived = derive("COALESCE(a.Name, b.Name)", "T0");
        assert!(derived.foreign);
        assert!(derived.calculated);
        assert_eq!(derived.join_alias("T0"), None);
    }

    #[test]
    fn literals_are_not_aliases() {
        let derived = derive("'c.Name' + T0.Name", "T0");
        assert!(!derived.foreign);
        assert!(!derived.calculated);
    }

    #[test]
    fn apply_clears_stale_bits() {
        let derived = derive("T0.Name", "T0");
        let flags = derived.apply(FieldFlags::DEFAULT | FieldFlags::FOREIGN | FieldFlags::CALCULATED);
        assert_eq!(flags, FieldFlags::DEFAULT);

        let derived = derive("T0.A + c.B", "T0");
        let flags = derived.apply(FieldFlags::DEFAULT);
        assert_eq!(
            flags,
            FieldFlags::DEFAULT | FieldFlags::FOREIGN | FieldFlags::CALCULATED
        );
    }
}
