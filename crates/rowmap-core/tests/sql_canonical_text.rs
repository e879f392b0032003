use pretty_assertions::assert_eq;
use rowmap_core::sql::{canonicalize, referenced_aliases};
use rowmap_core::stmt::{Criteria, Value};

#[test]
fn join_criteria_compare_modulo_whitespace() {
    let on = Criteria::raw("  c.TheCountryID   =\n\tT0.CountryID ");
    assert_eq!(on.to_canonical_text(), "c.TheCountryID = T0.CountryID");
    assert_eq!(
        on.to_canonical_text(),
        canonicalize("c.TheCountryID=T0.CountryID")
    );
}

#[test]
fn built_and_raw_criteria_agree() {
    let built = Criteria::column("c", "TheCountryID")
        .eq(Criteria::column("T0", "CountryID"))
        .and(Criteria::column("c", "Active").eq(Criteria::value(true)));
    let raw = Criteria::raw("(c.TheCountryID = T0.CountryID) and (c.Active = :active)");

    assert_eq!(built.to_canonical_text(), raw.to_canonical_text());
}

#[test]
fn parameter_values_are_collected_in_order() {
    let on = Criteria::column("o", "Status")
        .eq(Criteria::value("open"))
        .or(Criteria::column("o", "Priority").gt(Criteria::value(3)));

    let mut params: Vec<Value> = vec![];
    assert_eq!(
        on.to_sql(&mut params),
        "(o.Status = @p1) OR (o.Priority > @p2)"
    );
    assert_eq!(params, [Value::from("open"), Value::I32(3)]);
}

#[test]
fn aliases_of_typical_expressions() {
    let cases: &[(&str, &[&str])] = &[
        ("T0.Name", &["T0"]),
        ("c.Name", &["c"]),
        ("CONCAT(T0.Name, ' ', c.Name)", &["T0", "c"]),
        ("(SELECT COUNT(*) FROM Orders o WHERE o.CustomerID = T0.ID)", &["T0", "o"]),
        ("[c].[Full Name]", &["c"]),
        ("dbo.fn_Total(T0.ID)", &["T0"]),
        ("'T0.Name'", &[]),
        ("1.5 * 2", &[]),
    ];

    for (expr, expected) in cases {
        let actual: Vec<_> = referenced_aliases(expr).into_iter().collect();
        assert_eq!(&actual, expected, "expr={expr}");
    }
}
