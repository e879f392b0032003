use super::lit;

/// A type-level join: `#[join(alias = "c", table = "Country", on = "...")]`.
#[derive(Debug)]
pub(crate) struct Join {
    pub(crate) alias: syn::LitStr,
    pub(crate) table: syn::LitStr,
    pub(crate) on: syn::LitStr,
    pub(crate) kind: JoinKind,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JoinKind {
    #[default]
    Left,
    Inner,
}

/// A field-level join through the field's foreign key:
/// `#[left_join("c")]` or `#[left_join("c", table = "Country")]`.
#[derive(Debug)]
pub(crate) struct LeftJoin {
    pub(crate) alias: syn::LitStr,
    pub(crate) table: Option<syn::LitStr>,
}

mod kw {
    syn::custom_keyword!(alias);
    syn::custom_keyword!(table);
    syn::custom_keyword!(on);
    syn::custom_keyword!(kind);
    syn::custom_keyword!(left);
    syn::custom_keyword!(inner);
}

impl Join {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Join> {
        attr.parse_args()
    }
}

impl LeftJoin {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<LeftJoin> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Join {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let mut alias: Option<syn::LitStr> = None;
        let mut table: Option<syn::LitStr> = None;
        let mut on: Option<syn::LitStr> = None;
        let mut kind: Option<JoinKind> = None;

        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(kw::alias) {
                lit::duplicate(&alias, input, "join alias")?;
                let _kw: kw::alias = input.parse()?;
                alias = Some(lit::eq_str(input)?);
            } else if lookahead.peek(kw::table) {
                lit::duplicate(&table, input, "join table")?;
                let _kw: kw::table = input.parse()?;
                table = Some(lit::eq_str(input)?);
            } else if lookahead.peek(kw::on) {
                lit::duplicate(&on, input, "join criteria")?;
                let _kw: kw::on = input.parse()?;
                on = Some(lit::eq_str(input)?);
            } else if lookahead.peek(kw::kind) {
                lit::duplicate(&kind, input, "join kind")?;
                let _kw: kw::kind = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                kind = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if lit::next_arg(input)? {
                break;
            }
        }

        let missing = |what: &str| syn::Error::new(span, format!("join is missing `{what}`"));

        Ok(Join {
            alias: alias.ok_or_else(|| missing("alias"))?,
            table: table.ok_or_else(|| missing("table"))?,
            on: on.ok_or_else(|| missing("on"))?,
            kind: kind.unwrap_or_default(),
        })
    }
}

impl syn::parse::Parse for JoinKind {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::left) {
            let _kw: kw::left = input.parse()?;
            Ok(JoinKind::Left)
        } else if lookahead.peek(kw::inner) {
            let _kw: kw::inner = input.parse()?;
            Ok(JoinKind::Inner)
        } else {
            Err(lookahead.error())
        }
    }
}

impl syn::parse::Parse for LeftJoin {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let alias = input.parse()?;
        let mut table = None;

        if !lit::next_arg(input)? {
            let _kw: kw::table = input.parse()?;
            table = Some(lit::eq_str(input)?);
            let _ = lit::next_arg(input)?;
        }

        if !input.is_empty() {
            return Err(input.error("unexpected argument"));
        }

        Ok(LeftJoin { alias, table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_to_left() {
        let join: Join = syn::parse_quote!(
            alias = "c",
            table = "TheCountryTable",
            on = "c.TheCountryID = T0.CountryID"
        );
        assert_eq!(join.alias.value(), "c");
        assert_eq!(join.kind, JoinKind::Left);
    }

    #[test]
    fn inner_join() {
        let join: Join = syn::parse_quote!(kind = inner, alias = "o", table = "Orders", on = "o.ID = T0.OrderID");
        assert_eq!(join.kind, JoinKind::Inner);
    }

    #[test]
    fn missing_criteria() {
        let err = syn::parse2::<Join>(quote::quote!(alias = "c", table = "T")).unwrap_err();
        assert_eq!(err.to_string(), "join is missing `on`");
    }

    #[test]
    fn left_join_table_override() {
        let join: LeftJoin = syn::parse_quote!("c", table = "Country");
        assert_eq!(join.alias.value(), "c");
        assert_eq!(join.table.map(|table| table.value()).as_deref(), Some("Country"));
    }
}
