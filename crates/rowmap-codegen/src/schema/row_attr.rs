use super::{ErrorSet, Join};

#[derive(Debug, Default)]
pub(crate) struct RowAttr {
    /// Table name declared with `#[table = "..."]` or `#[table("...")]`
    pub(crate) table: Option<syn::LitStr>,

    /// Joins in declaration order
    pub(crate) joins: Vec<Join>,
}

impl RowAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                if let Some(table) = errs.track(table_name(attr)) {
                    self.table = Some(table);
                }
            } else if attr.path().is_ident("join") {
                if let Some(join) = errs.track(Join::from_ast(attr)) {
                    self.joins.push(join);
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    match &attr.meta {
        syn::Meta::List(_) => attr.parse_args(),
        syn::Meta::NameValue(meta) => match &meta.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) => Ok(lit.clone()),
            _ => Err(syn::Error::new_spanned(
                attr,
                "expected `table = \"table_name\"`",
            )),
        },
        syn::Meta::Path(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `table = \"table_name\"`",
        )),
    }
}
