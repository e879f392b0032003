use super::{lit, Column, ErrorSet, LeftJoin, Manual, SelectLevel};
use std_util::str;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust field identifier
    pub(crate) ident: syn::Ident,

    /// Property name recorded in the declaration
    pub(crate) property: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    pub(crate) column: Option<Column>,
    pub(crate) expression: Option<syn::LitStr>,
    pub(crate) display_name: Option<syn::LitStr>,

    /// `(table, field)`
    pub(crate) foreign_key: Option<(syn::LitStr, syn::LitStr)>,

    pub(crate) left_join: Option<LeftJoin>,

    /// `(join alias, column)`
    pub(crate) origin: Option<(syn::LitStr, syn::LitStr)>,

    pub(crate) min_select_level: Option<SelectLevel>,
    pub(crate) natural_order: Option<i32>,
    pub(crate) textual_field: Option<syn::LitStr>,
    pub(crate) manual: Option<Manual>,

    /// Flag attributes in declaration order
    pub(crate) flags: Vec<FlagAttr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlagAttr {
    PrimaryKey,
    Identity,
    NotNull,
    Unique,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "row fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            let path = attr.path();

            if path.is_ident("column") {
                set_once(&mut errs, attr, &mut attrs.column, || Column::from_ast(attr));
            } else if path.is_ident("expression") {
                set_once(&mut errs, attr, &mut attrs.expression, || attr.parse_args());
            } else if path.is_ident("display_name") {
                set_once(&mut errs, attr, &mut attrs.display_name, || attr.parse_args());
            } else if path.is_ident("foreign_key") {
                set_once(&mut errs, attr, &mut attrs.foreign_key, || {
                    attr.parse_args_with(lit::str_pair)
                });
            } else if path.is_ident("left_join") {
                set_once(&mut errs, attr, &mut attrs.left_join, || LeftJoin::from_ast(attr));
            } else if path.is_ident("origin") {
                set_once(&mut errs, attr, &mut attrs.origin, || {
                    attr.parse_args_with(lit::str_pair)
                });
            } else if path.is_ident("min_select_level") {
                set_once(&mut errs, attr, &mut attrs.min_select_level, || attr.parse_args());
            } else if path.is_ident("natural_order") {
                set_once(&mut errs, attr, &mut attrs.natural_order, || {
                    attr.parse_args_with(lit::signed_i32)
                });
            } else if path.is_ident("textual_field") {
                set_once(&mut errs, attr, &mut attrs.textual_field, || attr.parse_args());
            } else if path.is_ident("manual") {
                set_once(&mut errs, attr, &mut attrs.manual, || Manual::from_ast(attr));
            } else if let Some(flag) = FlagAttr::from_path(path) {
                if let Some(err) = attr.meta.require_path_only().err() {
                    errs.push(err);
                } else {
                    attrs.flags.push(flag);
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            property: str::pascal_case(&ident.to_string()),
            ty: field.ty.clone(),
            attrs,
        })
    }
}

impl FlagAttr {
    fn from_path(path: &syn::Path) -> Option<FlagAttr> {
        if path.is_ident("primary_key") {
            Some(FlagAttr::PrimaryKey)
        } else if path.is_ident("identity") {
            Some(FlagAttr::Identity)
        } else if path.is_ident("not_null") {
            Some(FlagAttr::NotNull)
        } else if path.is_ident("unique") {
            Some(FlagAttr::Unique)
        } else {
            None
        }
    }
}

/// Parses an attribute that may appear once per field.
fn set_once<T>(
    errs: &mut ErrorSet,
    attr: &syn::Attribute,
    slot: &mut Option<T>,
    parse: impl FnOnce() -> syn::Result<T>,
) {
    if slot.is_some() {
        let name = attr
            .path()
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();
        errs.push(syn::Error::new_spanned(
            attr,
            format!("duplicate #[{name}] attribute"),
        ));
        return;
    }

    *slot = errs.track(parse());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(field: syn::Field) -> syn::Result<Field> {
        Field::from_ast(&field)
    }

    #[test]
    fn property_is_pascal_case() {
        let field = parse(syn::parse_quote!(pub country_id: Option<i32>)).unwrap();
        assert_eq!(field.ident, "country_id");
        assert_eq!(field.property, "CountryId");
    }

    #[test]
    fn attributes() {
        let field = parse(syn::parse_quote! {
            #[column("CountryID")]
            #[foreign_key("TheCountryTable", "TheCountryID")]
            #[left_join("c")]
            #[natural_order(-1)]
            #[not_null]
            #[unique]
            pub country_id: Option<i32>
        })
        .unwrap();

        assert_eq!(field.attrs.column.unwrap().name.value(), "CountryID");
        let (table, foreign) = field.attrs.foreign_key.unwrap();
        assert_eq!(table.value(), "TheCountryTable");
        assert_eq!(foreign.value(), "TheCountryID");
        assert_eq!(field.attrs.left_join.unwrap().alias.value(), "c");
        assert_eq!(field.attrs.natural_order, Some(-1));
        assert_eq!(field.attrs.flags, [FlagAttr::NotNull, FlagAttr::Unique]);
    }

    #[test]
    fn errors_are_combined() {
        let err = parse(syn::parse_quote! {
            #[expression("T0.A")]
            #[expression("T0.B")]
            #[min_select_level(sometimes)]
            pub name: String
        })
        .unwrap_err();

        let messages: Vec<_> = err.into_iter().map(|err| err.to_string()).collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "duplicate #[expression] attribute");
        assert!(messages[1].starts_with("expected one of"));
    }

    #[test]
    fn unrelated_attributes_are_ignored() {
        let field = parse(syn::parse_quote! {
            #[doc = "The name"]
            pub name: String
        })
        .unwrap();
        assert!(field.attrs.expression.is_none());
    }
}
