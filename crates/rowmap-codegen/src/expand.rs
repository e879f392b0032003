mod member;

use crate::schema::{JoinKind, Row};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The row being expanded
    row: &'a Row,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.row.ident;
        let type_name = self.row.type_name();
        let type_tags = self.expand_type_tags();
        let members = self
            .row
            .fields
            .iter()
            .map(|field| self.expand_member(field));

        wrap_in_const(quote! {
            impl #rowmap::Entity for #ident {
                fn declaration() -> #rowmap::Declaration {
                    #rowmap::Declaration::new(#type_name)
                        #( #type_tags )*
                        #( .member(#members) )*
                }
            }
        })
    }

    fn expand_type_tags(&self) -> Vec<TokenStream> {
        let rowmap = &self.rowmap;
        let mut tags = vec![];

        if let Some(table) = &self.row.attrs.table {
            tags.push(quote!(.table_name(#table)));
        }

        for join in &self.row.attrs.joins {
            let alias = &join.alias;
            let table = &join.table;
            let on = &join.on;
            let ctor = match join.kind {
                JoinKind::Left => quote!(left),
                JoinKind::Inner => quote!(inner),
            };

            tags.push(quote! {
                .join(#rowmap::JoinTag::#ctor(#alias, #table, #rowmap::Criteria::raw(#on)))
            });
        }

        tags
    }
}

pub(super) fn row(row: &Row) -> TokenStream {
    Expand {
        row,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand(input: TokenStream) -> String {
        crate::generate(input).unwrap().to_string()
    }

    #[test]
    fn basic_row() {
        let actual = expand(quote! {
            struct BasicRow {
                a_string: String,
            }
        });

        let expected = quote! {
            const _: () = {
                use rowmap as _rowmap;
                impl _rowmap::codegen_support::Entity for BasicRow {
                    fn declaration() -> _rowmap::codegen_support::Declaration {
                        _rowmap::codegen_support::Declaration::new("BasicRow")
                            .member(_rowmap::codegen_support::Member::of::<String>("AString"))
                    }
                }
            };
        };

        assert_eq!(actual, expected.to_string());
    }

    #[test]
    fn joins_keep_declaration_order() {
        let actual = expand(quote! {
            #[join(alias = "b", table = "B", on = "b.ID = T0.BID", kind = inner)]
            #[join(alias = "a", table = "A", on = "a.ID = T0.AID")]
            struct JoinedRow {
                id: i32,
            }
        });

        let b = actual.find("JoinTag :: inner (\"b\"").unwrap();
        let a = actual.find("JoinTag :: left (\"a\"").unwrap();
        assert!(b < a, "{actual}");
    }
}
