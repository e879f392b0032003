use super::Expand;
use crate::schema::{Field, FlagAttr};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_member(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let ty = &field.ty;
        let property = &field.property;
        let manual = self.expand_manual(field);
        let tags = self.expand_tags(field);

        quote! {
            #rowmap::Member::of::<#ty>(#property)
                #manual
                #( .tag(#tags) )*
        }
    }

    fn expand_manual(&self, field: &Field) -> Option<TokenStream> {
        let rowmap = &self.rowmap;
        let manual = field.attrs.manual.as_ref()?;

        let name = manual.name.as_ref().map(|name| quote!(.name(#name)));
        let expression = manual
            .expression
            .as_ref()
            .map(|expression| quote!(.expression(#expression)));
        let caption = manual.caption.as_ref().map(|caption| quote!(.caption(#caption)));
        let size = manual.size.map(|size| quote!(.size(#size)));
        let scale = manual.scale.map(|scale| quote!(.scale(#scale)));

        Some(quote! {
            .manual(#rowmap::Manual::default() #name #expression #caption #size #scale)
        })
    }

    fn expand_tags(&self, field: &Field) -> Vec<TokenStream> {
        let rowmap = &self.rowmap;
        let attrs = &field.attrs;
        let mut tags = vec![];

        if let Some(column) = &attrs.column {
            let name = &column.name;
            let size = column.size.map(|size| quote!(.size(#size)));
            let scale = column.scale.map(|scale| quote!(.scale(#scale)));
            let default = column
                .default
                .as_ref()
                .map(|default| quote!(.default_value(#default)));

            tags.push(quote! {
                #rowmap::Tag::Column(#rowmap::ColumnTag::new(#name) #size #scale #default)
            });
        }

        if let Some((join_alias, column)) = &attrs.origin {
            tags.push(quote!(#rowmap::Tag::origin(#join_alias, #column)));
        }

        if let Some(expression) = &attrs.expression {
            tags.push(quote!(#rowmap::Tag::expression(#expression)));
        }

        if let Some(display_name) = &attrs.display_name {
            tags.push(quote!(#rowmap::Tag::display_name(#display_name)));
        }

        if let Some((table, foreign_field)) = &attrs.foreign_key {
            tags.push(quote!(#rowmap::Tag::foreign_key(#table, #foreign_field)));
        }

        if let Some(join) = &attrs.left_join {
            let alias = &join.alias;
            let table = match &join.table {
                Some(table) => quote!(::core::option::Option::Some(::std::string::String::from(#table))),
                None => quote!(::core::option::Option::None),
            };

            tags.push(quote! {
                #rowmap::Tag::LeftJoin {
                    alias: ::std::string::String::from(#alias),
                    table: #table,
                }
            });
        }

        if let Some(level) = attrs.min_select_level {
            let variant = level.variant();
            tags.push(quote!(#rowmap::Tag::MinSelectLevel(#rowmap::SelectLevel::#variant)));
        }

        if let Some(order) = attrs.natural_order {
            tags.push(quote!(#rowmap::Tag::NaturalOrder(#order)));
        }

        if let Some(textual) = &attrs.textual_field {
            tags.push(quote!(#rowmap::Tag::TextualField(::std::string::String::from(#textual))));
        }

        for flag in &attrs.flags {
            tags.push(match flag {
                FlagAttr::PrimaryKey => quote!(#rowmap::Tag::primary_key()),
                FlagAttr::Identity => quote!(#rowmap::Tag::identity()),
                FlagAttr::NotNull => quote!(#rowmap::Tag::not_null()),
                FlagAttr::Unique => quote!(#rowmap::Tag::unique()),
            });
        }

        tags
    }
}
