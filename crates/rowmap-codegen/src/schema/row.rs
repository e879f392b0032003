use super::{ErrorSet, Field, RowAttr};

#[derive(Debug)]
pub(crate) struct Row {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Type-level attributes
    pub(crate) attrs: RowAttr,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Row {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Row> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`#[derive(Row)]` does not support generic structs",
            ));
        }

        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "row fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = RowAttr::default();
        errs.track(attrs.populate_from_ast(&ast.attrs));

        let mut fields = Vec::with_capacity(node.named.len());
        for field in &node.named {
            if let Some(field) = errs.track(Field::from_ast(field)) {
                fields.push(field);
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Row {
            ident: ast.ident.clone(),
            attrs,
            fields,
        })
    }

    /// The type name recorded in the declaration.
    pub(crate) fn type_name(&self) -> String {
        self.ident.to_string()
    }
}
