#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectLevel {
    Default,
    Always,
    Lookup,
    List,
    Details,
    Explicit,
    Never,
}

impl syn::parse::Parse for SelectLevel {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let ident: syn::Ident = input.parse()?;

        Ok(match ident.to_string().as_str() {
            "default" => SelectLevel::Default,
            "always" => SelectLevel::Always,
            "lookup" => SelectLevel::Lookup,
            "list" => SelectLevel::List,
            "details" => SelectLevel::Details,
            "explicit" => SelectLevel::Explicit,
            "never" => SelectLevel::Never,
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "expected one of `default`, `always`, `lookup`, `list`, `details`, `explicit`, `never`",
                ))
            }
        })
    }
}

impl SelectLevel {
    pub(crate) fn variant(self) -> syn::Ident {
        let name = match self {
            SelectLevel::Default => "Default",
            SelectLevel::Always => "Always",
            SelectLevel::Lookup => "Lookup",
            SelectLevel::List => "List",
            SelectLevel::Details => "Details",
            SelectLevel::Explicit => "Explicit",
            SelectLevel::Never => "Never",
        };
        syn::Ident::new(name, proc_macro2::Span::call_site())
    }
}
