use super::lit;

#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
    pub(crate) size: Option<u32>,
    pub(crate) scale: Option<u32>,
    pub(crate) default: Option<syn::Expr>,
}

mod kw {
    syn::custom_keyword!(size);
    syn::custom_keyword!(scale);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let mut name: Option<syn::LitStr> = None;
        let mut size: Option<u32> = None;
        let mut scale: Option<u32> = None;
        let mut default: Option<syn::Expr> = None;

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column("name", size = 50)]
        // #[column("name", size = 18, scale = 2, default = 0)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                lit::duplicate(&name, input, "column name")?;
                name = Some(input.parse()?);
            } else if lookahead.peek(kw::size) {
                lit::duplicate(&size, input, "column size")?;
                let _kw: kw::size = input.parse()?;
                size = Some(lit::eq_u32(input)?);
            } else if lookahead.peek(kw::scale) {
                lit::duplicate(&scale, input, "column scale")?;
                let _kw: kw::scale = input.parse()?;
                scale = Some(lit::eq_u32(input)?);
            } else if lookahead.peek(syn::Token![default]) {
                lit::duplicate(&default, input, "column default")?;
                let _kw: syn::Token![default] = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                default = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if lit::next_arg(input)? {
                break;
            }
        }

        let Some(name) = name else {
            return Err(syn::Error::new(span, "expected column name, e.g. `#[column(\"Name\")]`"));
        };

        Ok(Column {
            name,
            size,
            scale,
            default,
        })
    }
}
