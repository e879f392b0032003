use super::lit;

/// Values assigned by hand: `#[manual(name = "...", caption = "...")]`.
#[derive(Debug, Default)]
pub(crate) struct Manual {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) expression: Option<syn::LitStr>,
    pub(crate) caption: Option<syn::LitStr>,
    pub(crate) size: Option<u32>,
    pub(crate) scale: Option<u32>,
}

mod kw {
    syn::custom_keyword!(name);
    syn::custom_keyword!(expression);
    syn::custom_keyword!(caption);
    syn::custom_keyword!(size);
    syn::custom_keyword!(scale);
}

impl Manual {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Manual> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Manual {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut manual = Manual::default();

        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(kw::name) {
                lit::duplicate(&manual.name, input, "manual name")?;
                let _kw: kw::name = input.parse()?;
                manual.name = Some(lit::eq_str(input)?);
            } else if lookahead.peek(kw::expression) {
                lit::duplicate(&manual.expression, input, "manual expression")?;
                let _kw: kw::expression = input.parse()?;
                manual.expression = Some(lit::eq_str(input)?);
            } else if lookahead.peek(kw::caption) {
                lit::duplicate(&manual.caption, input, "manual caption")?;
                let _kw: kw::caption = input.parse()?;
                manual.caption = Some(lit::eq_str(input)?);
            } else if lookahead.peek(kw::size) {
                lit::duplicate(&manual.size, input, "manual size")?;
                let _kw: kw::size = input.parse()?;
                manual.size = Some(lit::eq_u32(input)?);
            } else if lookahead.peek(kw::scale) {
                lit::duplicate(&manual.scale, input, "manual scale")?;
                let _kw: kw::scale = input.parse()?;
                manual.scale = Some(lit::eq_u32(input)?);
            } else {
                return Err(lookahead.error());
            }

            if lit::next_arg(input)? {
                break;
            }
        }

        Ok(manual)
    }
}
