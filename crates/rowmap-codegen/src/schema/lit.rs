use syn::parse::ParseStream;

/// Parses `= <int>` into a `u32`.
pub(super) fn eq_u32(input: ParseStream) -> syn::Result<u32> {
    let _eq_token: syn::Token![=] = input.parse()?;
    let lit: syn::LitInt = input.parse()?;
    lit.base10_parse()
}

/// Parses `= "<str>"`.
pub(super) fn eq_str(input: ParseStream) -> syn::Result<syn::LitStr> {
    let _eq_token: syn::Token![=] = input.parse()?;
    input.parse()
}

/// Parses an integer literal with an optional leading `-`.
pub(super) fn signed_i32(input: ParseStream) -> syn::Result<i32> {
    let negative = input.peek(syn::Token![-]);
    if negative {
        let _minus: syn::Token![-] = input.parse()?;
    }

    let lit: syn::LitInt = input.parse()?;
    let value: i32 = lit.base10_parse()?;
    Ok(if negative { -value } else { value })
}

/// Parses `"<str>", "<str>"`.
pub(super) fn str_pair(input: ParseStream) -> syn::Result<(syn::LitStr, syn::LitStr)> {
    let first = input.parse()?;
    let _comma_token: syn::Token![,] = input.parse()?;
    let second = input.parse()?;
    Ok((first, second))
}

/// Parses the separator between arguments. Returns `true` when the input
/// is exhausted.
pub(super) fn next_arg(input: ParseStream) -> syn::Result<bool> {
    if input.is_empty() {
        return Ok(true);
    }

    let _comma_token: syn::Token![,] = input.parse()?;
    Ok(input.is_empty())
}

pub(super) fn duplicate<T>(slot: &Option<T>, input: ParseStream, what: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(input.span(), format!("duplicate {what}")));
    }
    Ok(())
}
