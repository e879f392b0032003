/// Converts a Rust identifier to PascalCase.
///
/// Each `_`-separated segment gets an upper-case first letter; the rest of
/// the segment is kept as written, so `country_id` becomes `CountryId` and
/// `CountryID` is unchanged. A leading `r#` is dropped.
///
/// `heck`'s conversion would re-case acronyms (`CountryID` to `CountryId`),
/// and column names written that way must survive as declared.
pub fn pascal_case(src: &str) -> String {
    let src = src.strip_prefix("r#").unwrap_or(src);
    let mut dst = String::with_capacity(src.len());

    for segment in src.split('_').filter(|segment| !segment.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            dst.extend(first.to_uppercase());
            dst.push_str(chars.as_str());
        }
    }

    dst
}
