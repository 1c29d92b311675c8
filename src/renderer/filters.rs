// Re-export the case conversion functions used as template filters
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
};

/// Turns a module name into a Go package identifier.
///
/// Go package names are lowercase and cannot contain `-` or `_` by
/// convention, so `user-auth` becomes `userauth`.
pub fn go_package_filter(val: &str) -> String {
    val.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Quotes a value as a Go interpreted string literal, `say "hi"` becoming
/// `"say \"hi\""`.
pub fn go_string_filter(val: &str) -> String {
    let mut quoted = String::with_capacity(val.len() + 2);
    quoted.push('"');
    for c in val.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
