/// Quote a PostgreSQL identifier for safe interpolation into SQL text.
///
/// Embedded double quotes are doubled. Per PostgreSQL's identifier rules the
/// name is truncated at an embedded NUL byte.
pub fn quote_identifier(name: &str) -> String {
    let name = match name.find('\0') {
        Some(end) => &name[..end],
        None => name,
    };
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote a string literal for safe interpolation into SQL text.
///
/// Embedded single quotes are doubled. When the input contains a backslash
/// the escape-string form `E'...'` is used and backslashes are doubled,
/// so the result is safe regardless of the server's
/// `standard_conforming_strings` setting.
pub fn quote_literal(literal: &str) -> String {
    let escaped = literal.replace('\'', "''");
    if escaped.contains('\\') {
        format!(" E'{}'", escaped.replace('\\', "\\\\"))
    } else {
        format!("'{}'", escaped)
    }
}
