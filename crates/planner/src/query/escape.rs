use std::borrow::Cow;

/// Backslash-escapes the characters MySQL treats specially inside quoted
/// strings and identifiers.
///
/// | input | output |
/// |-------|--------|
/// | NUL   | `\0`   |
/// | 0x08  | `\b`   |
/// | tab   | `\t`   |
/// | 0x1A  | `\z`   |
/// | LF    | `\n`   |
/// | CR    | `\r`   |
/// | `"` `'` `\` `%` | prefixed with `\` |
///
/// Everything else is copied through, so the input is borrowed back when
/// nothing needed escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\0' => out.push_str("\\0"),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\x1a' => out.push_str("\\z"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' | '\'' | '\\' | '%' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(
        c,
        '\0' | '\x08' | '\t' | '\x1a' | '\n' | '\r' | '"' | '\'' | '\\' | '%'
    )
}
