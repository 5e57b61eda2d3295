const HEX: &[u8; 16] = b"0123456789abcdef";

/// Append `value` as the body of a JSON string literal, without the quotes.
///
/// Quote, backslash and every control character below U+0020 are escaped;
/// everything else, multi-byte UTF-8 included, is copied through unchanged.
pub fn escape_string_into(out: &mut String, value: &str) {
    let mut start = 0;
    for (idx, byte) in value.bytes().enumerate() {
        let short = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x08 => "\\b",
            0x0c => "\\f",
            0x00..=0x1f => "",
            _ => continue,
        };
        // Escaped bytes are ASCII, so `idx` is always a char boundary.
        out.push_str(&value[start..idx]);
        if short.is_empty() {
            out.push_str("\\u00");
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        } else {
            out.push_str(short);
        }
        start = idx + 1;
    }
    out.push_str(&value[start..]);
}
