use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped by the browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a query value the same way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Percent-decodes a query value.
///
/// Returns `None` when the decoded bytes are not valid UTF-8. A `+` stays a
/// literal plus sign.
pub fn decode_component(value: &str) -> Option<String> {
    percent_decode_str(value)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("x/y?z#w"), "x%2Fy%3Fz%23w");
        assert_eq!(encode_component("1+1"), "1%2B1");
        assert_eq!(encode_component("Zürich"), "Z%C3%BCrich");
    }

    #[test]
    fn decodes_percent_sequences() {
        assert_eq!(decode_component("a%20b%26c").as_deref(), Some("a b&c"));
        assert_eq!(decode_component("Z%C3%BCrich").as_deref(), Some("Zürich"));
        assert_eq!(decode_component("1+1").as_deref(), Some("1+1"));
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert_eq!(decode_component("%C3%28"), None);
        assert_eq!(decode_component("%FF"), None);
    }
}
