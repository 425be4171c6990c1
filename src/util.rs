//! Byte decoding helpers for documents fetched off the web.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<meta charset>`)
/// 3. Falls back to Windows-1252 (the de facto default for legacy pages)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the declared charset from a `<meta>` tag near the start of a page.
///
/// Handles both `<meta charset="...">` and the `http-equiv` form whose
/// `content` attribute carries `text/html; charset=...`. Only the first
/// 1024 bytes are examined, as browsers do when prescanning.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(1024)];

    let meta_pos = prefix
        .windows(5)
        .position(|w| w.eq_ignore_ascii_case(b"<meta"))?;
    let after_meta = &prefix[meta_pos..];

    let enc_pos = after_meta
        .windows(7)
        .position(|w| w.eq_ignore_ascii_case(b"charset"))?;
    let mut rest = &after_meta[enc_pos + 7..];

    rest = trim_ascii_start(rest);
    rest = rest.strip_prefix(b"=")?;
    rest = trim_ascii_start(rest);
    if let Some((&quote, tail)) = rest.split_first()
        && (quote == b'"' || quote == b'\'')
    {
        rest = tail;
    }

    let end = rest
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    std::str::from_utf8(&rest[..end]).ok()
}

fn trim_ascii_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_passthrough() {
        let text = decode_text("Zoë".as_bytes(), None);
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "Zoë");
    }

    #[test]
    fn test_decode_with_hint() {
        // "Zoë" in ISO-8859-15 is not valid UTF-8
        let bytes = [b'Z', b'o', 0xEB];
        assert_eq!(decode_text(&bytes, Some("iso-8859-15")), "Zoë");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        let bytes = [0x93, b'q', 0x94];
        assert_eq!(decode_text(&bytes, None), "\u{201c}q\u{201d}");
    }

    #[test]
    fn test_meta_charset() {
        assert_eq!(
            extract_meta_charset(br#"<html><head><meta charset="iso-8859-1">"#),
            Some("iso-8859-1")
        );
        assert_eq!(
            extract_meta_charset(b"<META CHARSET=windows-1252>"),
            Some("windows-1252")
        );
    }

    #[test]
    fn test_meta_http_equiv() {
        assert_eq!(
            extract_meta_charset(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS">"#
            ),
            Some("Shift_JIS")
        );
    }

    #[test]
    fn test_meta_charset_missing() {
        assert_eq!(extract_meta_charset(b"<html><body>no meta</body>"), None);
        assert_eq!(extract_meta_charset(br#"<meta name="author">"#), None);
    }
}
