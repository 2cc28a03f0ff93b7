//! Character encoding detection and transcoding.
//!
//! Fetched news pages arrive as bytes. The charset is taken from, in order:
//! 1. a byte-order mark
//! 2. the HTTP `Content-Type` header, when the caller has one
//! 3. `<meta charset>` / `<meta http-equiv="Content-Type">` in the first 1024 bytes
//! 4. UTF-8 if the bytes are valid UTF-8, otherwise EUC-KR
//!
//! The last step exists because older Korean news sites frequently serve
//! EUC-KR without declaring it.

use std::sync::LazyLock;

use encoding_rs::{Encoding, EUC_KR, UTF_8};
use regex::Regex;
use tracing::debug;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// How many leading bytes are scanned for a `<meta>` charset.
const META_SCAN_LIMIT: usize = 1024;

/// Where the detected encoding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    ByteOrderMark,
    Header,
    Meta,
    /// No declaration: valid UTF-8, or the EUC-KR retry.
    Sniffed,
}

/// Detect the character encoding of an HTML document.
///
/// `content_type` is the HTTP `Content-Type` header value, if known.
/// Unknown charset labels are ignored and detection moves on.
#[must_use]
pub fn detect_encoding(
    html: &[u8],
    content_type: Option<&str>,
) -> (&'static Encoding, EncodingSource) {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return (encoding, EncodingSource::ByteOrderMark);
    }

    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return (encoding, EncodingSource::Header);
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_LIMIT)]);
    if let Some(encoding) = meta_charset(&head).and_then(|label| Encoding::for_label(label.as_bytes())) {
        return (encoding, EncodingSource::Meta);
    }

    if std::str::from_utf8(html).is_ok() {
        (UTF_8, EncodingSource::Sniffed)
    } else {
        (EUC_KR, EncodingSource::Sniffed)
    }
}

/// Charset label from a `Content-Type` header value.
fn header_charset(content_type: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Charset label from either form of `<meta>` declaration.
fn meta_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .or_else(|| CONTENT_TYPE_META_RE.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD; this never fails.
///
/// # Examples
///
/// ```
/// use news_extract::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// let utf8_str = transcode_to_utf8(html, Some("text/html; charset=utf-8"));
/// assert!(utf8_str.contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], content_type: Option<&str>) -> String {
    let (encoding, source) = detect_encoding(html, content_type);
    debug!(encoding = encoding.name(), source = ?source, bytes = html.len(), "decoding html");

    // `decode` strips a BOM and lets it override the chosen encoding.
    let (decoded, _used, had_errors) = encoding.decode(html);
    if had_errors {
        debug!(encoding = encoding.name(), "malformed sequences replaced");
    }
    decoded.into_owned()
}
