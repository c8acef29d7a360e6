use std::io::Read;

use axum::http::HeaderMap;
use flate2::read::GzDecoder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptBodyError {
    #[error("receipt body exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("receipt body is not valid gzip: {0}")]
    Gzip(#[from] std::io::Error),
    #[error("receipt body is not valid UTF-8")]
    NotUtf8,
}

/// Receipt JSON text from a request body, inflating `Content-Encoding: gzip`.
/// `limit` applies to the decoded bytes, so a small compressed body cannot
/// expand past it.
pub fn decode_receipt_body(
    headers: &HeaderMap,
    body: &[u8],
    limit: usize,
) -> Result<String, ReceiptBodyError> {
    let bytes = if is_gzip(headers) {
        inflate(body, limit)?
    } else {
        body.to_vec()
    };
    if bytes.len() > limit {
        return Err(ReceiptBodyError::TooLarge { limit });
    }
    String::from_utf8(bytes).map_err(|_| ReceiptBodyError::NotUtf8)
}

fn is_gzip(headers: &HeaderMap) -> bool {
    headers
        .get("Content-Encoding")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().eq_ignore_ascii_case("gzip"))
        .unwrap_or(false)
}

// Reads at most one byte past the limit; the caller reports the overflow.
fn inflate(body: &[u8], limit: usize) -> Result<Vec<u8>, ReceiptBodyError> {
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut out = Vec::new();
    GzDecoder::new(body).take(cap).read_to_end(&mut out)?;
    Ok(out)
}
