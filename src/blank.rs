use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use base64::Engine;

use crate::error::Error;

/// Minimal empty DOCX: A4 portrait, 1 inch margins, Office theme.
const BLANK_DOCX_BASE64: &str = include_str!("blank.docx.b64");

static BLANK_DOCX: OnceLock<Result<Vec<u8>, String>> = OnceLock::new();
static DECODE_COUNT: AtomicUsize = AtomicUsize::new(0);

fn decode_blank_docx() -> Result<Vec<u8>, String> {
    DECODE_COUNT.fetch_add(1, Ordering::Relaxed);
    let compact: String = BLANK_DOCX_BASE64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| e.to_string())
}

/// Bytes of the built-in blank template, decoded on first use.
///
/// Every caller, including concurrent first callers, gets the same slice;
/// the embedded blob is decoded at most once per process.
pub fn blank_document() -> Result<&'static [u8], Error> {
    match BLANK_DOCX.get_or_init(decode_blank_docx) {
        Ok(bytes) => Ok(bytes.as_slice()),
        Err(reason) => Err(Error::InvalidDocx(format!(
            "built-in blank document: {reason}"
        ))),
    }
}

#[doc(hidden)]
pub fn blank_document_decode_count() -> usize {
    DECODE_COUNT.load(Ordering::Relaxed)
}
