//! PDF compression helper
//!
//! printpdf writes uncompressed content streams; lopdf re-saves them
//! compressed.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress every stream in a serialized PDF
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e)))?;

    let compressed = output.into_inner();
    log::debug!(
        "Compressed PDF from {} to {} bytes",
        uncompressed.len(),
        compressed.len()
    );
    Ok(compressed)
}

/// Compress, keeping the original bytes if lopdf cannot handle them
pub fn compress_or_keep(bytes: Vec<u8>) -> Vec<u8> {
    match compress_pdf(&bytes) {
        Ok(compressed) => compressed,
        Err(e) => {
            log::warn!("{}; writing uncompressed PDF", e);
            bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_an_error() {
        assert!(compress_pdf(b"not a pdf").is_err());
    }

    #[test]
    fn test_fallback_keeps_bytes() {
        let bytes = b"not a pdf".to_vec();
        assert_eq!(compress_or_keep(bytes.clone()), bytes);
    }
}
