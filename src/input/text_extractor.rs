//! Text extraction from PDF resumes

use crate::error::{Result, SkillAnalyzerError};
use crate::input::file_detector::FileType;
use log::{debug, warn};
use std::any::Any;
use std::panic;
use std::path::Path;
use std::sync::Mutex;

/// Serializes swaps of the process-wide panic hook.
static PANIC_HOOK_LOCK: Mutex<()> = Mutex::new(());

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(SkillAnalyzerError::FileNotFound(path.to_path_buf()));
        }

        // The file handle lives only inside this call.
        let bytes = std::fs::read(path).map_err(|e| SkillAnalyzerError::from_io(e, path))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        self.extract_from_bytes(&bytes, path)
    }
}

impl PdfExtractor {
    pub fn extract_from_bytes(&self, bytes: &[u8], path: &Path) -> Result<String> {
        if FileType::from_bytes(bytes) != FileType::Pdf {
            return Err(SkillAnalyzerError::PdfExtraction(format!(
                "'{}' is not a PDF file",
                path.display()
            )));
        }

        let text = extract_guarded(bytes).map_err(|reason| {
            SkillAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                reason
            ))
        })?;

        let text = clean_extracted_text(&text);
        if text.trim().is_empty() {
            warn!(
                "No text layer found in '{}'; scanned resumes need OCR first",
                path.display()
            );
        }
        Ok(text)
    }
}

/// Run pdf-extract, turning its internal panics on malformed content into errors.
///
/// The panic hook is silenced for the duration of the call so no backtrace reaches stderr.
fn extract_guarded(bytes: &[u8]) -> std::result::Result<String, String> {
    let _guard = PANIC_HOOK_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    panic::set_hook(previous_hook);

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => {
            let reason = panic_reason(payload.as_ref());
            debug!("pdf-extract panicked: {}", reason);
            Err(format!("malformed PDF content ({})", reason))
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown decoder failure".to_string()
    }
}

/// Strip artifacts pdf-extract leaves behind without reflowing the text.
fn clean_extracted_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\u{0}' && *c != '\u{FEFF}')
        .collect()
}
