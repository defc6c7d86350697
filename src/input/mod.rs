//! Input processing module
//! Handles file detection and PDF text extraction

pub mod file_detector;
pub mod text_extractor;

pub use text_extractor::{PdfExtractor, TextExtractor};
