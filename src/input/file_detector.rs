//! File type detection

/// PDF readers accept the header anywhere in the first 1024 bytes.
const PDF_HEADER_WINDOW: usize = 1024;
const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Unknown,
}

impl FileType {
    /// Sniff the file type from its leading bytes rather than its extension.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let window = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];
        if window
            .windows(PDF_SIGNATURE.len())
            .any(|w| w == PDF_SIGNATURE)
        {
            FileType::Pdf
        } else {
            FileType::Unknown
        }
    }
}
