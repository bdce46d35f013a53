use crate::shared::config::IconConfig;
use thiserror::Error;

/// A file offered as a feature icon
pub trait IconSource {
    fn file_name(&self) -> String;
    /// Declared media type, empty when the host could not determine it
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
}

/// Issues and releases session-local preview references for icon files
pub trait PreviewProvider {
    type File: IconSource + Clone;

    fn acquire(&self, file: &Self::File) -> Result<String, String>;

    fn release(&self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconRejection {
    #[error("Only JPG/PNG/SVG allowed")]
    UnsupportedType { file_name: String, media_type: String },

    #[error("Max {}", size_label(.max_bytes))]
    TooLarge { size: u64, max_bytes: u64 },

    #[error("Could not preview the selected file: {0}")]
    PreviewUnavailable(String),

    #[error("The icon cannot be changed right now")]
    NotEditable,
}

/// Plain description of a file, for hosts without a native file handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCandidate {
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
}

impl IconCandidate {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            size,
        }
    }
}

impl IconSource for IconCandidate {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Check the type first, then the size.
pub fn accept_icon(file: &impl IconSource, rules: &IconConfig) -> Result<(), IconRejection> {
    let media_type = file.media_type();
    let file_name = file.file_name();

    let type_ok = rules.media_types.iter().any(|t| *t == media_type) || {
        let lower = file_name.to_lowercase();
        rules
            .fallback_suffixes
            .iter()
            .any(|suffix| lower.ends_with(&suffix.to_lowercase()))
    };
    if !type_ok {
        return Err(IconRejection::UnsupportedType {
            file_name,
            media_type,
        });
    }

    let size = file.size();
    if size > rules.max_bytes {
        return Err(IconRejection::TooLarge {
            size,
            max_bytes: rules.max_bytes,
        });
    }

    Ok(())
}

/// Human readable size limit, e.g. "2MB"
pub fn size_limit_label(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    const KIB: u64 = 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

fn size_label(bytes: &u64) -> String {
    size_limit_label(*bytes)
}
