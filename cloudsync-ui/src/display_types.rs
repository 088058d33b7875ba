//! Display types for UI components
//!
//! Lightweight versions of the server records, containing only the fields
//! the views render. The API client maps the wire format into these.

/// Cloud storage provider an image was imported from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    GoogleDrive,
    Dropbox,
}

impl ImageSource {
    /// Stable tag used in the wire format and the `source` query parameter
    pub fn as_tag(self) -> &'static str {
        match self {
            ImageSource::GoogleDrive => "google_drive",
            ImageSource::Dropbox => "dropbox",
        }
    }

    /// Parse a wire tag. The empty string (the "all sources" filter value)
    /// and unknown tags map to `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "google_drive" => Some(ImageSource::GoogleDrive),
            "dropbox" => Some(ImageSource::Dropbox),
            _ => None,
        }
    }

    /// Human-readable provider name
    pub fn label(self) -> &'static str {
        match self {
            ImageSource::GoogleDrive => "Google Drive",
            ImageSource::Dropbox => "Dropbox",
        }
    }

    /// Whether starting an import needs a folder URL up front.
    /// Dropbox is exempt: its folder can come from an OAuth picker flow.
    pub fn requires_folder_url(self) -> bool {
        matches!(self, ImageSource::GoogleDrive)
    }
}

/// Image display info
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRecord {
    pub id: i64,
    pub name: String,
    /// Resolvable URI, used directly as the image src
    pub storage_path: String,
    /// Size in bytes
    pub size: i64,
    pub source: ImageSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for source in [ImageSource::GoogleDrive, ImageSource::Dropbox] {
            assert_eq!(ImageSource::from_tag(source.as_tag()), Some(source));
        }
    }

    #[test]
    fn from_tag_rejects_unknown() {
        assert_eq!(ImageSource::from_tag(""), None);
        assert_eq!(ImageSource::from_tag("icloud"), None);
        assert_eq!(ImageSource::from_tag("Google Drive"), None);
    }

    #[test]
    fn folder_url_requirement() {
        assert!(ImageSource::GoogleDrive.requires_folder_url());
        assert!(!ImageSource::Dropbox.requires_folder_url());
    }
}
