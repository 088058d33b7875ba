//! Importer state store

/// State for the importer panel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImporterState {
    /// Folder URL as typed, forwarded verbatim
    pub folder_url: String,
    /// True while an import submission is in flight
    pub importing: bool,
}

/// Outcome of an import submission, shown in the blocking notice dialog
#[derive(Clone, Debug, PartialEq)]
pub enum ImportNotice {
    /// The backend accepted the job
    Queued { message: String },
    /// Submission failed (transport, server rejection, or validation)
    Failed { message: String },
}

impl ImportNotice {
    pub fn title(&self) -> &'static str {
        match self {
            ImportNotice::Queued { .. } => "Import Started",
            ImportNotice::Failed { .. } => "Import Failed",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ImportNotice::Queued { message } | ImportNotice::Failed { message } => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ImportNotice::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = ImporterState::default();
        assert!(state.folder_url.is_empty());
        assert!(!state.importing);
    }

    #[test]
    fn notice_variants() {
        let queued = ImportNotice::Queued {
            message: "Import job queued".to_string(),
        };
        assert_eq!(queued.title(), "Import Started");
        assert_eq!(queued.message(), "Import job queued");
        assert!(!queued.is_failure());

        let failed = ImportNotice::Failed {
            message: "Server error: 500".to_string(),
        };
        assert_eq!(failed.title(), "Import Failed");
        assert!(failed.is_failure());
    }
}
