//! Pipeline failure kinds.

use std::path::PathBuf;

use crate::axy::AxyError;

/// Terminal failure of a pipeline run.
///
/// Every variant maps to a distinct process exit status via [`exit_code`];
/// the `Display` text is the user-facing message.
///
/// [`exit_code`]: PipelineError::exit_code
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input catalog could not be opened or read.
    #[error("failed to load catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Too few references survived selection; no output is written. A soft
    /// failure: the plate solver would not succeed on so short a table.
    #[error("not enough reference stars: {selected} selected, {required} required")]
    InsufficientReferences { selected: usize, required: usize },

    /// The coordinate table could not be written.
    #[error("failed to write coordinate table {}: {source}", path.display())]
    TableWrite { path: PathBuf, source: AxyError },
}

impl PipelineError {
    /// Process exit status for this failure.
    ///
    /// Status 1 is left unused and 2 is clap's usage-error status, so the
    /// pipeline failures start at 3.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CatalogRead { .. } => 3,
            Self::InsufficientReferences { .. } => 4,
            Self::TableWrite { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let read = PipelineError::CatalogRead {
            path: PathBuf::from("stars.cat"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let short = PipelineError::InsufficientReferences {
            selected: 4,
            required: 5,
        };
        let write = PipelineError::TableWrite {
            path: PathBuf::from("stars.axy"),
            source: AxyError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied)),
        };
        assert_eq!(read.exit_code(), 3);
        assert_eq!(short.exit_code(), 4);
        assert_eq!(write.exit_code(), 5);
    }

    #[test]
    fn insufficient_references_message_names_both_counts() {
        let err = PipelineError::InsufficientReferences {
            selected: 4,
            required: 5,
        };
        let text = err.to_string();
        assert!(text.contains("not enough reference stars"));
        assert!(text.contains('4'));
        assert!(text.contains('5'));
    }
}
