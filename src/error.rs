use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a chart run.
///
/// Each variant is fatal for the current invocation; charts already written
/// before the failure stay on disk.
#[derive(Debug, Error)]
pub enum BenchplotError {
    /// The report path does not resolve to a file.
    #[error("report not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the report or writing into the output directory failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a comparison report: a required key is missing
    /// or holds the wrong type.
    #[error("malformed report {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but carries a value no chart can represent.
    #[error("invalid report field `{field}`: {reason}")]
    Invalid { field: String, reason: String },

    /// Well-formed report without a single benchmark entry.
    #[error("No benchmark entries found in the report.")]
    NoEntries,

    /// The drawing backend cannot be initialised on this machine.
    #[error("{reason}\nA TrueType sans-serif font is required. Install one with: apt install fonts-dejavu-core (or brew install --cask font-dejavu)")]
    MissingCapability { reason: String },

    /// Drawing or encoding a chart failed.
    #[error("failed to render {chart}: {message}")]
    Render {
        chart: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, BenchplotError>;

impl BenchplotError {
    pub(crate) fn render(chart: &'static str, err: impl std::fmt::Display) -> Self {
        BenchplotError::Render {
            chart,
            message: err.to_string(),
        }
    }
}
