use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{BenchplotError, Result};

/// One benchmark measured in both runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub category: String,
    pub old_ns_per_op: f64,
    pub new_ns_per_op: f64,
    /// Percent change of ns/op from the old to the new run; negative is faster.
    pub ns_per_op_change_pct: f64,
    pub old_bytes_per_op: f64,
    pub new_bytes_per_op: f64,
    pub old_allocs_per_op: f64,
    pub new_allocs_per_op: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_change_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocs_change_pct: Option<f64>,
    /// `"old"`, `"new"` or `"tie"` as decided by the report generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

/// Aggregate counters computed by the report generator.
///
/// Only the first four fields are required; the rest are printed when the
/// generator provides them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub new_wins: u64,
    pub old_wins: u64,
    pub ties: u64,
    pub avg_ns_per_op_change_pct: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_benchmarks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_bytes_change_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_allocs_change_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_improvement_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_improvement_bench: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_regression_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_regression_bench: Option<String>,
}

/// A parsed old-vs-new comparison document.
///
/// Entries keep the order of the input; renderers that need another order
/// sort their own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub old_label: String,
    pub new_label: String,
    pub entries: Vec<Entry>,
    pub summary: Summary,
}

impl Report {
    /// Read and validate a report from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(BenchplotError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => BenchplotError::NotFound {
                path: path.to_path_buf(),
            },
            _ => BenchplotError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Self::parse(&text, path)
    }

    /// Parse a report held in memory.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        let report: Report =
            serde_json::from_str(text).map_err(|source| BenchplotError::Malformed {
                path: PathBuf::from(path),
                source,
            })?;
        report.validate()?;
        Ok(report)
    }

    /// Reject values that cannot be drawn: non-finite numbers anywhere and
    /// negative ns, bytes or allocation counts.
    pub fn validate(&self) -> Result<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            let magnitudes = [
                ("old_ns_per_op", entry.old_ns_per_op),
                ("new_ns_per_op", entry.new_ns_per_op),
                ("old_bytes_per_op", entry.old_bytes_per_op),
                ("new_bytes_per_op", entry.new_bytes_per_op),
                ("old_allocs_per_op", entry.old_allocs_per_op),
                ("new_allocs_per_op", entry.new_allocs_per_op),
            ];
            for (field, value) in magnitudes {
                check_finite(i, field, value)?;
                if value < 0.0 {
                    return Err(BenchplotError::Invalid {
                        field: format!("entries[{i}].{field}"),
                        reason: format!("must not be negative, got {value}"),
                    });
                }
            }
            check_finite(i, "ns_per_op_change_pct", entry.ns_per_op_change_pct)?;
        }

        if !self.summary.avg_ns_per_op_change_pct.is_finite() {
            return Err(BenchplotError::Invalid {
                field: "summary.avg_ns_per_op_change_pct".into(),
                reason: "must be a finite number".into(),
            });
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_finite(index: usize, field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BenchplotError::Invalid {
            field: format!("entries[{index}].{field}"),
            reason: format!("must be a finite number, got {value}"),
        })
    }
}
