//! Session persistence: one JSON blob per user holding the latest analysis
//! and its enrollments.
//!
//! The blob is written atomically (temp file plus rename) after every change
//! and reloaded on launch. A corrupt or unreadable blob is treated as no
//! session; persistence failures never interrupt the user.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;
use crate::app_dirs;
use crate::enrollment::EnrollmentRecord;

const SESSION_FILE_NAME: &str = "session.json";

/// Errors from reading or writing the session blob.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to resolve the application directory: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    #[error("Failed to write session file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to remove session file {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Everything a dashboard session persists between launches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub analysis: AnalysisReport,
    #[serde(default)]
    pub enrollments: BTreeMap<String, EnrollmentRecord>,
}

/// File-backed store for the session blob.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location inside the application directory.
    pub fn open() -> Result<Self, SessionStoreError> {
        let root = app_dirs::app_root_dir()?;
        Ok(Self {
            path: root.join(SESSION_FILE_NAME),
        })
    }

    /// Store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if a readable and well-formed one exists.
    ///
    /// Missing file means no session. A corrupt blob is logged and discarded
    /// rather than surfaced, matching a fresh start.
    pub fn load(&self) -> Option<SessionSnapshot> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("Failed to read session file {}: {err}", self.path.display());
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!(
                    "Discarding malformed session file {}: {err}",
                    self.path.display()
                );
                None
            }
        }
    }

    /// Persist the snapshot atomically.
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        let json = serde_json::to_vec_pretty(snapshot).map_err(SessionStoreError::Encode)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionStoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path).map_err(|source| SessionStoreError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        file.write_all(&json)
            .and_then(|_| file.sync_all())
            .map_err(|source| SessionStoreError::Write {
                path: tmp_path.clone(),
                source,
            })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| SessionStoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Delete the persisted session. Succeeds when no file exists.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionStoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        AnalysisReport, ApprovalStatus, GapPriority, InsightImpact, SkillGap, StrategicInsight,
        WorkforceMetric,
    };
    use crate::enrollment::EnrollmentStatus;
    use tempfile::tempdir;

    fn snapshot() -> SessionSnapshot {
        let report = AnalysisReport {
            metrics: vec![WorkforceMetric {
                category: "Data Literacy".to_string(),
                current: 45.0,
                target: 85.0,
                unit: "%".to_string(),
            }],
            skill_gaps: vec![SkillGap {
                skill: "Cloud Architecture".to_string(),
                current_proficiency: 40.0,
                required_proficiency: 90.0,
                priority: GapPriority::High,
            }],
            training_roadmap: vec![crate::analysis::report::test_fixtures::program(
                "Cloud Architecture Fundamentals",
                ApprovalStatus::Approved,
            )],
            strategic_insights: vec![StrategicInsight {
                title: "Succession cliff".to_string(),
                description: "Leadership retirements ahead".to_string(),
                impact: InsightImpact::Critical,
            }],
        };
        let mut enrollments = BTreeMap::new();
        enrollments.insert(
            "Cloud Architecture Fundamentals".to_string(),
            EnrollmentRecord {
                id: "ENR-7K2M9QX4B".to_string(),
                status: EnrollmentStatus::Confirmed,
                timestamp: "2025-01-05 09:30:00".to_string(),
            },
        );
        SessionSnapshot {
            analysis: report,
            enrollments,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));
        let snapshot = snapshot();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load(), Some(snapshot));
    }

    #[test]
    fn load_returns_none_for_missing_file() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_discards_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, b"{not json").unwrap();
        let store = SessionStore::at_path(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));
        store.save(&snapshot()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn blob_uses_the_expected_top_level_keys() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));
        store.save(&snapshot()).unwrap();
        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
        assert!(raw.get("analysis").is_some());
        assert!(raw.get("enrollments").is_some());
        let record = &raw["enrollments"]["Cloud Architecture Fundamentals"];
        assert_eq!(record["id"], "ENR-7K2M9QX4B");
        assert_eq!(record["status"], "Confirmed");
    }
}
