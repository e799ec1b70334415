//! Plan document persistence.
//!
//! A plan is stored as a single pretty-printed JSON document. Saving writes a
//! sibling temporary file first and renames it over the target, so a crash
//! mid-write leaves the previous document intact.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde_json::Value;

use crate::{
    error::{AlmanacError, Result},
    models::{Plan, PlanDraft, TermYear},
};

/// Reads and writes the plan document at a fixed path.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the plan, or `None` when no document has been saved yet.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::FileSystem` - the file exists but cannot be read
    /// * `AlmanacError::Serialization` - the file is not a plan document
    pub fn load(&self) -> Result<Option<Plan>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AlmanacError::file_system(&self.path, e)),
        };
        debug!("Loaded plan document from {}", self.path.display());
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Load the plan, failing when none exists.
    pub fn require(&self) -> Result<Plan> {
        self.load()?.ok_or_else(|| AlmanacError::PlanNotFound {
            path: self.path.clone(),
        })
    }

    /// Replace the document with `plan`.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::FileSystem` - the directory or file cannot be written
    pub fn save(&self, plan: &Plan) -> Result<()> {
        write_document(&self.path, plan)?;
        debug!("Saved plan document to {}", self.path.display());
        Ok(())
    }
}

/// Write `plan` as pretty JSON to `path`, creating parent directories.
pub fn write_document(path: &Path, plan: &Plan) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AlmanacError::file_system(parent, e))?;
    }

    let json = serde_json::to_string_pretty(plan)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, json).map_err(|e| AlmanacError::file_system(&staging, e))?;
    fs::rename(&staging, path).map_err(|e| {
        if let Err(cleanup) = fs::remove_file(&staging) {
            warn!("Could not remove {}: {cleanup}", staging.display());
        }
        AlmanacError::file_system(path, e)
    })
}

/// Read a plan for import.
///
/// A document with a top-level `term` key is a complete plan and keeps its
/// ids and statuses; any field that does not fit is an error. A document
/// without one is an unnumbered draft: its tasks are numbered from 1 and it
/// is placed in the term returned by `fallback_term`, which is only called
/// for drafts.
///
/// # Errors
///
/// * `AlmanacError::FileSystem` - the file cannot be read
/// * `AlmanacError::Serialization` - the file is not a JSON object, or does
///   not match the shape its `term` key selects
pub fn read_import(path: &Path, fallback_term: impl FnOnce() -> TermYear) -> Result<Plan> {
    let text = fs::read_to_string(path).map_err(|e| AlmanacError::file_system(path, e))?;
    let document: Value = serde_json::from_str(&text)?;

    if document.get("term").is_some() {
        debug!("Importing {} as a complete plan", path.display());
        return Ok(serde_json::from_value(document)?);
    }

    debug!("Importing {} as a plan outline", path.display());
    let draft: PlanDraft = serde_json::from_value(document)?;
    Ok(draft.into_plan(fallback_term(), None))
}
