//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use super::Planner;
use crate::{
    error::{AlmanacError, Result},
    schedule::MonthOrdering,
    store::PlanStore,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    document_path: Option<PathBuf>,
    ordering: MonthOrdering,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom plan document path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/almanac/plan.json` or `~/.local/share/almanac/plan.json`
    pub fn with_document_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.document_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how months are compared when assigning tasks to periods.
    pub fn with_month_ordering(mut self, ordering: MonthOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// The document itself is not touched until the first operation.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::XdgDirectory` if no default path can be placed
    pub fn build(self) -> Result<Planner> {
        let path = match self.document_path {
            Some(path) => path,
            None => Self::default_document_path()?,
        };
        log::debug!("Using plan document at {}", path.display());
        Ok(Planner::new(PlanStore::new(path), self.ordering))
    }

    /// Returns the default document path following XDG Base Directory
    /// specification.
    fn default_document_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("almanac")
            .place_data_file("plan.json")
            .map_err(|e| AlmanacError::XdgDirectory(e.to_string()))
    }
}
