//! Whole-plan operations for the Planner.

use std::{collections::HashSet, path::Path};

use log::{info, warn};

use super::Planner;
use crate::{
    error::{AlmanacError, Result},
    models::{Plan, TermYear},
    params::CreatePlan,
    store::{read_import, write_document},
    template::handbook_draft,
};

impl Planner {
    /// Creates a new plan for a term, replacing whatever was there.
    ///
    /// With `template` set the plan is seeded from the built-in handbook
    /// outline, numbered 1, 2, 3...; otherwise it starts with no periods.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidTermYear` - the label is not `YYYY-YYYY`
    pub fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        let term: TermYear = params.term_year.parse()?;
        let chair = params
            .chair
            .as_deref()
            .map(str::trim)
            .filter(|chair| !chair.is_empty())
            .map(str::to_string);

        let plan = if params.template {
            handbook_draft(term).into_plan(term, chair)
        } else {
            Plan::new(term, chair)
        };
        info!("Creating plan for term {term}");
        self.commit(plan)
    }

    /// The current plan.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::PlanNotFound` - no plan has been created yet
    pub fn show_plan(&self) -> Result<Plan> {
        self.store.require()
    }

    /// Replace the current plan with the document at `path`.
    ///
    /// The file may hold a full plan or an id-less draft; drafts take the
    /// current plan's term, or the term containing today when there is none
    /// or it cannot be read. A corrupt current document does not block the
    /// import that replaces it.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - the document repeats a task id
    /// * `AlmanacError::Serialization` - a document with a `term` is not a
    ///   valid plan, or one without is not a valid outline
    pub fn import_plan(&self, path: &Path) -> Result<Plan> {
        let plan = read_import(path, || self.current_term_or_today())?;

        let mut seen = HashSet::new();
        if let Some(task) = plan.tasks().find(|task| !seen.insert(task.id)) {
            return Err(AlmanacError::invalid_input("id")
                .with_reason(format!("task id {} appears more than once", task.id)));
        }

        info!("Imported plan for term {} from {}", plan.term, path.display());
        self.commit(plan)
    }

    /// Term of the current plan, or the term containing today when there is
    /// no readable plan.
    fn current_term_or_today(&self) -> TermYear {
        match self.store.load() {
            Ok(Some(plan)) => return plan.term,
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable plan document: {e}"),
        }
        TermYear::containing(jiff::Zoned::now().date())
    }

    /// Write the current plan to `path`.
    pub fn export_plan(&self, path: &Path) -> Result<Plan> {
        let plan = self.store.require()?;
        write_document(path, &plan)?;
        info!("Exported plan to {}", path.display());
        Ok(plan)
    }
}
