//! Operations that need a signed-in [`Assistant`].

use std::fmt::Write as _;

use jiff::civil::Date;
use log::info;

use super::Planner;
use crate::{
    assistant::{extract_json, Assistant},
    display::UpdateResult,
    error::{AlmanacError, Result},
    models::{Plan, PlanDraft, PlanSummary, Task, TermYear, UpdateTaskRequest},
    params::{CreatePlan, Id},
};

impl Planner {
    /// Ask the assistant for a plan outline and make it the current plan.
    ///
    /// The response must contain a JSON object shaped like [`PlanDraft`];
    /// tasks are numbered sequentially in the order returned.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::Unauthenticated` - the assistant is signed out
    /// * `AlmanacError::Assistant` - the response holds no usable outline
    pub fn generate_plan(&self, assistant: &Assistant, params: &CreatePlan) -> Result<Plan> {
        let term: TermYear = params.term_year.parse()?;
        let response = assistant.generate(&plan_prompt(term))?;

        let json = extract_json(&response)
            .ok_or_else(|| AlmanacError::assistant("response contained no JSON object"))?;
        let draft: PlanDraft = serde_json::from_str(json)
            .map_err(|e| AlmanacError::assistant(format!("unusable plan outline: {e}")))?;
        if draft.periods.is_empty() {
            return Err(AlmanacError::assistant("plan outline has no periods"));
        }

        let plan = draft.into_plan(term, params.chair.clone());
        info!(
            "Generated plan for term {term} with {} tasks",
            plan.tasks().count()
        );
        self.commit(plan)
    }

    /// A narrative progress report written by the assistant.
    pub fn narrate_report(&self, assistant: &Assistant, today: Date) -> Result<String> {
        let summary = self.dashboard(today)?;
        assistant.generate(&report_prompt(&summary))
    }

    /// Replace a task's comments with the assistant's rewording of them.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - the task has no comments to reword
    pub fn reword_comment(
        &self,
        assistant: &Assistant,
        params: &Id,
    ) -> Result<UpdateResult<Task>> {
        let task = self.show_task(params)?;
        if task.comments.trim().is_empty() {
            return Err(AlmanacError::invalid_input("comments")
                .with_reason(format!("task {} has no comments", task.id)));
        }

        let reworded = assistant.generate(&reword_prompt(&task))?;
        let request = UpdateTaskRequest {
            comments: Some(reworded.trim().to_string()),
            ..Default::default()
        };
        self.apply_update(task.id, &request)
    }
}

fn plan_prompt(term: TermYear) -> String {
    format!(
        "Draft an annual task plan for a volunteer committee for the {term} term \
         ({} to {}). Group tasks into chronological periods. Respond with JSON only: \
         {{\"periods\": [{{\"name\": string, \"tasks\": [{{\"title\": string, \
         \"start_date\": \"YYYY-MM-DD\", \"due_date\": \"YYYY-MM-DD\", \
         \"priority\": \"High\"|\"Medium\"|\"Low\", \"responsible\": string, \
         \"source\": string}}]}}]}}",
        term.start(),
        term.end()
    )
}

fn report_prompt(summary: &PlanSummary) -> String {
    let mut prompt = format!(
        "Write a short progress report for the committee's {} plan as of {}.\n",
        summary.term, summary.as_of
    );
    let _ = writeln!(
        prompt,
        "{} tasks: {} completed, {} in progress, {} not started ({:.0}% complete).",
        summary.total_tasks,
        summary.completed,
        summary.in_progress,
        summary.not_started,
        summary.completion_percent()
    );
    if !summary.overdue.is_empty() {
        prompt.push_str("Overdue:\n");
        for task in &summary.overdue {
            let _ = writeln!(
                prompt,
                "- {} (due {}, owner: {})",
                task.title,
                task.due_date.as_deref().unwrap_or("unknown"),
                task.responsible
            );
        }
    }
    prompt
}

fn reword_prompt(task: &Task) -> String {
    format!(
        "Reword this comment on the task \"{}\" to be clear and courteous. \
         Reply with the reworded comment only.\n\n{}",
        task.title, task.comments
    )
}
