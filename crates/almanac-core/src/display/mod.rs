//! Display formatting for plans, tasks and views.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrappers in this module add context such as "what changed" for updates or
//! a whole board for kanban. Everything renders as markdown, which the CLI
//! prints through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │  (Plan, Task)   │───▶│ view models     │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: task listings and the kanban board
//! - [`results`]: create/update outcomes
//! - [`status`]: plain confirmations (OperationStatus)
//! - [`timeline`]: the text Gantt chart
//! - [`datetime`]: timestamp formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod timeline;

pub use collections::Tasks;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
pub use timeline::Timeline;
