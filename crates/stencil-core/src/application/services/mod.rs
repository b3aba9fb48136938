//! Application services - use case orchestration.

mod launch_service;
mod scaffold_service;

pub use launch_service::{LaunchRequest, LaunchService};
pub use scaffold_service::{ScaffoldOutcome, ScaffoldRequest, ScaffoldService, TemplateInfo};
