//! Handlers for the photo bot chain: logging first, then the workflow.

mod logging;
mod photo_workflow;

pub use logging::LoggingHandler;
pub use photo_workflow::{PhotoWorkflowHandler, MSG_MENU, MSG_WELCOME};
