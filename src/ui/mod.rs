pub mod interactive;
pub mod state;

pub use interactive::{collect_selection, TerminalPrompter};
pub use state::SelectionState;
