//! The interactive command shell: session state, dispatch and recall.

pub mod recall;
pub mod session;

pub use recall::{RECALL_CAPACITY, RecallBuffer, RecallStep};
pub use session::ShellSession;
