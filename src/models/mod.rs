pub mod activity;
pub mod diagnostics;
pub mod doc;
pub mod error;
pub mod health;
pub mod messages;
pub mod task;
pub mod user;

pub use activity::*;
pub use diagnostics::*;
pub use doc::*;
pub use error::*;
pub use health::*;
pub use messages::*;
pub use task::*;
pub use user::*;

/// Timestamp format used for document edits and activity entries.
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Current server time rendered in the persisted timestamp format.
pub fn now_timestamp() -> String {
    chrono::Local::now().format(DATETIME_FMT).to_string()
}
