pub mod notification;
pub mod state;

pub use notification::{Notification, Severity};
pub use state::TaskController;
