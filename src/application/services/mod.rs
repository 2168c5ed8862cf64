//! Application services.

/// Toast queue.
pub mod notification_manager;

pub use notification_manager::NotificationManager;
