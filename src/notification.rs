//! Notification module for comiq
//!
//! Transient messages shown in the top-right corner: load failures,
//! config warnings and clipboard confirmations.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
