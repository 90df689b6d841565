// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle
//! - [`toast`] - rendering
//!
//! Success toasts fade after ~3s, warnings after ~5s. Errors stay until
//! the user dismisses them. At most three are visible; the rest queue.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-download-error").with_arg("file", name));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
