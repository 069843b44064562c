// SPDX-License-Identifier: MPL-2.0
//! Process-wide `show_notification` entry point.
//!
//! A manager is installed once at startup and every part of the UI can then
//! raise a toast without threading a reference to it. The registration is
//! per thread: notifications live on the UI thread only.

use super::manager::Manager;
use super::notification::NotificationId;
use super::request::ShowArgs;
use crate::error::NotificationError;
use std::cell::RefCell;
use std::time::Instant;

thread_local! {
    static INSTALLED: RefCell<Option<Manager>> = const { RefCell::new(None) };
}

/// Registers `manager` as this thread's notification manager.
pub fn install(manager: Manager) -> Result<(), NotificationError> {
    INSTALLED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(NotificationError::AlreadyInstalled);
        }
        *slot = Some(manager);
        tracing::debug!("notification manager installed");
        Ok(())
    })
}

/// Removes and returns the installed manager.
pub fn uninstall() -> Option<Manager> {
    INSTALLED.with(|slot| slot.borrow_mut().take())
}

#[must_use]
pub fn is_installed() -> bool {
    INSTALLED.with(|slot| slot.borrow().is_some())
}

/// Runs `f` against the installed manager.
///
/// `f` must not call back into this module.
pub fn with_manager<R>(f: impl FnOnce(&mut Manager) -> R) -> Result<R, NotificationError> {
    INSTALLED.with(|slot| {
        let mut slot = slot.borrow_mut();
        let manager = slot.as_mut().ok_or(NotificationError::NotInstalled)?;
        Ok(f(manager))
    })
}

/// Shows a notification through the installed manager.
///
/// Accepts every call shape [`ShowArgs`] converts from:
///
/// ```no_run
/// use iced_toasts::ui::notifications::{global, Manager, NotificationOptions};
///
/// global::install(Manager::new()).unwrap();
/// global::show_notification("Saved").unwrap();
/// global::show_notification(("Disk full", "error", 0_i64)).unwrap();
/// global::show_notification(("Copied", 2000_i64)).unwrap();
/// global::show_notification(NotificationOptions::new("Done").category("success")).unwrap();
/// ```
pub fn show_notification(
    args: impl Into<ShowArgs>,
) -> Result<NotificationId, NotificationError> {
    let args = args.into();
    with_manager(|manager| manager.show(args))?
}

/// Dismisses a notification through the installed manager.
pub fn dismiss(id: NotificationId) -> bool {
    with_manager(|manager| manager.dismiss(id)).unwrap_or(false)
}

/// Advances the installed manager's callbacks.
pub fn tick(now: Instant) -> Vec<NotificationId> {
    with_manager(|manager| manager.tick(now)).unwrap_or_default()
}
