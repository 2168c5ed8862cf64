//! UI screens.

mod app;
mod notification_popup;
mod translator_screen;

pub use app::{App, AppPorts};
pub use notification_popup::NotificationPopup;
pub use translator_screen::{ScreenAction, TranslatorScreen, TranslatorScreenState};
