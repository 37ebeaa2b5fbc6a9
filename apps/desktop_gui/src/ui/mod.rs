//! UI layer for desktop GUI: app shell, document drawing, and themes.

pub mod app;
pub mod document_view;
pub mod theme;

pub use app::{PersistedDesktopSettings, ResumeDesktopApp, SETTINGS_STORAGE_KEY};
