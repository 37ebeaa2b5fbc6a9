//! Desktop implementation of the controller's host capabilities.
//!
//! The navigable URL lives in memory and is shown in the status bar; the
//! clipboard goes through `arboard`; printing exports the rendered resume as a
//! text file chosen with the native save dialog.

use std::{fs, path::PathBuf};

use arboard::Clipboard;
use client_core::{Platform, PlatformError, PrintJob};
use url::Url;

/// Where a print job ends up; swapped out in tests.
pub trait ExportTarget {
    fn choose_path(&mut self, job: &PrintJob) -> Option<PathBuf>;
}

pub struct SaveDialog;

impl ExportTarget for SaveDialog {
    fn choose_path(&mut self, job: &PrintJob) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(&job.title)
            .set_file_name(&job.file_name)
            .add_filter("Text", &["txt"])
            .save_file()
    }
}

pub struct DesktopPlatform<E: ExportTarget = SaveDialog> {
    url: Url,
    export: E,
    last_export: Option<PathBuf>,
}

impl DesktopPlatform<SaveDialog> {
    pub fn new(url: Url) -> Self {
        Self::with_export(url, SaveDialog)
    }
}

impl<E: ExportTarget> DesktopPlatform<E> {
    pub fn with_export(url: Url, export: E) -> Self {
        Self {
            url,
            export,
            last_export: None,
        }
    }

    pub fn last_export(&self) -> Option<&PathBuf> {
        self.last_export.as_ref()
    }
}

impl<E: ExportTarget> Platform for DesktopPlatform<E> {
    fn current_url(&self) -> Url {
        self.url.clone()
    }

    fn set_current_url(&mut self, url: Url) {
        tracing::debug!(%url, "replacing navigable url");
        self.url = url;
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), PlatformError> {
        let mut clipboard = Clipboard::new().map_err(|err| {
            tracing::warn!("clipboard unavailable: {err}");
            PlatformError::Unavailable
        })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| PlatformError::Failed(err.to_string()))
    }

    fn trigger_print(&mut self, job: &PrintJob) -> Result<(), PlatformError> {
        let Some(path) = self.export.choose_path(job) else {
            tracing::debug!("resume export cancelled");
            return Ok(());
        };
        fs::write(&path, &job.body)
            .map_err(|err| PlatformError::Failed(format!("{}: {err}", path.display())))?;
        tracing::info!(path = %path.display(), "exported resume");
        self.last_export = Some(path);
        Ok(())
    }
}
