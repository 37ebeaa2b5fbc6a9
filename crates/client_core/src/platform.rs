//! Host capabilities the controller depends on: the navigable URL, the
//! clipboard and print/export.

use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("not available on this platform")]
    Unavailable,
    #[error("{0}")]
    Failed(String),
}

/// A rendered resume handed to the platform's print/export facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub title: String,
    pub file_name: String,
    pub body: String,
}

pub trait Platform {
    fn current_url(&self) -> Url;
    /// Replaces the current URL in place; must not add a history entry.
    fn set_current_url(&mut self, url: Url);
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), PlatformError>;
    fn trigger_print(&mut self, job: &PrintJob) -> Result<(), PlatformError>;
}

/// In-process platform used by the CLI and tests.
#[derive(Debug, Clone)]
pub struct MemoryPlatform {
    url: Url,
    url_writes: usize,
    clipboard: Option<String>,
    clipboard_available: bool,
    clipboard_failure: Option<String>,
    print_failure: Option<String>,
    printed: Vec<PrintJob>,
}

impl MemoryPlatform {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            url_writes: 0,
            clipboard: None,
            clipboard_available: true,
            clipboard_failure: None,
            print_failure: None,
            printed: Vec::new(),
        }
    }

    pub fn without_clipboard(mut self) -> Self {
        self.clipboard_available = false;
        self
    }

    pub fn with_clipboard_failure(mut self, reason: impl Into<String>) -> Self {
        self.clipboard_failure = Some(reason.into());
        self
    }

    pub fn with_print_failure(mut self, reason: impl Into<String>) -> Self {
        self.print_failure = Some(reason.into());
        self
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn printed(&self) -> &[PrintJob] {
        &self.printed
    }

    /// Number of times the URL was replaced.
    pub fn url_writes(&self) -> usize {
        self.url_writes
    }
}

impl Platform for MemoryPlatform {
    fn current_url(&self) -> Url {
        self.url.clone()
    }

    fn set_current_url(&mut self, url: Url) {
        debug!(%url, "replacing navigable url");
        self.url = url;
        self.url_writes += 1;
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), PlatformError> {
        if !self.clipboard_available {
            return Err(PlatformError::Unavailable);
        }
        if let Some(reason) = &self.clipboard_failure {
            return Err(PlatformError::Failed(reason.clone()));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn trigger_print(&mut self, job: &PrintJob) -> Result<(), PlatformError> {
        if let Some(reason) = &self.print_failure {
            return Err(PlatformError::Failed(reason.clone()));
        }
        self.printed.push(job.clone());
        Ok(())
    }
}
