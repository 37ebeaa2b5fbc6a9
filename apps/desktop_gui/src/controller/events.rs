//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{FetchError, FetchTicket, Notice};
use shared::resume::ResumePayload;

pub enum UiEvent {
    ResumeFetched {
        ticket: FetchTicket,
        outcome: Result<ResumePayload, FetchError>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Platform,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Fetch,
    Share,
    Print,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("clipboard")
            || message_lower.contains("copy")
            || message_lower.contains("print")
        {
            UiErrorCategory::Platform
        } else if message_lower.contains("queue")
            || message_lower.contains("disconnect")
            || message_lower.contains("runtime")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Startup failures leave the app without a worker; searching cannot recover.
    pub fn is_fatal(&self) -> bool {
        self.context == UiErrorContext::BackendStartup
    }

    /// Share and print failures that deserve the banner rather than the
    /// transient notice line.
    pub fn from_notice(notice: &Notice) -> Option<Self> {
        let context = match notice {
            Notice::CopyFailed => UiErrorContext::Share,
            Notice::PrintFailed { .. } => UiErrorContext::Print,
            Notice::LinkCopied | Notice::CopyManually { .. } => return None,
        };
        Some(Self::from_message(context, notice.message()))
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn category_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Platform => "System",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
