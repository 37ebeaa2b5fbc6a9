//! Pure rendering of resume payloads into layout documents and screens.

pub mod classic;
pub mod document;
pub mod modern;
pub mod screen;
pub mod text;

use client_core::PrintJob;
use shared::{domain::Layout, resume::ResumePayload};

pub use document::{Block, CalendarCell, CalendarStrip, Entry, ResumeDocument, Section};
pub use screen::{render, LayoutChoice, Screen, SearchBar};
pub use text::to_plain_text;

pub fn build_document(payload: &ResumePayload, layout: Layout) -> ResumeDocument {
    match layout {
        Layout::Classic => classic::build(payload),
        Layout::Modern => modern::build(payload),
    }
}

/// Packages `document` for the platform's print/export facility.
pub fn print_job(document: &ResumeDocument) -> PrintJob {
    let stem: String = document
        .login
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "resume".to_string() } else { stem };

    PrintJob {
        title: format!("{} - Resume", document.title),
        file_name: format!("{stem}-{}-resume.txt", document.layout.wire_name()),
        body: to_plain_text(document),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
