//! Maps the request state to what a shell should draw.

use client_core::RequestState;
use shared::{domain::Layout, error::ValidationError};

use crate::{build_document, document::ResumeDocument};

pub const SUBMIT_LABEL: &str = "Generate Resume";
pub const SUBMIT_BUSY_LABEL: &str = "Generating...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    pub enabled: bool,
    pub submit_label: &'static str,
    /// Message shown next to the input; validation wins over fetch errors.
    pub inline_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChoice {
    pub layout: Layout,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing {
        search: SearchBar,
        layouts: Vec<LayoutChoice>,
    },
    Loading {
        search: SearchBar,
    },
    Failed {
        search: SearchBar,
    },
    Resume {
        search: SearchBar,
        layouts: Vec<LayoutChoice>,
        document: ResumeDocument,
    },
}

impl Screen {
    pub fn search(&self) -> &SearchBar {
        match self {
            Screen::Landing { search, .. }
            | Screen::Loading { search }
            | Screen::Failed { search }
            | Screen::Resume { search, .. } => search,
        }
    }

    pub fn layouts(&self) -> &[LayoutChoice] {
        match self {
            Screen::Landing { layouts, .. } | Screen::Resume { layouts, .. } => layouts,
            Screen::Loading { .. } | Screen::Failed { .. } => &[],
        }
    }

    pub fn shows_actions(&self) -> bool {
        matches!(self, Screen::Landing { .. } | Screen::Resume { .. })
    }

    pub fn document(&self) -> Option<&ResumeDocument> {
        match self {
            Screen::Resume { document, .. } => Some(document),
            _ => None,
        }
    }
}

/// Pure: the same inputs always produce the same screen.
pub fn render(
    state: &RequestState,
    layout: Layout,
    input_error: Option<&ValidationError>,
) -> Screen {
    let loading = state.is_loading();
    let inline_error = input_error
        .map(ToString::to_string)
        .or_else(|| state.error_message().map(str::to_string));
    let search = SearchBar {
        enabled: !loading,
        submit_label: if loading {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        },
        inline_error,
    };

    match state {
        RequestState::Idle => Screen::Landing {
            search,
            layouts: layout_choices(layout),
        },
        RequestState::Loading => Screen::Loading { search },
        RequestState::Error(_) => Screen::Failed { search },
        RequestState::Success(payload) => Screen::Resume {
            search,
            layouts: layout_choices(layout),
            document: build_document(payload, layout),
        },
    }
}

fn layout_choices(selected: Layout) -> Vec<LayoutChoice> {
    Layout::ALL
        .iter()
        .map(|&layout| LayoutChoice {
            layout,
            selected: layout == selected,
        })
        .collect()
}
