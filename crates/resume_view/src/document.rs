//! Layout-neutral description of a rendered resume.
//!
//! Templates build a [`ResumeDocument`]; shells draw it (egui widgets, plain
//! text for export) without knowing which template produced it.

use chrono::NaiveDate;
use shared::{domain::Layout, resume::ContributionCalendar};

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub layout: Layout,
    pub login: String,
    pub title: String,
    pub tagline: Option<String>,
    pub avatar_url: Option<String>,
    pub header: Vec<Block>,
    pub sections: Vec<Section>,
    pub footer: Vec<Block>,
}

#[cfg(test)]
impl ResumeDocument {
    pub(crate) fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.heading == heading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Entry(entry) => Some(entry),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(String),
    Field { label: String, value: String },
    Link { label: String, url: String },
    Chips(Vec<String>),
    Entry(Entry),
    Calendar(CalendarStrip),
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }

    pub fn field(label: impl Into<String>, value: impl ToString) -> Self {
        Block::Field {
            label: label.into(),
            value: value.to_string(),
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Block::Link {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A titled item such as a project or an organization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub title: String,
    pub url: Option<String>,
    pub lines: Vec<String>,
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarStrip {
    pub total: u64,
    pub weeks: Vec<Vec<CalendarCell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub count: u64,
    /// 0..=4, used when the backend sent no colour.
    pub level: u8,
    pub color: Option<String>,
}

/// Fallback palette indexed by [`CalendarCell::level`].
pub const CALENDAR_PALETTE: [&str; 5] = ["#ebedf0", "#c6e48b", "#7bc96f", "#239a3b", "#196127"];

impl CalendarCell {
    pub fn color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or(CALENDAR_PALETTE[usize::from(self.level)])
    }
}

impl CalendarStrip {
    pub fn from_calendar(calendar: &ContributionCalendar) -> Option<Self> {
        if calendar.weeks.is_empty() {
            return None;
        }

        let weeks = calendar
            .weeks
            .iter()
            .map(|week| {
                week.contribution_days
                    .iter()
                    .map(|day| CalendarCell {
                        date: day.date,
                        count: day.contribution_count,
                        level: day.contribution_count.min(4) as u8,
                        color: day.color.clone(),
                    })
                    .collect()
            })
            .collect();

        Some(Self {
            total: calendar.total_contributions,
            weeks,
        })
    }
}

/// `"1 thing"` / `"2 things"`.
pub(crate) fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Comma-joined names, or `fallback` when there are none.
pub(crate) fn join_or<'a>(names: impl IntoIterator<Item = &'a str>, fallback: &str) -> String {
    let joined = names.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined
    }
}
