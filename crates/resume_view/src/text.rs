use std::fmt::Write as _;

use crate::document::{Block, ResumeDocument};

/// Renders `document` as plain text for export and terminal output.
pub fn to_plain_text(document: &ResumeDocument) -> String {
    let mut out = String::new();

    underline(&mut out, &document.title, '=');
    if let Some(tagline) = &document.tagline {
        let _ = writeln!(out, "{tagline}");
    }
    for block in &document.header {
        write_block(&mut out, block);
    }

    for section in &document.sections {
        out.push('\n');
        underline(&mut out, &section.heading, '-');
        for block in &section.blocks {
            write_block(&mut out, block);
        }
    }

    if !document.footer.is_empty() {
        out.push('\n');
        let contacts = document
            .footer
            .iter()
            .filter_map(|block| match block {
                Block::Link { label, url } if label == url => Some(label.clone()),
                Block::Link { label, url } => Some(format!("{label} <{url}>")),
                _ => None,
            })
            .collect::<Vec<_>>();
        let _ = writeln!(out, "Contact: {}", contacts.join(" | "));
    }

    out
}

fn underline(out: &mut String, text: &str, rule: char) {
    let _ = writeln!(out, "{text}");
    let width = text.chars().count().max(1);
    out.extend(std::iter::repeat(rule).take(width));
    out.push('\n');
}

fn write_block(out: &mut String, block: &Block) {
    let _ = match block {
        Block::Paragraph(text) => writeln!(out, "{text}"),
        Block::Field { label, value } => writeln!(out, "{label}: {value}"),
        Block::Link { label, url } if label == url => writeln!(out, "{url}"),
        Block::Link { label, url } => writeln!(out, "{label} <{url}>"),
        Block::Chips(chips) => writeln!(out, "[{}]", chips.join("] [")),
        Block::Entry(entry) => {
            let _ = writeln!(out, "* {}", entry.title);
            for line in &entry.lines {
                let _ = writeln!(out, "  {line}");
            }
            if !entry.chips.is_empty() {
                let _ = writeln!(out, "  [{}]", entry.chips.join("] ["));
            }
            Ok(())
        }
        Block::Calendar(strip) => writeln!(
            out,
            "{} contributions over {} weeks",
            strip.total,
            strip.weeks.len()
        ),
    };
}
