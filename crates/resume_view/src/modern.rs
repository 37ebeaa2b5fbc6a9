//! The modern card layout: avatar header, chips and a contribution strip.

use shared::{
    domain::Layout,
    resume::{non_empty, ResumePayload},
};

use crate::document::{join_or, plural, Block, CalendarStrip, Entry, ResumeDocument, Section};

pub const PROJECT_LIMIT: usize = 6;
pub const ORG_LIMIT: usize = 3;

const TAGLINE_FALLBACK: &str = "Passionate developer & open-source enthusiast.";

pub fn build(payload: &ResumePayload) -> ResumeDocument {
    let profile = &payload.profile;
    let stats = &payload.stats;

    let mut header = vec![
        Block::paragraph(format!(
            "📍 {}",
            non_empty(&profile.location).unwrap_or("Remote")
        )),
        Block::paragraph(format!("👥 {} followers", profile.followers)),
        Block::paragraph(format!("⭐ {} stars", stats.total_stars)),
        Block::link("GitHub", &profile.html_url),
    ];
    if let Some(blog) = non_empty(&profile.blog) {
        header.push(Block::link("Website", blog));
    }
    if let Some(email) = non_empty(&profile.email) {
        header.push(Block::link("Email", format!("mailto:{email}")));
    }

    let mut sections = Vec::new();
    if !payload.languages.is_empty() {
        sections.push(Section::new("Tech Stack").with(Block::Chips(
            payload.languages.iter().map(|l| l.name.clone()).collect(),
        )));
    }

    let top = join_or(
        payload.languages.iter().take(3).map(|l| l.name.as_str()),
        "multiple languages",
    );
    sections.push(Section::new("Summary").with(Block::paragraph(format!(
        "Software Developer with expertise in {top}. Active open-source contributor with {} public repositories and {} total stars.",
        stats.total_repos, stats.total_stars
    ))));

    let mut projects = Section::new("Featured Projects");
    for repo in payload.repositories.iter().take(PROJECT_LIMIT) {
        projects.blocks.push(Block::Entry(Entry {
            title: repo.name.clone(),
            url: Some(repo.html_url.clone()),
            lines: vec![
                non_empty(&repo.description)
                    .unwrap_or("A software project.")
                    .to_string(),
                format!("⭐ {} | 🍴 {}", repo.stargazers_count, repo.forks_count),
            ],
            chips: repo.language_names().into_iter().map(str::to_string).collect(),
        }));
    }
    sections.push(projects);

    let mut stats_section = Section::new("GitHub Stats")
        .with(Block::field(
            "Contributions (this year)",
            payload.contributions.total_contributions,
        ))
        .with(Block::field("Repos", stats.total_repos))
        .with(Block::field("Followers", profile.followers))
        .with(Block::field("Following", profile.following));
    if let Some(strip) = CalendarStrip::from_calendar(&payload.contributions) {
        stats_section.blocks.push(Block::Calendar(strip));
    }
    sections.push(stats_section);

    if !payload.org_contributions.is_empty() {
        let mut orgs = Section::new("Open Source Contributions");
        for org in payload.org_contributions.iter().take(ORG_LIMIT) {
            orgs.blocks.push(Block::paragraph(format!(
                "{}: {} merged",
                org.org_name,
                plural(org.prs.len(), "PR")
            )));
        }
        sections.push(orgs);
    }

    let mut footer = Vec::new();
    if let Some(email) = non_empty(&profile.email) {
        footer.push(Block::link(email, format!("mailto:{email}")));
    }
    if let Some(blog) = non_empty(&profile.blog) {
        footer.push(Block::link(blog, blog));
    }
    footer.push(Block::link(
        format!("github.com/{}", profile.login),
        &profile.html_url,
    ));

    ResumeDocument {
        layout: Layout::Modern,
        login: profile.login.clone(),
        title: profile.display_name().to_string(),
        tagline: Some(
            non_empty(&profile.bio)
                .unwrap_or(TAGLINE_FALLBACK)
                .to_string(),
        ),
        avatar_url: Some(profile.avatar_url.clone()).filter(|url| !url.is_empty()),
        header,
        sections,
        footer,
    }
}
