//! The classic single-column, print-oriented resume.

use shared::{
    domain::Layout,
    resume::{non_empty, ResumePayload},
};

use crate::document::{join_or, plural, Block, Entry, ResumeDocument, Section};

pub const PROJECT_LIMIT: usize = 6;
pub const ORG_LIMIT: usize = 3;

const BIO_FALLBACK: &str = "Passionate software developer with a focus on building innovative solutions and contributing to open-source projects.";
const PROJECT_FALLBACK: &str =
    "A software project showcasing development skills and technical expertise";
const LANGUAGES_FALLBACK: &str = "JavaScript, Python, TypeScript";

pub fn build(payload: &ResumePayload) -> ResumeDocument {
    let profile = &payload.profile;
    let stats = &payload.stats;
    let total_contributions = payload.contributions.total_contributions;

    let mut header = vec![Block::link(
        format!("GitHub: {}", profile.login),
        &profile.html_url,
    )];
    if let Some(blog) = non_empty(&profile.blog) {
        header.push(Block::link(format!("Website: {blog}"), blog));
    }
    if let Some(email) = non_empty(&profile.email) {
        header.push(Block::link(format!("Email: {email}"), format!("mailto:{email}")));
    }
    if let Some(location) = non_empty(&profile.location) {
        header.push(Block::field("Location", location));
    }
    header.push(Block::field("Public Repos", stats.total_repos));
    header.push(Block::field("Followers", profile.followers));

    let mut sections = vec![
        Section::new("Professional Profile")
            .with(Block::field(
                "Bio",
                non_empty(&profile.bio).unwrap_or(BIO_FALLBACK),
            ))
            .with(Block::field(
                "GitHub Activity",
                format!(
                    "Active developer with {total_contributions} contributions this year across {} public repositories.",
                    stats.total_repos
                ),
            ))
            .with(Block::field(
                "Open Source Impact",
                format!(
                    "Contributed to {} external organizations with a total of {} stars across all repositories.",
                    payload.org_contributions.len(),
                    stats.total_stars
                ),
            ))
            .with(Block::field(
                "Technical Expertise",
                format!(
                    "Experienced in {} programming languages with a focus on modern development practices and collaborative software development.",
                    stats.languages_used
                ),
            )),
        Section::new("Summary").with(Block::paragraph(summary(payload))),
        Section::new("Skills / Tech Stack")
            .with(Block::field(
                "Programming Languages",
                join_or(
                    payload.languages.iter().map(|l| l.name.as_str()),
                    LANGUAGES_FALLBACK,
                ),
            ))
            .with(Block::field(
                "Development",
                "Full-Stack Development, API Design, Open Source Contribution, Version Control (Git)",
            ))
            .with(Block::field(
                "Collaboration",
                "GitHub Workflows, Code Review, Issue Management, Documentation",
            )),
    ];

    let mut projects = Section::new("Notable Projects");
    for repo in payload.repositories.iter().take(PROJECT_LIMIT) {
        projects.blocks.push(Block::Entry(Entry {
            title: repo.name.clone(),
            url: Some(repo.html_url.clone()),
            lines: vec![
                non_empty(&repo.description)
                    .unwrap_or(PROJECT_FALLBACK)
                    .to_string(),
                format!(
                    "Technologies: {}",
                    join_or(repo.language_names(), "Multiple Technologies")
                ),
                format!("Repository: {}", repo.html_url),
                format!("{} stars, {} forks", repo.stargazers_count, repo.forks_count),
            ],
            chips: Vec::new(),
        }));
    }
    sections.push(projects);

    if !payload.org_contributions.is_empty() {
        let mut orgs = Section::new("Open Source Contributions");
        for org in payload.org_contributions.iter().take(ORG_LIMIT) {
            let mut line = format!(
                "Contributed {} to {}.",
                plural(org.prs.len(), "merged pull request"),
                org.org_name
            );
            if let Some(description) = non_empty(&org.org_description) {
                line.push(' ');
                line.push_str(description);
            }
            orgs.blocks.push(Block::Entry(Entry {
                title: org.org_name.clone(),
                url: org.org_url.clone(),
                lines: vec![line],
                chips: Vec::new(),
            }));
        }
        sections.push(orgs);
    }

    sections.push(
        Section::new("GitHub Statistics")
            .with(Block::field(
                "Total Contributions (This Year)",
                total_contributions,
            ))
            .with(Block::field("Public Repositories", stats.total_repos))
            .with(Block::field("Total Stars Received", stats.total_stars))
            .with(Block::field("Programming Languages Used", stats.languages_used))
            .with(Block::field("Followers", profile.followers))
            .with(Block::field("Following", profile.following)),
    );

    let mut footer = Vec::new();
    if let Some(email) = non_empty(&profile.email) {
        footer.push(Block::link(email, format!("mailto:{email}")));
    }
    footer.push(Block::link("GitHub Profile", &profile.html_url));
    footer.push(Block::link(
        format!("github.com/{}", profile.login),
        &profile.html_url,
    ));
    if let Some(blog) = non_empty(&profile.blog) {
        footer.push(Block::link(blog, blog));
    }

    ResumeDocument {
        layout: Layout::Classic,
        login: profile.login.clone(),
        title: profile.display_name().to_string(),
        tagline: None,
        avatar_url: None,
        header,
        sections,
        footer,
    }
}

fn summary(payload: &ResumePayload) -> String {
    let top = join_or(
        payload.languages.iter().take(3).map(|l| l.name.as_str()),
        "multiple programming languages",
    );
    format!(
        "Software Developer with expertise in {top}. Active open-source contributor with {} public repositories and {} total stars. Proven track record of building scalable applications and contributing to collaborative development projects.",
        payload.stats.total_repos, payload.stats.total_stars
    )
}
