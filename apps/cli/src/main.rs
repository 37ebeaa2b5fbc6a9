use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, MemoryPlatform, RequestState, ResumeApi, ResumeClient, ResumeController,
};
use resume_view::{build_document, to_plain_text};
use shared::{
    domain::{Layout, Username},
    resume::{non_empty, Repository},
};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "resume-cli", about = "Generate resumes from GitHub profiles")]
struct Cli {
    /// Settings file (defaults to ./resume.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<Url>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a resume and print it.
    Resume {
        username: Option<String>,
        /// Page URL whose `username` parameter names the user when USERNAME is omitted.
        #[arg(long)]
        url: Option<Url>,
        #[arg(long)]
        layout: Option<Layout>,
        /// Print the raw payload instead of the rendered resume.
        #[arg(long)]
        json: bool,
    },
    /// List a user's repositories.
    Projects {
        username: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(api_base_url) = cli.api_base_url {
        settings.api_base_url = api_base_url;
    }
    let client = ResumeClient::new(settings.api_base_url.clone())?;

    match cli.command {
        Command::Resume {
            username,
            url,
            layout,
            json,
        } => {
            let start = url.unwrap_or_else(|| settings.share_base_url.clone());
            let mut controller = ResumeController::new(MemoryPlatform::new(start));

            match username {
                Some(raw) => {
                    controller.search(&client, &raw).await?;
                }
                None => {
                    if controller.resume_from_url(&client).await.is_none() {
                        bail!("no username given; pass USERNAME or a --url with ?username=");
                    }
                }
            }

            let payload = match controller.state() {
                RequestState::Success(payload) => payload,
                RequestState::Error(message) => bail!("{message}"),
                other => bail!("resume request did not finish: {other:?}"),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(payload)?);
            } else {
                let layout = layout.unwrap_or(settings.default_layout);
                print!("{}", to_plain_text(&build_document(payload, layout)));
            }
            eprintln!("Share link: {}", controller.share_url());
        }
        Command::Projects { username, json } => {
            let username = Username::parse(&username)?;
            let repos = client
                .fetch_projects(&username)
                .await
                .map_err(|err| anyhow::anyhow!(err.user_message()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&repos)?);
            } else {
                print!("{}", format_projects(&repos));
            }
        }
    }

    Ok(())
}

fn format_projects(repos: &[Repository]) -> String {
    let mut out = String::new();
    for repo in repos {
        let language = repo
            .language
            .as_deref()
            .or_else(|| repo.language_names().first().copied())
            .unwrap_or("-");
        out.push_str(&format!(
            "{:<32} {:>6}★ {:>5} forks  {language}\n",
            repo.name, repo.stargazers_count, repo.forks_count
        ));
        if let Some(description) = non_empty(&repo.description) {
            out.push_str(&format!("    {description}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resume_subcommand() {
        let cli = Cli::parse_from(["resume-cli", "resume", "octocat", "--layout", "modern"]);
        match cli.command {
            Command::Resume {
                username, layout, json, ..
            } => {
                assert_eq!(username.as_deref(), Some("octocat"));
                assert_eq!(layout, Some(Layout::Modern));
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn resume_subcommand_accepts_deep_link_url() {
        let cli = Cli::parse_from([
            "resume-cli",
            "resume",
            "--url",
            "http://localhost:3000/profile?username=alice",
        ]);
        let Command::Resume { username, url, .. } = cli.command else {
            panic!("expected resume command");
        };
        assert!(username.is_none());
        assert_eq!(
            url.map(|u| u.to_string()).as_deref(),
            Some("http://localhost:3000/profile?username=alice")
        );
    }

    #[test]
    fn formats_projects_with_language_and_description() {
        let repos: Vec<Repository> = serde_json::from_value(serde_json::json!([
            {"name": "alpha", "html_url": "https://github.com/x/alpha", "stargazers_count": 3, "language": "Rust", "description": "first"},
            {"name": "beta", "html_url": "https://github.com/x/beta", "languages": {"Go": 10}},
            {"name": "gamma", "html_url": "https://github.com/x/gamma", "description": "  "}
        ]))
        .expect("repos");

        let text = format_projects(&repos);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("alpha"));
        assert!(lines[0].ends_with("Rust"));
        assert_eq!(lines[1], "    first");
        assert!(lines[2].ends_with("Go"));
        assert!(lines[3].ends_with("-"));
    }
}
