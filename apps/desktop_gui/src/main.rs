mod backend_bridge;
mod controller;
mod platform;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{controller::url_with_username, load_settings, ClientSettings};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::{Layout, Username};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::platform::DesktopPlatform;
use crate::ui::{PersistedDesktopSettings, ResumeDesktopApp, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(name = "resume-desktop", about = "Generate a resume from a GitHub profile")]
struct Args {
    /// Page URL to start from; a `username` query parameter loads that user.
    #[arg(long)]
    url: Option<Url>,
    /// Shortcut for `--url <share base>?username=<name>`.
    #[arg(long)]
    username: Option<String>,
    /// Settings file (defaults to ./resume.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<Url>,
    /// Overrides the remembered resume style.
    #[arg(long)]
    layout: Option<Layout>,
}

fn startup_url(args: &Args, settings: &ClientSettings) -> Result<Url> {
    let base = args
        .url
        .clone()
        .unwrap_or_else(|| settings.share_base_url.clone());
    match &args.username {
        Some(raw) => {
            let username = Username::parse(raw).context("--username must not be blank")?;
            Ok(url_with_username(&base, &username))
        }
        None => Ok(base),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(api_base_url) = args.api_base_url.clone() {
        settings.api_base_url = api_base_url;
    }
    let start_url = startup_url(&args, &settings)?;
    tracing::info!(api = %settings.api_base_url, url = %start_url, "starting resume desktop");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.api_base_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("GitHub Resume Generator")
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    let default_layout = settings.default_layout;
    let layout_override = args.layout;

    eframe::run_native(
        "GitHub Resume Generator",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedDesktopSettings>(&text).ok())
            });
            let layout = layout_override
                .or(persisted.map(|settings| settings.layout))
                .unwrap_or(default_layout);
            Ok(Box::new(ResumeDesktopApp::new(
                DesktopPlatform::new(start_url),
                cmd_tx,
                ui_rx,
                layout,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ClientSettings {
        ClientSettings {
            api_base_url: Url::parse("http://localhost:8000/api").expect("url"),
            share_base_url: Url::parse("http://localhost:3000/profile").expect("url"),
            default_layout: Layout::Classic,
        }
    }

    #[test]
    fn username_flag_builds_deep_link_on_share_base() {
        let args = Args::parse_from(["resume-desktop", "--username", " octocat "]);
        let url = startup_url(&args, &settings()).expect("url");
        assert_eq!(url.as_str(), "http://localhost:3000/profile?username=octocat");
    }

    #[test]
    fn explicit_url_is_used_as_is() {
        let args = Args::parse_from([
            "resume-desktop",
            "--url",
            "https://resume.example/profile?username=alice",
        ]);
        let url = startup_url(&args, &settings()).expect("url");
        assert_eq!(url.as_str(), "https://resume.example/profile?username=alice");
    }

    #[test]
    fn blank_username_flag_is_rejected() {
        let args = Args::parse_from(["resume-desktop", "--username", "  "]);
        assert!(startup_url(&args, &settings()).is_err());
    }

    #[test]
    fn layout_flag_accepts_wire_names() {
        let args = Args::parse_from(["resume-desktop", "--layout", "default"]);
        assert_eq!(args.layout, Some(Layout::Classic));
    }
}
