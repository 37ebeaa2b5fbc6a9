use super::*;
use async_trait::async_trait;
use reqwest::StatusCode;
use shared::{
    error::EMPTY_USERNAME_MESSAGE,
    resume::{Profile, Repository, ResumePayload},
};
use std::{collections::HashMap, sync::Mutex};

use crate::platform::MemoryPlatform;

enum FakeOutcome {
    Payload(ResumePayload),
    Api(StatusCode, &'static str),
}

#[derive(Default)]
struct FakeApi {
    outcomes: HashMap<String, FakeOutcome>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn with_user(mut self, login: &str) -> Self {
        self.outcomes
            .insert(login.to_string(), FakeOutcome::Payload(payload_for(login)));
        self
    }

    fn with_error(mut self, login: &str, status: StatusCode, message: &'static str) -> Self {
        self.outcomes
            .insert(login.to_string(), FakeOutcome::Api(status, message));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ResumeApi for FakeApi {
    async fn fetch_resume(&self, username: &Username) -> Result<ResumePayload, FetchError> {
        self.calls
            .lock()
            .expect("lock")
            .push(username.as_str().to_string());
        match self.outcomes.get(username.as_str()) {
            Some(FakeOutcome::Payload(payload)) => Ok(payload.clone()),
            Some(FakeOutcome::Api(status, message)) => Err(FetchError::Api {
                status: *status,
                message: message.to_string(),
            }),
            None => Err(FetchError::Api {
                status: StatusCode::NOT_FOUND,
                message: format!("No GitHub user found with username '{username}'."),
            }),
        }
    }

    async fn fetch_projects(&self, _username: &Username) -> Result<Vec<Repository>, FetchError> {
        Ok(Vec::new())
    }
}

fn payload_for(login: &str) -> ResumePayload {
    ResumePayload {
        profile: Profile {
            login: login.to_string(),
            name: Some(format!("{login} name")),
            ..Profile::default()
        },
        repositories: vec![Repository {
            name: format!("{login}-repo"),
            ..Repository::default()
        }],
        ..ResumePayload::default()
    }
}

fn profile_url() -> Url {
    Url::parse("http://localhost:3000/profile").expect("url")
}

fn controller_at(url: &str) -> ResumeController<MemoryPlatform> {
    ResumeController::new(MemoryPlatform::new(Url::parse(url).expect("url")))
}

fn username(raw: &str) -> Username {
    Username::parse(raw).expect("username")
}

#[test]
fn starts_idle_without_username_in_url() {
    let mut controller = controller_at("http://localhost:3000/profile");
    assert!(controller.start().is_none());
    assert_eq!(controller.state(), &RequestState::Idle);
    assert!(controller.query().is_none());
}

#[test]
fn blank_deep_link_stays_idle_without_validation_message() {
    let mut controller = controller_at("http://localhost:3000/profile?username=%20%20");
    assert!(controller.start().is_none());
    assert_eq!(controller.state(), &RequestState::Idle);
    assert!(controller.input_error().is_none());
}

#[tokio::test]
async fn deep_link_triggers_exactly_one_fetch() {
    let api = FakeApi::default().with_user("octocat");
    let mut controller = controller_at("http://localhost:3000/profile?username=octocat");

    let completion = controller.resume_from_url(&api).await;

    assert_eq!(completion, Some(Completion::Committed));
    assert_eq!(api.calls(), vec!["octocat".to_string()]);
    assert_eq!(
        controller.state().payload().map(|p| p.profile.login.as_str()),
        Some("octocat")
    );
}

#[test]
fn deep_link_enters_loading_before_the_response() {
    let mut controller = controller_at("http://localhost:3000/profile?username=octocat");
    let ticket = controller.start().expect("ticket");
    assert_eq!(ticket.username.as_str(), "octocat");
    assert!(controller.is_loading());
}

#[tokio::test]
async fn blank_submission_never_reaches_the_api() {
    let api = FakeApi::default().with_user("alice");
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));

    for raw in ["", "   ", "\t\n"] {
        let err = controller.search(&api, raw).await.expect_err("invalid");
        assert_eq!(err.to_string(), EMPTY_USERNAME_MESSAGE);
    }

    assert!(api.calls().is_empty());
    assert_eq!(controller.state(), &RequestState::Idle);
    assert_eq!(
        controller.input_error().map(ToString::to_string),
        Some(EMPTY_USERNAME_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn validation_failure_keeps_previous_result() {
    let api = FakeApi::default().with_user("alice");
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));
    controller.search(&api, "alice").await.expect("search");

    controller.search(&api, " ").await.expect_err("invalid");

    assert_eq!(
        controller.state().payload().map(|p| p.profile.login.as_str()),
        Some("alice")
    );
    controller.clear_validation();
    assert!(controller.input_error().is_none());
}

#[tokio::test]
async fn successful_search_trims_input_and_updates_url() {
    let api = FakeApi::default().with_user("alice");
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));

    let completion = controller.search(&api, "  alice ").await.expect("search");

    assert_eq!(completion, Completion::Committed);
    assert_eq!(api.calls(), vec!["alice".to_string()]);
    assert_eq!(controller.query(), Some(&username("alice")));
    assert_eq!(
        controller.share_url().as_str(),
        "http://localhost:3000/profile?username=alice"
    );
    assert_eq!(controller.platform().url_writes(), 1);
}

#[tokio::test]
async fn second_search_replaces_url_and_payload() {
    let api = FakeApi::default().with_user("alice").with_user("bob");
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));

    controller.search(&api, "alice").await.expect("alice");
    controller.search(&api, "bob").await.expect("bob");

    assert_eq!(
        controller.share_url().as_str(),
        "http://localhost:3000/profile?username=bob"
    );
    let payload = controller.state().payload().expect("payload");
    assert_eq!(payload.profile.login, "bob");
    assert!(payload.repositories.iter().all(|r| r.name.starts_with("bob")));
}

#[tokio::test]
async fn repeating_the_same_search_does_not_rewrite_the_url() {
    let api = FakeApi::default().with_user("alice");
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));

    controller.search(&api, "alice").await.expect("first");
    controller.search(&api, "alice").await.expect("second");

    assert_eq!(controller.platform().url_writes(), 1);
    assert_eq!(api.calls().len(), 2);
}

#[tokio::test]
async fn url_sync_replaces_unrelated_query_parameters() {
    let api = FakeApi::default().with_user("bob");
    let mut controller = controller_at("http://localhost:3000/profile?username=alice&ref=mail");

    controller.search(&api, "bob").await.expect("bob");

    assert_eq!(
        controller.share_url().as_str(),
        "http://localhost:3000/profile?username=bob"
    );
}

#[tokio::test]
async fn api_json_message_becomes_error_state() {
    let api = FakeApi::default().with_error("ghost", StatusCode::NOT_FOUND, "user not found");
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));

    controller.search(&api, "ghost").await.expect("search");

    assert_eq!(
        controller.state(),
        &RequestState::Error("user not found".to_string())
    );
    assert_eq!(controller.share_url(), profile_url());
}

#[tokio::test]
async fn plain_text_server_error_becomes_error_state() {
    let api = FakeApi::default().with_error(
        "boom",
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    );
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));

    controller.search(&api, "boom").await.expect("search");

    assert_eq!(
        controller.state().error_message(),
        Some("Internal Server Error")
    );
}

#[tokio::test]
async fn failure_after_success_discards_previous_payload() {
    let api = FakeApi::default()
        .with_user("alice")
        .with_error("ghost", StatusCode::NOT_FOUND, "user not found");
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));

    controller.search(&api, "alice").await.expect("alice");
    controller.search(&api, "ghost").await.expect("ghost");

    assert!(controller.state().payload().is_none());
    assert_eq!(controller.state().error_message(), Some("user not found"));
    assert_eq!(
        controller.share_url().as_str(),
        "http://localhost:3000/profile?username=alice"
    );
}

#[test]
fn new_search_passes_through_loading_and_clears_terminal_state() {
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));
    let first = controller.begin_search("alice").expect("ticket");
    controller.complete(&first, Ok(payload_for("alice")));
    assert!(controller.state().payload().is_some());

    controller.begin_search("bob").expect("ticket");

    assert_eq!(controller.state(), &RequestState::Loading);
}

#[test]
fn stale_response_is_discarded() {
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));
    let slow = controller.begin_search("alice").expect("alice ticket");
    let fast = controller.begin_search("bob").expect("bob ticket");
    assert!(fast.seq > slow.seq);

    assert_eq!(
        controller.complete(&fast, Ok(payload_for("bob"))),
        Completion::Committed
    );
    assert_eq!(
        controller.complete(&slow, Ok(payload_for("alice"))),
        Completion::Stale
    );

    assert_eq!(
        controller.state().payload().map(|p| p.profile.login.as_str()),
        Some("bob")
    );
    assert_eq!(
        controller.share_url().as_str(),
        "http://localhost:3000/profile?username=bob"
    );
}

#[test]
fn stale_response_does_not_end_newer_loading() {
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));
    let old = controller.begin_search("alice").expect("alice ticket");
    controller.begin_search("bob").expect("bob ticket");

    let completion = controller.complete(
        &old,
        Err(FetchError::Api {
            status: StatusCode::NOT_FOUND,
            message: "user not found".into(),
        }),
    );

    assert_eq!(completion, Completion::Stale);
    assert!(controller.is_loading());
}

#[test]
fn completing_a_ticket_twice_is_ignored() {
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));
    let ticket = controller.begin_search("alice").expect("ticket");
    controller.complete(&ticket, Ok(payload_for("alice")));

    let again = controller.complete(
        &ticket,
        Err(FetchError::Api {
            status: StatusCode::BAD_GATEWAY,
            message: "late".into(),
        }),
    );

    assert_eq!(again, Completion::Stale);
    assert!(controller.state().payload().is_some());
}

#[test]
fn abandoned_ticket_becomes_error_unless_superseded() {
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));
    let old = controller.begin_search("alice").expect("alice ticket");
    let newer = controller.begin_search("bob").expect("bob ticket");

    assert_eq!(controller.abandon(&old, "queue full"), Completion::Stale);
    assert!(controller.is_loading());

    assert_eq!(controller.abandon(&newer, "queue full"), Completion::Committed);
    assert_eq!(controller.state().error_message(), Some("queue full"));
    assert_eq!(controller.platform().url_writes(), 0);
}

#[test]
fn share_link_copies_current_url() {
    let mut controller = controller_at("http://localhost:3000/profile?username=alice");

    let notice = controller.share_link();

    assert_eq!(notice, Notice::LinkCopied);
    assert_eq!(notice.message(), "Link copied to clipboard!");
    assert_eq!(
        controller.platform().clipboard(),
        Some("http://localhost:3000/profile?username=alice")
    );
}

#[test]
fn share_link_without_clipboard_prompts_for_manual_copy() {
    let platform = MemoryPlatform::new(profile_url()).without_clipboard();
    let mut controller = ResumeController::new(platform);

    let notice = controller.share_link();

    assert_eq!(
        notice,
        Notice::CopyManually {
            url: "http://localhost:3000/profile".to_string()
        }
    );
    assert!(notice.message().starts_with("Copy this link:"));
}

#[test]
fn share_link_failure_becomes_alert() {
    let platform = MemoryPlatform::new(profile_url()).with_clipboard_failure("denied");
    let mut controller = ResumeController::new(platform);

    let notice = controller.share_link();

    assert_eq!(notice, Notice::CopyFailed);
    assert_eq!(
        notice.message(),
        "Failed to copy link. Please copy manually."
    );
}

#[test]
fn print_hands_job_to_platform() {
    let mut controller = ResumeController::new(MemoryPlatform::new(profile_url()));
    let job = PrintJob {
        title: "alice".into(),
        file_name: "alice-resume.txt".into(),
        body: "ALICE".into(),
    };

    assert_eq!(controller.print(&job), None);
    assert_eq!(controller.platform().printed(), &[job]);
}

#[test]
fn print_failure_is_reported_not_raised() {
    let platform = MemoryPlatform::new(profile_url()).with_print_failure("no printer");
    let mut controller = ResumeController::new(platform);
    let job = PrintJob {
        title: "alice".into(),
        file_name: "alice-resume.txt".into(),
        body: String::new(),
    };

    let notice = controller.print(&job).expect("notice");

    assert_eq!(notice.message(), "Failed to print resume: no printer");
}

#[test]
fn reads_and_writes_username_query_parameter() {
    let url = Url::parse("http://localhost:3000/profile?username=octo%20cat").expect("url");
    assert_eq!(username_from_url(&url).as_deref(), Some("octo cat"));

    let updated = url_with_username(&profile_url(), &username("alice"));
    assert_eq!(username_from_url(&updated).as_deref(), Some("alice"));
}
