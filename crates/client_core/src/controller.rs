//! Request-state lifecycle for one resume query.
//!
//! The controller is the only writer of [`RequestState`]. Dispatch and
//! completion are separate calls so the fetch itself can run elsewhere (a
//! worker thread in the desktop shell); [`ResumeController::search`] wires the
//! two together for callers that can simply await.
//!
//! Every dispatch bumps a sequence number and only the completion carrying the
//! latest one is committed, so overlapping searches resolve to the newest
//! request regardless of which response lands first.

use shared::{domain::Username, error::ValidationError, resume::ResumePayload};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    platform::{Platform, PlatformError, PrintJob},
    FetchError, ResumeApi,
};

pub const USERNAME_QUERY_PARAM: &str = "username";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(ResumePayload),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn payload(&self) -> Option<&ResumePayload> {
        match self {
            RequestState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for one dispatched fetch; hand it back to [`ResumeController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub username: Username,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Committed,
    /// A newer search was dispatched; the outcome was dropped.
    Stale,
}

/// User-facing result of the share and print actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LinkCopied,
    CopyManually { url: String },
    CopyFailed,
    PrintFailed { reason: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::LinkCopied => "Link copied to clipboard!".to_string(),
            Notice::CopyManually { url } => format!("Copy this link: {url}"),
            Notice::CopyFailed => "Failed to copy link. Please copy manually.".to_string(),
            Notice::PrintFailed { reason } => format!("Failed to print resume: {reason}"),
        }
    }
}

/// Reads the `username` query parameter, if present.
pub fn username_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == USERNAME_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Returns `url` with its query replaced by `username=<name>`.
pub fn url_with_username(url: &Url, username: &Username) -> Url {
    let mut url = url.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair(USERNAME_QUERY_PARAM, username.as_str());
    url
}

pub struct ResumeController<P: Platform> {
    platform: P,
    state: RequestState,
    query: Option<Username>,
    latest_seq: u64,
    input_error: Option<ValidationError>,
}

impl<P: Platform> ResumeController<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            state: RequestState::Idle,
            query: None,
            latest_seq: 0,
            input_error: None,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn query(&self) -> Option<&Username> {
        self.query.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Validation message for the last rejected submission.
    pub fn input_error(&self) -> Option<&ValidationError> {
        self.input_error.as_ref()
    }

    /// Called when the user edits the search input.
    pub fn clear_validation(&mut self) {
        self.input_error = None;
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn share_url(&self) -> Url {
        self.platform.current_url()
    }

    /// Deep-link resume: dispatches a fetch when the current URL names a user.
    ///
    /// A blank `username` parameter is ignored without raising a validation
    /// message.
    pub fn start(&mut self) -> Option<FetchTicket> {
        let raw = username_from_url(&self.platform.current_url())?;
        match Username::parse(&raw) {
            Ok(username) => {
                info!(%username, "resuming deep-linked query");
                Some(self.dispatch(username))
            }
            Err(_) => {
                debug!("ignoring blank username in startup url");
                None
            }
        }
    }

    /// Validates `raw` and moves to `Loading`.
    ///
    /// On a validation failure the request state is left untouched and no
    /// ticket is issued, so no fetch can happen.
    pub fn begin_search(&mut self, raw: &str) -> Result<FetchTicket, ValidationError> {
        match Username::parse(raw) {
            Ok(username) => Ok(self.dispatch(username)),
            Err(err) => {
                debug!(%err, "rejected search input");
                self.input_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, username: Username) -> FetchTicket {
        self.latest_seq += 1;
        self.input_error = None;
        self.query = Some(username.clone());
        self.state = RequestState::Loading;
        debug!(seq = self.latest_seq, %username, "dispatching resume fetch");
        FetchTicket {
            seq: self.latest_seq,
            username,
        }
    }

    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ResumePayload, FetchError>,
    ) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }

        match outcome {
            Ok(payload) => {
                info!(username = %ticket.username, "resume fetched");
                self.state = RequestState::Success(payload);
                self.sync_url(&ticket.username);
            }
            Err(err) => {
                warn!(username = %ticket.username, error = %err, "resume fetch failed");
                self.state = RequestState::Error(err.user_message());
            }
        }
        Completion::Committed
    }

    /// Fails `ticket` without an outcome, e.g. when the fetch could not be
    /// handed to a worker.
    pub fn abandon(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        let message = message.into();
        warn!(username = %ticket.username, %message, "resume fetch abandoned");
        self.state = RequestState::Error(message);
        Completion::Committed
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        let current = ticket.seq == self.latest_seq && self.state.is_loading();
        if !current {
            warn!(
                seq = ticket.seq,
                latest = self.latest_seq,
                username = %ticket.username,
                "discarding stale resume response"
            );
        }
        current
    }

    /// Full search cycle for callers that can await the fetch in place.
    pub async fn search<A>(&mut self, api: &A, raw: &str) -> Result<Completion, ValidationError>
    where
        A: ResumeApi + ?Sized,
    {
        let ticket = self.begin_search(raw)?;
        let outcome = api.fetch_resume(&ticket.username).await;
        Ok(self.complete(&ticket, outcome))
    }

    /// [`start`](Self::start) followed by the fetch, if the URL named a user.
    pub async fn resume_from_url<A>(&mut self, api: &A) -> Option<Completion>
    where
        A: ResumeApi + ?Sized,
    {
        let ticket = self.start()?;
        let outcome = api.fetch_resume(&ticket.username).await;
        Some(self.complete(&ticket, outcome))
    }

    fn sync_url(&mut self, username: &Username) {
        let current = self.platform.current_url();
        let next = url_with_username(&current, username);
        if next != current {
            info!(url = %next, "updating shareable url");
            self.platform.set_current_url(next);
        }
    }

    pub fn share_link(&mut self) -> Notice {
        let url = self.platform.current_url().to_string();
        match self.platform.copy_to_clipboard(&url) {
            Ok(()) => Notice::LinkCopied,
            Err(PlatformError::Unavailable) => Notice::CopyManually { url },
            Err(PlatformError::Failed(reason)) => {
                warn!(%reason, "clipboard write failed");
                Notice::CopyFailed
            }
        }
    }

    /// Hands `job` to the platform; failures come back as a notice.
    pub fn print(&mut self, job: &PrintJob) -> Option<Notice> {
        match self.platform.trigger_print(job) {
            Ok(()) => None,
            Err(err) => {
                warn!(error = %err, "print request failed");
                Some(Notice::PrintFailed {
                    reason: err.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
