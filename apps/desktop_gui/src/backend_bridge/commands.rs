//! Backend commands queued from UI to backend worker.

use client_core::FetchTicket;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    FetchResume { ticket: FetchTicket },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchResume { .. } => "fetch_resume",
        }
    }
}
