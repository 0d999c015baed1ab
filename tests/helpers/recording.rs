//! Recording doubles for the notifier and the host platform

use std::collections::VecDeque;
use std::sync::Mutex;
use SportClub::models::HostIdentity;
use SportClub::services::{HostPlatform, Notifier};

/// Notifier that records messages and answers dialogs from queued replies
#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    confirms: Mutex<VecDeque<bool>>,
    prompts: Mutex<VecDeque<Option<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer of the next confirmation
    pub fn answer_confirm(&self, answer: bool) {
        self.confirms.lock().unwrap().push_back(answer);
    }

    /// Queue the answer of the next prompt; `None` cancels it
    pub fn answer_prompt(&self, answer: Option<&str>) {
        self.prompts.lock().unwrap().push_back(answer.map(str::to_string));
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirms.lock().unwrap().pop_front().unwrap_or(false)
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        self.prompts.lock().unwrap().pop_front().flatten()
    }
}

/// Host that knows a launch identity and records opened links
pub struct RecordingHost {
    identity: Option<HostIdentity>,
    links: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new(identity: Option<HostIdentity>) -> Self {
        Self {
            identity,
            links: Mutex::new(Vec::new()),
        }
    }

    pub fn links(&self) -> Vec<String> {
        self.links.lock().unwrap().clone()
    }
}

impl HostPlatform for RecordingHost {
    fn identity(&self) -> Option<HostIdentity> {
        self.identity.clone()
    }

    fn show_alert(&self, _message: &str) {}

    fn show_confirm(&self, _message: &str) -> bool {
        false
    }

    fn show_prompt(&self, _message: &str) -> Option<String> {
        None
    }

    fn open_link(&self, url: &str) {
        self.links.lock().unwrap().push(url.to_string());
    }
}
