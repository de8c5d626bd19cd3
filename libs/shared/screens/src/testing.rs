//! Recording fakes for the collaborator traits, shared by the cell test
//! suites.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use shared_http::ApiError;

use crate::picker::{RefOption, ReferenceSource};
use crate::ui::{ConfirmPrompt, FileSink, ScreenContext, ToastSink};

#[derive(Default)]
pub struct RecordingToasts {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingToasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().expect("toast lock").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("toast lock").clone()
    }
}

impl ToastSink for RecordingToasts {
    fn success(&self, message: &str) {
        self.successes
            .lock()
            .expect("toast lock")
            .push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors
            .lock()
            .expect("toast lock")
            .push(message.to_string());
    }
}

/// Confirmation prompt with a preset answer, flippable mid-test.
pub struct ScriptedConfirm {
    answer: AtomicBool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.asked.lock().expect("confirm lock").clone()
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.asked
            .lock()
            .expect("confirm lock")
            .push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct MemoryFiles {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
    opened: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().expect("files lock").clone()
    }

    pub fn opened(&self) -> Vec<(String, Vec<u8>)> {
        self.opened.lock().expect("files lock").clone()
    }
}

impl FileSink for MemoryFiles {
    fn save(&self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        self.saved
            .lock()
            .expect("files lock")
            .push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn open(&self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        self.opened
            .lock()
            .expect("files lock")
            .push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// Canned reference options, for form tests that must not hit the network.
pub struct StubReferences {
    options: Vec<RefOption>,
}

impl StubReferences {
    pub fn new(options: Vec<RefOption>) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ReferenceSource for StubReferences {
    async fn options(&self) -> Result<Vec<RefOption>, ApiError> {
        Ok(self.options.clone())
    }
}

pub struct TestContext {
    pub ctx: ScreenContext,
    pub toasts: Arc<RecordingToasts>,
    pub confirm: Arc<ScriptedConfirm>,
    pub files: Arc<MemoryFiles>,
}

/// A screen context wired to recording fakes, confirming `yes` by default.
pub fn test_context() -> TestContext {
    let toasts = Arc::new(RecordingToasts::new());
    let confirm = Arc::new(ScriptedConfirm::answering(true));
    let files = Arc::new(MemoryFiles::new());
    TestContext {
        ctx: ScreenContext::new(toasts.clone(), confirm.clone(), files.clone()),
        toasts,
        confirm,
        files,
    }
}
