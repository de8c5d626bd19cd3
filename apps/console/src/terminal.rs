use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use shared_http::UnauthorizedHook;
use shared_screens::{ConfirmPrompt, FileSink, ToastSink};

/// The terminal stands in for the browser chrome: it renders toasts, asks
/// yes/no questions, receives downloads, and is told when the session dies.
pub struct Terminal {
    download_dir: PathBuf,
    session_expired: AtomicBool,
}

impl Terminal {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
            session_expired: AtomicBool::new(false),
        }
    }

    /// Set by the 401 hook; the main loop checks this to force a re-login.
    pub fn session_expired(&self) -> bool {
        self.session_expired.swap(false, Ordering::SeqCst)
    }

    pub fn say(&self, message: &str) {
        println!("{}", message);
    }

    pub fn read_line(&self, prompt: &str) -> String {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim_end_matches(['\n', '\r']).to_string()
    }

    /// Prompt with the current value as the default; empty input keeps it.
    pub fn prompt_default(&self, label: &str, current: &str) -> String {
        let entered = self.read_line(&format!("  {} [{}]: ", label, current));
        if entered.is_empty() {
            current.to_string()
        } else {
            entered
        }
    }

    pub fn prompt_flag(&self, label: &str, current: bool) -> bool {
        let shown = if current { "y" } else { "n" };
        match self
            .read_line(&format!("  {} (y/n) [{}]: ", label, shown))
            .to_lowercase()
            .as_str()
        {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => current,
        }
    }

    /// Pick from a fixed list by number; empty input keeps the current value.
    pub fn prompt_choice(&self, label: &str, options: &[&str], current: &str) -> String {
        println!("  {}:", label);
        for (i, option) in options.iter().enumerate() {
            println!("    {}. {}", i + 1, option);
        }
        let entered = self.read_line(&format!("  choose 1-{} [{}]: ", options.len(), current));
        entered
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| options.get(n))
            .map(|s| s.to_string())
            .unwrap_or_else(|| current.to_string())
    }
}

impl ToastSink for Terminal {
    fn success(&self, message: &str) {
        println!("[ok] {}", message);
    }

    fn error(&self, message: &str) {
        println!("[error] {}", message);
    }
}

impl ConfirmPrompt for Terminal {
    fn confirm(&self, message: &str) -> bool {
        matches!(
            self.read_line(&format!("{} (y/n): ", message))
                .to_lowercase()
                .as_str(),
            "y" | "yes"
        )
    }
}

impl FileSink for Terminal {
    fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.download_dir.join(filename);
        std::fs::write(&path, bytes)?;
        info!(path = %path.display(), "download saved");
        println!("saved {}", path.display());
        Ok(())
    }

    fn open(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        // No browser tab to open; write the PDF next to the downloads and
        // point at it.
        let path = self.download_dir.join(filename);
        std::fs::write(&path, bytes)?;
        println!("pdf written to {}", path.display());
        Ok(())
    }
}

impl UnauthorizedHook for Terminal {
    fn on_unauthorized(&self) {
        self.session_expired.store(true, Ordering::SeqCst);
        println!("[error] Session expired - please sign in again");
    }
}
