#![allow(dead_code)]

use cfg_install::error::{InstallerError, Result};
use cfg_install::interactive::Prompter;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};
use tempfile::TempDir;

/// Sample generated files
pub mod test_content {
    pub const AUTOEXEC: &str = "bind \"F1\" \"+jump\"\ncl_fovScale 1.55\n";
    pub const AUTOEXEC_ALT: &str = "bind \"F2\" \"+duck\"\n";
    pub const VIDEOCONFIG: &str = "\"VideoConfig\"\n{\n\t\"setting.cl_gib_allow\"\t\t\"0\"\n}\n";
}

/// Prompter fed from queued answers; runs out like a closed terminal.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub text_answers: VecDeque<String>,
    pub confirm_answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn with_text<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text_answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirm_answers.push_back(answer);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, _default: Option<&str>) -> Result<String> {
        self.asked.push(message.to_string());
        self.text_answers
            .pop_front()
            .ok_or_else(|| InstallerError::NotInteractive {
                what: message.to_string(),
            })
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        self.asked.push(message.to_string());
        self.confirm_answers
            .pop_front()
            .ok_or_else(|| InstallerError::NotInteractive {
                what: message.to_string(),
            })
    }
}

/// Logger that keeps every record so tests can assert on status lines.
struct CapturingLogger;

static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INIT_LOGGER: Once = Once::new();

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut captured = CAPTURED.lock().unwrap_or_else(|e| e.into_inner());
        captured.push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Installs the capturing logger once per test binary.
pub fn capture_logs() {
    INIT_LOGGER.call_once(|| {
        log::set_logger(&CapturingLogger).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Captured messages at `level` that mention `needle`. Tests run in parallel,
/// so filter on something unique to the test, such as a temp path.
pub fn logged(level: Level, needle: &str) -> Vec<String> {
    let captured = CAPTURED.lock().unwrap_or_else(|e| e.into_inner());
    captured
        .iter()
        .filter(|(l, message)| *l == level && message.contains(needle))
        .map(|(_, message)| message.clone())
        .collect()
}

/// Temp layout with a source directory, a fake game install and a saved-data directory.
pub struct TestEnvironment {
    // TempDir is kept to ensure cleanup happens when TestEnvironment is dropped
    pub(crate) temp_dir: TempDir,
    pub source_dir: PathBuf,
    pub install_dir: PathBuf,
    pub saved_dir: PathBuf,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        let source_dir = root.join("dist");
        let install_dir = root.join("Apex Legends");
        let saved_dir = root.join("Saved Games").join("Respawn").join("Apex").join("local");
        fs::create_dir_all(&source_dir).expect("Failed to create source dir");
        fs::create_dir_all(&install_dir).expect("Failed to create install dir");
        fs::create_dir_all(&saved_dir).expect("Failed to create saved dir");

        Self {
            temp_dir,
            source_dir,
            install_dir,
            saved_dir,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn add_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.source_dir.join(name);
        fs::write(&path, content).expect("Failed to write source file");
        path
    }

    pub fn installed_autoexec(&self) -> PathBuf {
        self.install_dir.join("cfg").join("autoexec.cfg")
    }

    pub fn installed_videoconfig(&self) -> PathBuf {
        self.saved_dir.join("videoconfig.txt")
    }
}
