use crate::error::{InstallerError, Result};
use crate::interactive::Prompter;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard};

pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}

/// Holds the env lock and restores every variable it touched on drop.
#[must_use]
pub struct TestProcess {
    _lock: MutexGuard<'static, ()>,
    original_vars: HashMap<OsString, Option<OsString>>,
}

impl TestProcess {
    pub fn new() -> Self {
        Self {
            _lock: lock_env(),
            original_vars: HashMap::new(),
        }
    }

    pub fn set_var(&mut self, key: impl Into<OsString>, value: impl AsRef<OsStr>) {
        let key = key.into();
        self.remember_var(&key);
        unsafe {
            env::set_var(&key, value);
        }
    }

    pub fn remove_var(&mut self, key: impl Into<OsString>) {
        let key = key.into();
        self.remember_var(&key);
        unsafe {
            env::remove_var(&key);
        }
    }

    fn remember_var(&mut self, key: &OsStr) {
        self.original_vars
            .entry(key.to_os_string())
            .or_insert_with(|| env::var_os(key));
    }
}

impl Drop for TestProcess {
    fn drop(&mut self) {
        for (key, previous) in self.original_vars.drain() {
            match previous {
                Some(value) => unsafe { env::set_var(&key, value) },
                None => unsafe { env::remove_var(&key) },
            }
        }
    }
}

/// Prompter fed from queued answers. Running out of answers fails like a
/// closed terminal so a re-prompt loop cannot spin forever.
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
