use crate::error::{InstallerError, Result};
use crate::interactive::Prompter;
use glob::{MatchOptions, Pattern};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Autoexec,
    Videoconfig,
}

impl ConfigKind {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Autoexec => "autoexec*.cfg",
            Self::Videoconfig => "videoconfig*.txt",
        }
    }

    /// File name the candidate is installed as.
    pub fn installed_name(self) -> &'static str {
        match self {
            Self::Autoexec => "autoexec.cfg",
            Self::Videoconfig => "videoconfig.txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Autoexec => "autoexec",
            Self::Videoconfig => "videoconfig",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileCandidate {
    pub path: PathBuf,
    pub name: String,
    pub kind: ConfigKind,
}

/// Lists regular files directly inside `dir` whose names match the kind's
/// pattern, ignoring case, sorted by name.
pub fn find_candidates(dir: &Path, kind: ConfigKind) -> Result<Vec<ConfigFileCandidate>> {
    let pattern = Pattern::new(kind.pattern())?;

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(name) => name.to_string(),
            None => {
                let lossy = file_name.to_string_lossy().into_owned();
                debug!("Matching non-UTF-8 file name as {lossy}");
                lossy
            }
        };
        if pattern.matches_with(&name, MATCH_OPTIONS) {
            candidates.push(ConfigFileCandidate { path, name, kind });
        }
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(candidates)
}

/// Picks the single candidate for `kind`, asking the operator when several match.
pub fn select_candidate(
    dir: &Path,
    kind: ConfigKind,
    prompter: &mut dyn Prompter,
) -> Result<ConfigFileCandidate> {
    let mut candidates = find_candidates(dir, kind)?;

    match candidates.len() {
        0 => Err(InstallerError::NotFound {
            pattern: kind.pattern().to_string(),
            dir: dir.display().to_string(),
        }),
        1 => {
            let candidate = candidates.remove(0);
            info!(
                "{}",
                t!("select.auto_selected", kind = kind.label(), name = &candidate.name)
            );
            Ok(candidate)
        }
        count => {
            println!(
                "{}",
                t!("select.multiple_found", count = count, pattern = kind.pattern())
            );
            for (index, candidate) in candidates.iter().enumerate() {
                println!("  {}) {}", index + 1, candidate.name);
            }

            let message = t!("select.prompt", kind = kind.label(), max = count);
            loop {
                let input = prompter.text(&message, None)?;
                match parse_selection(&input, count) {
                    Ok(index) => {
                        let candidate = candidates.swap_remove(index);
                        info!(
                            "{}",
                            t!("select.selected", kind = kind.label(), name = &candidate.name)
                        );
                        return Ok(candidate);
                    }
                    Err(err) => warn!("{}", err.display_localized()),
                }
            }
        }
    }
}

/// Parses a 1-based selection, returning the 0-based index.
pub fn parse_selection(input: &str, max: usize) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice - 1),
        _ => Err(InstallerError::InvalidSelection {
            input: trimmed.to_string(),
            max,
        }),
    }
}
