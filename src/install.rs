use crate::config::CFG_SUBDIR;
use crate::discovery::{ConfigFileCandidate, ConfigKind, select_candidate};
use crate::error::{InstallerError, Result};
use crate::interactive::Prompter;
use crate::lock;
use crate::path_utils::{absolutize, create_validated_pathbuf, safe_parent_for_creation};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs for one run. `None` paths are resolved interactively (or, for the
/// source directory, default to the executable's directory).
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub source_dir: Option<PathBuf>,
    pub install_dir: Option<PathBuf>,
    pub saved_dir: Option<PathBuf>,
    /// Overwrite existing destinations without asking.
    pub force: bool,
    pub default_source_dir: Option<PathBuf>,
    pub default_install_dir: Option<PathBuf>,
    pub default_saved_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    source_dir: PathBuf,
    install_dir: PathBuf,
    saved_dir: PathBuf,
}

impl ResolvedPaths {
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Game install directory with the `cfg` subdirectory appended.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn saved_dir(&self) -> &Path {
        &self.saved_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub candidate: ConfigFileCandidate,
    pub destination: PathBuf,
}

impl InstallTarget {
    /// Targets `<dir>/<installed name>` for the candidate's kind.
    pub fn into_dir(candidate: ConfigFileCandidate, dir: &Path) -> Self {
        let destination = dir.join(candidate.kind.installed_name());
        Self {
            candidate,
            destination,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The operator declined to overwrite an existing file.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub paths: ResolvedPaths,
    pub autoexec: CopyOutcome,
    pub videoconfig: CopyOutcome,
}

pub struct DestinationRequest<'a> {
    pub explicit: Option<&'a Path>,
    pub prompt: &'a str,
    pub default: Option<&'a Path>,
    pub create_if_missing: bool,
    pub subdir: Option<&'a str>,
}

/// Resolves a destination directory to an absolute, existing path.
///
/// Explicit paths must already exist. Prompted paths are created when
/// `create_if_missing` is set, otherwise the operator is asked again. The
/// subdirectory is always created.
pub fn resolve_destination(
    request: &DestinationRequest<'_>,
    prompter: &mut dyn Prompter,
) -> Result<PathBuf> {
    let base = match request.explicit {
        Some(path) => require_existing(path)?,
        None => prompt_for_directory(request, prompter)?,
    };

    let Some(subdir) = request.subdir else {
        return Ok(base);
    };
    let resolved = base.join(subdir);
    if !resolved.is_dir() {
        fs::create_dir_all(&resolved)?;
        info!("{}", t!("install.dir_created", path = resolved.display()));
    }
    Ok(resolved)
}

fn require_existing(path: &Path) -> Result<PathBuf> {
    let absolute = absolutize(path)?;
    if absolute.exists() {
        Ok(absolute)
    } else {
        Err(InstallerError::PathNotFound {
            path: absolute.display().to_string(),
        })
    }
}

fn prompt_for_directory(
    request: &DestinationRequest<'_>,
    prompter: &mut dyn Prompter,
) -> Result<PathBuf> {
    let default = request.default.map(|path| path.display().to_string());

    loop {
        let input = prompter.text(request.prompt, default.as_deref())?;
        let raw = match (input.trim().is_empty(), default.as_deref()) {
            (false, _) => input.as_str(),
            (true, Some(default)) => default,
            (true, None) => {
                warn!("{}", t!("install.path_required"));
                continue;
            }
        };

        let path = match create_validated_pathbuf(raw) {
            Ok(path) => absolutize(&path)?,
            Err(err) => {
                warn!("{}", err);
                continue;
            }
        };

        if path.is_dir() {
            return Ok(path);
        }
        if path.exists() {
            warn!("{}", t!("install.not_a_directory", path = path.display()));
            continue;
        }
        if request.create_if_missing {
            fs::create_dir_all(&path)?;
            info!("{}", t!("install.dir_created", path = path.display()));
            return Ok(path);
        }
        warn!("{}", t!("install.dir_missing", path = path.display()));
    }
}

/// Copies the candidate over its destination and marks the result read-only.
///
/// An existing destination is unlocked first. Without `force` the operator is
/// asked before overwriting; declining leaves the file as it was, lock included.
pub fn copy_and_lock(
    target: InstallTarget,
    force: bool,
    prompter: &mut dyn Prompter,
) -> Result<CopyOutcome> {
    let InstallTarget {
        candidate,
        destination,
    } = target;

    if let Some(parent) = safe_parent_for_creation(&destination) {
        fs::create_dir_all(parent)?;
    }

    if is_same_file(&candidate.path, &destination) {
        lock::set_read_only(&destination, true)?;
        info!("{}", t!("install.already_in_place", path = destination.display()));
        return Ok(CopyOutcome::Copied);
    }

    if destination.exists() {
        let was_locked = lock::is_read_only(&destination)?;
        if was_locked {
            lock::set_read_only(&destination, false)?;
            debug!("Cleared read-only on {}", destination.display());
        }

        let decision = if force {
            Ok(true)
        } else {
            prompter.confirm(
                &t!("install.confirm_overwrite", path = destination.display()),
                false,
            )
        };

        match decision {
            Ok(true) => {}
            Ok(false) => {
                if was_locked {
                    lock::set_read_only(&destination, true)?;
                }
                warn!("{}", t!("install.skipped", path = destination.display()));
                return Ok(CopyOutcome::Skipped);
            }
            Err(err) => {
                if was_locked {
                    lock::set_read_only(&destination, true)?;
                }
                return Err(err);
            }
        }
    }

    fs::copy(&candidate.path, &destination)?;
    lock::set_read_only(&destination, true)?;
    info!(
        "{}",
        t!(
            "install.copied",
            source = candidate.path.display(),
            destination = destination.display()
        )
    );
    Ok(CopyOutcome::Copied)
}

/// Explicit source directories must exist. A configured default that has gone
/// missing is reported and replaced by the executable's directory.
fn resolve_source_dir(options: &InstallOptions) -> Result<PathBuf> {
    if let Some(path) = options.source_dir.as_deref() {
        return require_existing(path);
    }
    if let Some(path) = options.default_source_dir.as_deref() {
        match require_existing(path) {
            Ok(path) => return Ok(path),
            Err(InstallerError::PathNotFound { path }) => {
                warn!("{}", t!("install.configured_source_missing", path = path));
            }
            Err(err) => return Err(err),
        }
    }
    crate::config::default_source_dir()
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Runs the whole installation: select both files, resolve both
/// destinations, then copy and lock each one.
pub fn run_install(options: &InstallOptions, prompter: &mut dyn Prompter) -> Result<InstallReport> {
    let source_dir = resolve_source_dir(options)?;
    info!("{}", t!("install.source_dir", path = source_dir.display()));

    let autoexec = select_candidate(&source_dir, ConfigKind::Autoexec, prompter)?;
    let videoconfig = select_candidate(&source_dir, ConfigKind::Videoconfig, prompter)?;

    let install_prompt = t!("install.prompt_install_dir");
    let install_dir = resolve_destination(
        &DestinationRequest {
            explicit: options.install_dir.as_deref(),
            prompt: &install_prompt,
            default: options.default_install_dir.as_deref(),
            create_if_missing: false,
            subdir: Some(CFG_SUBDIR),
        },
        prompter,
    )?;

    let saved_prompt = t!("install.prompt_saved_dir");
    let saved_dir = resolve_destination(
        &DestinationRequest {
            explicit: options.saved_dir.as_deref(),
            prompt: &saved_prompt,
            default: options.default_saved_dir.as_deref(),
            create_if_missing: true,
            subdir: None,
        },
        prompter,
    )?;

    let autoexec = copy_and_lock(
        InstallTarget::into_dir(autoexec, &install_dir),
        options.force,
        prompter,
    )?;
    let videoconfig = copy_and_lock(
        InstallTarget::into_dir(videoconfig, &saved_dir),
        options.force,
        prompter,
    )?;

    Ok(InstallReport {
        paths: ResolvedPaths {
            source_dir,
            install_dir,
            saved_dir,
        },
        autoexec,
        videoconfig,
    })
}
