use crate::config::{
    CFG_SUBDIR, ENV_GAME_DIR, ENV_SAVED_DIR, ENV_SOURCE_DIR, FileConfig, default_install_dir,
    default_saved_dir, resolve_config_dir,
};
use crate::install::{CopyOutcome, InstallOptions, InstallReport, run_install};
use crate::interactive::InquirePrompter;
use crate::logging;
use anyhow::Result;
use clap::{ArgAction, Parser};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the generated autoexec*.cfg and videoconfig*.txt
    /// (default: the installer's own directory)
    #[arg(short = 's', long = "source-dir", env = ENV_SOURCE_DIR)]
    pub source_dir: Option<PathBuf>,

    /// Game installation directory; autoexec.cfg goes into its cfg/ subdirectory
    #[arg(short = 'i', long = "install-dir", env = ENV_GAME_DIR)]
    pub install_dir: Option<PathBuf>,

    /// Saved-data directory receiving videoconfig.txt
    #[arg(short = 'd', long = "saved-dir", env = ENV_SAVED_DIR)]
    pub saved_dir: Option<PathBuf>,

    /// Overwrite existing files without asking
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Configuration directory (default: platform config dir for cfg-install)
    #[arg(short = 'C', long = "config-dir")]
    pub config_dir: Option<PathBuf>,

    /// Print the default destinations and config file path, then exit
    #[arg(long)]
    pub print_defaults: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    execute(&cli)
}

pub fn execute(cli: &Cli) -> Result<()> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let file_config = FileConfig::load(&config_dir)?;
    let options = build_options(cli, &file_config)?;

    if cli.print_defaults {
        print_defaults(&config_dir, &options);
        return Ok(());
    }

    let mut prompter = InquirePrompter::new();
    let report = run_install(&options, &mut prompter)?;
    print_summary(&report);
    Ok(())
}

/// Merges flags (and their env fallbacks) over the config file.
pub fn build_options(cli: &Cli, file_config: &FileConfig) -> Result<InstallOptions> {
    Ok(InstallOptions {
        source_dir: cli.source_dir.clone(),
        install_dir: cli.install_dir.clone(),
        saved_dir: cli.saved_dir.clone(),
        force: cli.force || file_config.install.force,
        default_source_dir: file_config.source_dir()?,
        default_install_dir: file_config.install_dir()?.or_else(default_install_dir),
        default_saved_dir: file_config.saved_dir()?.or_else(default_saved_dir),
    })
}

fn print_defaults(config_dir: &Path, options: &InstallOptions) {
    let unknown = t!("defaults.unknown").to_string();
    let show = |path: Option<&Path>| path.map_or_else(|| unknown.clone(), |p| p.display().to_string());
    let install_dir = options
        .default_install_dir
        .as_ref()
        .map(|path| path.join(CFG_SUBDIR));

    println!(
        "{}",
        t!(
            "defaults.config_file",
            path = FileConfig::path_in(config_dir).display()
        )
    );
    println!(
        "{}",
        t!(
            "defaults.install_dir",
            path = show(install_dir.as_deref())
        )
    );
    println!(
        "{}",
        t!(
            "defaults.saved_dir",
            path = show(options.default_saved_dir.as_deref())
        )
    );
}

fn print_summary(report: &InstallReport) {
    let describe = |outcome: CopyOutcome| match outcome {
        CopyOutcome::Copied => t!("summary.copied"),
        CopyOutcome::Skipped => t!("summary.skipped"),
    };

    info!(
        "{}",
        t!(
            "summary.autoexec",
            outcome = describe(report.autoexec),
            path = report.paths.install_dir().display()
        )
    );
    info!(
        "{}",
        t!(
            "summary.videoconfig",
            outcome = describe(report.videoconfig),
            path = report.paths.saved_dir().display()
        )
    );
    info!("{}", t!("messages.install_complete"));
}
