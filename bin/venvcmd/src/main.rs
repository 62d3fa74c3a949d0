//! venvcmd - compose or run commands inside a Python virtual environment
//!
//! `venvcmd task` prints the command line a task runner should use;
//! `venvcmd run` executes a command with the venv activated.

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, warn};

use venvcmd::config::{Config, ConfigLoader, ConfigSearch};
use venvcmd::execution::{OutputSink, ShellRunner};
use venvcmd::platform::Platform;
use venvcmd::settings::{JsonFileSettings, MemorySettings, SettingsStore};
use venvcmd::terminal::{resolve, resolve_from_settings};
use venvcmd::venv::{configured_venv, VenvCommandComposer};

#[derive(Debug, Parser)]
#[command(name = "venvcmd", version, about = "Run commands inside a Python virtual environment")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the task string that runs COMMAND with the venv activated
    Task {
        /// Platform to compose for (win32, darwin, linux, ...); defaults to the host
        #[arg(long)]
        platform: Option<Platform>,

        /// Shell the terminal uses; overrides the editor setting
        #[arg(long)]
        shell: Option<String>,

        /// Venv directory name; overrides the editor setting
        #[arg(long)]
        venv: Option<String>,

        /// Editor settings.json to read
        #[arg(long)]
        settings: Option<PathBuf>,

        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Run COMMAND in a directory with the venv activated
    Run {
        /// Venv directory name; defaults to the editor setting
        #[arg(long)]
        venv: Option<String>,

        /// Working directory
        #[arg(long, default_value = ".")]
        cwd: PathBuf,

        /// Editor settings.json to read
        #[arg(long)]
        settings: Option<PathBuf>,

        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// Prints command output as it arrives
struct StdoutSink;

impl OutputSink for StdoutSink {
    fn append_line(&self, line: &str) {
        println!("{}", line);
    }
}

fn init_logging(debug: bool, config: &Config) {
    let log_level = if debug
        || env::var("VENVCMD_DEBUG").map_or(false, |v| v == "1" || v.to_lowercase() == "true")
    {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };

    let env_filter = env::var("RUST_LOG").unwrap_or(log_level);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Load configuration without logging; the subscriber needs its level first
fn load_configuration(path: Option<&Path>) -> Result<ConfigSearch> {
    let search = match path {
        Some(path) => ConfigSearch {
            config: ConfigLoader::load_from_path(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            source: Some(path.to_path_buf()),
            skipped: Vec::new(),
        },
        None => ConfigLoader::new()
            .search()
            .context("loading configuration")?,
    };
    Ok(search)
}

fn report_configuration(search: &ConfigSearch) {
    for (path, e) in &search.skipped {
        warn!("Failed to load config from {}: {}", path.display(), e);
    }
    match &search.source {
        Some(path) => debug!("Loaded configuration from {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }
}

async fn open_settings(
    explicit: Option<PathBuf>,
    config: &Config,
) -> Result<Box<dyn SettingsStore>> {
    match explicit.or_else(|| config.settings_file.clone()) {
        Some(path) => {
            debug!("Reading editor settings from {}", path.display());
            let store = JsonFileSettings::open(&path)
                .await
                .with_context(|| format!("opening settings file {}", path.display()))?;
            Ok(Box::new(store))
        }
        None => Ok(Box::new(MemorySettings::new())),
    }
}

async fn task(
    platform: Platform,
    shell: Option<String>,
    venv: Option<String>,
    store: &dyn SettingsStore,
    command: &str,
) -> Result<String> {
    let dialect = match shell {
        Some(shell) => resolve(platform, Some(&shell)),
        None => resolve_from_settings(store, platform).await?,
    };
    let venv = match venv.filter(|name| !name.is_empty()) {
        Some(venv) => Some(venv),
        None => configured_venv(store).await?,
    };

    Ok(VenvCommandComposer::new(platform).compose(dialect, venv.as_deref(), command))
}

async fn run(
    config: &Config,
    venv: Option<String>,
    cwd: &Path,
    store: &dyn SettingsStore,
    command: &str,
) -> Result<i32> {
    let venv = match venv.filter(|name| !name.is_empty()) {
        Some(venv) => venv,
        None => match configured_venv(store).await? {
            Some(venv) => venv,
            None => bail!("no virtual environment given and none configured"),
        },
    };

    let mut runner = ShellRunner::new();
    if let Some(timeout) = config.execution.timeout() {
        runner = runner.with_timeout(timeout);
    }
    for (key, value) in &config.execution.environment {
        runner.set_env(key.clone(), value.clone());
    }

    let composer = VenvCommandComposer::for_current_platform();
    match composer
        .run_in_venv(&runner, &StdoutSink, &venv, cwd, command)
        .await
    {
        Ok(_) => Ok(0),
        Err(e) => {
            error!("{}", e);
            Ok(e.exit_code().unwrap_or(1))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let search = load_configuration(cli.config.as_deref())?;
    init_logging(cli.debug, &search.config);
    debug!("venvcmd v{}", venvcmd::VERSION);
    report_configuration(&search);
    let config = search.config;

    match cli.command {
        Commands::Task {
            platform,
            shell,
            venv,
            settings,
            command,
        } => {
            let store = open_settings(settings, &config).await?;
            let platform = platform.unwrap_or_else(Platform::current);
            let line = task(platform, shell, venv, store.as_ref(), &command.join(" ")).await?;
            println!("{}", line);
        }
        Commands::Run {
            venv,
            cwd,
            settings,
            command,
        } => {
            let store = open_settings(settings, &config).await?;
            let code = run(&config, venv, &cwd, store.as_ref(), &command.join(" ")).await?;
            if code != 0 {
                process::exit(code);
            }
            info!("Command finished");
        }
    }

    Ok(())
}
