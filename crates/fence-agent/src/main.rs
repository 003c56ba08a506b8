//! Cursor Fence agent entry point.
//!
//! Confines the mouse pointer to one screen until Ctrl-C.
//!
//! # Usage
//!
//! ```text
//! fence-agent [OPTIONS] <COMMAND>
//!
//! Commands:
//!   screens       List attached screens
//!   run           Confine the pointer until Ctrl-C
//!   init-config   Write a default config file
//!
//! Options:
//!   --config <PATH>      Config file [env: FENCE_CONFIG]
//!   --log-level <LEVEL>  Log level override [env: FENCE_LOG_LEVEL]
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load config, init tracing
//!  └─ run
//!       ├─ select_target()            -- resolve the screen choice
//!       ├─ ContainmentController      -- clip + WH_MOUSE_LL hook (main thread)
//!       ├─ shutdown thread            -- waits for Ctrl-C, posts WM_QUIT
//!       └─ run_message_loop()         -- services the hook until WM_QUIT
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fence_agent::application::select_screen::ScreenSelector;
use fence_agent::infrastructure::storage::config::{self, AgentConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Cursor Fence: keep the mouse pointer on one screen.
#[derive(Debug, Parser)]
#[command(name = "fence-agent", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long, env = "FENCE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level override: error, warn, info, debug, trace.
    #[arg(long, env = "FENCE_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List attached screens in selection order.
    Screens,
    /// Confine the pointer to a screen until Ctrl-C.
    Run {
        /// `primary`, a zero-based screen index, or a device name.
        #[arg(long, env = "FENCE_SCREEN")]
        screen: Option<ScreenSelector>,
    },
    /// Write a default config file (does not overwrite an existing one).
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => config::load_config().context("loading config")?,
    };

    // Initialise structured logging.  `RUST_LOG` wins over CLI and config.
    let level = cli.log_level.clone().unwrap_or_else(|| cfg.agent.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .init();

    match cli.command {
        Command::Screens => list_screens(),
        Command::Run { screen } => {
            let selector = screen.unwrap_or_else(|| cfg.containment.selector());
            run(&selector)
        }
        Command::InitConfig => init_config(cli.config.as_deref()),
    }
}

fn init_config(path: Option<&Path>) -> anyhow::Result<()> {
    let existing = match path {
        Some(path) => path.to_path_buf(),
        None => config::config_file_path().context("locating config file")?,
    };
    if existing.exists() {
        info!("config already exists at {}", existing.display());
        return Ok(());
    }

    let defaults = AgentConfig::default();
    let written = match path {
        Some(path) => {
            config::save_config_to(path, &defaults)
                .with_context(|| format!("writing {}", path.display()))?;
            path.to_path_buf()
        }
        None => config::save_config(&defaults).context("writing config")?,
    };
    info!("wrote default config to {}", written.display());
    Ok(())
}

#[cfg(target_os = "windows")]
fn list_screens() -> anyhow::Result<()> {
    use fence_agent::application::select_screen::ScreenEnumerator;
    use fence_agent::infrastructure::screen_info::NativeScreenEnumerator;

    let screens = NativeScreenEnumerator::new()
        .enumerate_screens()
        .context("enumerating screens")?;
    for (index, screen) in screens.iter().enumerate() {
        let b = screen.bounds;
        println!(
            "{index}: {} {}x{} at ({}, {}){}",
            screen.device_name,
            b.width,
            b.height,
            b.x,
            b.y,
            if screen.is_primary { " [primary]" } else { "" }
        );
    }
    Ok(())
}

#[cfg(target_os = "windows")]
fn run(selector: &ScreenSelector) -> anyhow::Result<()> {
    use fence_agent::application::contain_cursor::{ContainmentController, EndOutcome};
    use fence_agent::application::select_screen::select_target;
    use fence_agent::infrastructure::cursor_control::windows::{run_message_loop, QuitHandle};
    use fence_agent::infrastructure::cursor_control::NativeCursorPlatform;
    use fence_agent::infrastructure::screen_info::NativeScreenEnumerator;
    use tracing::{error, warn};

    let region = select_target(&NativeScreenEnumerator::new(), selector)
        .with_context(|| format!("selecting screen {selector}"))?;

    let mut controller = ContainmentController::new(NativeCursorPlatform::new());
    controller
        .start(region)
        .context("starting pointer containment")?;

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    // The hook is serviced by this thread's message loop, so the signal is
    // awaited elsewhere and turned into WM_QUIT.
    let quit = QuitHandle::current_thread();
    let spawned = std::thread::Builder::new()
        .name("fence-shutdown".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    error!("failed to build shutdown runtime: {e}");
                    return;
                }
            };
            runtime.block_on(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("shutdown signal received");
                }
            });
            if let Err(e) = quit.post() {
                error!("failed to stop message loop: {e}");
            }
        });
    if let Err(e) = spawned {
        controller.end();
        return Err(e).context("spawning shutdown thread");
    }

    info!("Cursor Fence running.  Press Ctrl-C to exit.");
    run_message_loop();

    if let EndOutcome::RemovalFailed(e) = controller.end() {
        warn!("pointer hook was not removed cleanly: {e}");
    }
    info!("Cursor Fence stopped");
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn list_screens() -> anyhow::Result<()> {
    anyhow::bail!("screen enumeration is only supported on Windows")
}

#[cfg(not(target_os = "windows"))]
fn run(selector: &ScreenSelector) -> anyhow::Result<()> {
    anyhow::bail!("pointer containment on screen {selector} is only supported on Windows")
}
