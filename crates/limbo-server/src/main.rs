//! Limbo server entry point.
//!
//! Loads `settings.yml` from the server root, seeding it from the bundled
//! template on first run, and reports the resolved configuration.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ logging::init()          -- subscriber at `info` or RUST_LOG
//!  └─ ConfigLoader::load()
//!       ├─ ResourceBootstrapper  (seed settings.yml if absent)
//!       ├─ serde_yaml parse
//!       └─ extract_config        (required / conditional / tuning fields)
//!  └─ LogHandle::apply_debug_level(debugLevel)
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use limbo_server::infrastructure::logging;
use limbo_server::{ConfigLoader, LimboConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Lightweight limbo server.
#[derive(Debug, Parser)]
#[command(
    name = "limbo-server",
    about = "Lightweight limbo server: loads and validates settings.yml",
    version
)]
struct Cli {
    /// Directory holding `settings.yml`.
    ///
    /// Created, along with a default `settings.yml`, if it does not exist.
    #[arg(long, default_value = ".", env = "LIMBO_ROOT")]
    root: PathBuf,

    /// Print the resolved configuration as YAML and exit.
    #[arg(long)]
    print: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let log = logging::init();
    let cli = Cli::parse();

    let loader = ConfigLoader::new(&cli.root);
    let config = loader
        .load()
        .with_context(|| format!("failed to load {}", loader.settings_path().display()))?;

    log.apply_debug_level(config.debug_level());

    if cli.print {
        let yaml = serde_yaml::to_string(&config).context("failed to render configuration")?;
        print!("{yaml}");
        return Ok(());
    }

    log_summary(&config);
    Ok(())
}

fn log_summary(config: &LimboConfig) {
    info!(
        "limbo ready: bind={}, maxPlayers={}, dimension={}, forwarding={}",
        config.address(),
        config.max_players(),
        config.dimension_type(),
        config.info_forwarding().mode()
    );
    info!(
        "joinMessage={}, bossBar={}, readTimeout={}ms, epoll={}, threads={}/{}",
        config.uses_join_message(),
        config.uses_boss_bar(),
        config.read_timeout_millis(),
        config.use_epoll(),
        config.boss_group_size(),
        config.worker_group_size()
    );
}
