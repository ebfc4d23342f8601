//! # KeyMaster POS Application Library
//!
//! Wires the store, the state types and the command layer together and
//! runs the terminal loop.
//!
//! ## Module Organization
//! ```text
//! keymaster_pos_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Persistence handle
//! │   ├── cart.rs     ◄─── Cart state
//! │   ├── session.rs  ◄─── Signed-in cashier
//! │   └── config.rs   ◄─── Shop configuration
//! ├── commands/
//! │   ├── auth.rs     ◄─── Login / logout
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── sale.rs     ◄─── Checkout, ledger, receipts
//! │   ├── product.rs  ◄─── Inventory CRUD
//! │   ├── staff.rs    ◄─── Employee CRUD
//! │   ├── report.rs   ◄─── Dashboard aggregation
//! │   └── backup.rs   ◄─── Export / import
//! ├── insight.rs      ◄─── Best-effort advisory collaborator
//! ├── repl.rs         ◄─── Line-oriented terminal surface
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Resolve the data directory (`KEYMASTER_DATA_DIR` override, else the
//!    platform app-data dir)
//! 3. Open the store (loads the three collections, seeds the admin on
//!    first run)
//! 4. Create the state objects and enter the loop

pub mod commands;
pub mod error;
pub mod insight;
pub mod repl;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keymaster_store::DataStore;
use repl::ReplContext;
use state::{CartState, ConfigState, SessionState, StoreState};

/// Runs the application.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting KeyMaster POS");

    let data_dir = resolve_data_dir()?;
    info!(?data_dir, "Data directory resolved");

    let store = DataStore::open(&data_dir)?;

    let ctx = ReplContext {
        store: StoreState::new(store),
        cart: CartState::new(),
        session: SessionState::new(),
        config: ConfigState::from_env(),
    };

    info!("State initialized");

    repl::run(&ctx)?;

    info!("Shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=keymaster=trace` - Trace for keymaster crates only
/// - Default: warnings only, so log lines do not interleave with the
///   cashier screen
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the data directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.keymaster.pos/`
/// - **Windows**: `%APPDATA%\keymaster\pos\`
/// - **Linux**: `~/.local/share/keymaster-pos/`
///
/// ## Development Override
/// Set `KEYMASTER_DATA_DIR` to use a custom path.
fn resolve_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("KEYMASTER_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "keymaster", "pos")
        .ok_or("Could not determine app data directory")?;

    Ok(proj_dirs.data_dir().to_path_buf())
}
