use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{TableKind, TableStore};
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the data directory
///  - every missing table file, with its header row
pub fn handle(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if !cli.test {
        cfg.save_to(config_path)?;
        println!("📄 Config file : {}", config_path.display());
    }

    let store = TableStore::open(cfg.layout())?;
    println!("🗄️  Data dir    : {}", store.layout().dir.display());
    for kind in TableKind::ALL {
        println!("   - {:<12} {}", kind.label(), store.layout().path(kind).display());
    }

    success("gymbook initialization completed!");
    Ok(())
}
