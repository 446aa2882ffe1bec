use crate::cli::parser::BackupCmd;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::TableStore;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &BackupCmd, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;

    match cmd {
        BackupCmd::Export { file, force } => {
            let dest = expand_tilde(file);
            if dest.exists()
                && !confirm(
                    &format!("{} already exists. Overwrite it?", dest.display()),
                    *force,
                )
            {
                info("Backup not written.");
                return Ok(());
            }

            let bytes = BackupLogic::export_to_file(&store, &dest)?;
            success(format!("Backup written to {} ({} bytes).", dest.display(), bytes));
        }

        BackupCmd::Import { file, yes } => {
            let src = expand_tilde(file);
            if !confirm(
                &format!(
                    "Restore tables from {}? Current tables will be overwritten.",
                    src.display()
                ),
                *yes,
            ) {
                info("Operation cancelled.");
                return Ok(());
            }

            let restored = BackupLogic::import_from_file(&store, &src)?;
            if restored.is_empty() {
                warning("The archive held no table files.");
            } else {
                for name in &restored {
                    success(format!("Restored {name}"));
                }
            }
        }
    }

    Ok(())
}
