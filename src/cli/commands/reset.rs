use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TableStore;
use crate::ui::messages::{confirm, info, success};

pub fn handle(yes: bool, cfg: &Config) -> AppResult<()> {
    if !confirm(
        "Delete every table file? Lessons, students, requests and events will be lost.",
        yes,
    ) {
        info("Operation cancelled.");
        return Ok(());
    }

    let store = TableStore::new(cfg.layout());
    let removed = store.reset()?;
    success(format!(
        "Removed {removed} table file(s) from {}.",
        store.layout().dir.display()
    ));
    Ok(())
}
