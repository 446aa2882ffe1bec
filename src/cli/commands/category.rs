use crate::cli::parser::CategoryCmd;
use crate::config::Config;
use crate::core::categories::{self, CategoryLogic, PLACEHOLDER};
use crate::core::color::color_for;
use crate::errors::AppResult;
use crate::models::Category;
use crate::store::TableStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::paint_hex;
use crate::utils::table::Table;

pub fn handle(cmd: &CategoryCmd, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;

    match cmd {
        CategoryCmd::List => {
            let tables = store.load_all();
            let vocabulary =
                categories::resolve(&tables.categories, &tables.lessons, &tables.students);

            if vocabulary == [PLACEHOLDER] {
                info(format!("{PLACEHOLDER}: add a category with `category add`."));
                return Ok(());
            }

            let mut table = Table::new(["Category", "Color", "In table"]);
            for label in &vocabulary {
                let color = color_for(label);
                let listed = tables.categories.iter().any(|c| &c.label == label);
                table.add_row(vec![
                    paint_hex(label, color),
                    color.to_string(),
                    if listed { "yes" } else { "no" }.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        CategoryCmd::Add { label } => {
            if CategoryLogic::add(&store, label)? {
                success(format!("Added category '{}'.", label.trim()));
            } else {
                info(format!("Category '{}' already exists.", label.trim()));
            }
        }

        CategoryCmd::Del { label } => {
            if CategoryLogic::delete(&store, label)? {
                success(format!("Removed category '{label}'."));
                let remaining: Vec<Category> = store.load();
                if remaining.iter().all(|c| c.label.is_empty()) {
                    warning("The category table is empty; the default categories will be used.");
                }
            } else {
                info(format!("Category '{label}' is not in the category table."));
            }
        }
    }

    Ok(())
}
