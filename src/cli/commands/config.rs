use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

const REDACTED: &str = "********";

/// Handle the `config` subcommand
///
/// The passphrase is only printed for the coach.
pub fn handle(
    cfg: &Config,
    path: &Path,
    print_config: bool,
    edit_config: bool,
    editor: &Option<String>,
    is_coach: bool,
) -> AppResult<()> {
    // ---- PRINT CONFIG ----
    if print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        if is_coach {
            println!("{}", serde_yaml::to_string(cfg)?);
        } else {
            let shown = Config {
                passphrase: REDACTED.to_string(),
                ..cfg.clone()
            };
            println!("{}", serde_yaml::to_string(&shown)?);
        }
    }

    // ---- EDIT CONFIG ----
    if edit_config {
        if !path.exists() {
            cfg.save_to(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{editor_to_use}'"));
            }
            _ => {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));
                match Command::new(&default_editor).arg(path).status() {
                    Ok(s) if s.success() => {
                        success(format!("Configuration edited with '{default_editor}'"));
                    }
                    _ => {
                        return Err(AppError::Config(format!(
                            "cannot open {} with '{default_editor}'",
                            path.display()
                        )));
                    }
                }
            }
        }

        // Reload to catch syntax errors right away.
        Config::load_from(path)?;
    }

    Ok(())
}
