use crate::calendar::holidays::{Holiday, default_holidays};
use crate::errors::{AppError, AppResult};
use crate::store::StorageLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Storage file names, one per table, relative to `data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableFiles {
    #[serde(default = "default_lessons_file")]
    pub lessons: String,
    #[serde(default = "default_requests_file")]
    pub requests: String,
    #[serde(default = "default_students_file")]
    pub students: String,
    #[serde(default = "default_categories_file")]
    pub categories: String,
    #[serde(default = "default_coach_events_file")]
    pub coach_events: String,
}

fn default_lessons_file() -> String {
    "gym_lessons.csv".to_string()
}
fn default_requests_file() -> String {
    "gym_requests.csv".to_string()
}
fn default_students_file() -> String {
    "gym_students.csv".to_string()
}
fn default_categories_file() -> String {
    "gym_categories.csv".to_string()
}
fn default_coach_events_file() -> String {
    "gym_coach_events.csv".to_string()
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            lessons: default_lessons_file(),
            requests: default_requests_file(),
            students: default_students_file(),
            categories: default_categories_file(),
            coach_events: default_coach_events_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_passphrase")]
    pub passphrase: String,
    #[serde(default)]
    pub files: TableFiles,
    #[serde(default = "default_holidays")]
    pub holidays: Vec<Holiday>,
}

fn default_passphrase() -> String {
    "1234".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            passphrase: default_passphrase(),
            files: TableFiles::default(),
            holidays: default_holidays(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.gymbook`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gymbook")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gymbook.conf")
    }

    /// Default location of the CSV tables
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Resolve one storage path per table.
    pub fn layout(&self) -> StorageLayout {
        let dir = crate::utils::path::expand_tilde(&self.data_dir);
        StorageLayout {
            lessons: dir.join(&self.files.lessons),
            requests: dir.join(&self.files.requests),
            students: dir.join(&self.files.students),
            categories: dir.join(&self.files.categories),
            coach_events: dir.join(&self.files.coach_events),
            dir,
        }
    }
}
