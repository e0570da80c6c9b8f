use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const EXPENSES_FILE: &str = "expenses.txt";
pub(crate) const BUDGET_FILE: &str = "budget.txt";

/// Environment variable that overrides where the logs are kept.
pub(crate) const DATA_DIR_VAR: &str = "EXPENSE_TRACKER_DIR";

/// Locations of the two logs.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) expenses_path: PathBuf,
    pub(crate) budget_path: PathBuf,
}

impl Config {
    pub(crate) fn in_dir(dir: &Path) -> Self {
        Self {
            expenses_path: dir.join(EXPENSES_FILE),
            budget_path: dir.join(BUDGET_FILE),
        }
    }

    /// Use `$EXPENSE_TRACKER_DIR` if set, otherwise the platform data
    /// directory.
    pub(crate) fn from_env() -> Result<Self> {
        let dir = match std::env::var_os(DATA_DIR_VAR).filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self::in_dir(&dir))
    }

    /// Create both logs if they are missing.
    pub(crate) fn ensure_logs(&self) -> Result<()> {
        crate::store::ensure_exists(&self.expenses_path)?;
        crate::store::ensure_exists(&self.budget_path)?;
        Ok(())
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expense-ledger", "ExpenseLedger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
