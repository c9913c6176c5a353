//! Active budget session persistence
//!
//! The active budget and the expenses recorded against its current period
//! live in `session.json`, separate from settings so clearing a budget
//! never touches the long-term history.

use serde::{Deserialize, Serialize};

use crate::config::SpendlogPaths;
use crate::error::SpendlogResult;
use crate::models::{Budget, Expense};

use super::file_io;

/// On-disk state for the active budget period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// The active budget, if one has been set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,

    /// Expenses recorded in the current period, oldest first
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl SessionState {
    /// Load the session from disk, falling back to an empty session on failure
    ///
    /// Same recovery policy as settings: a broken file is logged and
    /// replaced on the next save rather than aborting the program.
    pub fn load_or_default(paths: &SpendlogPaths) -> Self {
        match file_io::read_json(paths.session_file()) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("could not load session, starting fresh: {}", e);
                SessionState::default()
            }
        }
    }

    /// Save the session to disk
    pub fn save(&self, paths: &SpendlogPaths) -> SpendlogResult<()> {
        paths.ensure_directories()?;
        file_io::write_json_atomic(paths.session_file(), self)
    }
}
