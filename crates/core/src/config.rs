use crate::apply::DEFAULT_MAX_ATTEMPTS;
use crate::offset::TimeOffset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a run needs, fixed before the first file is touched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameOptions {
    pub offset: TimeOffset,
    pub max_attempts: usize,
    pub dry_run: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            offset: TimeOffset::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            dry_run: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("最大試行回数は1以上を指定してください")]
    ZeroAttempts,
}

impl RenameOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_attempts == 0 {
            return Err(OptionsError::ZeroAttempts);
        }
        Ok(())
    }
}
