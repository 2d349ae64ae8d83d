//! Code style preferences consumed by the search results view

use serde::{Deserialize, Serialize};

/// Default tab width in columns
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Tab settings of the active code style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSettings {
    pub tab_size: usize,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

/// Source of the currently active tab settings
pub trait CodeStyle {
    fn current_tab_settings(&self) -> TabSettings;
}

impl CodeStyle for TabSettings {
    fn current_tab_settings(&self) -> TabSettings {
        *self
    }
}
