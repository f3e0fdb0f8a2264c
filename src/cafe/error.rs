use crate::model::MenuItemId;
use thiserror::Error;

/// Failures the core can actually raise.
///
/// Unknown menu items and unknown orders are not in here: those come back as
/// [`Option`] or as an [`crate::outcome`] value so callers can't ignore them by
/// accident with `?`.
#[derive(Error, Debug)]
pub enum CafeError {
    #[error("Menu item {0} is already on the menu")]
    DuplicateMenuItem(MenuItemId),

    #[error("Menu item {0} has a price outside the accepted range")]
    InvalidPrice(MenuItemId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CafeError>;
