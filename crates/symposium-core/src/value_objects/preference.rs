//! A user's mark on a conference: favorited, dismissed, or neither

use serde::{Deserialize, Serialize};

/// Per-(user, conference) preference
///
/// A single value per pair, so a conference can never be both favorited and
/// dismissed by the same user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    #[default]
    None,
    Favorite,
    Dismissed,
}

/// Action requested through the favorite/dismiss endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceAction {
    Favorite,
    Dismiss,
}

impl Preference {
    /// Compute the state after `action`
    ///
    /// Repeating the current mark clears it. Applying the opposite action also
    /// clears the mark without setting the new one, so a favorited conference
    /// never ends up dismissed in a single step (or the reverse).
    pub fn apply(self, action: PreferenceAction) -> Self {
        match (self, action) {
            (Self::None, PreferenceAction::Favorite) => Self::Favorite,
            (Self::None, PreferenceAction::Dismiss) => Self::Dismissed,
            (Self::Favorite | Self::Dismissed, _) => Self::None,
        }
    }

    #[inline]
    pub fn is_favorite(self) -> bool {
        self == Self::Favorite
    }

    #[inline]
    pub fn is_dismissed(self) -> bool {
        self == Self::Dismissed
    }

    /// Storage representation; `None` is never stored
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Favorite => Some("favorite"),
            Self::Dismissed => Some("dismissed"),
        }
    }

    /// Parse the storage representation; unknown values read as `None`
    pub fn from_db(value: &str) -> Self {
        match value {
            "favorite" => Self::Favorite,
            "dismissed" => Self::Dismissed,
            _ => Self::None,
        }
    }
}
