//! Conference list filters

use std::collections::HashMap;

use crate::entities::Conference;
use crate::value_objects::{Preference, Snowflake};

/// Which conferences a list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConferenceFilter {
    /// Approved conferences the viewer has not dismissed
    #[default]
    Approved,
    /// Like `Approved`, plus the viewer's own conferences awaiting approval
    All,
    /// Conferences the viewer dismissed
    Dismissed,
    /// Conferences the viewer favorited
    Favorites,
}

impl ConferenceFilter {
    /// Parse the `filter` query parameter; unknown values use the default
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("all") => Self::All,
            Some("dismissed") => Self::Dismissed,
            Some("favorites") => Self::Favorites,
            _ => Self::Approved,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::All => "all",
            Self::Dismissed => "dismissed",
            Self::Favorites => "favorites",
        }
    }

    /// Whether the filter only makes sense for a signed-in viewer
    pub fn is_personal(self) -> bool {
        matches!(self, Self::Dismissed | Self::Favorites)
    }
}

/// The signed-in user looking at a list, with their marks
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    pub user_id: Snowflake,
    pub preferences: HashMap<Snowflake, Preference>,
}

impl Viewer {
    pub fn new(user_id: Snowflake, preferences: HashMap<Snowflake, Preference>) -> Self {
        Self {
            user_id,
            preferences,
        }
    }

    pub fn preference(&self, conference_id: Snowflake) -> Preference {
        self.preferences
            .get(&conference_id)
            .copied()
            .unwrap_or_default()
    }
}

/// Keep the conferences `filter` selects for `viewer`, in input order
pub fn filter_conferences(
    conferences: Vec<Conference>,
    filter: ConferenceFilter,
    viewer: Option<&Viewer>,
) -> Vec<Conference> {
    let preference = |conf: &Conference| viewer.map_or(Preference::None, |v| v.preference(conf.id));

    match filter {
        ConferenceFilter::Approved => conferences
            .into_iter()
            .filter(|conf| conf.is_approved && !preference(conf).is_dismissed())
            .collect(),
        ConferenceFilter::All => {
            let viewer_id = viewer.map(|v| v.user_id);
            conferences
                .into_iter()
                .filter(|conf| conf.is_visible_to(viewer_id) && !preference(conf).is_dismissed())
                .collect()
        }
        ConferenceFilter::Dismissed => conferences
            .into_iter()
            .filter(|conf| preference(conf).is_dismissed())
            .collect(),
        ConferenceFilter::Favorites => conferences
            .into_iter()
            .filter(|conf| preference(conf).is_favorite())
            .collect(),
    }
}
