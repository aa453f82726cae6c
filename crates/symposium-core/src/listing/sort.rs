//! Conference list ordering

use chrono::{DateTime, Utc};

use crate::entities::Conference;

/// Sort order of a conference list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConferenceSort {
    /// Soonest CFP deadline first; conferences without a CFP go last
    #[default]
    CfpClosingNext,
    /// Earliest event first; conferences without a start date go last
    Date,
}

impl ConferenceSort {
    /// Parse the `sort` query parameter; unknown values use the default
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("date") => Self::Date,
            _ => Self::CfpClosingNext,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CfpClosingNext => "cfp_closing_next",
            Self::Date => "date",
        }
    }

    fn key(self, conference: &Conference) -> Option<DateTime<Utc>> {
        match self {
            Self::CfpClosingNext => conference.cfp_ends_at,
            Self::Date => conference.starts_at,
        }
    }
}

/// Order conferences by `sort`, keeping input order among equal keys
pub fn sort_conferences(mut conferences: Vec<Conference>, sort: ConferenceSort) -> Vec<Conference> {
    // `None` sorts after every date; `sort_by_key` is stable
    conferences.sort_by_key(|conf| match sort.key(conf) {
        Some(at) => (false, Some(at)),
        None => (true, None),
    });
    conferences
}
