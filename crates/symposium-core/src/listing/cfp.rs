//! Call-for-papers window check

use chrono::{DateTime, Utc};

use crate::entities::Conference;

/// Whether `now` falls inside the conference's call for papers
///
/// Both bounds are inclusive. A conference that has not announced both ends
/// of its CFP is not accepting proposals.
pub fn is_accepting_proposals(conference: &Conference, now: DateTime<Utc>) -> bool {
    match (conference.cfp_starts_at, conference.cfp_ends_at) {
        (Some(starts), Some(ends)) => starts <= now && now <= ends,
        _ => false,
    }
}
