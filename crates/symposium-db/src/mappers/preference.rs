//! Preference rows -> per-user preference map

use std::collections::HashMap;

use symposium_core::value_objects::{Preference, Snowflake};

use crate::models::PreferenceModel;

/// Key a user's preference rows by conference
pub fn preference_map(rows: Vec<PreferenceModel>) -> HashMap<Snowflake, Preference> {
    rows.into_iter()
        .map(|row| {
            (
                Snowflake::new(row.conference_id),
                Preference::from_db(&row.preference),
            )
        })
        .filter(|(_, preference)| *preference != Preference::None)
        .collect()
}
