//! Conference entity <-> model mapper

use symposium_core::entities::Conference;
use symposium_core::value_objects::Snowflake;

use crate::models::ConferenceModel;

/// Convert ConferenceModel to Conference entity
impl From<ConferenceModel> for Conference {
    fn from(model: ConferenceModel) -> Self {
        Conference {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            url: model.url,
            latitude: model.latitude,
            longitude: model.longitude,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            cfp_starts_at: model.cfp_starts_at,
            cfp_ends_at: model.cfp_ends_at,
            is_approved: model.is_approved,
            is_shared: model.is_shared,
            author_id: Snowflake::new(model.author_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
