//! Talk and revision entity <-> model mappers

use symposium_core::entities::{Talk, TalkRevision};
use symposium_core::value_objects::Snowflake;

use crate::models::{TalkModel, TalkRevisionModel};

impl From<TalkModel> for Talk {
    fn from(model: TalkModel) -> Self {
        Talk {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            created_at: model.created_at,
        }
    }
}

impl From<TalkRevisionModel> for TalkRevision {
    fn from(model: TalkRevisionModel) -> Self {
        TalkRevision {
            id: Snowflake::new(model.id),
            talk_id: Snowflake::new(model.talk_id),
            title: model.title,
            kind: model.kind,
            length: model.length,
            level: model.level,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
