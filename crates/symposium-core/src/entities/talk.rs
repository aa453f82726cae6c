//! Talk entity and its revisions

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A talk owned by a speaker; its content lives in revisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Talk {
    pub fn new(id: Snowflake, author_id: Snowflake) -> Self {
        Self {
            id,
            author_id,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

/// One saved version of a talk's abstract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkRevision {
    pub id: Snowflake,
    pub talk_id: Snowflake,
    pub title: String,
    /// Format, e.g. "seminar" or "lightning"
    pub kind: String,
    /// Length in minutes
    pub length: i32,
    pub level: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl TalkRevision {
    pub fn new(id: Snowflake, talk_id: Snowflake, title: String, description: String) -> Self {
        Self {
            id,
            talk_id,
            title,
            kind: "seminar".to_string(),
            length: 40,
            level: "intermediate".to_string(),
            description,
            created_at: Utc::now(),
        }
    }

    /// The most recently created revision of a set
    pub fn current<'a, I>(revisions: I) -> Option<&'a TalkRevision>
    where
        I: IntoIterator<Item = &'a TalkRevision>,
    {
        revisions
            .into_iter()
            .max_by_key(|revision| (revision.created_at, revision.id))
    }
}
