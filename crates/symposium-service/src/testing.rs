//! In-memory repositories for service unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use symposium_common::auth::JwtService;
use symposium_core::entities::{Conference, Submission, Talk, TalkRevision, User};
use symposium_core::traits::{
    ConferenceRepository, PreferenceRepository, RepoResult, SubmissionRepository, TalkRepository,
    UserRepository,
};
use symposium_core::{DomainError, Preference, PreferenceAction, Snowflake, SnowflakeGenerator};
use symposium_db::PgPool;

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub(crate) struct MemoryStore {
    users: Mutex<Vec<User>>,
    conferences: Mutex<Vec<Conference>>,
    preferences: Mutex<HashMap<(Snowflake, Snowflake), Preference>>,
    talks: Mutex<Vec<Talk>>,
    revisions: Mutex<Vec<TalkRevision>>,
    submissions: Mutex<Vec<Submission>>,
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }
}

impl MemoryStore {
    fn select(&self, keep: impl Fn(&Conference) -> bool) -> Vec<Conference> {
        self.conferences
            .lock()
            .unwrap()
            .iter()
            .filter(|c| keep(c))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ConferenceRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Conference>> {
        Ok(self.select(|c| c.id == id).pop())
    }

    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Conference>> {
        Ok(self.select(|c| ids.contains(&c.id)))
    }

    async fn find_approved(&self) -> RepoResult<Vec<Conference>> {
        Ok(self.select(|c| c.is_approved))
    }

    async fn find_not_shared(&self) -> RepoResult<Vec<Conference>> {
        Ok(self.select(|c| !c.is_shared))
    }

    async fn find_listable(&self, viewer: Option<Snowflake>) -> RepoResult<Vec<Conference>> {
        Ok(self.select(|c| c.is_visible_to(viewer)))
    }

    async fn count_approved(&self) -> RepoResult<i64> {
        Ok(self.select(|c| c.is_approved).len() as i64)
    }

    async fn count_not_shared(&self) -> RepoResult<i64> {
        Ok(self.select(|c| !c.is_shared).len() as i64)
    }

    async fn create(&self, conference: &Conference) -> RepoResult<()> {
        self.conferences.lock().unwrap().push(conference.clone());
        Ok(())
    }

    async fn update(&self, conference: &Conference) -> RepoResult<()> {
        let mut conferences = self.conferences.lock().unwrap();
        let stored = conferences
            .iter_mut()
            .find(|c| c.id == conference.id)
            .ok_or(DomainError::ConferenceNotFound(conference.id))?;
        *stored = conference.clone();
        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for MemoryStore {
    async fn find(&self, user_id: Snowflake, conference_id: Snowflake) -> RepoResult<Preference> {
        Ok(self
            .preferences
            .lock()
            .unwrap()
            .get(&(user_id, conference_id))
            .copied()
            .unwrap_or_default())
    }

    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<HashMap<Snowflake, Preference>> {
        Ok(self
            .preferences
            .lock()
            .unwrap()
            .iter()
            .filter(|((user, _), _)| *user == user_id)
            .map(|((_, conference), preference)| (*conference, *preference))
            .collect())
    }

    async fn find_conference_ids(
        &self,
        user_id: Snowflake,
        preference: Preference,
    ) -> RepoResult<Vec<Snowflake>> {
        Ok(self
            .find_by_user(user_id)
            .await?
            .into_iter()
            .filter(|(_, p)| *p == preference)
            .map(|(id, _)| id)
            .collect())
    }

    async fn apply(
        &self,
        user_id: Snowflake,
        conference_id: Snowflake,
        action: PreferenceAction,
    ) -> RepoResult<Preference> {
        let mut preferences = self.preferences.lock().unwrap();
        let key = (user_id, conference_id);
        let next = preferences.get(&key).copied().unwrap_or_default().apply(action);
        if next == Preference::None {
            preferences.remove(&key);
        } else {
            preferences.insert(key, next);
        }
        Ok(next)
    }
}

#[async_trait]
impl TalkRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Talk>> {
        Ok(self.talks.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn current_revision(&self, talk_id: Snowflake) -> RepoResult<Option<TalkRevision>> {
        Ok(self
            .revisions
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.talk_id == talk_id)
            .cloned())
    }

    async fn create(&self, talk: &Talk) -> RepoResult<()> {
        self.talks.lock().unwrap().push(talk.clone());
        Ok(())
    }

    async fn add_revision(&self, revision: &TalkRevision) -> RepoResult<()> {
        self.revisions.lock().unwrap().push(revision.clone());
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for MemoryStore {
    async fn create(&self, submission: &Submission) -> RepoResult<()> {
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn find_by_conference(&self, conference_id: Snowflake) -> RepoResult<Vec<Submission>> {
        Ok(self
            .submissions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.conference_id == conference_id)
            .cloned()
            .collect())
    }
}

/// A service context over a [`MemoryStore`], with seeding helpers
///
/// Must be created inside a Tokio runtime: the lazy pool is never used but
/// still spawns its maintenance task.
pub(crate) struct TestContext {
    pub ctx: ServiceContext,
    store: Arc<MemoryStore>,
    ids: Arc<SnowflakeGenerator>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let ids = Arc::new(SnowflakeGenerator::new(7));
        let pool = PgPool::connect_lazy("postgres://localhost/symposium_unused")
            .expect("lazy pool");

        let ctx = ServiceContextBuilder::new()
            .pool(pool)
            .user_repo(store.clone())
            .conference_repo(store.clone())
            .preference_repo(store.clone())
            .talk_repo(store.clone())
            .submission_repo(store.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .snowflake_generator(ids.clone())
            .build()
            .expect("complete context");

        Self { ctx, store, ids }
    }

    pub fn user(&self) -> Snowflake {
        let id = self.ids.generate();
        self.store
            .users
            .lock()
            .unwrap()
            .push(User::new(id, format!("User {id}"), format!("{id}@example.com")));
        id
    }

    pub fn conference(&self, author_id: Snowflake, title: &str, approved: bool) -> Snowflake {
        let mut conference = Conference::new(
            self.ids.generate(),
            author_id,
            title.to_string(),
            format!("All about {title}"),
            "https://conf.example".to_string(),
        );
        conference.is_approved = approved;
        let id = conference.id;
        self.store.conferences.lock().unwrap().push(conference);
        id
    }

    pub fn edit(&self, conference_id: Snowflake, change: impl FnOnce(&mut Conference)) {
        let mut conferences = self.store.conferences.lock().unwrap();
        if let Some(conference) = conferences.iter_mut().find(|c| c.id == conference_id) {
            change(conference);
        }
    }

    pub fn conferences(&self) -> Vec<Conference> {
        self.store.conferences.lock().unwrap().clone()
    }

    /// A talk with one revision per title, oldest first
    pub fn talk(&self, author_id: Snowflake, revisions: &[&str]) -> Snowflake {
        let talk = Talk::new(self.ids.generate(), author_id);
        let id = talk.id;
        self.store.talks.lock().unwrap().push(talk);
        for title in revisions {
            self.store.revisions.lock().unwrap().push(TalkRevision::new(
                self.ids.generate(),
                id,
                (*title).to_string(),
                "Abstract".to_string(),
            ));
        }
        id
    }

    pub fn current_revision(&self, talk_id: Snowflake) -> Snowflake {
        self.store
            .revisions
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.talk_id == talk_id)
            .map(|r| r.id)
            .expect("talk has a revision")
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.store.submissions.lock().unwrap().clone()
    }
}
