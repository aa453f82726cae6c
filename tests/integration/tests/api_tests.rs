//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations are applied on startup)
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, TimeZone, Utc};
use integration_tests::{
    assert_json, assert_login_redirect, assert_status, check_test_env, fixtures::*,
    SeedConference, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;
use symposium_core::Snowflake;

async fn fetch_conference(server: &TestServer, id: Snowflake) -> ConferenceBody {
    let response = server.get(&format!("/conferences/{id}")).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Creating and Editing
// ============================================================================

#[tokio::test]
async fn test_user_can_create_conference() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = server.seed_user().await.unwrap();

    let request = CreateConferenceBody::dreamforce();
    let response = server
        .post_auth("/conferences", &token, &request)
        .await
        .unwrap();
    let created: ConferenceBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.title, "Dreamforce");
    assert_eq!(created.url, "https://dreamforce.com/");
    assert_eq!(created.author_id, user.id.to_string());
    assert!(!created.is_approved);
    assert!(!created.is_shared);

    // The author can see it; guests cannot until it is approved
    let path = format!("/conferences/{}", created.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_conference_can_include_location_coordinates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.seed_user().await.unwrap();

    let request = CreateConferenceBody {
        latitude: Some(37.788_338_6),
        longitude: Some(-122.403_668_2),
        ..CreateConferenceBody::dreamforce()
    };
    let response = server
        .post_auth("/conferences", &token, &request)
        .await
        .unwrap();
    let created: ConferenceBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.latitude, Some(37.788_338_6));
    assert_eq!(created.longitude, Some(-122.403_668_2));
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.seed_user().await.unwrap();

    let request = CreateConferenceBody {
        title: String::new(),
        latitude: Some(123.0),
        ..CreateConferenceBody::dreamforce()
    };
    let response = server
        .post_auth("/conferences", &token, &request)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    let details = body.error.details.expect("field details");
    assert!(details.get("title").is_some());
    assert!(details.get("latitude").is_some());
}

#[tokio::test]
async fn test_create_rejects_event_ending_before_start() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.seed_user().await.unwrap();

    let body = json!({
        "title": "Backwards",
        "description": "Ends before it starts",
        "url": "https://backwards.example",
        "starts_at": "2020-01-03T00:00:00Z",
        "ends_at": "2020-01-01T00:00:00Z",
    });
    let response = server.post_auth("/conferences", &token, &body).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "EVENT_ENDS_BEFORE_START");
}

#[tokio::test]
async fn test_guests_cannot_create_conference() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/conferences/create").await.unwrap();
    assert_login_redirect(&response);

    let response = server
        .post("/conferences", &CreateConferenceBody::dreamforce())
        .await
        .unwrap();
    assert_login_redirect(&response);
}

#[tokio::test]
async fn test_user_can_edit_conference() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(user.id, SeedConference::approved())
        .await
        .unwrap();
    let path = format!("/conferences/{}", conference.id);

    let response = server
        .get_auth(&format!("{path}/edit"), &token)
        .await
        .unwrap();
    let form: ConferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(form.title, conference.title);

    let update = json!({
        "title": "Laracon",
        "description": "A conference for Laravel developers",
        "url": "https://laracon.us/",
        "latitude": 38.251_583,
        "longitude": -85.757_964,
    });
    let response = server.put_auth(&path, &token, &update).await.unwrap();
    let updated: ConferenceBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "Laracon");
    assert_eq!(updated.url, "https://laracon.us/");
    assert_eq!(updated.latitude, Some(38.251_583));

    // PATCH clears a coordinate with null and keeps everything else
    let response = server
        .patch_auth(&path, &token, &json!({ "latitude": null, "longitude": null }))
        .await
        .unwrap();
    let patched: ConferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(patched.title, "Laracon");
    assert_eq!(patched.latitude, None);
}

#[tokio::test]
async fn test_non_owner_cannot_edit_conference() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let (_, stranger_token) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let path = format!("/conferences/{}", conference.id);

    let response = server
        .get_auth(&format!("{path}/edit"), &stranger_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&path, &stranger_token, &json!({ "title": "Mine now" }))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_CONFERENCE_OWNER");
}

// ============================================================================
// Viewing
// ============================================================================

#[tokio::test]
async fn test_non_owners_and_guests_can_view_conference() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let (_, other_token) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let path = format!("/conferences/{}", conference.id);

    let response = server.get_auth(&path, &other_token).await.unwrap();
    let seen: ConferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.title, conference.title);

    let response = server.get(&path).await.unwrap();
    let seen: ConferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.title, conference.title);
    assert_eq!(seen.preference, "none");
}

#[tokio::test]
async fn test_guests_can_view_conference_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let approved = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let pending = server
        .seed_conference(owner.id, SeedConference::pending())
        .await
        .unwrap();

    let response = server.get("/conferences").await.unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.filter, "approved");
    assert_eq!(list.sort, "cfp_closing_next");
    assert!(list.contains(approved.id.to_string()));
    assert!(!list.contains(pending.id.to_string()));
}

#[tokio::test]
async fn test_all_filter_includes_own_pending_conferences() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, owner_token) = server.seed_user().await.unwrap();
    let (_, other_token) = server.seed_user().await.unwrap();
    let pending = server
        .seed_conference(owner.id, SeedConference::pending())
        .await
        .unwrap();

    let response = server
        .get_auth("/conferences?filter=all", &owner_token)
        .await
        .unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.contains(pending.id.to_string()));

    let response = server
        .get_auth("/conferences?filter=all", &other_token)
        .await
        .unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!list.contains(pending.id.to_string()));
}

#[tokio::test]
async fn test_cfp_window_and_event_dates_in_response() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let now = Utc::now();

    let open = server
        .seed_conference(
            owner.id,
            SeedConference {
                cfp_starts_at: Some(now - Duration::days(1)),
                cfp_ends_at: Some(now + Duration::days(1)),
                starts_at: Some(Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap()),
                ends_at: Some(Utc.with_ymd_and_hms(2030, 1, 3, 17, 0, 0).unwrap()),
                ..SeedConference::approved()
            },
        )
        .await
        .unwrap();
    let closed = server
        .seed_conference(
            owner.id,
            SeedConference {
                cfp_starts_at: Some(now - Duration::days(3)),
                cfp_ends_at: Some(now - Duration::days(1)),
                ..SeedConference::approved()
            },
        )
        .await
        .unwrap();
    let unannounced = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();

    let open = fetch_conference(&server, open.id).await;
    assert!(open.is_accepting_proposals);
    assert_eq!(
        open.event_dates_display.as_deref(),
        Some("Jan 1 2030 - Jan 3 2030")
    );

    assert!(!fetch_conference(&server, closed.id).await.is_accepting_proposals);

    let unannounced = fetch_conference(&server, unannounced.id).await;
    assert!(!unannounced.is_accepting_proposals);
    assert_eq!(unannounced.event_dates_display, None);
}

// ============================================================================
// Sorting
// ============================================================================

#[tokio::test]
async fn test_cfp_closing_next_sorts_null_cfp_to_the_bottom() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let now = Utc::now();

    let no_cfp = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let past = server
        .seed_conference(
            owner.id,
            SeedConference {
                cfp_starts_at: Some(now - Duration::days(2)),
                cfp_ends_at: Some(now - Duration::days(1)),
                ..SeedConference::approved()
            },
        )
        .await
        .unwrap();
    let future = server
        .seed_conference(
            owner.id,
            SeedConference {
                cfp_starts_at: Some(now - Duration::days(1)),
                cfp_ends_at: Some(now + Duration::days(1)),
                ..SeedConference::approved()
            },
        )
        .await
        .unwrap();

    let response = server.get("/conferences").await.unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();

    let past = list.position(past.id.to_string()).unwrap();
    let future = list.position(future.id.to_string()).unwrap();
    let no_cfp = list.position(no_cfp.id.to_string()).unwrap();
    assert!(past < future);
    assert!(future < no_cfp);
}

#[tokio::test]
async fn test_date_sort_orders_by_event_start() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let now = Utc::now();

    let undated = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let later = server
        .seed_conference(
            owner.id,
            SeedConference {
                starts_at: Some(now + Duration::days(1)),
                ..SeedConference::approved()
            },
        )
        .await
        .unwrap();
    let sooner = server
        .seed_conference(
            owner.id,
            SeedConference {
                starts_at: Some(now - Duration::days(1)),
                ..SeedConference::approved()
            },
        )
        .await
        .unwrap();

    let response = server.get("/conferences?sort=date").await.unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.sort, "date");

    let sooner = list.position(sooner.id.to_string()).unwrap();
    let later = list.position(later.id.to_string()).unwrap();
    let undated = list.position(undated.id.to_string()).unwrap();
    assert!(sooner < later);
    assert!(later < undated);
}

// ============================================================================
// Dismissing and Favoriting
// ============================================================================

#[tokio::test]
async fn test_guests_cannot_dismiss_or_favorite() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();

    for action in ["dismiss", "favorite"] {
        let response = server
            .get(&format!("/conferences/{}/{action}", conference.id))
            .await
            .unwrap();
        assert_login_redirect(&response);
    }
}

#[tokio::test]
async fn test_dismissed_conferences_move_to_dismissed_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let (_, token) = server.seed_user().await.unwrap();
    let dismissed = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let kept = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();

    let response = server
        .post_auth(&format!("/conferences/{}/dismiss", dismissed.id), &token, &json!({}))
        .await
        .unwrap();
    let preference: PreferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(preference.conference_id, dismissed.id.to_string());
    assert_eq!(preference.preference, "dismissed");

    let response = server.get_auth("/conferences", &token).await.unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!list.contains(dismissed.id.to_string()));
    assert!(list.contains(kept.id.to_string()));

    let response = server
        .get_auth("/conferences?filter=dismissed", &token)
        .await
        .unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.ids(), vec![dismissed.id.to_string().as_str()]);
    assert_eq!(list.conferences[0].preference, "dismissed");

    // Dismissing again restores it
    let response = server
        .get_auth(&format!("/conferences/{}/dismiss", dismissed.id), &token)
        .await
        .unwrap();
    let preference: PreferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(preference.preference, "none");
}

#[tokio::test]
async fn test_favorites_filter_shows_only_favorites() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let (_, token) = server.seed_user().await.unwrap();
    let favorite = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/conferences/{}/favorite", favorite.id), &token)
        .await
        .unwrap();
    let preference: PreferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(preference.preference, "favorite");

    let response = server
        .get_auth("/conferences?filter=favorites", &token)
        .await
        .unwrap();
    let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.filter, "favorites");
    assert_eq!(list.ids(), vec![favorite.id.to_string().as_str()]);
}

#[tokio::test]
async fn test_dismissing_a_favorite_clears_both_marks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let (_, token) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let base = format!("/conferences/{}", conference.id);

    server
        .get_auth(&format!("{base}/favorite"), &token)
        .await
        .unwrap();
    let response = server
        .get_auth(&format!("{base}/dismiss"), &token)
        .await
        .unwrap();
    let preference: PreferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(preference.preference, "none");

    for filter in ["favorites", "dismissed"] {
        let response = server
            .get_auth(&format!("/conferences?filter={filter}"), &token)
            .await
            .unwrap();
        let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(list.conferences.is_empty(), "{filter} should be empty");
    }
}

#[tokio::test]
async fn test_favoriting_a_dismissed_conference_clears_both_marks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.seed_user().await.unwrap();
    let (_, token) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(owner.id, SeedConference::approved())
        .await
        .unwrap();
    let base = format!("/conferences/{}", conference.id);

    server
        .get_auth(&format!("{base}/dismiss"), &token)
        .await
        .unwrap();
    let response = server
        .get_auth(&format!("{base}/favorite"), &token)
        .await
        .unwrap();
    let preference: PreferenceBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(preference.preference, "none");

    for filter in ["favorites", "dismissed"] {
        let response = server
            .get_auth(&format!("/conferences?filter={filter}"), &token)
            .await
            .unwrap();
        let list: ConferenceListBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(list.conferences.is_empty(), "{filter} should be empty");
    }
}

#[tokio::test]
async fn test_dismiss_unknown_conference() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.seed_user().await.unwrap();

    let response = server
        .get_auth("/conferences/1/dismiss", &token)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_CONFERENCE");
}

// ============================================================================
// Submissions
// ============================================================================

#[tokio::test]
async fn test_submit_talk_uses_current_revision() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (organizer, organizer_token) = server.seed_user().await.unwrap();
    let (speaker, speaker_token) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(organizer.id, SeedConference::approved())
        .await
        .unwrap();
    let (talk, revisions) = server
        .seed_talk(speaker.id, &["Draft", "Final"])
        .await
        .unwrap();

    let request = CreateSubmissionBody {
        conference_id: conference.id.to_string(),
        talk_id: talk.id.to_string(),
    };
    let response = server
        .post_auth("/submissions", &speaker_token, &request)
        .await
        .unwrap();
    let submission: SubmissionBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(submission.conference_id, conference.id.to_string());
    assert_eq!(submission.talk_revision_id, revisions[1].id.to_string());
    assert_eq!(submission.status, "submitted");

    // Resubmitting is recorded again
    let response = server
        .post_auth("/submissions", &speaker_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/conferences/{}/submissions", conference.id);
    let response = server.get_auth(&path, &organizer_token).await.unwrap();
    let listed: Vec<SubmissionBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, submission.id);

    let response = server.get_auth(&path, &speaker_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_submit_requires_talk_author_and_existing_records() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (speaker, _) = server.seed_user().await.unwrap();
    let (_, stranger_token) = server.seed_user().await.unwrap();
    let conference = server
        .seed_conference(speaker.id, SeedConference::approved())
        .await
        .unwrap();
    let (talk, _) = server.seed_talk(speaker.id, &["Only"]).await.unwrap();

    let response = server
        .post_auth(
            "/submissions",
            &stranger_token,
            &CreateSubmissionBody {
                conference_id: conference.id.to_string(),
                talk_id: talk.id.to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let speaker_token = server.token_for(speaker.id);
    let response = server
        .post_auth(
            "/submissions",
            &speaker_token,
            &CreateSubmissionBody {
                conference_id: "1".to_string(),
                talk_id: talk.id.to_string(),
            },
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_CONFERENCE");
}

// ============================================================================
// Login Pointer
// ============================================================================

#[tokio::test]
async fn test_login_page_explains_bearer_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/login").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "LOGIN_REQUIRED");
}
