mod test_utils;

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use parley_app::{
    command_handlers::{
        CompleteTranscriptCommandHandler, CompleteVoiceRecordCommandHandler,
        StartTranscriptCommandHandler, StartVoiceRecordCommandHandler,
    },
    cqrs::commands::{CompleteTranscript, CompleteVoiceRecord, StartTranscript, StartVoiceRecord},
};
use parley_types::errors::ApplicationError;

use crate::test_utils::tests::{TestApp, logged_in_client, setup_http_client, setup_web_app};

fn config_body(name: &str) -> Value {
    json!({
        "name": name,
        "candidate_name": "Alice Doe",
        "position": "Backend",
        "company": "Acme",
        "job_title": "Rust Engineer",
        "resume": "10 years of systems work"
    })
}

async fn create_config(client: &reqwest::Client, app: &TestApp, name: &str) -> Value {
    let res = client
        .post(app.url("/api/configs"))
        .json(&config_body(name))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

async fn seed_answer(
    app: &TestApp,
    user_id: Uuid,
    config_id: Option<Uuid>,
    question: &str,
) -> Result<Uuid, ApplicationError> {
    let start = StartVoiceRecord::new(user_id, config_id, Some(question.to_string()));
    let id = start.id;
    app.app_bus
        .execute(start, StartVoiceRecordCommandHandler::new())
        .await?;
    app.app_bus
        .execute(
            CompleteVoiceRecord {
                id,
                user_id,
                answer: format!("Answer to {question}"),
            },
            CompleteVoiceRecordCommandHandler::new(),
        )
        .await?;
    Ok(id)
}

#[tokio::test]
async fn test_api_requires_session() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let client = setup_http_client();

    for path in [
        "/api/user/profile",
        "/api/configs",
        "/api/voice-records",
        "/api/voice-records/unread-count",
        "/api/transcripts",
    ] {
        let res = client.get(app.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "Authentication required.");
    }

    Ok(())
}

#[tokio::test]
async fn test_profile() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (client, user_id) = logged_in_client(&app, "alice").await?;

    let res = client.get(app.url("/api/user/profile")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["username"], "alice");
    assert!(body.get("password_hash").is_none());

    Ok(())
}

#[tokio::test]
async fn test_config_crud() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (client, _) = logged_in_client(&app, "alice").await?;

    let created = create_config(&client, &app, "Acme onsite").await;
    assert_eq!(created["name"], "Acme onsite");
    assert_eq!(created["job_description"], "");
    let id = created["id"].as_str().unwrap().to_string();

    let res = client.get(app.url("/api/configs")).send().await.unwrap();
    let list: Value = res.json().await.unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);

    let res = client
        .put(app.url(&format!("/api/configs/{id}")))
        .json(&json!({ "company": "Globex" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["company"], "Globex");
    assert_eq!(updated["name"], "Acme onsite");
    assert_eq!(updated["resume"], "10 years of systems work");

    let res = client
        .put(app.url(&format!("/api/configs/{id}")))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "name is required");

    let res = client
        .get(app.url(&format!("/api/configs/{id}")))
        .send()
        .await
        .unwrap();
    let unchanged: Value = res.json().await.unwrap();
    assert_eq!(unchanged["name"], "Acme onsite");

    let res = client
        .delete(app.url(&format!("/api/configs/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Config deleted.");

    let res = client
        .get(app.url(&format!("/api/configs/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_config_missing_field() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (client, _) = logged_in_client(&app, "alice").await?;

    let res = client
        .post(app.url("/api/configs"))
        .json(&json!({ "name": "Only a name" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "candidate_name is required");

    Ok(())
}

#[tokio::test]
async fn test_configs_are_private() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (alice, _) = logged_in_client(&app, "alice").await?;
    let (bob, _) = logged_in_client(&app, "bob").await?;

    let created = create_config(&alice, &app, "Alice only").await;
    let id = created["id"].as_str().unwrap();

    let res = bob
        .get(app.url(&format!("/api/configs/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = bob
        .delete(app.url(&format!("/api/configs/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = bob.get(app.url("/api/configs")).send().await.unwrap();
    let list: Value = res.json().await.unwrap();
    assert!(list.as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_voice_records_pagination_and_read_state() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (client, user_id) = logged_in_client(&app, "alice").await?;

    let config = create_config(&client, &app, "Acme onsite").await;
    let config_id: Uuid = config["id"].as_str().unwrap().parse().unwrap();

    let mut ids = Vec::new();
    for question in ["Why Rust?", "Tell me about ownership", "What is Send?"] {
        ids.push(seed_answer(&app, user_id, Some(config_id), question).await?);
    }

    let res = client
        .get(app.url("/api/voice-records?page=1&per_page=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["records"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["pages"], 2);
    assert_eq!(body["pagination"]["has_next"], true);
    assert_eq!(body["pagination"]["has_prev"], false);
    assert_eq!(body["records"][0]["config_name"], "Acme onsite");
    assert_eq!(body["records"][0]["status"], "completed");

    let res = client
        .get(app.url("/api/voice-records/unread-count"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["count"], 3);

    let res = client
        .post(app.url(&format!("/api/voice-records/{}/mark-read", ids[0])))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(app.url(&format!("/api/voice-records/{}", ids[0])))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["is_read"], true);
    assert_eq!(body["question"], "Why Rust?");
    assert_eq!(body["answer"], "Answer to Why Rust?");

    let res = client
        .get(app.url("/api/voice-records?unread_only=true"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["pagination"]["total"], 2);

    let res = client
        .get(app.url("/api/voice-records/unread-count"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["count"], 2);

    Ok(())
}

#[tokio::test]
async fn test_voice_record_defaults_and_not_found() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (client, user_id) = logged_in_client(&app, "alice").await?;

    let start = StartVoiceRecord::new(user_id, None, None);
    let id = start.id;
    app.app_bus
        .execute(start, StartVoiceRecordCommandHandler::new())
        .await?;

    let res = client
        .get(app.url(&format!("/api/voice-records/{id}")))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["question"], "Voice question");
    assert_eq!(body["answer"], "");
    assert_eq!(body["status"], "generating");
    assert!(body["config_name"].is_null());

    let res = client
        .post(app.url(&format!("/api/voice-records/{}/mark-read", Uuid::new_v4())))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Record not found.");

    Ok(())
}

#[tokio::test]
async fn test_transcripts() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (client, user_id) = logged_in_client(&app, "alice").await?;

    let config = create_config(&client, &app, "Acme onsite").await;
    let config_id: Uuid = config["id"].as_str().unwrap().parse().unwrap();

    let start = StartTranscript::new(user_id, config_id);
    let id = start.id;
    app.app_bus
        .execute(start, StartTranscriptCommandHandler::new())
        .await?;
    app.app_bus
        .execute(
            CompleteTranscript {
                id,
                user_id,
                content: "Interviewer: Hello".to_string(),
            },
            CompleteTranscriptCommandHandler::new(),
        )
        .await?;

    let res = client.get(app.url("/api/transcripts")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["transcripts"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(
        body["transcripts"][0]["title"],
        "Acme Rust Engineer interview transcript"
    );
    assert_eq!(body["transcripts"][0]["company"], "Acme");

    let res = client
        .get(app.url(&format!("/api/transcripts/{id}")))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["content"], "Interviewer: Hello");
    assert_eq!(body["status"], "completed");

    let res = client
        .delete(app.url(&format!("/api/transcripts/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(app.url(&format!("/api/transcripts/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_deleting_config_cascades() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let (client, user_id) = logged_in_client(&app, "alice").await?;

    let config = create_config(&client, &app, "Short lived").await;
    let config_id: Uuid = config["id"].as_str().unwrap().parse().unwrap();

    let record_id = seed_answer(&app, user_id, Some(config_id), "Why?").await?;
    app.app_bus
        .execute(
            StartTranscript::new(user_id, config_id),
            StartTranscriptCommandHandler::new(),
        )
        .await?;

    let res = client
        .delete(app.url(&format!("/api/configs/{config_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(app.url("/api/transcripts")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["pagination"]["total"], 0);

    let res = client
        .get(app.url(&format!("/api/voice-records/{record_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert!(body["config_name"].is_null());

    Ok(())
}
