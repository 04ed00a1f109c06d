//! End-to-end tests for the `/api/missions` routes.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use serde_json::{json, Value};

use common::{build_test_app, send};

const BREEDS: &[&str] = &["Persian", "Siamese"];

/// Hire a cat and return its id.
async fn hire_cat(app: &Router, name: &str) -> i64 {
    let (status, cat) = send(
        app,
        Method::POST,
        "/api/cats/create",
        Some(json!({
            "name": name,
            "years_experience": 2,
            "breed": "Persian",
            "salary": 900.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    cat["id"].as_i64().unwrap()
}

fn mission_input(cat_id: i64, target_names: &[&str]) -> Value {
    let targets: Vec<Value> = target_names
        .iter()
        .map(|name| json!({"name": name, "country": "FR"}))
        .collect();
    json!({"name": "Operation Yarn", "cat_id": cat_id, "targets": targets})
}

/// Create a mission and return its body.
async fn create_mission(app: &Router, cat_id: i64, target_names: &[&str]) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/missions",
        Some(mission_input(cat_id, target_names)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn create_returns_mission_with_targets_in_submission_order() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;

    let mission = create_mission(&app, cat_id, &["Alpha", "Bravo", "Charlie"]).await;

    assert_eq!(mission["cat_id"], cat_id);
    assert_eq!(mission["completed"], false);
    let targets = mission["targets"].as_array().unwrap();
    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0]["name"], "Alpha");
    assert_eq!(targets[1]["name"], "Bravo");
    assert_eq!(targets[2]["name"], "Charlie");
    for target in targets {
        assert_eq!(target["mission_id"], mission["id"]);
        assert_eq!(target["completed"], false);
    }
}

#[tokio::test]
async fn target_count_outside_one_to_three_is_rejected() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;

    for names in [&[][..], &["A", "B", "C", "D"][..]] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/missions",
            Some(mission_input(cat_id, names)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} targets", names.len());
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn create_requires_an_existing_cat() {
    let app = build_test_app(BREEDS);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/missions",
        Some(mission_input(999, &["Alpha"])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn assigned_mission_cannot_be_deleted_until_unassigned() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;
    let mission = create_mission(&app, cat_id, &["Alpha"]).await;
    let id = mission["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/missions/{id}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "MISSION_ASSIGNED");

    // Unassign via cat_id 0, then the delete goes through.
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/missions/{id}/assign"),
        Some(json!({"cat_id": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/missions/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/api/missions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assign_overwrites_the_previous_cat() {
    let app = build_test_app(BREEDS);
    let first = hire_cat(&app, "Tom").await;
    let second = hire_cat(&app, "Felix").await;
    let mission = create_mission(&app, first, &["Alpha"]).await;
    let id = mission["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/missions/{id}/assign"),
        Some(json!({"cat_id": second})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, &format!("/api/missions/{id}"), None).await;
    assert_eq!(body["cat_id"], second);
    assert_eq!(body["cat"]["name"], "Felix");
}

#[tokio::test]
async fn assign_does_not_verify_the_cat_exists() {
    // Reassignment skips the existence check that creation performs.
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;
    let mission = create_mission(&app, cat_id, &["Alpha"]).await;
    let id = mission["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/missions/{id}/assign"),
        Some(json!({"cat_id": 424242})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The dangling reference surfaces as a null cat on reads.
    let (status, body) = send(&app, Method::GET, &format!("/api/missions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cat_id"], 424242);
    assert_eq!(body["cat"], Value::Null);
}

#[tokio::test]
async fn assign_to_missing_mission_yields_not_found() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/missions/999/assign",
        Some(json!({"cat_id": cat_id})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn completion_flag_can_be_toggled_both_ways() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;
    let mission = create_mission(&app, cat_id, &["Alpha"]).await;
    let id = mission["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/missions/{id}"),
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/missions/{id}"),
        Some(json!({"completed": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], false);
}

#[tokio::test]
async fn targets_cannot_be_added_to_a_completed_mission() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;
    let mission = create_mission(&app, cat_id, &["Alpha"]).await;
    let id = mission["id"].as_i64().unwrap();

    send(
        &app,
        Method::PUT,
        &format!("/api/missions/{id}"),
        Some(json!({"completed": true})),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/missions/{id}/targets"),
        Some(json!({"name": "Bravo", "country": "DE"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "MISSION_COMPLETED");
}

#[tokio::test]
async fn the_fourth_target_is_rejected() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;
    let mission = create_mission(&app, cat_id, &["Alpha", "Bravo"]).await;
    let id = mission["id"].as_i64().unwrap();

    let (status, target) = send(
        &app,
        Method::POST,
        &format!("/api/missions/{id}/targets"),
        Some(json!({"name": "Charlie", "country": "DE"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(target["name"], "Charlie");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/missions/{id}/targets"),
        Some(json!({"name": "Delta", "country": "DE"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "TARGET_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn single_mission_read_hydrates_cat_and_targets() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;
    let mission = create_mission(&app, cat_id, &["Alpha", "Bravo"]).await;
    let id = mission["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/missions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cat"]["id"], cat_id);
    assert_eq!(body["cat"]["name"], "Tom");
    assert_eq!(body["targets"].as_array().unwrap().len(), 2);

    // Deleting the cat leaves the mission with a dangling reference; the
    // read degrades to a null cat rather than failing.
    let (status, _) = send(&app, Method::DELETE, &format!("/api/cats/{cat_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &format!("/api/missions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cat_id"], cat_id);
    assert_eq!(body["cat"], Value::Null);
}

#[tokio::test]
async fn list_returns_bare_missions() {
    let app = build_test_app(BREEDS);
    let cat_id = hire_cat(&app, "Tom").await;
    create_mission(&app, cat_id, &["Alpha"]).await;
    create_mission(&app, cat_id, &["Bravo"]).await;

    let (status, body) = send(&app, Method::GET, "/api/missions", None).await;
    assert_eq!(status, StatusCode::OK);
    let missions = body.as_array().unwrap();
    assert_eq!(missions.len(), 2);
    // List responses skip the secondary fetches.
    for mission in missions {
        assert_eq!(mission["cat"], Value::Null);
        assert_eq!(mission["targets"].as_array().unwrap().len(), 0);
    }
}
