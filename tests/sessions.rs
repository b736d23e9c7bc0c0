mod helpers;

use axum::http::{Method, StatusCode};
use helpers::{app_with_sessions, body_json, new_session, send, session_cookie};
use mealboard::session::SessionStore;
use serde_json::json;

#[tokio::test]
async fn test_reads_do_not_store_sessions() {
    let sessions = SessionStore::new();
    let app = app_with_sessions(sessions.clone());

    for _ in 0..50 {
        let response = send(&app, Method::GET, "/shopping-list", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, Method::GET, "/shopping-list/download", None, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    for i in 0..50 {
        let cookie = format!("planner_session=forged-{i}");
        let response = send(&app, Method::GET, "/planner", Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(sessions.len().await, 0);
}

#[tokio::test]
async fn test_forged_cookie_is_replaced() {
    let app = app_with_sessions(SessionStore::new());

    let response = send(&app, Method::GET, "/planner", Some("planner_session=forged"), None).await;

    let cookie = session_cookie(&response).unwrap();
    assert_ne!(cookie, "planner_session=forged");
    assert_eq!(cookie.trim_start_matches("planner_session=").len(), 26);
}

#[tokio::test]
async fn test_grid_lives_while_it_holds_meals() {
    let sessions = SessionStore::new();
    let app = app_with_sessions(sessions.clone());
    let cookie = new_session(&app).await;

    let response = send(&app, Method::PUT, "/planner/Monday/Lunch", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sessions.len().await, 0);

    send(&app, Method::POST, "/planner/select", Some(&cookie), Some(json!({"recipeId": "1"}))).await;
    send(&app, Method::PUT, "/planner/Monday/Lunch", Some(&cookie), None).await;
    assert_eq!(sessions.len().await, 1);

    send(&app, Method::DELETE, "/planner/Monday/Lunch", Some(&cookie), None).await;
    assert_eq!(sessions.len().await, 0);

    let response = send(&app, Method::GET, "/planner", Some(&cookie), None).await;
    assert_eq!(body_json(response).await, json!({"pending": null, "meals": []}));
}

#[tokio::test]
async fn test_store_is_capped() {
    let sessions = SessionStore::with_limits(3, mealboard::session::DEFAULT_IDLE_TIMEOUT);
    let app = app_with_sessions(sessions.clone());

    for _ in 0..10 {
        let cookie = new_session(&app).await;
        send(&app, Method::POST, "/planner/select", Some(&cookie), Some(json!({"recipeId": "2"}))).await;
    }

    assert_eq!(sessions.len().await, 3);
}
