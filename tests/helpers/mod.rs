#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use http_body_util::BodyExt;
use mealboard::{
    AppState, create_app,
    session::{SESSION_COOKIE, SessionStore},
};
use mealboard_ai::{DisabledAssistant, RecipeAssistant};
use mealboard_recipe::Catalog;
use mealboard_shared::{Ingredient, Nutrients, Recipe};
use serde_json::Value;
use tower::ServiceExt;

pub fn recipe(id: &str, name: &str, category: &str, ingredients: &[(&str, &str)]) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("{name} for testing"),
        ingredients: ingredients
            .iter()
            .map(|(name, quantity)| Ingredient::new(*name, *quantity))
            .collect(),
        instructions: vec!["Cook".to_string()],
        image_url: "https://placehold.co/600x400.png".to_string(),
        nutrients: Nutrients {
            calories: 200.0,
            protein: 10.0,
            fat: 5.0,
            carbs: 20.0,
        },
        prep_time: 5,
        cook_time: 10,
    }
}

/// Omelette (Eggs 2), Fried Rice (Rice 1 cup), Pancakes with a real image
pub fn catalog() -> Catalog {
    let mut pancakes = recipe("3", "Pancakes", "Breakfast", &[("Flour", "1 cup"), ("Milk", "1 cup")]);
    pancakes.image_url = "https://cdn.example.com/pancakes.jpg".to_string();

    Catalog::new(vec![
        recipe("1", "Omelette", "Breakfast", &[("Eggs", "2")]),
        recipe("2", "Fried Rice", "Dinner", &[("Rice", "1 cup")]),
        pancakes,
    ])
    .unwrap()
}

pub fn app() -> Router {
    app_with(Arc::new(DisabledAssistant))
}

pub fn app_with(assistant: Arc<dyn RecipeAssistant>) -> Router {
    create_app(AppState::new(catalog(), assistant))
}

/// App sharing `sessions` with the caller, for inspecting the store
pub fn app_with_sessions(sessions: SessionStore) -> Router {
    create_app(AppState::new(catalog(), Arc::new(DisabledAssistant)).with_sessions(sessions))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// `planner_session=<id>` from a response's `Set-Cookie` header
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(SESSION_COOKIE))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Starts a session and returns its cookie
pub async fn new_session(app: &Router) -> String {
    let response = send(app, Method::GET, "/planner", None, None).await;
    session_cookie(&response).expect("session cookie")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
