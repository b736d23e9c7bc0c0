use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use mealboard_ai::RecipeAssistant;
use mealboard_recipe::Catalog;

use crate::session::{SessionStore, session_middleware};

mod health;
mod planner;
mod recipes;
mod shopping;
mod suggestions;

pub use planner::PlannerView;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub assistant: Arc<dyn RecipeAssistant>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(catalog: Catalog, assistant: Arc<dyn RecipeAssistant>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            assistant,
            sessions: SessionStore::new(),
        }
    }

    pub fn with_sessions(mut self, sessions: SessionStore) -> Self {
        self.sessions = sessions;
        self
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint (no session)
        .route("/health", get(health::health))
        .merge(
            Router::new()
                .route("/recipes", get(recipes::list).post(recipes::create))
                .route("/recipes/categories", get(recipes::categories))
                .route("/recipes/{id}", get(recipes::detail))
                .route("/planner", get(planner::view))
                .route("/planner/select", post(planner::select))
                .route(
                    "/planner/{day}/{slot}",
                    put(planner::assign).delete(planner::clear),
                )
                .route("/shopping-list", get(shopping::list))
                .route("/shopping-list/download", get(shopping::download))
                .route("/suggestions", post(suggestions::suggest))
                .route("/images", post(suggestions::image))
                .layer(middleware::from_fn(session_middleware))
                .with_state(app_state),
        )
}
