use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use mealboard_mealplan::PlannerGrid;
use tokio::sync::Mutex;

pub const SESSION_COOKIE: &str = "planner_session";
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// Session extension inserted by [`session_middleware`]
#[derive(Clone, Debug)]
pub struct SessionId(pub String);

struct Session {
    grid: PlannerGrid,
    last_seen: Instant,
}

/// In-memory planner per session.
///
/// A grid exists only while it holds a pending selection or a planned meal.
/// Reads never create one. When a new grid is stored, sessions idle for
/// longer than the idle timeout are dropped first, then the least recently
/// used ones until the store is under `max_sessions`.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            max_sessions,
            idle_timeout,
        }
    }

    /// Runs `f` on the session grid, or on an empty grid for unknown
    /// sessions.
    pub async fn read<R>(&self, session: &SessionId, f: impl FnOnce(&PlannerGrid) -> R) -> R {
        let mut sessions = self.sessions.lock().await;

        match sessions.get_mut(&session.0) {
            Some(entry) => {
                entry.last_seen = Instant::now();
                f(&entry.grid)
            }
            None => f(&PlannerGrid::new()),
        }
    }

    /// Runs `f` on the session grid, creating it on first use. The store is
    /// locked only for the duration of `f`.
    pub async fn with_grid<R>(
        &self,
        session: &SessionId,
        f: impl FnOnce(&mut PlannerGrid) -> R,
    ) -> R {
        let mut sessions = self.sessions.lock().await;

        if !sessions.contains_key(&session.0) {
            self.evict(&mut sessions);
        }

        let entry = sessions.entry(session.0.clone()).or_insert_with(|| Session {
            grid: PlannerGrid::new(),
            last_seen: Instant::now(),
        });
        entry.last_seen = Instant::now();

        let result = f(&mut entry.grid);

        if entry.grid.is_empty() && entry.grid.pending().is_none() {
            sessions.remove(&session.0);
        }

        result
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    fn evict(&self, sessions: &mut HashMap<String, Session>) {
        let before = sessions.len();

        sessions.retain(|_, entry| entry.last_seen.elapsed() < self.idle_timeout);

        while !sessions.is_empty() && sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            sessions.remove(&oldest);
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Evicted planner sessions");
        }
    }
}

/// Reads the `planner_session` cookie, minting a new ULID when it is missing
/// or not a ULID, and inserts [`SessionId`] for handlers.
pub async fn session_middleware(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let existing = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| ulid::Ulid::from_string(value).is_ok());

    let (jar, id) = match existing {
        Some(id) => (jar, id),
        None => {
            let id = ulid::Ulid::new().to_string();
            tracing::debug!(session = %id, "New planner session");

            let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);

            (jar.add(cookie), id)
        }
    };

    req.extensions_mut().insert(SessionId(id));

    (jar, next.run(req).await).into_response()
}
