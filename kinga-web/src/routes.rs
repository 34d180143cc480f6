//! HTTP routes for the card page.

use std::path::Path;

use anyhow::Result;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use kinga::core::greeting::GreetingCard;
use kinga::core::permutation::{PermutationSource, Shuffler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Build the router: the card at `/`, static assets from `public_dir` as fallback.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    let mut app = Router::new().route("/", get(card_page));

    if public_dir.is_dir() {
        info!(public_dir = %public_dir.display(), "serving static assets");
        app = app.fallback_service(ServeDir::new(public_dir));
    } else {
        info!(public_dir = %public_dir.display(), "public directory not found, assets disabled");
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// GET / - a freshly shuffled card on every load.
async fn card_page(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let html = render_card(&state, Shuffler::new(rand::thread_rng())).map_err(|err| {
        error!(error = %format!("{err:#}"), "failed to render card");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Html(html)))
}

/// Mount a card on `source` and render the page for it.
pub fn render_card<S: PermutationSource>(state: &AppState, source: S) -> Result<String> {
    let card = GreetingCard::mounted(source);
    let view = card.view();
    debug!(greeting = %view.greeting, variant = ?view.variant, "card drawn");
    state.renderer.render(&state.site, &view)
}
