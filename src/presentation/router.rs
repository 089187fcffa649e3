use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioStore, CompletionClient, SpeechSynthesizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    audio_handler, format_handler, health_handler, options_handler, page_handler,
    voiceover_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C, S, A>(state: AppState<C, S, A>) -> Router
where
    C: CompletionClient + 'static,
    S: SpeechSynthesizer + 'static,
    A: AudioStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(page_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/options", get(options_handler))
        .route("/api/v1/format", post(format_handler::<C, S, A>))
        .route("/api/v1/voiceover", post(voiceover_handler::<C, S, A>))
        .route("/api/v1/audio", get(audio_handler::<C, S, A>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
