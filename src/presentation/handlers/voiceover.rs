use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioStore, CompletionClient, SpeechSynthesizer};
use crate::application::services::VoiceoverError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct VoiceoverRequest {
    pub accent: String,
}

#[derive(Serialize)]
pub struct VoiceoverResponse {
    pub filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request), fields(accent = %request.accent))]
pub async fn voiceover_handler<C, S, A>(
    State(state): State<AppState<C, S, A>>,
    Json(request): Json<VoiceoverRequest>,
) -> impl IntoResponse
where
    C: CompletionClient + 'static,
    S: SpeechSynthesizer + 'static,
    A: AudioStore + 'static,
{
    let mut session = state.session.lock().await;

    let Some(recipe) = session.formatted_recipe().cloned() else {
        tracing::warn!("Voiceover requested before any recipe was formatted");
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "No formatted recipe available. Format a recipe first.".to_string(),
            }),
        )
            .into_response();
    };

    match state
        .voiceover_service
        .generate(recipe.as_str(), &request.accent)
        .await
    {
        Ok(artifact) => {
            let filename = artifact.download_filename();
            if let Some(stale) = session.set_audio(artifact) {
                state.voiceover_service.discard(&stale).await;
            }
            tracing::info!(filename = %filename, "Voiceover generated successfully");
            (StatusCode::OK, Json(VoiceoverResponse { filename })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Generating voiceover failed");
            let status = match e {
                VoiceoverError::UnsupportedAccent(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(ErrorResponse {
                    error: format!("Error generating voiceover: {}", e),
                }),
            )
                .into_response()
        }
    }
}
