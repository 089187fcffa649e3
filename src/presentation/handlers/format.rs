use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioStore, CompletionClient, SpeechSynthesizer};
use crate::application::services::FormatError;
use crate::domain::AccentSelector;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

/// The three model choices offered by the form.
pub const SUPPORTED_MODELS: [&str; 3] = ["gpt-4.1-mini", "gemini-2.0-flash-001", "qwen-qwq-32b"];

#[derive(Deserialize)]
pub struct FormatRequest {
    pub recipe_text: String,
    pub accent: String,
    #[serde(default)]
    pub model: String,
}

#[derive(Serialize)]
pub struct FormatResponse {
    pub formatted_recipe: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request), fields(accent = %request.accent))]
pub async fn format_handler<C, S, A>(
    State(state): State<AppState<C, S, A>>,
    Json(request): Json<FormatRequest>,
) -> impl IntoResponse
where
    C: CompletionClient + 'static,
    S: SpeechSynthesizer + 'static,
    A: AudioStore + 'static,
{
    tracing::debug!(recipe = %preview_text(&request.recipe_text), "Processing format request");

    let accent = match AccentSelector::try_from(request.accent.as_str()) {
        Ok(accent) => accent,
        Err(e) => {
            tracing::warn!(accent = %request.accent, "Format request with unsupported accent");
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse { error: e }))
                .into_response();
        }
    };

    let model = if request.model.trim().is_empty() {
        state.settings.llm.default_model.clone()
    } else {
        request.model.clone()
    };

    let mut session = state.session.lock().await;

    match state
        .format_service
        .format(&request.recipe_text, accent.prompt_language(), &model)
        .await
    {
        Ok(formatted) => {
            let response = FormatResponse {
                formatted_recipe: formatted.as_str().to_string(),
            };
            // A new recipe invalidates any voiceover generated for the old
            // one; release the superseded file.
            if let Some(stale) = session.set_formatted(formatted) {
                state.voiceover_service.discard(&stale).await;
            }
            tracing::info!("Recipe formatted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Formatting recipe failed");
            let status = match e {
                FormatError::EmptyRecipe => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(ErrorResponse {
                    error: format!("Error formatting recipe: {}", e),
                }),
            )
                .into_response()
        }
    }
}
