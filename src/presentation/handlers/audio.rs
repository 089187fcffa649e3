use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use crate::application::ports::{AudioStore, CompletionClient, SpeechSynthesizer};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AudioResponse {
    pub filename: String,
    /// `data:audio/mp3;base64,...` playable directly in an `<audio>` element.
    pub data_uri: String,
    /// Ready-made HTML anchor for the download link.
    pub download_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_warning: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Consume the pending voiceover: return its bytes as a data URI and delete
/// the backing temp file. The session audio reference is cleared even when
/// deletion fails; that failure only surfaces as a warning.
#[tracing::instrument(skip(state))]
pub async fn audio_handler<C, S, A>(State(state): State<AppState<C, S, A>>) -> impl IntoResponse
where
    C: CompletionClient + 'static,
    S: SpeechSynthesizer + 'static,
    A: AudioStore + 'static,
{
    let mut session = state.session.lock().await;

    let Some(artifact) = session.take_audio() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No voiceover is ready.".to_string(),
            }),
        )
            .into_response();
    };

    match state.playback_service.consume(&artifact).await {
        Ok(consumed) => {
            let filename = artifact.download_filename();
            let data_uri = format!("data:audio/mp3;base64,{}", BASE64.encode(&consumed.bytes));
            let download_link = build_download_link(&data_uri, &filename);

            tracing::info!(
                filename = %filename,
                bytes = consumed.bytes.len(),
                "Voiceover delivered"
            );
            (
                StatusCode::OK,
                Json(AudioResponse {
                    filename,
                    data_uri,
                    download_link,
                    cleanup_warning: consumed.cleanup_warning,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, path = %artifact.path, "Reading voiceover failed");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Audio file not found: {}", artifact.path),
                }),
            )
                .into_response()
        }
    }
}

fn build_download_link(data_uri: &str, filename: &str) -> String {
    format!(
        r#"<a href="{}" download="{}">Download Voiceover</a>"#,
        data_uri, filename
    )
}
