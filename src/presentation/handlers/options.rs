use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::AccentSelector;

use super::format::SUPPORTED_MODELS;

#[derive(Serialize)]
pub struct OptionsResponse {
    pub accents: Vec<&'static str>,
    pub models: Vec<&'static str>,
}

/// The fixed form choices: five accents and three models.
pub async fn options_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(OptionsResponse {
            accents: AccentSelector::ALL.iter().map(|a| a.as_str()).collect(),
            models: SUPPORTED_MODELS.to_vec(),
        }),
    )
}
