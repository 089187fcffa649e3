use axum::response::Html;

/// The single-page recipe voiceover form, embedded so the binary is
/// self-contained.
pub async fn page_handler() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
