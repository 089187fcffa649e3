use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Mutex;

use voicechef::application::services::{FormatService, PlaybackService, VoiceoverService};
use voicechef::domain::SessionState;
use voicechef::infrastructure::llm::EuriaiClient;
use voicechef::infrastructure::observability::{TracingConfig, init_tracing};
use voicechef::infrastructure::storage::LocalAudioStore;
use voicechef::infrastructure::tts::GoogleTranslateTts;
use voicechef::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    if settings.llm.api_key.trim().is_empty() {
        tracing::warn!(
            "No completion API key configured; the Format action will report an error until \
             EURIAI_API_KEY is set"
        );
    }

    let completion_client = Arc::new(EuriaiClient::with_base_url(
        settings.llm.api_key.clone(),
        settings.llm.base_url.clone(),
    ));
    let synthesizer = Arc::new(match &settings.tts.host_override {
        Some(host) => GoogleTranslateTts::with_host(host.clone()),
        None => GoogleTranslateTts::new(),
    });
    let audio_store = Arc::new(LocalAudioStore::new(settings.scratch_dir())?);

    let state = AppState {
        format_service: Arc::new(FormatService::new(Arc::clone(&completion_client))),
        voiceover_service: Arc::new(VoiceoverService::new(
            Arc::clone(&synthesizer),
            Arc::clone(&audio_store),
        )),
        playback_service: Arc::new(PlaybackService::new(Arc::clone(&audio_store))),
        session: Arc::new(Mutex::new(SessionState::new())),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
