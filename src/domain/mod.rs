mod accent;
mod artifact;
mod prompt_language;
mod recipe;
mod session;

pub use accent::{AccentSelector, Voice};
pub use artifact::{ArtifactPath, AudioArtifact};
pub use prompt_language::PromptLanguage;
pub use recipe::FormattedRecipe;
pub use session::SessionState;
