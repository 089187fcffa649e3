mod euriai_client;
mod mock_completion_client;

pub use euriai_client::{DEFAULT_BASE_URL, EuriaiClient};
pub use mock_completion_client::MockCompletionClient;
