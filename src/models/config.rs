//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Base URL of the remote user API, e.g. `https://jsonplaceholder.typicode.com`.
    pub users_api_url: String,
}
