use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct AppConfig {
    pub(super) source_playlists: Vec<String>,
    pub(super) target_playlist: String,
    pub(super) access_token: Option<String>,
    pub(super) insert_delay_secs: Option<u64>,
}

impl AppConfig {
    pub fn new_default() -> AppConfig {
        AppConfig {
            source_playlists: vec![],
            target_playlist: "".to_string(),
            access_token: None,
            insert_delay_secs: None,
        }
    }
}
