use home_dir::HomeDirExt;
use std::{io::Write, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context, Result};

use crate::{
    pacer::DEFAULT_INSERT_DELAY,
    types::{PlaylistId, SyncPlan},
    youtube::get_playlist_id,
};

use super::app_config::AppConfig;

pub const ACCESS_TOKEN_ENV: &str = "YOUTUBE_ACCESS_TOKEN";

pub struct Config {
    config_file: PathBuf,
    app_config: AppConfig,
}

impl Config {
    pub fn new_from_file(config_path: Option<String>) -> Result<Config> {
        if let Some(config_path) = config_path {
            Config::new(expand_home(&PathBuf::from(config_path))?)
        } else {
            Config::new_default()
        }
    }

    pub fn new_default() -> Result<Config> {
        let config_directory_root =
            std::env::var("XDG_CONFIG_HOME").unwrap_or("~/.config".to_string());

        let config_directory = expand_home(&PathBuf::from(config_directory_root))?.join("yt-fusion");
        let config_file = config_directory.join("config.toml");

        Config::new(config_file)
    }

    fn new(config_file: PathBuf) -> Result<Config> {
        if let Some(parent) = config_file.parent() {
            ensure_dir(&parent.to_path_buf())?;
        }

        let app_config: AppConfig = {
            let file_content = ensure_file(
                &config_file,
                toml::to_string_pretty(&AppConfig::new_default())?,
            )?;

            toml::from_str(&file_content)
                .with_context(|| format!("Cannot parse config file \"{}\"", config_file.display()))?
        };

        let config = Config {
            config_file,
            app_config,
        };

        config.validate().and(Ok(config))
    }

    pub fn get_source_playlists(&self) -> Result<Vec<PlaylistId>> {
        self.app_config
            .source_playlists
            .iter()
            .map(String::as_str)
            .map(get_playlist_id)
            .collect()
    }

    pub fn get_target_playlist(&self) -> Result<PlaylistId> {
        get_playlist_id(&self.app_config.target_playlist)
    }

    pub fn get_sync_plan(&self) -> Result<SyncPlan> {
        Ok(SyncPlan {
            sources: self.get_source_playlists()?,
            target: self.get_target_playlist()?,
        })
    }

    pub fn get_insert_delay(&self) -> Duration {
        self.app_config
            .insert_delay_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_INSERT_DELAY)
    }

    /// The environment wins over the config file.
    pub fn get_access_token(&self) -> Result<String> {
        pick_access_token(
            std::env::var(ACCESS_TOKEN_ENV).ok(),
            self.app_config.access_token.as_deref(),
        )
        .ok_or_else(|| {
            anyhow!(
                "No access token: set {} or access_token (config file path: \"{}\")",
                ACCESS_TOKEN_ENV,
                self.config_file.display()
            )
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_config.source_playlists.is_empty() {
            return Err(anyhow!(
                "Given source_playlists list is empty (config file path: \"{}\")",
                self.config_file.display()
            ));
        }

        if self.app_config.target_playlist.trim().is_empty() {
            return Err(anyhow!(
                "Given target_playlist is empty (config file path: \"{}\")",
                self.config_file.display()
            ));
        }

        let plan = self.get_sync_plan().with_context(|| {
            format!(
                "Invalid playlist reference (config file path: \"{}\")",
                self.config_file.display()
            )
        })?;

        if plan.sources.contains(&plan.target) {
            return Err(anyhow!(
                "Given target_playlist (\"{}\") is also listed in source_playlists (config file path: \"{}\")",
                plan.target,
                self.config_file.display()
            ));
        }

        Ok(())
    }
}

fn pick_access_token(from_env: Option<String>, from_file: Option<&str>) -> Option<String> {
    from_env
        .filter(|token| !token.trim().is_empty())
        .or_else(|| from_file.map(|token| token.to_string()))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn expand_home(path: &PathBuf) -> Result<PathBuf> {
    path.expand_home()
        .map_err(|e| anyhow!("Cannot expand home directory in \"{}\": {:?}", path.display(), e))
}

fn ensure_dir(dir: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    Ok(())
}

fn ensure_file(file_path: &PathBuf, default: String) -> Result<String> {
    if !file_path.exists() {
        let mut file = std::fs::File::create(file_path)?;
        file.write_all(default.as_bytes())?;
        Ok(default)
    } else {
        Ok(std::fs::read_to_string(file_path)?)
    }
}
