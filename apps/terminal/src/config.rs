use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;
use ui_controller::PresentationSettings;

pub const DEFAULT_CONFIG_FILE: &str = "decomposer.toml";

#[derive(Debug)]
pub struct Settings {
    pub server_url: String,
    pub session_cookie: Option<String>,
    pub request_timeout: Option<Duration>,
    pub stash_path: PathBuf,
    pub presentation: PresentationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5001".into(),
            session_cookie: None,
            request_timeout: None,
            stash_path: default_stash_path(),
            presentation: PresentationSettings::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    server_url: Option<String>,
    session_cookie: Option<String>,
    request_timeout_secs: Option<u64>,
    stash_path: Option<PathBuf>,
    fade_ms: Option<u64>,
    presentation: Option<PresentationSettings>,
}

pub fn default_stash_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("decomposer")
        .join("stash.json")
}

/// Defaults, then the TOML file, then environment overrides. An explicitly
/// named config file must exist; the default one is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && config_path.is_none() => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(presentation) = file_cfg.presentation {
        settings.presentation = presentation;
    }
    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.session_cookie {
        settings.session_cookie = Some(v);
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout = Some(Duration::from_secs(v));
    }
    if let Some(v) = file_cfg.stash_path {
        settings.stash_path = v;
    }
    if let Some(v) = file_cfg.fade_ms {
        settings.presentation.fade = Duration::from_millis(v);
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DECOMPOSER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = var("DECOMPOSER_SESSION_COOKIE") {
        settings.session_cookie = Some(v);
    }
    if let Some(v) = var("APP__SESSION_COOKIE") {
        settings.session_cookie = Some(v);
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(secs) => settings.request_timeout = Some(Duration::from_secs(secs)),
            Err(_) => tracing::warn!(value = %v, "ignoring invalid APP__REQUEST_TIMEOUT_SECS"),
        }
    }

    if let Some(v) = var("APP__STASH_PATH") {
        settings.stash_path = PathBuf::from(v);
    }

    if let Some(v) = var("APP__FADE_MS") {
        match v.parse::<u64>() {
            Ok(ms) => settings.presentation.fade = Duration::from_millis(ms),
            Err(_) => tracing::warn!(value = %v, "ignoring invalid APP__FADE_MS"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
