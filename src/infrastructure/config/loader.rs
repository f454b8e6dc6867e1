//! 사용자 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::utils::dedup_paths;
use crate::application::config::Settings;

pub const SETTINGS_ENV: &str = "LAUNCHSET_SETTINGS";

#[derive(Debug, Clone)]
pub(crate) struct LoadedSettings {
    pub settings: Settings,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_settings() -> Result<LoadedSettings> {
    load_settings_from(settings_paths())
}

/// 주어진 경로들을 낮은 우선순위 -> 높은 우선순위 순서로 병합한다.
/// 없는 파일은 건너뛴다.
pub(crate) fn load_settings_from(paths: Vec<PathBuf>) -> Result<LoadedSettings> {
    let mut merged = Settings::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings at {}", path.display()))?;
        let parsed: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
        debug!(path = %path.display(), "loaded settings");
    }

    Ok(LoadedSettings {
        settings: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn settings_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("launchset").join("settings.json"));
    }

    paths.push(PathBuf::from(".launchset/settings.json"));

    if let Ok(path) = env::var(SETTINGS_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}
