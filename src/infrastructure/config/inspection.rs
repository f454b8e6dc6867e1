//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedSettings;
use super::resolve::resolve_launch;
use crate::application::config::{ResolvedLaunch, Settings};
use crate::domain::params::{LaunchParams, RunOptions};

#[derive(Debug, Clone, Serialize)]
pub struct SettingsInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub settings: Settings,
    /// CLI 인자 없이 해석한 최종 값과 출처
    pub effective: ResolvedLaunch,
}

impl SettingsInspection {
    pub(crate) fn from_loaded(loaded: LoadedSettings) -> Self {
        let options = RunOptions {
            launch_json: None,
            params: LaunchParams::default(),
            use_defaults: true,
        };
        let effective = resolve_launch(&options, &loaded.settings);

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            settings: loaded.settings,
            effective,
        }
    }
}
