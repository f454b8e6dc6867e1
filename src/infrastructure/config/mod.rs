//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 환경변수와 CLI 인자를 얹어 실행 파라미터를 만든다.

mod inspection;
mod loader;
mod resolve;
mod utils;

use anyhow::Result;

pub use inspection::SettingsInspection;
pub use loader::{SETTINGS_ENV, settings_paths};
pub use resolve::{
    ENV_ENV_NAME, ENV_ENV_ROOT, ENV_LAUNCH_JSON, ENV_LAUNCH_MODULE, ENV_PYTHON, resolve_launch,
    resolve_launch_with,
};
pub use utils::expand_home;

use crate::application::config::{ResolvedLaunch, Settings};
use crate::domain::params::RunOptions;

impl Settings {
    /// 병합된 최종 설정을 로딩한다.
    pub fn load() -> Result<Self> {
        Ok(loader::load_merged_settings()?.settings)
    }

    /// 설정 파일 + 환경변수 + 실행 옵션으로 실행 파라미터를 해석한다.
    /// `use_defaults`가 꺼져 있으면 설정 파일을 읽지 않는다.
    pub fn resolve(options: &RunOptions) -> Result<ResolvedLaunch> {
        let settings = if options.use_defaults {
            Self::load()?
        } else {
            Self::default()
        };
        Ok(resolve_launch(options, &settings))
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect() -> Result<SettingsInspection> {
        let loaded = loader::load_merged_settings()?;
        Ok(SettingsInspection::from_loaded(loaded))
    }

    /// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn inspect_pretty_json() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::inspect()?)?)
    }
}
