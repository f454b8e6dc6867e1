//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::{ResolvedLaunch, Settings};
use crate::application::ports::SettingsRepository;
use crate::domain::params::RunOptions;

/// JSON 기반 설정 저장소 어댑터.
pub struct JsonSettingsRepository;

impl SettingsRepository for JsonSettingsRepository {
    fn resolve(&self, options: &RunOptions) -> Result<ResolvedLaunch> {
        Settings::resolve(options)
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Settings::inspect_pretty_json()
    }
}
