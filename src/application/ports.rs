//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

use crate::application::config::ResolvedLaunch;
use crate::domain::diff::FieldDiff;
use crate::domain::params::RunOptions;

/// 사용자 설정 로딩/해석을 담당하는 저장소 포트.
pub trait SettingsRepository: Send + Sync {
    /// CLI 인자 > 환경변수 > 설정 파일 > 내장 기본값 순으로 실행 파라미터를 결정한다.
    fn resolve(&self, options: &RunOptions) -> Result<ResolvedLaunch>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn change(&self, diff: &FieldDiff);
    fn raw(&self, line: &str);
}
