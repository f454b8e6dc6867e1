//! launch.json 생성/갱신 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::{Reporter, SettingsRepository};
use crate::domain::diff::FieldDiff;
use crate::domain::params::RunOptions;
use crate::infrastructure::snapshot::LaunchSnapshot;

/// 실행 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchOutcome {
    /// 기존 파일이 없어 새로 만들었다.
    Created,
    /// 기존 파일과 달라 병합 후 저장했다.
    Updated(Vec<FieldDiff>),
    Unchanged,
}

/// 파라미터 해석 -> 기존 설정 로딩 -> 새 설정 생성 -> diff/병합/저장 흐름을 조율한다.
pub struct SetLaunchUseCase<'a> {
    pub settings_repo: &'a dyn SettingsRepository,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SetLaunchUseCase<'a> {
    pub fn execute(&self, options: RunOptions) -> Result<LaunchOutcome> {
        let resolved = self.settings_repo.resolve(&options)?;
        let path = resolved.launch_json_path();
        let params = resolved.params();

        self.reporter
            .raw("Setting the launch module and python path for the current project.");
        self.reporter.section("Launch");
        self.reporter.kv("Config", &path.display().to_string());

        let mut fresh = LaunchSnapshot::at(&path);
        fresh.build(&params);

        let built = fresh.document()?;
        if let Some(module) = built.module() {
            self.reporter.kv("Module", module);
        }
        if let Some(python) = built.interpreter_path() {
            self.reporter.kv("Python", python);
        }

        let mut prior = match LaunchSnapshot::open(&path) {
            Ok(prior) => prior,
            Err(err) if err.is_not_found() => {
                fresh
                    .save()
                    .with_context(|| format!("failed to create {}", path.display()))?;
                self.reporter
                    .status("created", &format!("wrote {}", path.display()));
                return Ok(LaunchOutcome::Created);
            }
            Err(err) => return Err(err.into()),
        };

        let diffs = prior
            .diff_and_persist(&fresh)
            .with_context(|| format!("failed to update {}", path.display()))?;

        if diffs.is_empty() {
            self.reporter.status("ok", "No changes needed.");
            return Ok(LaunchOutcome::Unchanged);
        }

        self.reporter
            .status("updated", &format!("{} field(s) changed", diffs.len()));
        for diff in &diffs {
            self.reporter.change(diff);
        }
        Ok(LaunchOutcome::Updated(diffs))
    }
}
