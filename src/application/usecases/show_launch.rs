//! 저장된 launch.json을 그대로 보여주는 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::SettingsRepository;
use crate::domain::params::RunOptions;
use crate::infrastructure::snapshot::LaunchSnapshot;

pub struct ShowLaunchUseCase<'a> {
    pub settings_repo: &'a dyn SettingsRepository,
}

impl<'a> ShowLaunchUseCase<'a> {
    /// 해석된 저장 경로의 문서를 pretty JSON으로 반환한다.
    pub fn execute(&self, options: RunOptions) -> Result<String> {
        let path = self.settings_repo.resolve(&options)?.launch_json_path();
        let snapshot = LaunchSnapshot::open(&path)
            .with_context(|| format!("cannot show {}", path.display()))?;
        Ok(snapshot.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::application::config::{Resolved, ResolvedLaunch};
    use crate::domain::params::LaunchParams;

    struct PathOnly(String);

    impl SettingsRepository for PathOnly {
        fn resolve(&self, _options: &RunOptions) -> Result<ResolvedLaunch> {
            Ok(ResolvedLaunch {
                launch_json: Resolved::new(self.0.clone(), "arg"),
                ..ResolvedLaunch::default()
            })
        }

        fn inspect_pretty_json(&self) -> Result<String> {
            Ok(String::new())
        }
    }

    fn options() -> RunOptions {
        RunOptions {
            launch_json: None,
            params: LaunchParams::default(),
            use_defaults: true,
        }
    }

    #[test]
    fn renders_stored_document() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("launch.json");
        fs::write(
            &path,
            r#"{"version":"0.2.0","configurations":[{"module":"pkg"}]}"#,
        )
        .expect("write");

        let repo = PathOnly(path.display().to_string());
        let shown = ShowLaunchUseCase { settings_repo: &repo }
            .execute(options())
            .expect("show");
        assert!(shown.contains("\"module\": \"pkg\""));
    }

    #[test]
    fn missing_file_is_reported() {
        let tmp = TempDir::new().expect("tmp");
        let repo = PathOnly(tmp.path().join("none.json").display().to_string());
        let err = ShowLaunchUseCase { settings_repo: &repo }
            .execute(options())
            .unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }
}
