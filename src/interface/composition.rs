//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::set_launch::SetLaunchUseCase;
use crate::application::usecases::show_launch::ShowLaunchUseCase;
use crate::infrastructure::adapters::{ConsoleReporter, JsonSettingsRepository};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    settings_repo: JsonSettingsRepository,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            settings_repo: JsonSettingsRepository,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// launch.json 생성/갱신 유스케이스를 생성한다.
    pub fn set_launch_usecase(&self) -> SetLaunchUseCase<'_> {
        SetLaunchUseCase {
            settings_repo: &self.settings_repo,
            reporter: &self.reporter,
        }
    }

    pub fn show_launch_usecase(&self) -> ShowLaunchUseCase<'_> {
        ShowLaunchUseCase {
            settings_repo: &self.settings_repo,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            settings_repo: &self.settings_repo,
        }
    }
}
