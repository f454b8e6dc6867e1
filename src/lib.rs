//! launchset library root.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::usecases::set_launch::LaunchOutcome;
use domain::params::RunOptions;
use interface::composition::AppComposition;

pub use domain::error::LaunchError;
pub use infrastructure::snapshot::{DiffSource, LaunchSnapshot};

/// 라이브러리 직접 호출용 실행 함수.
pub fn run(options: RunOptions) -> Result<LaunchOutcome> {
    let composition = AppComposition::default();
    composition.set_launch_usecase().execute(options)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
