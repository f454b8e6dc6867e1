//! launch.json 스냅샷 엔진의 오류 분류.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// 저장 경로에 파일이 없다. 호출자는 "최초 실행"으로 해석한다.
    #[error("launch configuration not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 문법 오류 또는 `configurations` 스키마 누락.
    #[error("failed to parse launch configuration{}: {reason}", location(path))]
    Parse {
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("no storage path is set for this launch configuration")]
    NotSet,

    /// diff/merge 대상이 스냅샷도, `configurations`를 가진 객체도 아니다.
    #[error("invalid launch configuration to compare against: {0}")]
    InvalidOther(String),

    #[error("launch configuration to compare against is missing key `{0}`")]
    MissingKey(String),

    #[error("no launch configuration is loaded or built")]
    Empty,
}

impl LaunchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LaunchError::NotFound { .. })
    }

    pub(crate) fn parse(path: Option<PathBuf>, reason: impl Into<String>) -> Self {
        LaunchError::Parse {
            path,
            reason: reason.into(),
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}
