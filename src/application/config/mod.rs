//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::params::LaunchParams;

pub const DEFAULT_LAUNCH_JSON: &str = ".vscode/launch.json";
pub const DEFAULT_MODULE: &str = "app";
pub const DEFAULT_ENV_ROOT: &str = "~";
pub const DEFAULT_ENV_NAME: &str = "py311";
pub const DEFAULT_PYTHON: &str = "python3.11";

/// 사용자 설정 파일(JSON) 스키마. 모든 필드는 선택이다.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// launch.json 저장 경로
    pub launch_json: Option<String>,
    /// 실행할 모듈(dotted path)
    pub module: Option<String>,
    /// 가상환경 루트(`~` 허용)
    pub env_root: Option<String>,
    /// 가상환경 이름(`<root>/.<name>`)
    pub env_name: Option<String>,
    /// 인터프리터 실행 파일 이름
    pub python: Option<String>,
}

impl Settings {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Settings) {
        if other.launch_json.is_some() {
            self.launch_json = other.launch_json;
        }
        if other.module.is_some() {
            self.module = other.module;
        }
        if other.env_root.is_some() {
            self.env_root = other.env_root;
        }
        if other.env_name.is_some() {
            self.env_name = other.env_name;
        }
        if other.python.is_some() {
            self.python = other.python;
        }
    }
}

/// 값 하나의 최종 해석 결과와 출처(arg/env:NAME/settings/default).
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Resolved {
    pub value: Option<String>,
    pub source: Option<String>,
}

impl Resolved {
    pub fn new(value: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            source: Some(source.into()),
        }
    }
}

/// 우선순위(arg > env > settings > default)를 적용한 실행 파라미터.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ResolvedLaunch {
    pub launch_json: Resolved,
    pub module: Resolved,
    pub env_root: Resolved,
    pub env_name: Resolved,
    pub python: Resolved,
}

impl ResolvedLaunch {
    pub fn launch_json_path(&self) -> PathBuf {
        PathBuf::from(
            self.launch_json
                .value
                .as_deref()
                .unwrap_or(DEFAULT_LAUNCH_JSON),
        )
    }

    pub fn params(&self) -> LaunchParams {
        LaunchParams {
            module: self.module.value.clone(),
            env_root: self.env_root.value.clone(),
            env_name: self.env_name.value.clone(),
            interpreter: self.python.value.clone(),
        }
    }
}
