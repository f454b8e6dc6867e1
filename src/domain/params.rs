//! launch 설정 생성 파라미터와 실행 옵션.

use std::path::PathBuf;

/// 스냅샷 생성(build)에 쓰는 파라미터. 빈 문자열은 미지정으로 본다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParams {
    pub module: Option<String>,
    pub env_root: Option<String>,
    pub env_name: Option<String>,
    pub interpreter: Option<String>,
}

impl LaunchParams {
    pub fn module(&self) -> Option<&str> {
        non_empty(self.module.as_deref())
    }

    /// 세 값이 모두 있을 때만 (root, name, interpreter)를 돌려준다.
    pub fn env_group(&self) -> Option<(&str, &str, &str)> {
        Some((
            non_empty(self.env_root.as_deref())?,
            non_empty(self.env_name.as_deref())?,
            non_empty(self.interpreter.as_deref())?,
        ))
    }
}

/// CLI에서 넘어온 실행 옵션(명시 인자만 담는다).
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub launch_json: Option<PathBuf>,
    pub params: LaunchParams,
    /// false면 설정 파일/내장 기본값을 건너뛴다(저장 경로 제외).
    pub use_defaults: bool,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(root: &str, name: &str, interpreter: &str) -> LaunchParams {
        LaunchParams {
            module: None,
            env_root: Some(root.into()),
            env_name: Some(name.into()),
            interpreter: Some(interpreter.into()),
        }
    }

    #[test]
    fn env_group_requires_all_three() {
        assert_eq!(
            params("~", "py311", "python3.11").env_group(),
            Some(("~", "py311", "python3.11"))
        );
        assert_eq!(params("", "py311", "python3.11").env_group(), None);
        assert_eq!(params("~", "", "python3.11").env_group(), None);
        assert_eq!(params("~", "py311", "").env_group(), None);
        assert_eq!(LaunchParams::default().env_group(), None);
    }

    #[test]
    fn empty_module_counts_as_unset() {
        let mut p = LaunchParams::default();
        p.module = Some(String::new());
        assert_eq!(p.module(), None);
        p.module = Some("pkg.main".into());
        assert_eq!(p.module(), Some("pkg.main"));
    }
}
