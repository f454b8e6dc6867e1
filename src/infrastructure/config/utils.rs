//! 설정 모듈 공용 유틸리티.

use std::path::Path;

/// 선행 `~`(단독 또는 `~/...`)를 사용자 홈 디렉터리로 확장한다.
///
/// 홈 디렉터리를 알 수 없거나 `~user` 형태면 입력을 그대로 돌려준다.
pub fn expand_home(path: &str) -> String {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return path.to_string(),
    };

    match dirs::home_dir() {
        Some(home) => format!("{}{rest}", home.display()),
        None => path.to_string(),
    }
}

/// 경로 목록에서 중복을 제거한다(첫 등장 순서 유지).
pub(crate) fn dedup_paths<P: AsRef<Path>>(paths: Vec<P>) -> Vec<P> {
    let mut out: Vec<P> = Vec::new();
    for p in paths {
        if !out.iter().any(|seen| seen.as_ref() == p.as_ref()) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn expands_bare_tilde_and_tilde_slash() {
        let home = dirs::home_dir().expect("home dir").display().to_string();
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/envs"), format!("{home}/envs"));
    }

    #[test]
    fn leaves_other_paths_untouched() {
        assert_eq!(expand_home("/opt/envs"), "/opt/envs");
        assert_eq!(expand_home("~other/envs"), "~other/envs");
        assert_eq!(expand_home("relative/~"), "relative/~");
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let paths = vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ];
        assert_eq!(dedup_paths(paths), vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
