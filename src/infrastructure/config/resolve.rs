//! 실행 파라미터 우선순위 해석(arg > env > settings > default).
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::{
    DEFAULT_ENV_NAME, DEFAULT_ENV_ROOT, DEFAULT_LAUNCH_JSON, DEFAULT_MODULE, DEFAULT_PYTHON,
    Resolved, ResolvedLaunch, Settings,
};
use crate::domain::params::RunOptions;

pub const ENV_LAUNCH_JSON: &str = "LAUNCHSET_LAUNCH_JSON";
pub const ENV_LAUNCH_MODULE: &str = "LAUNCHSET_LAUNCH_MODULE";
pub const ENV_ENV_ROOT: &str = "LAUNCHSET_ENV_ROOT";
pub const ENV_ENV_NAME: &str = "LAUNCHSET_ENV_NAME";
pub const ENV_PYTHON: &str = "LAUNCHSET_PYTHON";

/// 프로세스 환경변수를 사용해 실행 파라미터를 해석한다.
pub fn resolve_launch(options: &RunOptions, settings: &Settings) -> ResolvedLaunch {
    resolve_launch_with(options, settings, |name| env::var(name).ok())
}

/// 환경변수 조회 함수를 주입받는 해석기.
///
/// `use_defaults`가 false면 settings/내장 기본값을 건너뛰되 저장 경로만은 기본값을 쓴다.
pub fn resolve_launch_with<F>(options: &RunOptions, settings: &Settings, lookup: F) -> ResolvedLaunch
where
    F: Fn(&str) -> Option<String>,
{
    let params = &options.params;
    let launch_json_arg = options
        .launch_json
        .as_ref()
        .map(|p| p.display().to_string());

    let fallback = |configured: &Option<String>, builtin: &str| -> Resolved {
        if !options.use_defaults {
            return Resolved::default();
        }
        match non_empty(configured.as_deref()) {
            Some(v) => Resolved::new(v, "settings"),
            None => Resolved::new(builtin, "default"),
        }
    };

    let launch_json = resolve_field(launch_json_arg.as_deref(), ENV_LAUNCH_JSON, &lookup)
        .unwrap_or_else(|| {
            if options.use_defaults {
                fallback(&settings.launch_json, DEFAULT_LAUNCH_JSON)
            } else {
                Resolved::new(DEFAULT_LAUNCH_JSON, "default")
            }
        });

    ResolvedLaunch {
        launch_json,
        module: resolve_field(params.module.as_deref(), ENV_LAUNCH_MODULE, &lookup)
            .unwrap_or_else(|| fallback(&settings.module, DEFAULT_MODULE)),
        env_root: resolve_field(params.env_root.as_deref(), ENV_ENV_ROOT, &lookup)
            .unwrap_or_else(|| fallback(&settings.env_root, DEFAULT_ENV_ROOT)),
        env_name: resolve_field(params.env_name.as_deref(), ENV_ENV_NAME, &lookup)
            .unwrap_or_else(|| fallback(&settings.env_name, DEFAULT_ENV_NAME)),
        python: resolve_field(params.interpreter.as_deref(), ENV_PYTHON, &lookup)
            .unwrap_or_else(|| fallback(&settings.python, DEFAULT_PYTHON)),
    }
}

/// 명시 인자 -> 환경변수 순으로 첫 번째 비어있지 않은 값을 찾는다.
fn resolve_field<F>(arg: Option<&str>, env_name: &str, lookup: &F) -> Option<Resolved>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = non_empty(arg) {
        return Some(Resolved::new(v, "arg"));
    }

    lookup(env_name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| Resolved::new(v, format!("env:{env_name}")))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;
    use crate::domain::params::LaunchParams;

    fn options(use_defaults: bool) -> RunOptions {
        RunOptions {
            launch_json: None,
            params: LaunchParams::default(),
            use_defaults,
        }
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn builtin_defaults_apply_when_nothing_else_is_set() {
        let resolved = resolve_launch_with(&options(true), &Settings::default(), env_of(&[]));

        assert_eq!(resolved.launch_json, Resolved::new(DEFAULT_LAUNCH_JSON, "default"));
        assert_eq!(resolved.module, Resolved::new(DEFAULT_MODULE, "default"));
        assert_eq!(resolved.env_root, Resolved::new("~", "default"));
        assert_eq!(resolved.env_name, Resolved::new("py311", "default"));
        assert_eq!(resolved.python, Resolved::new("python3.11", "default"));
    }

    #[test]
    fn arg_beats_env_beats_settings() {
        let mut opts = options(true);
        opts.params.module = Some("from_arg".into());
        opts.launch_json = Some(PathBuf::from("custom/launch.json"));

        let settings = Settings {
            module: Some("from_settings".into()),
            env_name: Some("settings_env".into()),
            python: Some("python3.9".into()),
            ..Settings::default()
        };
        let env = env_of(&[
            (ENV_LAUNCH_MODULE, "from_env"),
            (ENV_ENV_NAME, "py312"),
            (ENV_LAUNCH_JSON, "env/launch.json"),
        ]);

        let resolved = resolve_launch_with(&opts, &settings, env);
        assert_eq!(resolved.module, Resolved::new("from_arg", "arg"));
        assert_eq!(
            resolved.env_name,
            Resolved::new("py312", format!("env:{ENV_ENV_NAME}"))
        );
        assert_eq!(resolved.python, Resolved::new("python3.9", "settings"));
        assert_eq!(resolved.launch_json_path(), PathBuf::from("custom/launch.json"));
    }

    #[test]
    fn blank_values_fall_through() {
        let mut opts = options(true);
        opts.params.env_root = Some(String::new());
        let env = env_of(&[(ENV_ENV_ROOT, "   ")]);

        let resolved = resolve_launch_with(&opts, &Settings::default(), env);
        assert_eq!(resolved.env_root, Resolved::new("~", "default"));
    }

    #[test]
    fn disabled_defaults_keep_only_storage_path() {
        let settings = Settings {
            launch_json: Some("settings/launch.json".into()),
            module: Some("from_settings".into()),
            ..Settings::default()
        };
        let env = env_of(&[(ENV_PYTHON, "python3.12")]);

        let resolved = resolve_launch_with(&options(false), &settings, env);
        assert_eq!(resolved.launch_json, Resolved::new(DEFAULT_LAUNCH_JSON, "default"));
        assert_eq!(resolved.module, Resolved::default());
        assert_eq!(resolved.env_root, Resolved::default());
        assert_eq!(
            resolved.python,
            Resolved::new("python3.12", format!("env:{ENV_PYTHON}"))
        );
        assert_eq!(resolved.params().env_group(), None);
    }
}
