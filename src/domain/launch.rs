//! 디버거 실행 설정(launch.json) 문서 모델.
//!
//! 문서는 `serde_json::Value` 그대로 보관해 알 수 없는 키도 저장 시 그대로 유지한다.
//! 엔진이 읽고 쓰는 것은 `configurations[0]`의 추적 키(`EntryKey`)뿐이다.

use std::fmt;

use serde_json::{Map, Value, json};

pub const FORMAT_VERSION: &str = "0.2.0";
pub const CONFIGURATIONS_KEY: &str = "configurations";
pub const PYTHONPATH_KEY: &str = "PYTHONPATH";

const DEFAULT_NAME: &str = "Python Poetry";
const DEFAULT_KIND: &str = "python";
const DEFAULT_REQUEST: &str = "launch";
const DEFAULT_CWD: &str = "${workspaceFolder}";

/// diff 대상이 되는 엔트리 키 집합.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Name,
    Kind,
    Request,
    Module,
    InterpreterPath,
    WorkingDirectory,
    Environment,
    Args,
    JustMyCode,
}

impl EntryKey {
    pub const ALL: [EntryKey; 9] = [
        EntryKey::Name,
        EntryKey::Kind,
        EntryKey::Request,
        EntryKey::Module,
        EntryKey::InterpreterPath,
        EntryKey::WorkingDirectory,
        EntryKey::Environment,
        EntryKey::Args,
        EntryKey::JustMyCode,
    ];

    /// 파일에 기록되는 키 이름.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKey::Name => "name",
            EntryKey::Kind => "type",
            EntryKey::Request => "request",
            EntryKey::Module => "module",
            EntryKey::InterpreterPath => "pythonPath",
            EntryKey::WorkingDirectory => "cwd",
            EntryKey::Environment => "env",
            EntryKey::Args => "args",
            EntryKey::JustMyCode => "justMyCode",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 가상환경 이름 규칙(`<root>/.<name>`)으로 계산한 인터프리터 경로 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLayout {
    env_dir: String,
    interpreter: String,
}

impl EnvLayout {
    /// `root`는 이미 `~` 확장이 끝난 값이어야 한다.
    pub fn new(root: &str, env_name: &str, interpreter: &str) -> Self {
        Self {
            env_dir: format!("{root}/.{env_name}"),
            interpreter: interpreter.to_string(),
        }
    }

    pub fn env_dir(&self) -> &str {
        &self.env_dir
    }

    pub fn interpreter_path(&self) -> String {
        format!("{}/bin/{}", self.env_dir, self.interpreter)
    }

    pub fn site_packages(&self) -> String {
        format!("{}/lib/{}/site-packages", self.env_dir, self.interpreter)
    }
}

/// 검증된 launch.json 문서.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDocument {
    // `configurations` 자리는 Null로 비워두고 직렬화할 때 다시 채운다(키 순서 유지).
    root: Map<String, Value>,
    entry: Map<String, Value>,
    rest: Vec<Value>,
}

impl Default for LaunchDocument {
    fn default() -> Self {
        let mut entry = Map::new();
        entry.insert(EntryKey::Name.as_str().into(), json!(DEFAULT_NAME));
        entry.insert(EntryKey::Kind.as_str().into(), json!(DEFAULT_KIND));
        entry.insert(EntryKey::Request.as_str().into(), json!(DEFAULT_REQUEST));
        entry.insert(EntryKey::Module.as_str().into(), Value::Null);
        entry.insert(EntryKey::InterpreterPath.as_str().into(), Value::Null);
        entry.insert(EntryKey::WorkingDirectory.as_str().into(), json!(DEFAULT_CWD));
        entry.insert(
            EntryKey::Environment.as_str().into(),
            json!({ PYTHONPATH_KEY: null }),
        );
        entry.insert(EntryKey::Args.as_str().into(), json!([]));
        entry.insert(EntryKey::JustMyCode.as_str().into(), json!(true));

        let mut root = Map::new();
        root.insert("version".into(), json!(FORMAT_VERSION));
        root.insert(CONFIGURATIONS_KEY.into(), Value::Null);

        Self {
            root,
            entry,
            rest: Vec::new(),
        }
    }
}

impl LaunchDocument {
    /// JSON 값을 문서로 검증한다. 실패 시 사유 문자열을 돌려준다.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(mut root) = value else {
            return Err("document root must be a JSON object".to_string());
        };
        let Some(configurations) = root.get_mut(CONFIGURATIONS_KEY) else {
            return Err(format!("missing `{CONFIGURATIONS_KEY}` key"));
        };
        let Value::Array(entries) = configurations.take() else {
            return Err(format!("`{CONFIGURATIONS_KEY}` must be an array"));
        };

        let mut entries = entries.into_iter();
        let Some(Value::Object(entry)) = entries.next() else {
            return Err(format!("`{CONFIGURATIONS_KEY}[0]` must be an object"));
        };

        Ok(Self {
            root,
            entry,
            rest: entries.collect(),
        })
    }

    pub fn to_value(&self) -> Value {
        let mut entries = Vec::with_capacity(1 + self.rest.len());
        entries.push(Value::Object(self.entry.clone()));
        entries.extend(self.rest.iter().cloned());

        let mut root = self.root.clone();
        root.insert(CONFIGURATIONS_KEY.into(), Value::Array(entries));
        Value::Object(root)
    }

    /// 엔진이 관리하는 `configurations[0]`.
    pub fn entry(&self) -> &Map<String, Value> {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.entry
    }

    pub fn entry_count(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn get(&self, key: EntryKey) -> Option<&Value> {
        self.entry.get(key.as_str())
    }

    pub fn module(&self) -> Option<&str> {
        self.get(EntryKey::Module).and_then(Value::as_str)
    }

    pub fn interpreter_path(&self) -> Option<&str> {
        self.get(EntryKey::InterpreterPath).and_then(Value::as_str)
    }

    pub fn python_path(&self) -> Option<&str> {
        self.get(EntryKey::Environment)
            .and_then(|env| env.get(PYTHONPATH_KEY))
            .and_then(Value::as_str)
    }

    pub fn set_module(&mut self, module: &str) {
        self.entry
            .insert(EntryKey::Module.as_str().into(), json!(module));
    }

    /// 인터프리터 경로와 `env.PYTHONPATH`를 함께 설정한다.
    pub fn apply_env_layout(&mut self, layout: &EnvLayout) {
        self.entry.insert(
            EntryKey::InterpreterPath.as_str().into(),
            json!(layout.interpreter_path()),
        );

        let env = self
            .entry
            .entry(EntryKey::Environment.as_str())
            .or_insert_with(|| Value::Object(Map::new()));
        if !env.is_object() {
            *env = Value::Object(Map::new());
        }
        if let Value::Object(env) = env {
            env.insert(PYTHONPATH_KEY.into(), json!(layout.site_packages()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_has_single_unset_entry() {
        let doc = LaunchDocument::default();
        assert_eq!(doc.entry_count(), 1);
        assert_eq!(doc.module(), None);
        assert_eq!(doc.interpreter_path(), None);
        assert_eq!(doc.python_path(), None);

        let keys: Vec<&str> = doc.entry().keys().map(String::as_str).collect();
        let expected: Vec<&str> = EntryKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn default_document_serializes_expected_shape() {
        let value = LaunchDocument::default().to_value();
        assert_eq!(value["version"], "0.2.0");
        assert_eq!(value["configurations"][0]["type"], "python");
        assert_eq!(value["configurations"][0]["cwd"], "${workspaceFolder}");
        assert_eq!(value["configurations"][0]["env"]["PYTHONPATH"], Value::Null);
        assert_eq!(value["configurations"][0]["justMyCode"], true);
    }

    #[test]
    fn from_value_keeps_unknown_keys_and_extra_entries() {
        let raw = json!({
            "version": "0.2.0",
            "compounds": [],
            "configurations": [
                { "name": "a", "console": "integratedTerminal" },
                { "name": "b" }
            ]
        });
        let doc = LaunchDocument::from_value(raw.clone()).expect("valid document");
        assert_eq!(doc.entry_count(), 2);
        assert_eq!(doc.to_value(), raw);
    }

    #[test]
    fn from_value_rejects_missing_configurations() {
        let err = LaunchDocument::from_value(json!({ "version": "0.2.0" })).unwrap_err();
        assert!(err.contains("configurations"));

        assert!(LaunchDocument::from_value(json!([1, 2])).is_err());
        assert!(LaunchDocument::from_value(json!({ "configurations": [] })).is_err());
        assert!(LaunchDocument::from_value(json!({ "configurations": {} })).is_err());
    }

    #[test]
    fn env_layout_derives_interpreter_and_site_packages() {
        let layout = EnvLayout::new("/home/dev", "py311", "python3.11");
        assert_eq!(layout.env_dir(), "/home/dev/.py311");
        assert_eq!(layout.interpreter_path(), "/home/dev/.py311/bin/python3.11");
        assert_eq!(
            layout.site_packages(),
            "/home/dev/.py311/lib/python3.11/site-packages"
        );
    }

    #[test]
    fn apply_env_layout_replaces_non_object_env() {
        let mut doc =
            LaunchDocument::from_value(json!({ "configurations": [{ "env": "bogus" }] }))
                .expect("valid document");
        doc.apply_env_layout(&EnvLayout::new("/opt", "venv", "python3"));
        assert_eq!(doc.interpreter_path(), Some("/opt/.venv/bin/python3"));
        assert_eq!(
            doc.python_path(),
            Some("/opt/.venv/lib/python3/site-packages")
        );
    }

    #[test]
    fn entry_key_names_round_trip() {
        for key in EntryKey::ALL {
            assert_eq!(EntryKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(EntryKey::from_name("console"), None);
    }
}
