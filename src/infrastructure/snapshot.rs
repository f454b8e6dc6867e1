//! launch.json 스냅샷 엔진.
//!
//! 메모리 문서 하나와 저장 경로를 보관하며 load/save/build/diff/merge를 제공한다.
//! 쓰기는 원자적 rename 없이 덮어쓴다(동시 쓰기 없음을 가정).

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::domain::diff::{FieldDiff, LaunchDiff, diff_entries, magnitude};
use crate::domain::error::LaunchError;
use crate::domain::launch::{CONFIGURATIONS_KEY, EntryKey, EnvLayout, LaunchDocument};
use crate::domain::params::LaunchParams;
use crate::infrastructure::config::expand_home;

/// diff/merge 상대 입력. 스냅샷, 검증된 문서, 또는 원시 JSON 값을 받는다.
#[derive(Debug, Clone, Copy)]
pub enum DiffSource<'a> {
    Snapshot(&'a LaunchSnapshot),
    Document(&'a LaunchDocument),
    Raw(&'a Value),
}

impl<'a> From<&'a LaunchSnapshot> for DiffSource<'a> {
    fn from(value: &'a LaunchSnapshot) -> Self {
        DiffSource::Snapshot(value)
    }
}

impl<'a> From<&'a LaunchDocument> for DiffSource<'a> {
    fn from(value: &'a LaunchDocument) -> Self {
        DiffSource::Document(value)
    }
}

impl<'a> From<&'a Value> for DiffSource<'a> {
    fn from(value: &'a Value) -> Self {
        DiffSource::Raw(value)
    }
}

impl<'a> DiffSource<'a> {
    /// 입력 검증 후 `configurations[0]`을 꺼낸다.
    fn entry(self) -> Result<&'a Map<String, Value>, LaunchError> {
        match self {
            DiffSource::Snapshot(snapshot) => Ok(snapshot.document()?.entry()),
            DiffSource::Document(document) => Ok(document.entry()),
            DiffSource::Raw(value) => {
                let Some(root) = value.as_object() else {
                    return Err(LaunchError::InvalidOther(
                        "expected a JSON object".to_string(),
                    ));
                };
                root.get(CONFIGURATIONS_KEY)
                    .and_then(Value::as_array)
                    .and_then(|entries| entries.first())
                    .and_then(Value::as_object)
                    .ok_or_else(|| {
                        LaunchError::InvalidOther(format!(
                            "expected a `{CONFIGURATIONS_KEY}` array with an object entry"
                        ))
                    })
            }
        }
    }
}

/// launch.json 문서 하나를 소유하는 스냅샷.
#[derive(Debug, Clone, Default)]
pub struct LaunchSnapshot {
    path: Option<PathBuf>,
    document: Option<LaunchDocument>,
}

impl LaunchSnapshot {
    /// 문서 없이 저장 경로만 지정한다.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            document: None,
        }
    }

    /// 경로의 문서를 읽어 스냅샷을 만든다.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LaunchError> {
        let mut snapshot = Self::default();
        snapshot.load(path)?;
        Ok(snapshot)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn document(&self) -> Result<&LaunchDocument, LaunchError> {
        self.document.as_ref().ok_or(LaunchError::Empty)
    }

    /// 문서를 읽어 메모리 문서와 저장 경로를 교체한다.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, LaunchError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LaunchError::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::InvalidData => {
                LaunchError::parse(Some(path.to_path_buf()), source.to_string())
            }
            _ => LaunchError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| LaunchError::parse(Some(path.to_path_buf()), e.to_string()))?;
        let document = LaunchDocument::from_value(value)
            .map_err(|reason| LaunchError::parse(Some(path.to_path_buf()), reason))?;

        debug!(path = %path.display(), entries = document.entry_count(), "loaded launch configuration");
        self.document = Some(document);
        self.path = Some(path.to_path_buf());
        Ok(self)
    }

    /// 보관 중인 경로에 저장한다.
    pub fn save(&self) -> Result<(), LaunchError> {
        let path = self.path.as_deref().ok_or(LaunchError::NotSet)?;
        write_document(path, self.document()?)
    }

    /// 지정 경로에 저장하고 저장 경로를 갱신한다.
    pub fn save_to(&mut self, path: impl Into<PathBuf>) -> Result<(), LaunchError> {
        self.path = Some(path.into());
        self.save()
    }

    /// 기본 문서에서 새로 시작해 파라미터를 반영한다.
    ///
    /// 가상환경 세 값(root/name/interpreter)은 모두 있을 때만 함께 적용된다.
    pub fn build(&mut self, params: &LaunchParams) -> &mut Self {
        let mut document = LaunchDocument::default();

        if let Some(module) = params.module() {
            document.set_module(module);
            debug!(module, "using module");
        }

        if let Some((root, env_name, interpreter)) = params.env_group() {
            let root = expand_home(root);
            let layout = EnvLayout::new(&root, env_name, interpreter);
            document.apply_env_layout(&layout);
            debug!(python_path = %layout.interpreter_path(), "using python path");
        }

        self.document = Some(document);
        self
    }

    /// 수신측 엔트리 키 순서대로 값이 다른 추적 키를 돌려준다.
    pub fn diff<'s, 'o: 's>(
        &'s self,
        other: impl Into<DiffSource<'o>>,
    ) -> Result<LaunchDiff<'s>, LaunchError> {
        let theirs = other.into().entry()?;
        diff_entries(self.document()?.entry(), theirs)
    }

    /// 상대 엔트리의 추적 키 중 수신측에 이미 있는 키만 덮어쓴다. 새 키는 추가하지 않는다.
    ///
    /// 추적하지 않는 키(`console` 등)는 diff에 나타나지 않으므로 건드리지 않는다.
    pub fn merge_from<'a>(
        &mut self,
        other: impl Into<DiffSource<'a>>,
    ) -> Result<&mut Self, LaunchError> {
        let theirs = other.into().entry()?;
        self.update_keys(
            theirs
                .iter()
                .filter(|(k, _)| EntryKey::from_name(k).is_some())
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    /// 수신측 엔트리에 존재하는 키만 주어진 값으로 갱신한다.
    pub fn update_keys<I>(&mut self, pairs: I) -> Result<&mut Self, LaunchError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let document = self.document.as_mut().ok_or(LaunchError::Empty)?;
        let entry = document.entry_mut();
        for (key, value) in pairs {
            if let Some(slot) = entry.get_mut(&key) {
                *slot = value;
            }
        }
        Ok(self)
    }

    /// 차이가 있으면 병합 후 저장한다. 저장 여부와 관계없이 차이 목록을 돌려준다.
    pub fn diff_and_persist<'a>(
        &mut self,
        other: impl Into<DiffSource<'a>>,
    ) -> Result<Vec<FieldDiff>, LaunchError> {
        let other = other.into();
        let diffs: Vec<FieldDiff> = self.diff(other)?.collect();

        if !diffs.is_empty() {
            self.merge_from(other)?;
            self.save()?;
            if let Some(path) = self.path() {
                info!(path = %path.display(), changed = diffs.len(), "updated launch configuration");
            }
        }

        Ok(diffs)
    }

    /// 차이가 하나도 없으면 같은 설정으로 본다.
    pub fn is_equivalent<'o>(&self, other: impl Into<DiffSource<'o>>) -> Result<bool, LaunchError> {
        Ok(self.diff(other)?.next().is_none())
    }

    /// 차이 나는 문자열 길이 합이 0보다 큰지 여부. 순서 관계가 아닌 편의 판정이다.
    pub fn outweighs<'o>(&self, other: impl Into<DiffSource<'o>>) -> Result<bool, LaunchError> {
        Ok(magnitude(self.diff(other)?) > 0)
    }
}

impl fmt::Display for LaunchSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.document {
            Some(document) => write!(f, "{:#}", document.to_value()),
            None => f.write_str("null"),
        }
    }
}

fn write_document(path: &Path, document: &LaunchDocument) -> Result<(), LaunchError> {
    let io_err = |source| LaunchError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let rendered = format!("{:#}\n", document.to_value());
    fs::write(path, rendered).map_err(io_err)?;
    debug!(path = %path.display(), "saved launch configuration");
    Ok(())
}
