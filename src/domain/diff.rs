//! 두 launch 엔트리의 키 단위 비교.

use std::fmt;

use serde_json::{Map, Value};

use super::error::LaunchError;
use super::launch::EntryKey;

/// 값이 서로 다른 추적 키 하나.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDiff {
    pub key: EntryKey,
    pub ours: Value,
    pub theirs: Value,
}

impl FieldDiff {
    /// 양쪽 문자열 값의 글자 수 합. 문자열이 아닌 값은 0으로 친다.
    pub fn weight(&self) -> usize {
        string_len(&self.ours) + string_len(&self.theirs)
    }

    pub fn ours_text(&self) -> String {
        display_value(&self.ours)
    }

    pub fn theirs_text(&self) -> String {
        display_value(&self.theirs)
    }
}

impl fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.key, self.ours_text(), self.theirs_text())
    }
}

/// 수신측 엔트리의 키 순서대로 차이를 내놓는 지연 iterator.
///
/// 한 번 소비하면 다시 시작할 수 없다.
pub struct LaunchDiff<'a> {
    ours: serde_json::map::Iter<'a>,
    theirs: &'a Map<String, Value>,
}

impl Iterator for LaunchDiff<'_> {
    type Item = FieldDiff;

    fn next(&mut self) -> Option<FieldDiff> {
        for (name, value) in self.ours.by_ref() {
            let Some(key) = EntryKey::from_name(name) else {
                continue;
            };
            let Some(other) = self.theirs.get(name) else {
                continue;
            };
            if other != value {
                return Some(FieldDiff {
                    key,
                    ours: value.clone(),
                    theirs: other.clone(),
                });
            }
        }
        None
    }
}

/// 두 엔트리를 비교한다.
///
/// 수신측에 있는 추적 키가 상대측에 없으면 첫 결과를 내기 전에 `MissingKey`로 실패한다.
pub fn diff_entries<'a>(
    ours: &'a Map<String, Value>,
    theirs: &'a Map<String, Value>,
) -> Result<LaunchDiff<'a>, LaunchError> {
    if let Some(missing) = ours
        .keys()
        .filter(|name| EntryKey::from_name(name).is_some())
        .find(|name| !theirs.contains_key(name.as_str()))
    {
        return Err(LaunchError::MissingKey(missing.clone()));
    }

    Ok(LaunchDiff {
        ours: ours.iter(),
        theirs,
    })
}

/// 차이 목록의 문자열 길이 합(비권위적 크기 비교용).
pub fn magnitude<I>(diffs: I) -> usize
where
    I: IntoIterator<Item = FieldDiff>,
{
    diffs.into_iter().map(|d| d.weight()).sum()
}

fn string_len(value: &Value) -> usize {
    value.as_str().map(|s| s.chars().count()).unwrap_or(0)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "<unset>".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
