use std::collections::HashMap;
use std::path::Path;

use crate::EngineError;

/// Mapping from raw key identifiers (`KeyboardEvent.key` values) to spoken
/// names. Lookups are exact; unknown keys translate to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNameMap {
    names: HashMap<String, String>,
}

impl Default for KeyNameMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeyNameMap {
    /// Built-in Korean names for control keys, space and US punctuation.
    pub fn builtin() -> Self {
        let names = BUILTIN_KEY_NAMES
            .iter()
            .map(|&(key, name)| (key.to_string(), name.to_string()))
            .collect();
        Self { names }
    }

    /// Parse a replacement table from JSON.
    ///
    /// The document must contain a `"keys"` object mapping raw key
    /// identifiers to spoken names.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let json: serde_json::Value = serde_json::from_str(json)?;

        let keys_obj = json
            .get("keys")
            .ok_or_else(|| EngineError::KeyTable("Missing 'keys' field".to_string()))?
            .as_object()
            .ok_or_else(|| EngineError::KeyTable("'keys' must be an object".to_string()))?;

        let mut names = HashMap::with_capacity(keys_obj.len());
        for (key, value) in keys_obj {
            if key.is_empty() {
                return Err(EngineError::KeyTable("Empty key identifier".to_string()));
            }
            let name = value.as_str().ok_or_else(|| {
                EngineError::KeyTable(format!("Non-string name for key {key:?}"))
            })?;
            names.insert(key.clone(), name.to_string());
        }

        Ok(Self { names })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load a table from `path`, or fall back to [`KeyNameMap::builtin`] when
    /// the file does not exist. A file that exists but fails to parse is
    /// still an error.
    pub fn load_or_builtin(path: &Path) -> Result<Self, EngineError> {
        if path.exists() {
            log::info!("Loading key names from {}", path.display());
            Self::from_json_file(path)
        } else {
            log::warn!("{} not found, using built-in key names", path.display());
            Ok(Self::builtin())
        }
    }

    /// Spoken name for `raw_key`, or `raw_key` itself when unmapped.
    pub fn translate<'a>(&'a self, raw_key: &'a str) -> &'a str {
        self.get(raw_key).unwrap_or(raw_key)
    }

    pub fn get(&self, raw_key: &str) -> Option<&str> {
        self.names.get(raw_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

const BUILTIN_KEY_NAMES: &[(&str, &str)] = &[
    ("Enter", "엔터"),
    ("Escape", "이스케이프"),
    ("Backspace", "백스페이스"),
    ("Tab", "탭"),
    ("Delete", "삭제"),
    ("ArrowLeft", "왼쪽 화살표"),
    ("ArrowRight", "오른쪽 화살표"),
    ("ArrowUp", "위쪽 화살표"),
    ("ArrowDown", "아래쪽 화살표"),
    ("Home", "홈"),
    ("End", "엔드"),
    ("PageUp", "페이지 업"),
    ("PageDown", "페이지 다운"),
    ("CapsLock", "캡스 락"),
    ("Control", "컨트롤"),
    ("Alt", "알트"),
    ("Shift", "시프트"),
    (" ", "스페이스"),
    ("!", "느낌표"),
    ("@", "골뱅이"),
    ("#", "샵"),
    ("$", "달러"),
    ("%", "퍼센트"),
    ("^", "캐럿"),
    ("&", "앰퍼샌드"),
    ("*", "별표"),
    ("(", "왼쪽 괄호"),
    (")", "오른쪽 괄호"),
    ("-", "마이너스"),
    ("_", "언더스코어"),
    ("+", "플러스"),
    ("=", "등호"),
    ("{", "왼쪽 중괄호"),
    ("}", "오른쪽 중괄호"),
    ("[", "왼쪽 대괄호"),
    ("]", "오른쪽 대괄호"),
    ("|", "파이프"),
    ("\\", "백슬래시"),
    (";", "세미콜론"),
    (":", "콜론"),
    ("'", "작은따옴표"),
    ("\"", "큰따옴표"),
    (",", "쉼표"),
    (".", "마침표"),
    ("<", "작다"),
    (">", "크다"),
    ("/", "슬래시"),
    ("?", "물음표"),
];
