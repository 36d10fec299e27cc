// Preference storage - 사용자 설정 영속화
//
// 설정은 serde로 직렬화되는 `Settings` 구조체 하나이며 TOML 파일(또는 메모리)에 저장합니다.
// `theme_mode` 키가 없거나 알 수 없는 값이면 "설정되지 않음"으로 취급합니다.

use crate::ui::theme::DisplayMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::{Cell, RefCell};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 설정 파일 경로를 덮어쓰는 환경변수
pub const SETTINGS_FILE_ENV: &str = "ZELDASH_SETTINGS_FILE";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Storage unavailable")]
    Unavailable,
}

/// 영속화되는 사용자 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        default,
        deserialize_with = "lenient_display_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_mode: Option<DisplayMode>,
}

/// 알 수 없는 모드 값은 파일 전체 오류 대신 None으로
fn lenient_display_mode<'de, D>(deserializer: D) -> Result<Option<DisplayMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| DisplayMode::deserialize(v).ok()))
}

/// 설정 저장소
pub trait PreferenceStore {
    /// 설정 읽기 (저장된 것이 없으면 기본값)
    fn load(&self) -> Result<Settings, StorageError>;

    /// 설정 저장
    fn save(&self, settings: &Settings) -> Result<(), StorageError>;
}

/// TOML 파일 기반 저장소
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 기본 설정 파일 경로
    ///
    /// `ZELDASH_SETTINGS_FILE` 환경변수가 우선이며,
    /// 없으면 플랫폼 설정 디렉토리 아래 `zeldash/settings.toml`을 사용합니다.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(SETTINGS_FILE_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("zeldash").join("settings.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for TomlFileStore {
    fn load(&self) -> Result<Settings, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// 메모리 저장소 (설정 경로를 결정할 수 없을 때, 테스트용)
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RefCell<Settings>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모드가 저장된 상태로 생성
    #[cfg(test)]
    pub fn with_mode(mode: DisplayMode) -> Self {
        let store = Self::new();
        store.settings.borrow_mut().theme_mode = Some(mode);
        store
    }

    /// 쓰기 실패 모드 설정 (저장소 불가 상황 재현)
    #[cfg(test)]
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Settings, StorageError> {
        Ok(self.settings.borrow().clone())
    }

    fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable);
        }
        *self.settings.borrow_mut() = settings.clone();
        Ok(())
    }
}
