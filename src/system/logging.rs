// Logging - 파일 기반 tracing 초기화
//
// TUI가 stdout을 점유하므로 로그는 항상 파일로만 기록합니다.

use crate::core::boundary::{is_guarding, panic_message};
use crate::utils::error::{Result, ZelError};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// 로그 필터 환경변수 (기본값: info)
pub const LOG_FILTER_ENV: &str = "ZELDASH_LOG";
/// 로그 파일 경로 환경변수
pub const LOG_FILE_ENV: &str = "ZELDASH_LOG_FILE";

const DEFAULT_FILTER: &str = "info";

/// 로그 파일 경로 결정
pub fn log_file_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var(LOG_FILE_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::data_local_dir().map(|dir| dir.join("zeldash").join("zeldash.log"))
}

/// tracing 구독자 초기화
///
/// 로그 경로를 결정할 수 없으면 로깅 없이 진행합니다 (`Ok(None)`).
pub fn init_logging() -> Result<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| ZelError::Config(format!("failed to initialize logging: {}", e)))?;

    Ok(Some(path))
}

/// 패닉 훅 설치
///
/// 에러 경계 안의 패닉은 경계가 처리하므로 로그만 남깁니다.
/// 그 밖의 패닉은 터미널을 복원한 뒤 이전 훅(기본: stderr 출력)으로 넘깁니다.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = panic_message(info.payload());

        if is_guarding() {
            tracing::error!(panic = %message, %location, "panic inside error boundary");
            return;
        }

        restore_terminal();
        tracing::error!(panic = %message, %location, "panic raised");
        previous(info);
    }));
}

/// raw 모드와 대체 화면 해제 (best effort)
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}
