// Host environment - 터미널/OS 환경 정보
//
// 호스트의 색상 구성 선호도와 진단용 환경 식별자를 제공합니다.

use crate::ui::theme::DisplayMode;
use std::env;
use std::fmt;

/// 색상 구성 선호도를 직접 지정하는 환경변수 (`light` / `dark`)
pub const COLOR_SCHEME_ENV: &str = "ZELDASH_COLOR_SCHEME";

/// 호스트 환경의 색상 구성 선호도 조회
///
/// `ZELDASH_COLOR_SCHEME`이 우선이며, 없으면 `COLORFGBG` 관례를 따릅니다.
/// 판단할 수 없으면 `None`.
pub fn preferred_color_scheme() -> Option<DisplayMode> {
    if let Ok(value) = env::var(COLOR_SCHEME_ENV) {
        if let Ok(mode) = value.parse::<DisplayMode>() {
            return Some(mode);
        }
    }
    env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
}

/// `COLORFGBG` 값("fg;bg" 또는 "fg;default;bg")에서 배경색으로 모드 추정
///
/// 배경 인덱스 0-6, 8은 어두운 색, 7, 9-15는 밝은 색으로 봅니다.
pub fn parse_colorfgbg(value: &str) -> Option<DisplayMode> {
    let bg = value.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    match index {
        0..=6 | 8 => Some(DisplayMode::Dark),
        7 | 9..=15 => Some(DisplayMode::Light),
        _ => None,
    }
}

/// 진단 레코드에 첨부되는 환경 식별자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentInfo {
    /// 현재 화면 경로 (예: "/polyhouse")
    pub route: String,
    /// 앱 버전
    pub app_version: &'static str,
    /// 운영체제
    pub os: &'static str,
    /// 터미널 종류 (`TERM`)
    pub terminal: Option<String>,
    /// 터미널 크기
    pub terminal_size: (u16, u16),
}

impl EnvironmentInfo {
    /// 현재 프로세스 환경에서 수집
    pub fn capture(route: &str, terminal_size: (u16, u16)) -> Self {
        Self {
            route: route.to_string(),
            app_version: env!("CARGO_PKG_VERSION"),
            os: env::consts::OS,
            terminal: env::var("TERM").ok().filter(|t| !t.trim().is_empty()),
            terminal_size,
        }
    }
}

impl fmt::Display for EnvironmentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zeldash/{} ({}; {}; {}x{}) at {}",
            self.app_version,
            self.os,
            self.terminal.as_deref().unwrap_or("unknown"),
            self.terminal_size.0,
            self.terminal_size.1,
            self.route
        )
    }
}
