// Loading indicator - 페이지 전환 및 데이터 동기화 로딩 표시
//
// 표시 기간과 "오래 걸림" 안내까지의 타임아웃, 두 개의 시점만 가집니다.
// 표시가 끝나거나 다른 표시로 교체되면 안내도 함께 사라집니다.

use std::time::{Duration, Instant};

/// 페이지 전환 로딩 표시 시간
pub const PAGE_LOAD_DURATION: Duration = Duration::from_millis(180);
/// 창고 센서 동기화 시간
pub const STORAGE_SYNC_DURATION: Duration = Duration::from_secs(4);
/// "오래 걸림" 안내 타임아웃
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(3);

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const SPINNER_FRAME_MS: u128 = 80;

/// 로딩이 끝났을 때 이어서 처리할 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingTask {
    PageSwitch,
    StorageSync,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    pub task: LoadingTask,
    pub message: String,
    started_at: Instant,
    ready_at: Instant,
    /// None이면 타임아웃 안내 없음
    timeout_at: Option<Instant>,
}

impl LoadingIndicator {
    pub fn start(
        task: LoadingTask,
        message: impl Into<String>,
        now: Instant,
        duration: Duration,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            task,
            message: message.into(),
            started_at: now,
            ready_at: now + duration,
            timeout_at: timeout.map(|t| now + t),
        }
    }

    /// 페이지 전환용 기본 로딩 표시
    pub fn page(now: Instant) -> Self {
        Self::start(
            LoadingTask::PageSwitch,
            "Loading...",
            now,
            PAGE_LOAD_DURATION,
            Some(LOAD_TIMEOUT),
        )
    }

    /// 창고 센서 데이터 동기화
    pub fn storage_sync(now: Instant) -> Self {
        Self::start(
            LoadingTask::StorageSync,
            "Syncing storage sensors...",
            now,
            STORAGE_SYNC_DURATION,
            Some(LOAD_TIMEOUT),
        )
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ready_at
    }

    /// 타임아웃 안내 표시 여부 (표시가 끝나면 false)
    pub fn is_overdue(&self, now: Instant) -> bool {
        !self.is_finished(now) && self.timeout_at.is_some_and(|at| now >= at)
    }

    pub fn spinner_frame(&self, now: Instant) -> &'static str {
        let elapsed = now.saturating_duration_since(self.started_at).as_millis();
        let index = (elapsed / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finishes_after_duration() {
        let now = Instant::now();
        let indicator = LoadingIndicator::page(now);

        assert!(!indicator.is_finished(now));
        assert!(indicator.is_finished(now + PAGE_LOAD_DURATION));
    }

    #[test]
    fn test_page_switch_finishes_before_hint() {
        let now = Instant::now();
        let indicator = LoadingIndicator::page(now);

        assert!(!indicator.is_overdue(now + LOAD_TIMEOUT));
    }

    #[test]
    fn test_storage_sync_shows_hint_while_visible() {
        let now = Instant::now();
        let indicator = LoadingIndicator::storage_sync(now);

        assert!(!indicator.is_overdue(now + Duration::from_millis(2999)));
        assert!(indicator.is_overdue(now + LOAD_TIMEOUT));
        assert!(!indicator.is_finished(now + Duration::from_millis(3500)));
        assert!(!indicator.is_overdue(now + STORAGE_SYNC_DURATION));
    }

    #[test]
    fn test_no_timeout_never_overdue() {
        let now = Instant::now();
        let indicator = LoadingIndicator::start(
            LoadingTask::PageSwitch,
            "Loading...",
            now,
            Duration::from_secs(10),
            None,
        );

        assert!(!indicator.is_overdue(now + Duration::from_secs(5)));
    }

    #[test]
    fn test_spinner_frames_advance() {
        let now = Instant::now();
        let indicator = LoadingIndicator::page(now);

        assert_eq!(indicator.spinner_frame(now), SPINNER_FRAMES[0]);
        assert_eq!(
            indicator.spinner_frame(now + Duration::from_millis(85)),
            SPINNER_FRAMES[1]
        );
    }
}
