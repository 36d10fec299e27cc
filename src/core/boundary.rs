//! 에러 경계 (Error Boundary)
//!
//! 페이지 렌더링 실패를 가두어 한 페이지의 실패가 전체 화면을 비우지 않게 합니다.
//!
//! 상태는 `Healthy` ↔ `Failed` 두 가지뿐입니다.
//! - 렌더링 실패(`Err` 반환 또는 패닉) → `Failed`, 발생 횟수 +1, 진단 레코드 전송
//! - `retry()` → `Healthy` (발생 횟수가 1 이하일 때만 허용, 횟수는 유지)
//! - 전체 재시작은 `App` 단위에서 새 경계를 만들어 처리
//!
//! 발생 횟수는 전체 재시작 외에는 절대 줄지 않습니다.
//! 원인이 달라도 횟수는 초기화하지 않습니다.

use crate::system::host::EnvironmentInfo;
use chrono::{DateTime, Utc};
use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use thiserror::Error;

/// 반복 실패 시 안내하는 지원 연락처
pub const SUPPORT_CONTACT: &str = "support@zelbytes.com";

const FALLBACK_TITLE: &str = "Oops! Something went wrong";
const FIRST_FAILURE_MESSAGE: &str = "We apologize for the inconvenience. Please try again.";
const RECURRING_FAILURE_MESSAGE: &str =
    "We're experiencing technical difficulties. Our team has been notified.";

thread_local! {
    /// 경계 안에서 렌더링 중인 깊이
    static GUARD_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// 현재 스레드가 경계 안에서 렌더링 중인지 여부 (패닉 훅이 참조)
pub fn is_guarding() -> bool {
    GUARD_DEPTH.with(|depth| depth.get() > 0)
}

/// 렌더링 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderFailure {
    #[error("render panicked: {0}")]
    Panicked(String),

    #[error("invalid page state: {0}")]
    InvalidState(String),

    #[error("simulated failure: {0}")]
    Simulated(String),
}

/// 실패 시점의 렌더링 컨텍스트 스냅샷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// 실패한 컴포넌트 (페이지 이름)
    pub component: String,
    /// 화면 경로
    pub route: String,
    /// 렌더링 영역 크기
    pub area: (u16, u16),
}

impl RenderContext {
    pub fn new(component: impl Into<String>, route: impl Into<String>, area: (u16, u16)) -> Self {
        Self {
            component: component.into(),
            route: route.into(),
            area,
        }
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in <{}> at {} ({}x{})",
            self.component, self.route, self.area.0, self.area.1
        )
    }
}

/// 경계 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed,
}

impl BoundaryState {
    /// 실패 전이 (어느 상태에서든 Failed)
    pub fn fail(self) -> Self {
        BoundaryState::Failed
    }

    /// 재시도 전이
    pub fn retry(self, record: &FailureRecord) -> (Self, RetryOutcome) {
        match self {
            BoundaryState::Healthy => (BoundaryState::Healthy, RetryOutcome::NotFailed),
            BoundaryState::Failed if record.retry_allowed() => {
                (BoundaryState::Healthy, RetryOutcome::Recovered)
            }
            BoundaryState::Failed => (BoundaryState::Failed, RetryOutcome::Disabled),
        }
    }
}

/// 재시도 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    /// Healthy로 복귀
    Recovered,
    /// 반복 실패로 재시도 불가 (전체 재시작 필요)
    Disabled,
    /// 실패 상태가 아님
    NotFailed,
}

/// 실패 기록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureRecord {
    /// 마지막 실패 원인 (재시도 시 제거)
    pub cause: Option<RenderFailure>,
    /// 마지막 실패 컨텍스트 (재시도 시 제거)
    pub context: Option<RenderContext>,
    /// 누적 발생 횟수
    pub occurrences: u32,
}

impl FailureRecord {
    /// 실패 반영 (횟수 증가)
    pub fn recorded(self, cause: RenderFailure, context: RenderContext) -> Self {
        Self {
            cause: Some(cause),
            context: Some(context),
            occurrences: self.occurrences.saturating_add(1),
        }
    }

    /// 원인 제거 (횟수는 유지)
    pub fn cleared(self) -> Self {
        Self {
            cause: None,
            context: None,
            occurrences: self.occurrences,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.occurrences > 1
    }

    pub fn retry_allowed(&self) -> bool {
        !self.is_recurring()
    }
}

/// 외부 관측 수집기로 보내는 진단 레코드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDiagnostic {
    pub cause: RenderFailure,
    pub context: RenderContext,
    pub occurrence: u32,
    pub timestamp: DateTime<Utc>,
    pub environment: EnvironmentInfo,
}

/// 진단 레코드 수신자 (fire-and-forget)
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &FailureDiagnostic);
}

/// tracing 로그로 진단 레코드를 남기는 기본 수신자
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &FailureDiagnostic) {
        tracing::error!(
            cause = %diagnostic.cause,
            context = %diagnostic.context,
            occurrence = diagnostic.occurrence,
            timestamp = %diagnostic.timestamp.to_rfc3339(),
            route = %diagnostic.environment.route,
            app_version = diagnostic.environment.app_version,
            os = diagnostic.environment.os,
            terminal = diagnostic.environment.terminal.as_deref().unwrap_or("unknown"),
            "render failure captured"
        );
    }
}

/// 대체 화면 내용
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackView {
    pub title: &'static str,
    pub message: &'static str,
    /// 실패 원인 문자열
    pub detail: Option<String>,
    pub retry_enabled: bool,
    /// 반복 실패 시에만 표시
    pub support_contact: Option<&'static str>,
}

/// 에러 경계
pub struct ErrorBoundary {
    state: BoundaryState,
    record: FailureRecord,
    sink: Rc<dyn DiagnosticSink>,
}

impl ErrorBoundary {
    pub fn new(sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            state: BoundaryState::Healthy,
            record: FailureRecord::default(),
            sink,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> BoundaryState {
        self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state == BoundaryState::Failed
    }

    pub fn record(&self) -> &FailureRecord {
        &self.record
    }

    pub fn occurrences(&self) -> u32 {
        self.record.occurrences
    }

    /// 재시도 버튼 활성화 여부
    pub fn retry_enabled(&self) -> bool {
        self.is_failed() && self.record.retry_allowed()
    }

    /// 렌더링 실패 포착
    pub fn capture(
        &mut self,
        cause: RenderFailure,
        context: RenderContext,
        environment: EnvironmentInfo,
    ) {
        self.state = self.state.fail();
        self.record = std::mem::take(&mut self.record).recorded(cause.clone(), context.clone());

        let diagnostic = FailureDiagnostic {
            cause,
            context,
            occurrence: self.record.occurrences,
            timestamp: Utc::now(),
            environment,
        };
        self.sink.report(&diagnostic);
    }

    /// 재시도 (Failed → Healthy)
    pub fn retry(&mut self) -> RetryOutcome {
        let (next, outcome) = self.state.retry(&self.record);
        self.state = next;
        if outcome == RetryOutcome::Recovered {
            self.record = std::mem::take(&mut self.record).cleared();
        }
        outcome
    }

    /// 렌더링 함수를 경계 안에서 실행
    ///
    /// `Err` 반환과 패닉 모두 실패로 포착합니다. 이미 `Failed` 상태면
    /// 렌더링 함수를 호출하지 않습니다. 정상 렌더링 시 `true`.
    pub fn guard<F>(
        &mut self,
        context: RenderContext,
        environment: EnvironmentInfo,
        render: F,
    ) -> bool
    where
        F: FnOnce() -> Result<(), RenderFailure>,
    {
        if self.is_failed() {
            return false;
        }

        GUARD_DEPTH.with(|depth| depth.set(depth.get() + 1));
        let outcome = catch_unwind(AssertUnwindSafe(render));
        GUARD_DEPTH.with(|depth| depth.set(depth.get() - 1));

        let failure = match outcome {
            Ok(Ok(())) => return true,
            Ok(Err(failure)) => failure,
            Err(payload) => RenderFailure::Panicked(panic_message(payload.as_ref())),
        };
        self.capture(failure, context, environment);
        false
    }

    /// 현재 상태의 대체 화면 (Healthy면 None)
    pub fn fallback(&self) -> Option<FallbackView> {
        if !self.is_failed() {
            return None;
        }
        let recurring = self.record.is_recurring();
        Some(FallbackView {
            title: FALLBACK_TITLE,
            message: if recurring {
                RECURRING_FAILURE_MESSAGE
            } else {
                FIRST_FAILURE_MESSAGE
            },
            detail: self.record.cause.as_ref().map(|c| c.to_string()),
            retry_enabled: self.record.retry_allowed(),
            support_contact: recurring.then_some(SUPPORT_CONTACT),
        })
    }
}

/// 패닉 payload를 문자열로 변환
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        reports: RefCell<Vec<FailureDiagnostic>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, diagnostic: &FailureDiagnostic) {
            self.reports.borrow_mut().push(diagnostic.clone());
        }
    }

    fn boundary() -> (Rc<RecordingSink>, ErrorBoundary) {
        let sink = Rc::new(RecordingSink::default());
        let boundary = ErrorBoundary::new(sink.clone());
        (sink, boundary)
    }

    fn context() -> RenderContext {
        RenderContext::new("Polyhouse", "/polyhouse", (80, 20))
    }

    fn environment() -> EnvironmentInfo {
        EnvironmentInfo::capture("/polyhouse", (100, 30))
    }

    fn fail(boundary: &mut ErrorBoundary, message: &str) {
        let message = message.to_string();
        let rendered = boundary.guard(context(), environment(), move || {
            Err(RenderFailure::InvalidState(message))
        });
        assert!(!rendered);
    }

    #[test]
    fn test_starts_healthy() {
        let (_, boundary) = boundary();
        assert_eq!(boundary.state(), BoundaryState::Healthy);
        assert_eq!(boundary.occurrences(), 0);
        assert!(boundary.fallback().is_none());
    }

    #[test]
    fn test_successful_render_stays_healthy() {
        let (sink, mut boundary) = boundary();
        assert!(boundary.guard(context(), environment(), || Ok(())));
        assert_eq!(boundary.state(), BoundaryState::Healthy);
        assert!(sink.reports.borrow().is_empty());
    }

    #[test]
    fn test_first_failure() {
        let (sink, mut boundary) = boundary();
        fail(&mut boundary, "x");

        assert_eq!(boundary.state(), BoundaryState::Failed);
        assert_eq!(boundary.occurrences(), 1);
        assert!(boundary.retry_enabled());

        let view = boundary.fallback().unwrap();
        assert_eq!(view.message, FIRST_FAILURE_MESSAGE);
        assert_eq!(view.detail.as_deref(), Some("invalid page state: x"));
        assert!(view.retry_enabled);
        assert_eq!(view.support_contact, None);

        let reports = sink.reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].occurrence, 1);
        assert_eq!(reports[0].context, context());
        assert_eq!(reports[0].environment.route, "/polyhouse");
    }

    #[test]
    fn test_retry_after_first_failure() {
        let (_, mut boundary) = boundary();
        fail(&mut boundary, "x");

        assert_eq!(boundary.retry(), RetryOutcome::Recovered);
        assert_eq!(boundary.state(), BoundaryState::Healthy);
        assert_eq!(boundary.record().cause, None);
        assert_eq!(boundary.record().context, None);
        assert_eq!(boundary.occurrences(), 1);
    }

    #[test]
    fn test_second_failure_disables_retry() {
        let (sink, mut boundary) = boundary();
        fail(&mut boundary, "x");
        boundary.retry();
        fail(&mut boundary, "y");

        assert_eq!(boundary.occurrences(), 2);
        assert!(!boundary.retry_enabled());

        let view = boundary.fallback().unwrap();
        assert_eq!(view.message, RECURRING_FAILURE_MESSAGE);
        assert!(!view.retry_enabled);
        assert_eq!(view.support_contact, Some(SUPPORT_CONTACT));

        assert_eq!(boundary.retry(), RetryOutcome::Disabled);
        assert_eq!(boundary.state(), BoundaryState::Failed);
        assert_eq!(boundary.occurrences(), 2);
        assert_eq!(sink.reports.borrow().len(), 2);
    }

    #[test]
    fn test_different_cause_does_not_reset_counter() {
        let (_, mut boundary) = boundary();
        fail(&mut boundary, "x");
        boundary.retry();
        let rendered = boundary.guard(context(), environment(), || {
            Err(RenderFailure::Simulated("other".to_string()))
        });

        assert!(!rendered);
        assert_eq!(boundary.occurrences(), 2);
    }

    #[test]
    fn test_retry_when_healthy_is_noop() {
        let (_, mut boundary) = boundary();
        assert_eq!(boundary.retry(), RetryOutcome::NotFailed);
        assert_eq!(boundary.occurrences(), 0);
    }

    #[test]
    fn test_panic_is_captured() {
        let (sink, mut boundary) = boundary();
        let rendered = boundary.guard(context(), environment(), || -> Result<(), RenderFailure> {
            panic!("boom");
        });

        assert!(!rendered);
        assert_eq!(
            boundary.record().cause,
            Some(RenderFailure::Panicked("boom".to_string()))
        );
        assert_eq!(sink.reports.borrow().len(), 1);
    }

    #[test]
    fn test_guarding_flag_scoped_to_render() {
        let (_, mut boundary) = boundary();
        assert!(!is_guarding());

        let mut seen = false;
        boundary.guard(context(), environment(), || {
            seen = is_guarding();
            Ok(())
        });
        assert!(seen);
        assert!(!is_guarding());

        boundary.guard(context(), environment(), || -> Result<(), RenderFailure> {
            panic!("boom");
        });
        assert!(!is_guarding());
    }

    #[test]
    fn test_failed_boundary_skips_render() {
        let (_, mut boundary) = boundary();
        fail(&mut boundary, "x");

        let mut called = false;
        let rendered = boundary.guard(context(), environment(), || {
            called = true;
            Ok(())
        });

        assert!(!rendered);
        assert!(!called);
        assert_eq!(boundary.occurrences(), 1);
    }

    #[test]
    fn test_counter_never_decreases() {
        let (_, mut boundary) = boundary();
        let mut last = 0;
        for i in 0..5 {
            fail(&mut boundary, &format!("fail {}", i));
            boundary.retry();
            assert!(boundary.occurrences() >= last);
            last = boundary.occurrences();
        }
        assert_eq!(last, 5);
    }

    #[test]
    fn test_fresh_boundary_resets_everything() {
        let (_, mut boundary) = boundary();
        fail(&mut boundary, "x");
        boundary.retry();
        fail(&mut boundary, "y");

        let (_, fresh) = self::boundary();
        assert_eq!(fresh.state(), BoundaryState::Healthy);
        assert_eq!(fresh.occurrences(), 0);
    }

    #[test]
    fn test_pure_transitions() {
        let record = FailureRecord::default().recorded(
            RenderFailure::Simulated("x".to_string()),
            context(),
        );
        assert_eq!(
            BoundaryState::Failed.retry(&record),
            (BoundaryState::Healthy, RetryOutcome::Recovered)
        );

        let recurring = record
            .cleared()
            .recorded(RenderFailure::Simulated("y".to_string()), context());
        assert_eq!(recurring.occurrences, 2);
        assert_eq!(
            BoundaryState::Failed.retry(&recurring),
            (BoundaryState::Failed, RetryOutcome::Disabled)
        );
        assert_eq!(BoundaryState::Healthy.fail(), BoundaryState::Failed);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
