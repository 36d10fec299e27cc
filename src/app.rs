use crate::core::boundary::{DiagnosticSink, ErrorBoundary, RenderContext};
use crate::models::{LoadingIndicator, LoadingTask, Page, PageStates};
use crate::system::{EnvironmentInfo, PreferenceStore};
use crate::ui::{DisplayMode, LayoutManager, ThemeManager};
use std::rc::Rc;
use std::time::Instant;

mod controllers;
mod editing;
mod navigation;

/// 앱 생성에 주입되는 외부 서비스
///
/// 전체 재시작 시에도 같은 서비스로 새 `App`을 만듭니다.
#[derive(Clone)]
pub struct AppServices {
    pub store: Rc<dyn PreferenceStore>,
    pub sink: Rc<dyn DiagnosticSink>,
    /// 호스트(터미널) 색상 선호도
    pub host_mode: Option<DisplayMode>,
}

pub struct App {
    pub should_quit: bool,
    pub layout: LayoutManager,
    pub theme_manager: ThemeManager,
    pub boundary: ErrorBoundary,
    pub page: Page,
    pub pages: PageStates,
    /// 페이지 전환 로딩 표시
    pub loading: Option<LoadingIndicator>,
    /// 텍스트 입력 모드 (검색어, 인증 폼)
    pub editing: bool,
    pub toast_message: Option<(String, Instant)>,
    /// 다음 렌더링에서 발생시킬 실패 (F12)
    pending_fault: Option<String>,
    services: AppServices,
}

impl App {
    pub fn new(services: AppServices) -> Self {
        let theme_manager =
            ThemeManager::initialize(Rc::clone(&services.store), services.host_mode);
        let boundary = ErrorBoundary::new(Rc::clone(&services.sink));

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager,
            boundary,
            page: Page::default(),
            pages: PageStates::default(),
            loading: None,
            editing: false,
            toast_message: None,
            pending_fault: None,
            services,
        }
    }

    /// 테스트용 앱 생성 (메모리 저장소, tracing 수신자)
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        use crate::core::boundary::TracingSink;
        use crate::system::MemoryStore;

        Self::new(AppServices {
            store: Rc::new(MemoryStore::new()),
            sink: Rc::new(TracingSink),
            host_mode: None,
        })
    }

    /// 전체 재시작
    ///
    /// 저장된 설정에서 새 상태를 만듭니다. 발생 횟수는 0으로 돌아갑니다.
    pub fn reload_full(&mut self) {
        tracing::info!(
            occurrences = self.boundary.occurrences(),
            page = self.page.title(),
            "full reload"
        );
        let layout = std::mem::take(&mut self.layout);
        *self = App::new(self.services.clone());
        self.layout = layout;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 이벤트 루프마다 호출 (로딩 완료, 토스트 만료 처리)
    pub fn tick(&mut self, now: Instant) {
        if self.loading.as_ref().is_some_and(|l| l.is_finished(now)) {
            if let Some(done) = self.loading.take() {
                self.finish_loading(done.task);
            }
        }
        self.clear_expired_toast();
    }

    fn finish_loading(&mut self, task: LoadingTask) {
        match task {
            LoadingTask::PageSwitch => {}
            LoadingTask::StorageSync => {
                self.pages.basket.refresh();
                self.set_toast("Storage data refreshed");
            }
        }
    }

    /// 로딩 표시 중인지 여부
    pub fn is_loading(&self, now: Instant) -> bool {
        self.loading.as_ref().is_some_and(|l| !l.is_finished(now))
    }

    /// 현재 페이지의 렌더링 컨텍스트
    pub fn render_context(&self) -> RenderContext {
        let areas = self.layout.areas();
        RenderContext::new(
            self.page.title(),
            self.page.route(),
            (areas.content.width, areas.content.height),
        )
    }

    /// 진단 레코드용 환경 정보
    pub fn environment(&self) -> EnvironmentInfo {
        EnvironmentInfo::capture(self.page.route(), self.layout.terminal_size())
    }

    /// 실패 주입 요청 (다음 렌더링에서 소비)
    pub fn inject_fault(&mut self, reason: &str) {
        tracing::debug!(reason, "render failure injected");
        self.pending_fault = Some(reason.to_string());
    }

    pub fn take_pending_fault(&mut self) -> Option<String> {
        self.pending_fault.take()
    }
}

#[cfg(test)]
mod tests;
