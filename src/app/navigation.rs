use super::controllers;
use super::*;
use crate::core::actions::Action;

/// 토스트 표시 시간 (초)
const TOAST_SECONDS: u64 = 3;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        if let Some(def) = action.def() {
            tracing::trace!(action = def.id, label = def.label, "execute action");
        }
        match action {
            Action::Quit => self.quit(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::NextPage => self.go_to(self.page.next()),
            Action::PrevPage => self.go_to(self.page.prev()),
            Action::GoToDashboard => self.go_to(Page::Dashboard),
            Action::GoToPolyhouse => self.go_to(Page::Polyhouse),
            Action::GoToZelTrade => self.go_to(Page::ZelTrade),
            Action::GoToZelBasket => self.go_to(Page::ZelBasket),
            Action::GoToAuth => self.go_to(Page::Auth),
            Action::Retry | Action::ReloadFull | Action::SimulateFailure => {
                controllers::recovery_controller::execute(self, action)
            }
            Action::SelectPrev
            | Action::SelectNext
            | Action::Decrease
            | Action::Increase
            | Action::ToggleItem
            | Action::Activate
            | Action::StartEditing
            | Action::Refresh
            | Action::TogglePasswordVisibility => controllers::page_controller::execute(self, action),
        }
    }

    /// 화면 전환 (로딩 표시 시작, 입력 모드 종료)
    pub fn go_to(&mut self, page: Page) {
        self.editing = false;
        if page == self.page {
            return;
        }
        tracing::debug!(from = self.page.route(), to = page.route(), "navigate");
        self.page = page;
        self.loading = Some(LoadingIndicator::page(Instant::now()));
    }

    /// light ↔ dark 전환
    pub fn toggle_theme(&mut self) {
        self.theme_manager.toggle_mode();
        let message = format!("Theme: {}", self.theme_manager.mode());
        self.set_toast(&message);
    }

    /// 토스트 메시지 설정 (3초 후 자동 소멸)
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= TOAST_SECONDS {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed().as_secs() < TOAST_SECONDS {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }
}
