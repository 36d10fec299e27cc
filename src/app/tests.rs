use super::*;
use crate::core::actions::Action;
use crate::core::boundary::{BoundaryState, FailureDiagnostic, RenderFailure, SUPPORT_CONTACT};
use crate::models::loading::{LOAD_TIMEOUT, STORAGE_SYNC_DURATION};
use crate::models::auth::AuthError;
use crate::models::{AuthTab, ControlKind, TextInput};
use crate::system::MemoryStore;
use crate::ui::components::spinner::TAKING_LONGER_HINT;
use crate::ui::renderer;
use crate::ui::test_util::buffer_text;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::cell::RefCell;
use std::time::Duration;

#[derive(Default)]
struct RecordingSink {
    reports: RefCell<Vec<FailureDiagnostic>>,
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &FailureDiagnostic) {
        self.reports.borrow_mut().push(diagnostic.clone());
    }
}

struct Harness {
    store: Rc<MemoryStore>,
    sink: Rc<RecordingSink>,
}

impl Harness {
    fn new() -> Self {
        Self {
            store: Rc::new(MemoryStore::new()),
            sink: Rc::new(RecordingSink::default()),
        }
    }

    fn services(&self, host_mode: Option<DisplayMode>) -> AppServices {
        AppServices {
            store: self.store.clone(),
            sink: self.sink.clone(),
            host_mode,
        }
    }

    fn app(&self) -> App {
        App::new(self.services(None))
    }

    fn report_count(&self) -> usize {
        self.sink.reports.borrow().len()
    }
}

fn draw(app: &mut App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| renderer::render(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

/// 로딩 표시를 건너뛰고 화면 전환
fn open(app: &mut App, page: Page) {
    app.go_to(page);
    app.loading = None;
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_editing_key(KeyModifiers::NONE, KeyCode::Char(c));
    }
}

// === 테마 ===

#[test]
fn test_default_mode_is_light() {
    let app = Harness::new().app();
    assert_eq!(app.theme_manager.mode(), DisplayMode::Light);
}

#[test]
fn test_host_preference_used_when_nothing_persisted() {
    let harness = Harness::new();
    let app = App::new(harness.services(Some(DisplayMode::Dark)));
    assert_eq!(app.theme_manager.mode(), DisplayMode::Dark);
}

#[test]
fn test_toggle_persists_across_restart() {
    let harness = Harness::new();
    let mut app = harness.app();

    app.execute_action(Action::ToggleTheme);
    assert_eq!(app.theme_manager.mode(), DisplayMode::Dark);
    assert_eq!(app.toast_display(), Some("Theme: dark"));

    // 같은 저장소로 새로 시작 (호스트 선호도보다 저장값 우선)
    let restarted = App::new(harness.services(Some(DisplayMode::Light)));
    assert_eq!(restarted.theme_manager.mode(), DisplayMode::Dark);
}

#[test]
fn test_toggle_parity() {
    let mut app = Harness::new().app();
    for _ in 0..4 {
        app.toggle_theme();
    }
    assert_eq!(app.theme_manager.mode(), DisplayMode::Light);
    app.toggle_theme();
    assert_eq!(app.theme_manager.mode(), DisplayMode::Dark);
}

#[test]
fn test_toggle_survives_write_failure() {
    let harness = Harness::new();
    harness.store.set_fail_writes(true);
    let mut app = harness.app();

    app.toggle_theme();
    assert_eq!(app.theme_manager.mode(), DisplayMode::Dark);

    let restarted = harness.app();
    assert_eq!(restarted.theme_manager.mode(), DisplayMode::Light);
}

#[test]
fn test_header_shows_mode_label() {
    let mut app = Harness::new().app();
    let text = draw(&mut app);
    assert!(text.contains("☀ light"));

    app.toggle_theme();
    let text = draw(&mut app);
    assert!(text.contains("☾ dark"));
}

// === 에러 경계 ===

#[test]
fn test_boundary_lifecycle() {
    let harness = Harness::new();
    let mut app = harness.app();
    app.toggle_theme();

    // 첫 실패
    app.execute_action(Action::SimulateFailure);
    let text = draw(&mut app);
    assert_eq!(app.boundary.state(), BoundaryState::Failed);
    assert_eq!(app.boundary.occurrences(), 1);
    assert!(app.boundary.retry_enabled());
    assert!(text.contains("Oops! Something went wrong"));
    assert!(text.contains("Try Again"));
    assert!(!text.contains(SUPPORT_CONTACT));
    assert_eq!(harness.report_count(), 1);

    // 재시도
    app.execute_action(Action::Retry);
    assert_eq!(app.boundary.state(), BoundaryState::Healthy);
    assert_eq!(app.boundary.occurrences(), 1);
    assert!(app.boundary.record().cause.is_none());
    let text = draw(&mut app);
    assert!(text.contains("Smart Farm Dashboard"));

    // 두 번째 실패
    app.execute_action(Action::SimulateFailure);
    let text = draw(&mut app);
    assert_eq!(app.boundary.occurrences(), 2);
    assert!(!app.boundary.retry_enabled());
    assert!(text.contains(SUPPORT_CONTACT));
    assert_eq!(harness.report_count(), 2);

    // 재시도 불가
    app.execute_action(Action::Retry);
    assert!(app.boundary.is_failed());
    assert_eq!(
        app.toast_display(),
        Some("Retry is disabled. Please reload the application.")
    );

    // 전체 재시작
    app.execute_action(Action::ReloadFull);
    assert_eq!(app.boundary.state(), BoundaryState::Healthy);
    assert_eq!(app.boundary.occurrences(), 0);
    assert_eq!(app.theme_manager.mode(), DisplayMode::Dark);
    let text = draw(&mut app);
    assert!(text.contains("Smart Farm Dashboard"));
}

#[test]
fn test_retry_when_healthy_is_noop() {
    let mut app = Harness::new().app();
    app.execute_action(Action::Retry);
    assert_eq!(app.boundary.state(), BoundaryState::Healthy);
    assert_eq!(app.boundary.occurrences(), 0);
    assert!(app.toast_display().is_none());
}

#[test]
fn test_invalid_page_state_is_captured() {
    let harness = Harness::new();
    let mut app = harness.app();
    open(&mut app, Page::Polyhouse);
    app.pages.polyhouse.controls.humidity = 95;

    let text = draw(&mut app);
    assert!(app.boundary.is_failed());
    assert!(matches!(
        app.boundary.record().cause,
        Some(RenderFailure::InvalidState(_))
    ));
    // 헤더와 푸터는 유지
    assert!(text.contains("ZelBytes"));
    assert!(text.contains("[/polyhouse]"));

    let reports = harness.sink.reports.borrow();
    assert_eq!(reports[0].environment.route, "/polyhouse");
    assert_eq!(reports[0].context.component, "Polyhouse");
    assert_eq!(reports[0].occurrence, 1);
}

#[test]
fn test_differing_cause_still_counts() {
    let mut app = Harness::new().app();

    app.inject_fault("first");
    draw(&mut app);
    app.execute_action(Action::Retry);

    open(&mut app, Page::ZelTrade);
    app.pages.market.category_index = 99;
    draw(&mut app);

    assert_eq!(app.boundary.occurrences(), 2);
    assert!(!app.boundary.retry_enabled());
}

#[test]
fn test_page_actions_ignored_while_failed() {
    let mut app = Harness::new().app();
    open(&mut app, Page::Polyhouse);
    app.inject_fault("test");
    draw(&mut app);

    app.execute_action(Action::Increase);
    assert_eq!(app.pages.polyhouse.controls.temperature, 25.0);
}

#[test]
fn test_command_bar_offers_retry_when_failed() {
    let mut app = Harness::new().app();
    app.inject_fault("test");
    draw(&mut app);

    let text = draw(&mut app);
    assert!(text.contains("Retry"));
    assert!(!text.contains("Toggle"));
}

// === 화면 전환 ===

#[test]
fn test_page_cycle_and_loading() {
    let mut app = Harness::new().app();

    app.execute_action(Action::NextPage);
    assert_eq!(app.page, Page::Polyhouse);
    assert!(app.is_loading(Instant::now()));

    app.tick(Instant::now() + Duration::from_secs(1));
    assert!(app.loading.is_none());

    app.execute_action(Action::PrevPage);
    app.execute_action(Action::PrevPage);
    assert_eq!(app.page, Page::Auth);
}

#[test]
fn test_go_to_same_page_skips_loading() {
    let mut app = Harness::new().app();
    app.execute_action(Action::GoToDashboard);
    assert!(app.loading.is_none());
}

#[test]
fn test_quit() {
    let mut app = Harness::new().app();
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

// === 페이지 액션 ===

#[test]
fn test_polyhouse_controls() {
    let mut app = Harness::new().app();
    open(&mut app, Page::Polyhouse);

    app.execute_action(Action::Increase);
    assert_eq!(app.pages.polyhouse.controls.temperature, 25.5);

    app.execute_action(Action::SelectNext);
    app.execute_action(Action::SelectNext);
    assert_eq!(app.pages.polyhouse.selected, ControlKind::ALL[2]);
    app.execute_action(Action::ToggleItem);
    assert!(app.toast_display().is_some_and(|t| t.ends_with("turned ON")));
}

#[test]
fn test_zeltrade_search_editing() {
    let mut app = Harness::new().app();
    open(&mut app, Page::ZelTrade);

    app.execute_action(Action::StartEditing);
    assert!(app.editing);
    type_text(&mut app, "lett");
    assert_eq!(app.pages.market.search.value(), "lett");
    assert_eq!(app.pages.market.visible_products().len(), 1);

    app.handle_editing_key(KeyModifiers::NONE, KeyCode::Backspace);
    assert_eq!(app.pages.market.search.value(), "let");

    app.handle_editing_key(KeyModifiers::NONE, KeyCode::Esc);
    assert!(!app.editing);
}

#[test]
fn test_search_cursor_follows_insertion_point() {
    let mut app = Harness::new().app();
    open(&mut app, Page::ZelTrade);

    app.execute_action(Action::StartEditing);
    type_text(&mut app, "cuu");
    app.handle_editing_key(KeyModifiers::NONE, KeyCode::Left);
    type_text(&mut app, "c");
    assert_eq!(app.pages.market.search.value(), "cucu");

    let text = draw(&mut app);
    assert!(text.contains("Search: cuc▏u"));
}

#[test]
fn test_zeltrade_favorite_toast() {
    let mut app = Harness::new().app();
    open(&mut app, Page::ZelTrade);

    app.execute_action(Action::ToggleItem);
    assert_eq!(app.toast_display(), Some("Added Fresh Tomatoes to favorites"));
    app.execute_action(Action::ToggleItem);
    assert_eq!(app.toast_display(), Some("Removed Fresh Tomatoes from favorites"));
}

#[test]
fn test_basket_refresh() {
    let mut app = Harness::new().app();
    open(&mut app, Page::ZelBasket);
    let before = app.pages.basket.last_updated;

    app.execute_action(Action::Refresh);
    assert!(app.is_loading(Instant::now()));
    assert_eq!(app.toast_display(), None);

    app.tick(Instant::now() + STORAGE_SYNC_DURATION);
    assert!(app.loading.is_none());
    assert!(app.pages.basket.last_updated >= before);
    assert_eq!(app.toast_display(), Some("Storage data refreshed"));
}

#[test]
fn test_slow_storage_sync_shows_taking_longer_hint() {
    let mut app = Harness::new().app();
    open(&mut app, Page::ZelBasket);
    app.execute_action(Action::Refresh);

    let text = draw(&mut app);
    assert!(text.contains("Syncing storage sensors..."));
    assert!(!text.contains(TAKING_LONGER_HINT));

    let started = Instant::now()
        .checked_sub(LOAD_TIMEOUT + Duration::from_millis(200))
        .unwrap();
    app.loading = Some(LoadingIndicator::storage_sync(started));
    let text = draw(&mut app);
    assert!(text.contains("Syncing storage sensors..."));
    assert!(text.contains(TAKING_LONGER_HINT));
}

#[test]
fn test_page_switch_replaces_sync_and_its_hint() {
    let mut app = Harness::new().app();
    open(&mut app, Page::ZelBasket);
    let started = Instant::now()
        .checked_sub(LOAD_TIMEOUT + Duration::from_millis(200))
        .unwrap();
    app.loading = Some(LoadingIndicator::storage_sync(started));

    app.go_to(Page::Dashboard);
    let text = draw(&mut app);
    assert!(!text.contains(TAKING_LONGER_HINT));
    assert_eq!(app.loading.as_ref().map(|l| l.task), Some(LoadingTask::PageSwitch));
}

#[test]
fn test_register_password_mismatch() {
    let mut app = Harness::new().app();
    open(&mut app, Page::Auth);

    app.execute_action(Action::Increase);
    assert_eq!(app.pages.auth.tab, AuthTab::Register);

    let form = &mut app.pages.auth;
    form.first_name = TextInput::with_value("Asha");
    form.last_name = TextInput::with_value("Rao");
    form.email = TextInput::with_value("asha@example.com");
    form.password = TextInput::with_value("secret1");
    form.confirm_password = TextInput::with_value("secret2");

    app.execute_action(Action::Activate);
    assert_eq!(app.pages.auth.error, Some(AuthError::PasswordMismatch));
    let text = draw(&mut app);
    assert!(text.contains("Passwords do not match"));

    // 탭 전환 시 에러 제거
    app.execute_action(Action::Decrease);
    assert_eq!(app.pages.auth.tab, AuthTab::Login);
    assert!(app.pages.auth.error.is_none());
}

#[test]
fn test_login_through_editing_keys() {
    let mut app = Harness::new().app();
    open(&mut app, Page::Auth);

    app.execute_action(Action::StartEditing);
    type_text(&mut app, "grower@zelbytes.com");
    app.handle_editing_key(KeyModifiers::NONE, KeyCode::Tab);
    type_text(&mut app, "hunter2");
    app.handle_editing_key(KeyModifiers::NONE, KeyCode::Enter);

    assert!(app.pages.auth.error.is_none());
    assert!(!app.editing);
    assert_eq!(app.toast_display(), Some("Signed in as grower@zelbytes.com"));
}

#[test]
fn test_ctrl_r_reloads_while_editing() {
    let mut app = Harness::new().app();
    open(&mut app, Page::ZelTrade);
    app.execute_action(Action::StartEditing);
    type_text(&mut app, "r");

    app.handle_editing_key(KeyModifiers::CONTROL, KeyCode::Char('r'));
    assert!(!app.editing);
    assert_eq!(app.page, Page::Dashboard);
    assert!(app.pages.market.search.is_empty());
}
