use super::super::*;
use crate::core::actions::Action;
use crate::models::AuthTab;

/// 현재 페이지의 로컬 액션 처리
///
/// 경계가 실패 상태면 페이지가 그려지지 않으므로 무시합니다.
pub(in crate::app) fn execute(app: &mut App, action: Action) {
    if app.boundary.is_failed() {
        return;
    }
    match app.page {
        Page::Dashboard => {}
        Page::Polyhouse => polyhouse(app, action),
        Page::ZelTrade => zeltrade(app, action),
        Page::ZelBasket => zelbasket(app, action),
        Page::Auth => auth(app, action),
    }
}

fn polyhouse(app: &mut App, action: Action) {
    let state = &mut app.pages.polyhouse;
    match action {
        Action::SelectPrev => state.select_prev(),
        Action::SelectNext => state.select_next(),
        Action::Decrease => state.adjust(-1),
        Action::Increase => state.adjust(1),
        Action::ToggleItem | Action::Activate => {
            if let Some((kind, on)) = state.toggle_selected() {
                let message = format!("{} turned {}", kind.title(), if on { "ON" } else { "OFF" });
                app.set_toast(&message);
            }
        }
        _ => {}
    }
}

fn zeltrade(app: &mut App, action: Action) {
    let state = &mut app.pages.market;
    match action {
        Action::SelectPrev => state.select_prev(),
        Action::SelectNext => state.select_next(),
        Action::Decrease => state.prev_category(),
        Action::Increase => state.next_category(),
        Action::ToggleItem | Action::Activate => {
            if let Some((product, favorite)) = state.toggle_favorite() {
                let message = if favorite {
                    format!("Added {} to favorites", product.name)
                } else {
                    format!("Removed {} from favorites", product.name)
                };
                app.set_toast(&message);
            }
        }
        Action::StartEditing => app.editing = true,
        _ => {}
    }
}

/// 센서 동기화가 끝나면 `App::tick`에서 데이터가 갱신됨
fn zelbasket(app: &mut App, action: Action) {
    if matches!(action, Action::Refresh | Action::Activate) {
        tracing::debug!("storage sync started");
        app.loading = Some(LoadingIndicator::storage_sync(Instant::now()));
    }
}

fn auth(app: &mut App, action: Action) {
    let form = &mut app.pages.auth;
    match action {
        Action::Decrease | Action::Increase => form.switch_tab(),
        Action::SelectPrev => form.focus_prev(),
        Action::SelectNext => form.focus_next(),
        Action::TogglePasswordVisibility => form.toggle_password_visibility(),
        Action::StartEditing => app.editing = true,
        Action::Activate => submit_auth(app),
        _ => {}
    }
}

/// 인증 폼 제출 (비밀번호는 로그에 남기지 않음)
pub(in crate::app) fn submit_auth(app: &mut App) {
    match app.pages.auth.submit() {
        Ok(submission) => {
            tracing::info!(
                form = submission.tab.label(),
                email = %submission.email,
                name = submission.display_name.as_deref().unwrap_or(""),
                "auth form submitted"
            );
            app.editing = false;
            let message = match submission.tab {
                AuthTab::Login => format!("Signed in as {}", submission.email),
                AuthTab::Register => format!("Account created for {}", submission.email),
            };
            app.set_toast(&message);
        }
        Err(e) => tracing::debug!(error = %e, "auth form rejected"),
    }
}
