// Renderer - 화면 전체 구성
//
// 헤더/푸터/커맨드바는 경계 밖에서 그리고, 본문 페이지만 에러 경계 안에서 그립니다.

use crate::app::App;
use crate::core::actions::generate_command_bar_items;
use crate::core::boundary::RenderFailure;
use crate::ui::components::{CommandBar, FallbackPanel, Footer, Header, Spinner, WarningScreen};
use crate::ui::pages::{render_page, PageContext};
use chrono::{Datelike, Local};
use ratatui::Frame;
use std::time::Instant;

const APP_NAME: &str = "ZelBytes";

/// 한 프레임 렌더링
pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.area();
    app.layout.update(size);

    if app.layout.is_too_small() {
        let (width, height) = app.layout.terminal_size();
        let warning = WarningScreen::new()
            .current_size(width, height)
            .theme(app.theme_manager.tokens());
        f.render_widget(warning, size);
        return;
    }

    render_chrome(f, app);
    render_content(f, app);
}

/// 헤더, 푸터, 커맨드바
fn render_chrome(f: &mut Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let tokens = app.theme_manager.tokens();

    let header = Header::new()
        .app_name(APP_NAME)
        .current(app.page)
        .theme(tokens);
    f.render_widget(header, areas.header);

    let footer = Footer::new()
        .year(Local::now().year())
        .route(app.page.route())
        .toast(app.toast_display())
        .theme(tokens);
    f.render_widget(footer, areas.footer);

    let commands =
        generate_command_bar_items(app.boundary.is_failed(), app.boundary.retry_enabled());
    let command_bar = CommandBar::new().commands(commands).theme(tokens);
    f.render_widget(command_bar, areas.command_bar);
}

/// 본문: 로딩 표시, 경계 안의 페이지, 또는 대체 화면
fn render_content(f: &mut Frame<'_>, app: &mut App) {
    let area = app.layout.areas().content;
    let now = Instant::now();

    if let Some(loading) = app.loading.as_ref().filter(|l| !l.is_finished(now)) {
        let spinner = Spinner::new(loading.spinner_frame(now), &loading.message)
            .overdue(loading.is_overdue(now))
            .theme(app.theme_manager.tokens());
        f.render_widget(spinner, area);
        return;
    }

    let fault = app.take_pending_fault();
    let context = app.render_context();
    let environment = app.environment();

    let ctx = PageContext {
        tokens: app.theme_manager.tokens(),
        layout: app.layout.mode(),
        editing: app.editing,
    };
    let page = app.page;
    let states = &app.pages;
    let buf = f.buffer_mut();

    let rendered = app.boundary.guard(context, environment, || match fault {
        Some(reason) => Err(RenderFailure::Simulated(reason)),
        None => render_page(page, states, ctx, area, buf),
    });

    if !rendered {
        if let Some(view) = app.boundary.fallback() {
            let panel = FallbackPanel::new(&view).theme(app.theme_manager.tokens());
            f.render_widget(panel, area);
        }
    }
}
