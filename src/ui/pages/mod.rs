// Pages - 라우팅된 화면 렌더링
//
// 각 페이지는 에러 경계 안에서 렌더링되므로 `Result<(), RenderFailure>`를 반환합니다.
// 페이지 상태가 자체 제약을 어기면 `InvalidState`로 실패합니다.

pub mod auth;
pub mod dashboard;
pub mod polyhouse;
pub mod zelbasket;
pub mod zeltrade;

use crate::core::boundary::RenderFailure;
use crate::models::{Page, PageStates, TextInput};
use crate::ui::layout::LayoutMode;
use crate::ui::theme::StyleTokenSet;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 페이지 렌더링에 필요한 공통 정보
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub tokens: &'a StyleTokenSet,
    pub layout: LayoutMode,
    /// 텍스트 입력 중 여부 (커서 표시)
    pub editing: bool,
}

/// 현재 화면 렌더링
pub fn render_page(
    page: Page,
    states: &PageStates,
    ctx: PageContext<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> Result<(), RenderFailure> {
    buf.set_style(area, ctx.tokens.base());
    match page {
        Page::Dashboard => dashboard::render(ctx, area, buf),
        Page::Polyhouse => polyhouse::render(&states.polyhouse, ctx, area, buf),
        Page::ZelTrade => zeltrade::render(&states.market, ctx, area, buf),
        Page::ZelBasket => zelbasket::render(&states.basket, ctx, area, buf),
        Page::Auth => auth::render(&states.auth, ctx, area, buf),
    }
}

/// 페이지 제목 + 부제목 (2줄), 나머지 영역 반환
fn page_heading(title: &str, subtitle: &str, ctx: PageContext<'_>, area: Rect, buf: &mut Buffer) -> Rect {
    let [heading, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", title), ctx.tokens.title())),
        Line::from(Span::styled(format!(" {}", subtitle), ctx.tokens.caption())),
    ])
    .render(heading, buf);
    body
}

/// 입력 필드 표시 (입력 중이면 커서 위치에 표시)
///
/// `display`는 값과 글자 수가 같아야 합니다 (마스킹된 비밀번호 포함).
fn input_spans(
    display: String,
    input: &TextInput,
    active: bool,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    if !active {
        return vec![Span::styled(display, text_style)];
    }
    let before = input
        .value()
        .get(..input.cursor())
        .map_or(0, |head| head.chars().count());
    let split = display
        .char_indices()
        .nth(before)
        .map_or(display.len(), |(i, _)| i);
    let (head, tail) = display.split_at(split);
    vec![
        Span::styled(head.to_string(), text_style),
        Span::styled("▏", cursor_style),
        Span::styled(tail.to_string(), text_style),
    ]
}
