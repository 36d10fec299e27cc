// Fallback panel - 에러 경계의 대체 화면
//
// 페이지 영역 중앙에 안내 카드와 재시도/재시작 버튼 표시

use crate::core::boundary::FallbackView;
use crate::ui::theme::StyleTokenSet;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const PANEL_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 12;

/// 대체 화면 위젯
pub struct FallbackPanel<'a> {
    view: &'a FallbackView,
    tokens: Option<&'a StyleTokenSet>,
}

impl<'a> FallbackPanel<'a> {
    pub fn new(view: &'a FallbackView) -> Self {
        Self { view, tokens: None }
    }

    /// 테마 적용
    pub fn theme(mut self, tokens: &'a StyleTokenSet) -> Self {
        self.tokens = Some(tokens);
        self
    }

    fn lines(&self, tokens: &StyleTokenSet) -> Vec<Line<'a>> {
        let view = self.view;
        let mut lines = vec![
            Line::from(Span::styled("⚠", tokens.error().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(view.title, tokens.heading())),
            Line::from(""),
            Line::from(Span::styled(view.message, tokens.text_secondary())),
        ];

        if let Some(detail) = &view.detail {
            lines.push(Line::from(Span::styled(detail.clone(), tokens.caption())));
        }
        if let Some(contact) = view.support_contact {
            lines.push(Line::from(vec![
                Span::styled("If the problem persists, contact ", tokens.text_secondary()),
                Span::styled(contact, tokens.accent()),
            ]));
        }

        lines.push(Line::from(""));

        let retry_style = if view.retry_enabled {
            tokens.button_contained()
        } else {
            tokens.button_disabled()
        };
        lines.push(Line::from(vec![
            Span::styled(" r Try Again ", retry_style),
            Span::raw("   "),
            Span::styled(" ^R Reload ", tokens.button_outlined()),
        ]));
        lines
    }
}

impl Widget for FallbackPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let default_tokens;
        let tokens = match self.tokens {
            Some(tokens) => tokens,
            None => {
                default_tokens = StyleTokenSet::for_mode(Default::default());
                &default_tokens
            }
        };

        Clear.render(area, buf);
        buf.set_style(area, tokens.base());

        let [row] = Layout::vertical([Constraint::Length(PANEL_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [panel] = Layout::horizontal([Constraint::Length(PANEL_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(tokens.border_type())
            .border_style(tokens.error())
            .style(tokens.paper());

        Paragraph::new(self.lines(tokens))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(panel, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_util::buffer_text;
    use crate::ui::theme::DisplayMode;

    fn view(recurring: bool) -> FallbackView {
        FallbackView {
            title: "Oops! Something went wrong",
            message: "We apologize for the inconvenience. Please try again.",
            detail: Some("simulated failure: F12".to_string()),
            retry_enabled: !recurring,
            support_contact: recurring.then_some("support@zelbytes.com"),
        }
    }

    fn render(view: &FallbackView) -> String {
        let tokens = StyleTokenSet::for_mode(DisplayMode::Light);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        FallbackPanel::new(view).theme(&tokens).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_first_failure_has_no_contact() {
        let text = render(&view(false));
        assert!(text.contains("Oops! Something went wrong"));
        assert!(text.contains("Try Again"));
        assert!(text.contains("simulated failure: F12"));
        assert!(!text.contains("support@zelbytes.com"));
    }

    #[test]
    fn test_recurring_failure_shows_contact() {
        let text = render(&view(true));
        assert!(text.contains("support@zelbytes.com"));
        assert!(text.contains("Reload"));
    }
}
