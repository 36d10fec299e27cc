// Spinner - 페이지 전환 로딩 표시

use crate::ui::theme::StyleTokenSet;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const TAKING_LONGER_HINT: &str = "This is taking longer than expected. Please wait...";

pub struct Spinner<'a> {
    frame: &'a str,
    message: &'a str,
    overdue: bool,
    bg_color: Color,
    spinner_color: Color,
    fg_color: Color,
}

impl<'a> Spinner<'a> {
    pub fn new(frame: &'a str, message: &'a str) -> Self {
        Self {
            frame,
            message,
            overdue: false,
            bg_color: Color::Reset,
            spinner_color: Color::Green,
            fg_color: Color::Gray,
        }
    }

    /// 타임아웃 안내 표시
    pub fn overdue(mut self, overdue: bool) -> Self {
        self.overdue = overdue;
        self
    }

    pub fn theme(mut self, tokens: &StyleTokenSet) -> Self {
        self.bg_color = tokens.palette.background_default.to_color();
        self.spinner_color = tokens.palette.primary.main.to_color();
        self.fg_color = tokens.palette.text_secondary.to_color();
        self
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut lines = vec![Line::from(vec![
            Span::styled(self.frame, Style::default().fg(self.spinner_color)),
            Span::raw(" "),
            Span::styled(self.message, Style::default().fg(self.fg_color)),
        ])];
        if self.overdue {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                TAKING_LONGER_HINT,
                Style::default().fg(self.fg_color),
            )));
        }

        let [row] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}
