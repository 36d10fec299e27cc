// Footer component - 하단 푸터 컴포넌트
//
// 회사명, 연락처, 저작권 표시. 알림 메시지가 있으면 오른쪽에 표시

use crate::ui::theme::StyleTokenSet;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub const COMPANY_NAME: &str = "ZelBytes Private Limited";
pub const CONTACT_EMAIL: &str = "info@zelbytes.com";

/// 푸터 컴포넌트
pub struct Footer<'a> {
    /// 저작권 연도
    year: i32,
    /// 현재 경로
    route: &'a str,
    /// 알림 메시지 (있으면 경로 대신 표시)
    toast: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    muted_color: Color,
    toast_color: Color,
}

impl Default for Footer<'_> {
    fn default() -> Self {
        Self {
            year: 2024,
            route: "/",
            toast: None,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            muted_color: Color::Rgb(100, 100, 100),
            toast_color: Color::Green,
        }
    }
}

impl<'a> Footer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저작권 연도 설정
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// 현재 경로 설정
    pub fn route(mut self, route: &'a str) -> Self {
        self.route = route;
        self
    }

    /// 알림 메시지 설정
    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, tokens: &StyleTokenSet) -> Self {
        self.bg_color = tokens.palette.background_paper.to_color();
        self.fg_color = tokens.palette.text_primary.to_color();
        self.muted_color = tokens.palette.text_secondary.to_color();
        self.toast_color = tokens.palette.success.main.to_color();
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = format!(" © {} {}", self.year, COMPANY_NAME);
        let contact = format!(" | {}", CONTACT_EMAIL);

        let (right_info, right_style) = match self.toast {
            Some(message) => (format!("{} ", message), Style::default().fg(self.toast_color)),
            None => (format!("[{}] ", self.route), Style::default().fg(self.muted_color)),
        };

        let left_len = left_info.width() + contact.width();
        let padding_len = (area.width as usize).saturating_sub(left_len + right_info.width());

        let spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(contact, Style::default().fg(self.muted_color)),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_info, right_style),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
