// Header component - 상단 헤더 컴포넌트
//
// 앱 이름, 화면 탭, 표시 모드 표시

use crate::models::Page;
use crate::ui::theme::{DisplayMode, StyleTokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 헤더 컴포넌트
pub struct Header<'a> {
    /// 앱 이름
    app_name: &'a str,
    /// 현재 화면
    current: Page,
    /// 표시 모드 (우측 표시)
    mode: DisplayMode,
    bg_color: Color,
    fg_color: Color,
    selected_bg: Color,
    selected_fg: Color,
    muted_color: Color,
}

impl Default for Header<'_> {
    fn default() -> Self {
        Self {
            app_name: "ZelBytes",
            current: Page::default(),
            mode: DisplayMode::default(),
            bg_color: Color::Rgb(46, 125, 50),
            fg_color: Color::White,
            selected_bg: Color::Rgb(27, 94, 32),
            selected_fg: Color::White,
            muted_color: Color::Rgb(200, 230, 201),
        }
    }
}

impl<'a> Header<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 앱 이름 설정
    pub fn app_name(mut self, name: &'a str) -> Self {
        self.app_name = name;
        self
    }

    /// 현재 화면 설정
    pub fn current(mut self, page: Page) -> Self {
        self.current = page;
        self
    }

    /// 테마 적용 (앱 바는 primary 색상 위에 흰 글자)
    pub fn theme(mut self, tokens: &StyleTokenSet) -> Self {
        self.mode = tokens.mode;
        self.bg_color = tokens.palette.primary.main.to_color();
        self.fg_color = tokens.palette.contrast_text.to_color();
        self.selected_bg = tokens.palette.primary.dark.to_color();
        self.selected_fg = tokens.palette.contrast_text.to_color();
        self.muted_color = tokens.palette.primary.light.to_color();
        self
    }

    fn mode_label(&self) -> String {
        let icon = match self.mode {
            DisplayMode::Light => "☀",
            DisplayMode::Dark => "☾",
        };
        format!("{} {} ", icon, self.mode)
    }
}

#[cfg(test)]
impl Header<'_> {
    /// 탭의 x 위치 계산 (앱 이름 이후)
    pub fn tab_x_position(&self, page: Page) -> u16 {
        let mut x = format!(" {} ", self.app_name).width() as u16 + 1;
        for p in Page::ALL {
            if p == page {
                break;
            }
            x += tab_label(p).width() as u16;
        }
        x
    }
}

fn tab_label(page: Page) -> String {
    format!(" {} {} ", page.index() + 1, page.title())
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.app_name),
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        for page in Page::ALL {
            let style = if page == self.current {
                Style::default()
                    .fg(self.selected_fg)
                    .bg(self.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            };
            spans.push(Span::styled(tab_label(page), style));
        }

        // 오른쪽 정렬된 모드 표시 (폭 부족 시 생략)
        let mode_label = self.mode_label();
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let remaining = (area.width as usize).saturating_sub(used);
        if remaining > mode_label.width() {
            spans.push(Span::raw(" ".repeat(remaining - mode_label.width())));
            spans.push(Span::styled(mode_label, Style::default().fg(self.muted_color)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
