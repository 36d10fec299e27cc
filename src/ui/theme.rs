use crate::system::storage::PreferenceStore;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// 표시 모드 (light / dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// 반대 모드
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(format!("unknown display mode: {}", other)),
        }
    }
}

/// 색상 정의
///
/// Hex 문자열("#2e7d32") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
pub fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        _ => Color::Reset,
    }
}

/// 한 계열의 색상 (main / light / dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub main: ColorDef,
    pub light: ColorDef,
    pub dark: ColorDef,
}

impl Swatch {
    fn new(main: &str, light: &str, dark: &str) -> Self {
        Self {
            main: main.into(),
            light: light.into(),
            dark: dark.into(),
        }
    }
}

/// 팔레트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: Swatch,
    pub secondary: Swatch,
    pub error: Swatch,
    pub warning: Swatch,
    pub success: Swatch,
    pub contrast_text: ColorDef,
    pub background_default: ColorDef,
    pub background_paper: ColorDef,
    pub text_primary: ColorDef,
    pub text_secondary: ColorDef,
    pub divider: ColorDef,
    pub tooltip_bg: ColorDef,
}

/// 글자 강조 정의
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
    pub dim: bool,
}

impl Emphasis {
    const fn new(bold: bool, italic: bool, dim: bool) -> Self {
        Self { bold, italic, dim }
    }

    pub fn modifier(self) -> Modifier {
        let mut modifier = Modifier::empty();
        if self.bold {
            modifier |= Modifier::BOLD;
        }
        if self.italic {
            modifier |= Modifier::ITALIC;
        }
        if self.dim {
            modifier |= Modifier::DIM;
        }
        modifier
    }
}

/// 타이포그래피 스케일 (터미널에서는 글자 크기 대신 강조로 표현)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    pub title: Emphasis,
    pub heading: Emphasis,
    pub subheading: Emphasis,
    pub body: Emphasis,
    pub caption: Emphasis,
    pub button: Emphasis,
}

/// 간격 (셀 단위)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub unit: u16,
    pub card_padding: u16,
    pub gap: u16,
}

/// 모서리/테두리 모양
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rounded: bool,
}

/// 표시 모드에서 파생되는 스타일 토큰 집합
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTokenSet {
    pub mode: DisplayMode,
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
    pub shape: Shape,
}

impl StyleTokenSet {
    /// 표시 모드로부터 토큰 집합 계산 (순수 함수)
    pub fn for_mode(mode: DisplayMode) -> Self {
        let dark = mode == DisplayMode::Dark;
        let pick = |dark_value: &'static str, light_value: &'static str| {
            if dark {
                dark_value
            } else {
                light_value
            }
        };

        let palette = Palette {
            primary: Swatch::new("#2e7d32", pick("#5caf50", "#4caf50"), "#1b5e20"),
            secondary: Swatch::new("#1976d2", pick("#52a5f5", "#42a5f5"), "#1565c0"),
            error: Swatch::new(pick("#f44336", "#d32f2f"), pick("#e57373", "#ef5350"), "#c62828"),
            warning: Swatch::new(
                pick("#ffa726", "#ed6c02"),
                pick("#ffb74d", "#ff9800"),
                pick("#f57c00", "#e65100"),
            ),
            success: Swatch::new(
                pick("#66bb6a", "#2e7d32"),
                pick("#81c784", "#4caf50"),
                pick("#388e3c", "#1b5e20"),
            ),
            contrast_text: "#ffffff".into(),
            background_default: pick("#121212", "#f5f5f5").into(),
            background_paper: pick("#1e1e1e", "#ffffff").into(),
            text_primary: pick("#ffffff", "#000000").into(),
            text_secondary: pick("#b0b0b0", "#666666").into(),
            divider: pick("#2f2f2f", "#d7d7d7").into(),
            tooltip_bg: pick("#424242", "#616161").into(),
        };

        StyleTokenSet {
            mode,
            palette,
            typography: Typography {
                title: Emphasis::new(true, false, false),
                heading: Emphasis::new(true, false, false),
                subheading: Emphasis::new(false, true, false),
                body: Emphasis::default(),
                caption: Emphasis::new(false, false, true),
                button: Emphasis::new(true, false, false),
            },
            spacing: Spacing {
                unit: 1,
                card_padding: 1,
                gap: 1,
            },
            shape: Shape { rounded: true },
        }
    }

    // 자주 쓰는 스타일 조합

    /// 페이지 바탕
    pub fn base(&self) -> Style {
        Style::default()
            .bg(self.palette.background_default.to_color())
            .fg(self.palette.text_primary.to_color())
    }

    /// 카드 바탕
    pub fn paper(&self) -> Style {
        Style::default()
            .bg(self.palette.background_paper.to_color())
            .fg(self.palette.text_primary.to_color())
    }

    pub fn text(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary.to_color())
            .add_modifier(self.typography.body.modifier())
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary.to_color())
    }

    pub fn caption(&self) -> Style {
        self.text_secondary()
            .add_modifier(self.typography.caption.modifier())
    }

    /// 페이지 제목 (primary 색상)
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.primary.main.to_color())
            .add_modifier(self.typography.title.modifier())
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary.to_color())
            .add_modifier(self.typography.heading.modifier())
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.palette.primary.main.to_color())
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.palette.success.main.to_color())
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.palette.warning.main.to_color())
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.palette.error.main.to_color())
    }

    /// 채워진 버튼 (contained)
    pub fn button_contained(&self) -> Style {
        Style::default()
            .bg(self.palette.primary.main.to_color())
            .fg(self.palette.contrast_text.to_color())
            .add_modifier(self.typography.button.modifier())
    }

    /// 외곽선 버튼 (outlined)
    pub fn button_outlined(&self) -> Style {
        Style::default()
            .fg(self.palette.primary.main.to_color())
            .add_modifier(self.typography.button.modifier())
    }

    pub fn button_disabled(&self) -> Style {
        Style::default()
            .fg(self.palette.divider.to_color())
            .add_modifier(Modifier::DIM)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.divider.to_color())
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.palette.primary.light.to_color())
    }

    pub fn border_type(&self) -> BorderType {
        if self.shape.rounded {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }
}

/// 테마 관리자
///
/// 표시 모드의 단일 진실 원천입니다. 모드가 바뀌면 토큰 집합을 다시 계산하고
/// 설정 저장소에 기록합니다 (실패해도 세션 동안은 정상 동작).
pub struct ThemeManager {
    mode: DisplayMode,
    tokens: StyleTokenSet,
    store: Rc<dyn PreferenceStore>,
}

impl ThemeManager {
    /// 초기화 순서: 저장된 값 → 호스트 선호도 → light
    pub fn initialize(store: Rc<dyn PreferenceStore>, host_preference: Option<DisplayMode>) -> Self {
        let persisted = match store.load() {
            Ok(settings) => settings.theme_mode,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted theme mode");
                None
            }
        };
        let mode = persisted.or(host_preference).unwrap_or_default();
        tracing::debug!(%mode, persisted = persisted.is_some(), "theme mode initialized");

        Self {
            mode,
            tokens: StyleTokenSet::for_mode(mode),
            store,
        }
    }

    /// 현재 모드 반환
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// 현재 토큰 집합 반환
    pub fn tokens(&self) -> &StyleTokenSet {
        &self.tokens
    }

    /// light ↔ dark 전환 후 저장
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.tokens = StyleTokenSet::for_mode(self.mode);

        // 읽기에 실패하면 새 설정으로 덮어씀
        let mut settings = self.store.load().unwrap_or_default();
        settings.theme_mode = Some(self.mode);
        if let Err(e) = self.store.save(&settings) {
            tracing::warn!(error = %e, mode = %self.mode, "failed to persist theme mode");
        }
    }
}
