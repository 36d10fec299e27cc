// Polyhouse page - 목표 온도/습도 슬라이더와 설비 스위치

use super::{page_heading, PageContext};
use crate::core::boundary::RenderFailure;
use crate::models::polyhouse::{PolyhouseControls, HUMIDITY_RANGE, TEMPERATURE_RANGE};
use crate::models::{ControlKind, PolyhouseState};
use crate::ui::components::{card, grid};
use crate::ui::theme::StyleTokenSet;
use crate::utils::formatter::format_reading;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

const CONTROL_CARD_HEIGHT: u16 = 5;

pub fn render(
    state: &PolyhouseState,
    ctx: PageContext<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> Result<(), RenderFailure> {
    // 범위를 벗어난 제어값은 화면을 그리지 않고 실패
    state
        .controls
        .validate()
        .map_err(RenderFailure::InvalidState)?;

    let body = page_heading(
        "Polyhouse Control Center",
        "Adjust climate targets and toggle equipment for Polyhouse Z1",
        ctx,
        area,
        buf,
    );

    let columns = ctx.layout.card_columns().min(3);
    let cells = grid(body, ControlKind::ALL.len(), columns, CONTROL_CARD_HEIGHT);
    for (kind, cell) in ControlKind::ALL.iter().zip(cells) {
        render_control(*kind, &state.controls, *kind == state.selected, ctx.tokens, cell, buf);
    }
    Ok(())
}

fn render_control(
    kind: ControlKind,
    controls: &PolyhouseControls,
    selected: bool,
    tokens: &StyleTokenSet,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = card(kind.title(), tokens, selected);
    let inner = block.inner(area);
    block.render(area, buf);

    let [value, detail] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    match kind {
        ControlKind::Temperature => {
            let (min, max) = TEMPERATURE_RANGE;
            render_slider(
                format!("Target: {:.1}°C", controls.temperature),
                controls.temperature_ratio(),
                format!("{}°C – {}°C", format_reading(min), format_reading(max)),
                tokens,
                (value, detail),
                buf,
            );
        }
        ControlKind::Humidity => {
            let (min, max) = HUMIDITY_RANGE;
            render_slider(
                format!("Target: {}%", controls.humidity),
                controls.humidity_ratio(),
                format!("{}% – {}%", min, max),
                tokens,
                (value, detail),
                buf,
            );
        }
        ControlKind::Lighting => {
            render_switch(controls.lights, "Grow lights", tokens, (value, detail), buf)
        }
        ControlKind::Irrigation => {
            render_switch(controls.irrigation, "Drip irrigation", tokens, (value, detail), buf)
        }
        ControlKind::Ventilation => {
            render_switch(controls.fans, "Exhaust fans", tokens, (value, detail), buf)
        }
    }
}

fn render_slider(
    label: String,
    ratio: f64,
    range: String,
    tokens: &StyleTokenSet,
    (value, detail): (Rect, Rect),
    buf: &mut Buffer,
) {
    LineGauge::default()
        .ratio(ratio)
        .label(Span::styled(label, tokens.heading()))
        .filled_style(tokens.accent())
        .unfilled_style(tokens.border())
        .line_set(symbols::line::THICK)
        .render(value, buf);
    Paragraph::new(Line::from(Span::styled(range, tokens.caption()))).render(detail, buf);
}

fn render_switch(
    on: bool,
    description: &str,
    tokens: &StyleTokenSet,
    (value, detail): (Rect, Rect),
    buf: &mut Buffer,
) {
    let (mark, style) = if on {
        ("● ON", tokens.success())
    } else {
        ("○ OFF", tokens.text_secondary())
    };
    Paragraph::new(Line::from(Span::styled(mark, style))).render(value, buf);
    Paragraph::new(Line::from(Span::styled(description, tokens.caption()))).render(detail, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Page, PageStates};
    use crate::ui::layout::LayoutMode;
    use crate::ui::pages::tests::render_to_text;
    use crate::ui::theme::DisplayMode;

    #[test]
    fn test_renders_defaults() {
        let text = render_to_text(Page::Polyhouse, &PageStates::default(), 120, 24);
        assert!(text.contains("Polyhouse Control Center"));
        assert!(text.contains("Target: 25.0°C"));
        assert!(text.contains("Target: 60%"));
        assert!(text.contains("○ OFF"));
        assert!(!text.contains("● ON"));
    }

    #[test]
    fn test_renders_switch_on() {
        let mut states = PageStates::default();
        states.polyhouse.controls.lights = true;

        let text = render_to_text(Page::Polyhouse, &states, 120, 24);
        assert!(text.contains("● ON"));
    }

    #[test]
    fn test_out_of_range_is_invalid_state() {
        let mut state = PolyhouseState::default();
        state.controls.humidity = 95;

        let tokens = StyleTokenSet::for_mode(DisplayMode::Light);
        let ctx = PageContext {
            tokens: &tokens,
            layout: LayoutMode::Compact,
            editing: false,
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        let result = render(&state, ctx, area, &mut buf);
        assert!(matches!(result, Err(RenderFailure::InvalidState(msg)) if msg.contains("humidity")));
    }
}
