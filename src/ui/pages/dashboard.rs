// Dashboard page - 센서 현황, 알림, 폴리하우스 상태, 요약 통계

use super::{page_heading, PageContext};
use crate::core::boundary::RenderFailure;
use crate::models::farm::{
    AlertKind, PolyhouseStatus, QuickStat, DASHBOARD_STATS, FARM_ALERTS, POLYHOUSES, SENSOR_READINGS,
};
use crate::ui::components::{card, grid};
use crate::ui::theme::{parse_hex_color, StyleTokenSet};
use crate::utils::formatter::format_reading;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

const SENSOR_CARD_HEIGHT: u16 = 4;
const STAT_CARD_HEIGHT: u16 = 3;

pub fn render(ctx: PageContext<'_>, area: Rect, buf: &mut Buffer) -> Result<(), RenderFailure> {
    let body = page_heading(
        "Smart Farm Dashboard",
        "Real-time overview of your polyhouses and storage",
        ctx,
        area,
        buf,
    );

    let columns = ctx.layout.card_columns();
    let sensor_rows = SENSOR_READINGS.len().div_ceil(columns) as u16;

    let [sensors, middle, stats] = Layout::vertical([
        Constraint::Length(sensor_rows * SENSOR_CARD_HEIGHT),
        Constraint::Min(4),
        Constraint::Length(STAT_CARD_HEIGHT),
    ])
    .areas(body);

    render_sensors(ctx, columns, sensors, buf);

    let [alerts, polyhouses] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(middle);
    render_alerts(ctx.tokens, alerts, buf);
    render_polyhouses(ctx.tokens, polyhouses, buf);

    render_stats(ctx.tokens, &DASHBOARD_STATS, stats, buf);
    Ok(())
}

fn render_sensors(ctx: PageContext<'_>, columns: usize, area: Rect, buf: &mut Buffer) {
    let cells = grid(area, SENSOR_READINGS.len(), columns, SENSOR_CARD_HEIGHT);
    for (reading, cell) in SENSOR_READINGS.iter().zip(cells) {
        let icon_style = Style::default().fg(parse_hex_color(reading.accent));
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(reading.icon, icon_style),
                Span::raw(" "),
                Span::styled(
                    format!("{} {}", format_reading(reading.value), reading.unit),
                    ctx.tokens.heading(),
                ),
            ]),
            Line::from(Span::styled(reading.label, ctx.tokens.caption())),
        ])
        .block(card("", ctx.tokens, false))
        .render(cell, buf);
    }
}

fn render_alerts(tokens: &StyleTokenSet, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = FARM_ALERTS
        .iter()
        .map(|alert| {
            let (icon, style) = match alert.kind {
                AlertKind::Warning => ("⚠", tokens.warning()),
                AlertKind::Info => ("ℹ", tokens.accent()),
            };
            Line::from(vec![
                Span::styled(format!("{} ", icon), style),
                Span::styled(alert.message, tokens.text()),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(card("Active Alerts", tokens, false))
        .render(area, buf);
}

fn render_polyhouses(tokens: &StyleTokenSet, area: Rect, buf: &mut Buffer) {
    let block = card("Polyhouse Status", tokens, false);
    let inner = block.inner(area);
    block.render(area, buf);

    let rows = Layout::vertical(vec![Constraint::Length(1); POLYHOUSES.len()]).split(inner);
    for (house, row) in POLYHOUSES.iter().zip(rows.iter()) {
        let [label, gauge] =
            Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).areas(*row);

        let status_style = if house.status == PolyhouseStatus::Active {
            tokens.success()
        } else {
            tokens.warning()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", house.id), tokens.heading()),
            Span::styled(format!("{:<10}", house.crop), tokens.text()),
            Span::styled(house.status.label(), status_style),
        ]))
        .render(label, buf);

        // 건강도 90 초과는 success, 아니면 warning
        let gauge_style = if house.is_thriving() {
            tokens.success()
        } else {
            tokens.warning()
        };
        LineGauge::default()
            .ratio(f64::from(house.health) / 100.0)
            .label(format!("{}%", house.health))
            .filled_style(gauge_style)
            .unfilled_style(tokens.border())
            .line_set(symbols::line::THICK)
            .render(gauge, buf);
    }
}

/// 요약 통계 카드 행 (ZelBasket에서도 사용)
pub(super) fn render_stats(tokens: &StyleTokenSet, stats: &[QuickStat], area: Rect, buf: &mut Buffer) {
    let cells = grid(area, stats.len(), stats.len(), STAT_CARD_HEIGHT);
    for (stat, cell) in stats.iter().zip(cells) {
        Paragraph::new(Line::from(vec![
            Span::raw(format!("{} ", stat.icon)),
            Span::styled(stat.value, tokens.title()),
            Span::raw(" "),
            Span::styled(stat.label, tokens.text_secondary()),
        ]))
        .block(card("", tokens, false))
        .render(cell, buf);
    }
}
