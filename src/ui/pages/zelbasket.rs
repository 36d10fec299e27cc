// ZelBasket page - 창고 점유율, 재고 목록, 요약 통계

use super::dashboard::render_stats;
use super::{page_heading, PageContext};
use crate::core::boundary::RenderFailure;
use crate::models::farm::{
    warehouse_by_id, Level, StockStatus, Warehouse, BASKET_STATS, INVENTORY, WAREHOUSES,
};
use crate::models::page::BasketState;
use crate::ui::components::{card, grid};
use crate::ui::theme::{parse_hex_color, StyleTokenSet};
use crate::utils::formatter::{format_clock, pluralize};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Gauge, Paragraph, Row, Table, Widget},
};

const WAREHOUSE_CARD_HEIGHT: u16 = 6;
const STAT_ROW_HEIGHT: u16 = 3;

pub fn render(
    state: &BasketState,
    ctx: PageContext<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> Result<(), RenderFailure> {
    let subtitle = format!("Last updated: {}", format_clock(&state.last_updated));
    let body = page_heading("ZelBasket Storage", &subtitle, ctx, area, buf);

    let columns = ctx.layout.card_columns();
    let warehouse_rows = WAREHOUSES.len().div_ceil(columns) as u16;
    let [stats, warehouses, inventory] = Layout::vertical([
        Constraint::Length(STAT_ROW_HEIGHT),
        Constraint::Length(warehouse_rows * WAREHOUSE_CARD_HEIGHT),
        Constraint::Min(4),
    ])
    .areas(body);

    render_stats(ctx.tokens, &BASKET_STATS, stats, buf);

    let cells = grid(warehouses, WAREHOUSES.len(), columns, WAREHOUSE_CARD_HEIGHT);
    for (warehouse, cell) in WAREHOUSES.iter().zip(cells) {
        render_warehouse(warehouse, ctx.tokens, cell, buf);
    }

    render_inventory(ctx.tokens, inventory, buf);
    Ok(())
}

/// 점유율 수준별 색상 (90% 초과 error, 70% 초과 warning)
fn level_style(level: Level, tokens: &StyleTokenSet) -> Style {
    match level {
        Level::Critical => tokens.error(),
        Level::High => tokens.warning(),
        Level::Normal => tokens.success(),
    }
}

fn render_warehouse(warehouse: &Warehouse, tokens: &StyleTokenSet, area: Rect, buf: &mut Buffer) {
    let title = format!("Storage {}", warehouse.id);
    let block = card(&title, tokens, false);
    let inner = block.inner(area);
    block.render(area, buf);

    let [kind, climate, gauge, alerts] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    Paragraph::new(Line::from(vec![
        Span::styled("■ ", Style::default().fg(parse_hex_color(warehouse.color))),
        Span::styled(warehouse.kind, tokens.text()),
    ]))
    .render(kind, buf);

    Paragraph::new(Line::from(Span::styled(
        format!("{}°C · {}% RH", warehouse.temperature, warehouse.humidity),
        tokens.text_secondary(),
    )))
    .render(climate, buf);

    let percent = warehouse.occupancy_percent();
    Gauge::default()
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "{:.0}% ({}/{})",
            percent, warehouse.occupied, warehouse.capacity
        ))
        .gauge_style(level_style(warehouse.occupancy_level(), tokens))
        .render(gauge, buf);

    let alert_line = if warehouse.alerts > 0 {
        Span::styled(
            format!("⚠ {}", pluralize(warehouse.alerts as usize, "alert", "alerts")),
            tokens.warning(),
        )
    } else {
        Span::styled("No alerts", tokens.caption())
    };
    Paragraph::new(Line::from(alert_line)).render(alerts, buf);
}

/// 창고 색상 표시가 붙은 보관 위치 셀
fn storage_cell<'a>(id: &'a str, tokens: &StyleTokenSet) -> Cell<'a> {
    match warehouse_by_id(id) {
        Some(warehouse) => Cell::from(Line::from(vec![
            Span::styled("■ ", Style::default().fg(parse_hex_color(warehouse.color))),
            Span::styled(id, tokens.text()),
        ])),
        None => Cell::from(id),
    }
}

fn render_inventory(tokens: &StyleTokenSet, area: Rect, buf: &mut Buffer) {
    let header = Row::new(["Product", "Quantity", "Storage", "Status", "Expiry"])
        .style(tokens.heading());

    let rows = INVENTORY.iter().map(|item| {
        let status_style = match item.status {
            StockStatus::InStock => tokens.success(),
            StockStatus::LowStock => tokens.warning(),
        };
        Row::new(vec![
            Cell::from(item.name),
            Cell::from(format!("{} {}", item.quantity, item.unit)),
            storage_cell(item.warehouse, tokens),
            Cell::from(Span::styled(item.status.label(), status_style)),
            Cell::from(item.expiry_date),
        ])
        .style(tokens.text())
    });

    Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(card("Inventory", tokens, false))
    .render(area, buf);
}
