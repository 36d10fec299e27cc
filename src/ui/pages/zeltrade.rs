// ZelTrade page - 카테고리/검색 필터가 있는 상품 목록

use super::{input_spans, page_heading, PageContext};
use crate::core::boundary::RenderFailure;
use crate::models::farm::{Product, CATEGORIES};
use crate::models::MarketState;
use crate::ui::components::card;
use crate::ui::theme::StyleTokenSet;
use crate::utils::formatter::{format_price, format_rating, pluralize};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const PRODUCT_CARD_HEIGHT: u16 = 5;

pub fn render(
    state: &MarketState,
    ctx: PageContext<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> Result<(), RenderFailure> {
    if state.category_index >= CATEGORIES.len() {
        return Err(RenderFailure::InvalidState(format!(
            "category index {} out of range",
            state.category_index
        )));
    }

    let body = page_heading(
        "ZelTrade Marketplace",
        "Fresh produce straight from our polyhouses",
        ctx,
        area,
        buf,
    );
    let [filters, list] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(body);

    render_filters(state, ctx, filters, buf);

    let products = state.visible_products();
    if products.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            " No products match your filters",
            ctx.tokens.text_secondary(),
        )))
        .render(list, buf);
        return Ok(());
    }

    let rows =
        Layout::vertical(vec![Constraint::Length(PRODUCT_CARD_HEIGHT); products.len()]).split(list);
    for (i, (product, row)) in products.iter().zip(rows.iter()).enumerate() {
        render_product(
            product,
            i == state.selected,
            state.is_favorite(product),
            ctx.tokens,
            *row,
            buf,
        );
    }
    Ok(())
}

fn render_filters(state: &MarketState, ctx: PageContext<'_>, area: Rect, buf: &mut Buffer) {
    let tokens = ctx.tokens;
    let count = state.visible_products().len();
    let search_style = if ctx.editing {
        tokens.border_focused()
    } else {
        tokens.text()
    };

    let mut spans = vec![
        Span::styled("Category: ", tokens.text_secondary()),
        Span::styled(format!("◀ {} ▶", state.category()), tokens.accent()),
        Span::raw("   "),
        Span::styled("Search: ", tokens.text_secondary()),
    ];
    spans.extend(input_spans(
        state.search.value().to_string(),
        &state.search,
        ctx.editing,
        search_style,
        tokens.border_focused(),
    ));
    spans.push(Span::raw("   "));
    spans.push(Span::styled(pluralize(count, "product", "products"), tokens.caption()));
    let line = Line::from(spans);

    Paragraph::new(line)
        .block(card("", tokens, ctx.editing))
        .render(area, buf);
}

fn render_product(
    product: &Product,
    selected: bool,
    favorite: bool,
    tokens: &StyleTokenSet,
    area: Rect,
    buf: &mut Buffer,
) {
    let heart = if favorite {
        Span::styled("♥ ", tokens.error())
    } else {
        Span::styled("♡ ", tokens.text_secondary())
    };
    let stock_style = if product.stock < 100 {
        tokens.warning()
    } else {
        tokens.success()
    };

    let lines = vec![
        Line::from(vec![
            heart,
            Span::styled(product.name, tokens.heading()),
            Span::raw("  "),
            Span::styled(format_price(product.price, product.unit), tokens.title()),
        ]),
        Line::from(vec![
            Span::styled(format_rating(product.rating), tokens.warning()),
            Span::styled(format!(" ({} reviews)", product.reviews), tokens.caption()),
            Span::raw("  "),
            Span::styled(product.category, tokens.text_secondary()),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} · Polyhouse {}", product.farmer, product.polyhouse),
                tokens.text_secondary(),
            ),
            Span::raw("  "),
            Span::styled(format!("{} {} in stock", product.stock, product.unit), stock_style),
        ]),
    ];

    Paragraph::new(lines)
        .block(card("", tokens, selected))
        .render(area, buf);
}
