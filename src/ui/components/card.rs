// Card - 페이지 공통 카드 블록

use crate::ui::theme::StyleTokenSet;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding},
};

/// 카드 테두리 (빈 제목이면 제목 없음)
pub fn card<'a>(title: &'a str, tokens: &StyleTokenSet, focused: bool) -> Block<'a> {
    let border_style = if focused {
        tokens.border_focused()
    } else {
        tokens.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(tokens.border_type())
        .border_style(border_style)
        .padding(Padding::horizontal(tokens.spacing.card_padding))
        .style(tokens.paper());
    if title.is_empty() {
        block
    } else {
        block.title(Line::from(Span::styled(format!(" {} ", title), tokens.heading())))
    }
}

/// 영역을 `columns`열 격자로 분할 (행 단위)
pub fn grid(area: Rect, count: usize, columns: usize, row_height: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let rows = count.div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Length(row_height); rows]).split(area);

    let mut cells = Vec::with_capacity(count);
    for row in row_areas.iter() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row);
        cells.extend(col_areas.iter().copied());
    }
    cells.truncate(count);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_two_columns() {
        let cells = grid(Rect::new(0, 0, 40, 20), 4, 2, 5);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], Rect::new(0, 0, 20, 5));
        assert_eq!(cells[1], Rect::new(20, 0, 20, 5));
        assert_eq!((cells[2].x, cells[2].y), (0, 5));
    }

    #[test]
    fn test_grid_partial_row() {
        let cells = grid(Rect::new(0, 0, 80, 10), 3, 4, 5);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].x, 40);
    }
}
