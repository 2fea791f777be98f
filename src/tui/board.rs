//! Board widgets: sentence bar, tile grid, and category selector.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};
use crate::board::Filter;
use crate::models::Category;

/// Number of tile columns in the grid.
///
/// Fixed so the key handlers can translate up/down movement without knowing
/// the terminal size.
pub const GRID_COLS: usize = 4;

/// Height of one tile row, in terminal cells.
const TILE_ROW_HEIGHT: u16 = 3;

/// Render the sentence under construction.
pub fn render_sentence_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let sentence = &app.state.sentence;

    let mut spans = vec![Span::styled("  ", Style::default())];
    if sentence.is_empty() {
        spans.push(Span::styled(
            "Tap tiles to build a sentence...",
            Style::default().fg(theme.text_muted),
        ));
    } else {
        for (i, token) in sentence.tokens().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                token.text.clone(),
                Style::default()
                    .fg(Theme::category_color(token.category))
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    let flags = format!(
        " [{} tiles | play: {} | save: {}]",
        sentence.len(),
        if sentence.can_play() { "yes" } else { "no" },
        if sentence.can_save() { "yes" } else { "no" },
    );

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            flags,
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Sentence "),
    );
    f.render_widget(widget, area);
}

/// Render the grid of available tiles for the active filter.
pub fn render_tile_grid(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let title = match app.state.filter {
        Filter::MostUsed => " Tiles - Most used ".to_string(),
        Filter::Category(cat) => format!(" Tiles - {} ", cat.display_name()),
        Filter::Favorites => " Tiles - Favorites ".to_string(),
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(title);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if app.state.available.is_empty() {
        let empty = Paragraph::new("No tiles in this view.")
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(empty, inner);
        return;
    }

    let visible_rows = (inner.height / TILE_ROW_HEIGHT) as usize;
    if visible_rows == 0 {
        return;
    }

    // Keep the selected tile on screen by scrolling whole rows.
    let selected_row = app.selected / GRID_COLS;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    let row_constraints = vec![Constraint::Length(TILE_ROW_HEIGHT); visible_rows];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    let col_constraints = vec![Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS];

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints.clone())
            .split(*row_area);

        for (col_idx, col_area) in cols.iter().enumerate() {
            let tile_idx = (first_row + row_idx) * GRID_COLS + col_idx;
            let Some(pictogram) = app.state.available.get(tile_idx) else {
                continue;
            };

            let color = Theme::category_color(pictogram.category);
            let selected = tile_idx == app.selected;

            let border_style = if selected {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };

            let label = if pictogram.favorite {
                format!("* {}", pictogram.text)
            } else {
                pictogram.text.clone()
            };

            let mut text_style = Style::default().fg(color);
            if selected {
                text_style = text_style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
            }

            let tile = Paragraph::new(Line::from(Span::styled(label, text_style)))
                .block(Block::default().borders(Borders::ALL).border_style(border_style));
            f.render_widget(tile, *col_area);
        }
    }
}

/// Render the category selector line.
pub fn render_category_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    let entry = |label: String, color, active: bool| {
        let mut style = Style::default().fg(color);
        if active {
            style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
        }
        Span::styled(label, style)
    };

    spans.push(entry(
        " 0 Most used ".to_string(),
        theme.text,
        app.state.filter == Filter::MostUsed,
    ));

    for (i, category) in Category::ALL.iter().enumerate() {
        spans.push(Span::raw(" "));
        spans.push(entry(
            format!(" {} {} ", i + 1, category.display_name()),
            Theme::category_color(*category),
            app.state.filter == Filter::Category(*category),
        ));
    }

    spans.push(Span::raw(" "));
    spans.push(entry(
        " v Favorites ".to_string(),
        theme.accent,
        app.state.filter == Filter::Favorites,
    ));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Categories "),
    );
    f.render_widget(widget, area);
}
