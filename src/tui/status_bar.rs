//! Status bar widget for displaying status messages and help.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the transient message and key help.
    pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let mut lines = Vec::new();

        if let Some(message) = &app.status {
            let color = if app.status_is_error {
                theme.error
            } else {
                theme.success
            };
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(color),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("{} pictograms in catalog", app.state.catalog.len()),
                Style::default().fg(theme.text_secondary),
            )));
        }

        lines.push(Line::from(Span::styled(
            "arrows: move | Enter: tap | f: favorite | 0-6/v: view | Backspace: undo tile | c: clear | s: save | y: copy | q: quit",
            Style::default().fg(theme.text_muted),
        )));

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(widget, area);
    }
}
