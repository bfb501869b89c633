//! Shared layout and widgets for the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas produced by [`create_game_layout`].
pub struct GameLayout {
    /// Play field, top left inside the outer border
    pub content: Rect,
    /// Two-line status bar under the play field
    pub status_bar: Rect,
    /// Side panel on the right
    pub info_panel: Rect,
}

/// Split the screen into a bordered play field, a status bar and an info panel.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content]                     │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(columns[0]);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel: columns[1],
    }
}

/// Status line plus a line of `(key, action)` hints, both centred.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 || controls.is_empty() {
        return;
    }

    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Draw the bordered " Info " panel and return its inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Banner across the bottom of `area`, leaving the rest of the board visible.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    prompt: &str,
) {
    let height = area.height.min(5);
    let banner = Rect {
        y: area.y + area.height.saturating_sub(height),
        height,
        ..area
    };
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(Span::styled(prompt, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
