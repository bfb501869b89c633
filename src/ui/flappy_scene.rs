//! UI rendering for Flappy Bird.
//!
//! The world is measured in pixels; the play field is a grid of terminal
//! cells. Each cell samples the world at its centre.

use crate::ui::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use flappy_term::core::GROUND_HEIGHT;
use flappy_term::flappy::{FlappyGame, Phase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a single play-field cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe,
    Ground,
    Bird,
}

/// Maps world pixels onto a grid of terminal cells.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    cols: u16,
    rows: u16,
    px_per_col: f64,
    px_per_row: f64,
}

impl Viewport {
    fn new(area: Rect, game: &FlappyGame) -> Self {
        let cols = area.width.max(1);
        let rows = area.height.max(1);
        Self {
            cols,
            rows,
            px_per_col: game.config.screen_width / cols as f64,
            px_per_row: game.config.screen_height / rows as f64,
        }
    }

    /// World point at the centre of a cell.
    fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.px_per_col,
            (row as f64 + 0.5) * self.px_per_row,
        )
    }

    /// Cell containing a world point, clamped to the grid.
    fn cell_of(&self, x: f64, y: f64) -> (u16, u16) {
        let col = (x / self.px_per_col).floor().clamp(0.0, (self.cols - 1) as f64);
        let row = (y / self.px_per_row).floor().clamp(0.0, (self.rows - 1) as f64);
        (col as u16, row as u16)
    }
}

/// Classify the world point `(x, y)`. Pipes draw over the ground strip.
fn world_cell(game: &FlappyGame, x: f64, y: f64) -> Cell {
    let in_pipe = game.pipes.iter().any(|pipe| {
        let (top, bottom) = game.pipe_rects(pipe);
        top.contains(x, y) || bottom.contains(x, y)
    });
    if in_pipe {
        Cell::Pipe
    } else if y >= game.config.screen_height - GROUND_HEIGHT {
        Cell::Ground
    } else {
        Cell::Sky
    }
}

/// Bird glyph by vertical velocity.
fn bird_glyph(velocity: f64) -> &'static str {
    if velocity < -2.0 {
        "▲"
    } else if velocity > 4.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the Flappy Bird game scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let border = if game.is_game_over() {
        Color::Red
    } else {
        Color::Cyan
    };
    let layout = create_game_layout(frame, area, " Flappy Bird ", border, 22);

    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.is_game_over() {
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER!",
            &format!("You passed {} pipes.", game.score),
            "Press 'S' to Restart",
        );
    }
}

/// Render the sky, pipes, ground and bird.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let view = Viewport::new(area, game);
    let bird = game.bird_rect();
    let bird_cell = view.cell_of(
        bird.x + bird.width / 2.0,
        bird.y + bird.height / 2.0,
    );

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let cell = if (col, row) == bird_cell {
                Cell::Bird
            } else {
                let (x, y) = view.cell_center(col, row);
                world_cell(game, x, y)
            };

            spans.push(match cell {
                Cell::Bird => Span::styled(
                    bird_glyph(game.bird.velocity),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::Ground => Span::styled("▒", Style::default().fg(Color::LightRed)),
                Cell::Sky => Span::raw(" "),
            });
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    match game.phase {
        Phase::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space/Up]", "Flap"), ("[Q/Esc]", "Quit")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed! Final score: {}", game.score),
            Color::Red,
            &[("[S]", "Restart"), ("[Q/Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let (phase_text, phase_color) = match game.phase {
        Phase::Playing => ("Flying", Color::Green),
        Phase::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(vec![
            label(" Score: "),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label(" State: "),
            Span::styled(phase_text, Style::default().fg(phase_color)),
        ]),
        Line::from(vec![
            label(" Speed: "),
            Span::styled(
                format!("{:+.0}", game.bird.velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            label(" Height: "),
            Span::styled(
                format!("{:.0}", game.config.screen_height - game.bird.y),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label(" Time: "),
            Span::styled(
                format!(
                    "{:.1}s",
                    game.tick_count as f64 * game.config.tick_interval_ms as f64 / 1000.0
                ),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
