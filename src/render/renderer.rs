use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::error;

use crate::game::{Drawable, GameStatus, Rgb, Session};
use crate::metrics::GameMetrics;

/// Terminal columns used to draw one grid cell, so cells look square
const CELL_WIDTH: u16 = 2;

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// A rectangle of at most `width` x `height` centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &Session, metrics: &GameMetrics) {
        let grid = session.grid();
        let config = session.config();
        let board_width = grid.cols as u16 * CELL_WIDTH;
        let board_height = grid.rows as u16;
        let panel_height = (config.score_height / config.cell_size).max(1) as u16;

        let area = centered(frame.area(), board_width, board_height + panel_height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(board_height), // Play area
                Constraint::Length(panel_height), // Score panel
            ])
            .split(area);

        match session.status() {
            GameStatus::Ended => {
                let game_over = self.render_game_over(session, metrics);
                frame.render_widget(game_over, chunks[0]);
            }
            status => {
                let board = self.render_board(session);
                frame.render_widget(board, chunks[0]);

                if status == GameStatus::Paused {
                    let label_area = centered(chunks[0], 10, 1);
                    frame.render_widget(Clear, label_area);
                    frame.render_widget(self.render_paused(session), label_area);
                }
            }
        }

        self.render_score_panel(frame, chunks[1], session, metrics);
    }

    fn render_board(&self, session: &Session) -> Paragraph<'_> {
        let grid = session.grid();
        let palette = &session.config().palette;
        let cols = grid.cols as usize;

        // Later drawables win, so the head ends up on top
        let mut cells = vec![palette.background; cols * grid.rows as usize];
        for Drawable { position, color, .. } in session.drawables() {
            match grid.cell_of(position) {
                Some((col, row)) => cells[row as usize * cols + col as usize] = color,
                None => error!(?position, "drawable outside the play area"),
            }
        }

        let cell_text = " ".repeat(CELL_WIDTH as usize);
        let lines: Vec<Line> = cells
            .chunks(cols)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|&color| Span::styled(cell_text.clone(), Style::default().bg(rgb(color))))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
    }

    fn render_paused(&self, session: &Session) -> Paragraph<'_> {
        let palette = &session.config().palette;
        Paragraph::new("PAUSED")
            .style(
                Style::default()
                    .fg(rgb(palette.score_text))
                    .bg(rgb(palette.background))
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
    }

    fn render_score_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        metrics: &GameMetrics,
    ) {
        // Squeezed out by a terminal too short for the board
        if area.height == 0 || area.width == 0 {
            return;
        }

        let palette = &session.config().palette;
        let text_style = Style::default()
            .fg(rgb(palette.score_text))
            .add_modifier(Modifier::BOLD);

        frame.render_widget(
            Block::default().style(Style::default().bg(rgb(palette.score_board))),
            area,
        );

        // One text row through the middle of the panel
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);

        let score = Paragraph::new(format!("SCORE: {}", session.score()))
            .style(text_style)
            .alignment(Alignment::Center);
        let time = Paragraph::new(format!("TIME: {}", metrics.format_time()))
            .style(text_style)
            .alignment(Alignment::Center);

        frame.render_widget(score, halves[0]);
        frame.render_widget(time, halves[1]);
    }

    fn render_game_over(&self, session: &Session, metrics: &GameMetrics) -> Paragraph<'_> {
        let palette = &session.config().palette;
        let label = Style::default().fg(rgb(palette.score_text));
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(rgb(palette.food))
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", label),
                Span::styled(session.score().to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", label),
                Span::styled(metrics.high_score.to_string(), value),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", label),
                Span::styled("R", value),
                Span::styled(" to restart or ", label),
                Span::styled("Q", value),
                Span::styled(" to quit", label),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().bg(rgb(palette.background)))
            .block(Block::default().borders(Borders::ALL))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
