//! Frame layout.
//!
//! Stateless drawing of the whole screen from a [`ViewModel`]: header with
//! the player and score, the 2x2 pad grid, the status line, and the score
//! table overlaid once a session ends.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

use crate::core::{Leaderboard, Signal};
use crate::ui::theme;

/// Everything currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    pub player: String,
    pub score: Option<u32>,
    pub lit: Option<Signal>,
    pub message: String,
    pub scores: Option<Leaderboard>,
}

pub fn draw(frame: &mut Frame, view: &ViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Pad grid
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], view);
    draw_pads(frame, chunks[1], view);
    draw_status(frame, chunks[2], view);
    draw_help(frame, chunks[3]);

    if let Some(board) = &view.scores {
        draw_scores(frame, chunks[1], board);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let score = match view.score {
        Some(score) => score.to_string(),
        None => "--".to_string(),
    };
    let header = Paragraph::new(format!("MEMOTERM   {}   score: {}", view.player, score))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_pads(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let cells = [top[0], top[1], bottom[0], bottom[1]];
    for (signal, cell) in Signal::ALL.into_iter().zip(cells) {
        draw_pad(frame, cell, signal, view.lit == Some(signal));
    }
}

fn draw_pad(frame: &mut Frame, area: Rect, signal: Signal, lit: bool) {
    let colors = theme::pad_colors(signal);
    let fill = if lit { colors.lit } else { colors.rest };
    let mut style = Style::default().bg(fill).fg(Color::Black);
    if lit {
        style = style.add_modifier(Modifier::BOLD);
    }
    let pad = Paragraph::new(pad_label(signal))
        .block(Block::default().borders(Borders::ALL))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(pad, area);
}

fn pad_label(signal: Signal) -> &'static str {
    match signal {
        Signal::Green => "[1] green",
        Signal::Red => "[2] red",
        Signal::Yellow => "[3] yellow",
        Signal::Blue => "[4] blue",
    }
}

fn draw_status(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let status = Paragraph::new(view.message.clone())
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("1-4 / g r y b: pads   n: new game   q / Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

/// Centered score table over the pad grid.
fn draw_scores(frame: &mut Frame, area: Rect, board: &Leaderboard) {
    let popup = centered(area, 44, (board.len() as u16 + 4).max(5));

    frame.render_widget(Clear, popup);
    if board.is_empty() {
        let empty = Paragraph::new("no scores yet")
            .block(Block::default().borders(Borders::ALL).title(" High scores "))
            .alignment(Alignment::Center);
        frame.render_widget(empty, popup);
        return;
    }

    let rows: Vec<Row> = board
        .entries()
        .iter()
        .enumerate()
        .map(|(place, entry)| {
            Row::new(vec![
                Cell::from(format!("{}", place + 1)),
                Cell::from(entry.name.clone()),
                Cell::from(entry.score.to_string()),
                Cell::from(entry.date.clone()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(14),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(Row::new(vec!["#", "player", "score", "date"]).style(Style::default().add_modifier(Modifier::BOLD)))
    .block(Block::default().borders(Borders::ALL).title(" High scores "));
    frame.render_widget(table, popup);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
