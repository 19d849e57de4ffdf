//! Stateless UI rendering for the game screen.
//!
//! [`regions`] is the single source of truth for where things are drawn;
//! mouse hit-testing in the app uses the same rectangles.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use crate::{CellView, GameView, MoveListItem, Player, Square, Status};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen areas that react to the mouse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions {
    /// The nine cells in index order.
    pub cells: [Rect; 9],
    /// The sort toggle control.
    pub sort_toggle: Rect,
    /// The move list, borders included.
    pub move_list: Rect,
    /// Status line.
    pub status: Rect,
    /// Title bar.
    pub title: Rect,
    /// Key help.
    pub help: Rect,
}

impl Regions {
    /// Rows of the move list available for items.
    pub fn move_list_inner(&self) -> Rect {
        self.move_list.inner(Margin::new(1, 1))
    }
}

/// Splits the frame into the screen regions.
pub fn regions(area: Rect) -> Regions {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 3),
            Constraint::Length(3), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 8), Constraint::Min(30)])
        .split(outer[1]);

    let game_pane = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(BOARD_HEIGHT)])
        .split(body[0]);

    let info_pane = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    Regions {
        cells: cell_rects(center_rect(game_pane[1], BOARD_WIDTH, BOARD_HEIGHT)),
        sort_toggle: info_pane[0],
        move_list: info_pane[1],
        status: game_pane[0],
        title: outer[0],
        help: outer[2],
    }
}

fn cell_rects(board: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);
        for col in 0..3 {
            cells[row * 3 + col] = cols[col * 2];
        }
    }
    cells
}

/// Range of move-list rows visible in `height` lines while keeping
/// `selected` on screen.
pub fn visible_rows(len: usize, selected: usize, height: usize) -> Range<usize> {
    if height == 0 {
        return 0..0;
    }
    let start = (selected + 1).saturating_sub(height);
    start..len.min(start + height)
}

/// Draws the whole screen and returns where everything landed.
pub fn draw(frame: &mut Frame, app: &App) -> Regions {
    let regions = regions(frame.area());
    let view = app.view();

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    draw_status(frame, regions.status, &view);
    draw_board(frame, &regions, &view, app);
    draw_sort_toggle(frame, regions.sort_toggle, &view);
    draw_move_list(frame, &regions, &view, app);

    let help = Paragraph::new(
        "Click or 1-9/arrows+Enter: play | Tab: move list | S: sort | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, regions.help);

    regions
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let color = match view.status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(view.status_text.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, regions: &Regions, view: &GameView, app: &App) {
    let board_focused = *app.focus() == Focus::Board;
    for (cell, area) in view.cells.iter().zip(regions.cells) {
        let is_cursor = board_focused && cell.position == *app.cursor();
        draw_cell(frame, area, cell, is_cursor);
    }

    // Grid lines between the cells, clipped to the frame on small terminals.
    let bounds = frame.area();
    let separator = Style::default().fg(Color::DarkGray);
    for row in 0..3 {
        for col in 0..2 {
            let cell = regions.cells[row * 3 + col];
            let area = Rect::new(cell.right(), cell.y, 1, cell.height).intersection(bounds);
            if !area.is_empty() {
                frame.render_widget(Paragraph::new("│\n│\n│").style(separator), area);
            }
        }
    }
    for row in 0..2 {
        let first = regions.cells[row * 3];
        let area = Rect::new(first.x, first.bottom(), BOARD_WIDTH, 1).intersection(bounds);
        if !area.is_empty() {
            let line = "─".repeat(area.width as usize);
            frame.render_widget(Paragraph::new(line).style(separator), area);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, is_cursor: bool) {
    let mut style = match cell.square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if is_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let symbol = match cell.square {
        Square::Empty => (cell.position.to_index() + 1).to_string(),
        square => square.symbol().to_string(),
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {symbol}   "), style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(if cell.winning || is_cursor { style } else { Style::default() })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_sort_toggle(frame: &mut Frame, area: Rect, view: &GameView) {
    let toggle = Paragraph::new(format!("[ {} ]", view.sort_label))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, area);
}

fn draw_move_list(frame: &mut Frame, regions: &Regions, view: &GameView, app: &App) {
    let inner = regions.move_list_inner();
    let list_focused = *app.focus() == Focus::MoveList;
    let rows = visible_rows(view.moves.len(), *app.selected(), inner.height as usize);

    let lines: Vec<Line> = view.moves[rows.clone()]
        .iter()
        .zip(rows)
        .map(|(item, row)| {
            let mut style = match item {
                MoveListItem::Current { .. } => {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                }
                MoveListItem::Jump { .. } => Style::default().fg(Color::White),
            };
            if list_focused && row == *app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let text = match item {
                MoveListItem::Current { label, .. } => format!("{:>2}. {label}", row + 1),
                MoveListItem::Jump { label, .. } => format!("{:>2}. [{label}]", row + 1),
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let border = if list_focused { Color::Cyan } else { Color::DarkGray };
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Moves"),
    );
    frame.render_widget(list, regions.move_list);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortOrder;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_visible_rows_follow_selection() {
        assert_eq!(visible_rows(5, 0, 3), 0..3);
        assert_eq!(visible_rows(5, 4, 3), 2..5);
        assert_eq!(visible_rows(2, 1, 10), 0..2);
        assert_eq!(visible_rows(4, 2, 0), 0..0);
    }

    #[test]
    fn test_cells_laid_out_row_major() {
        let regions = regions(Rect::new(0, 0, 100, 40));
        let [first, second, .., last] = regions.cells;
        assert_eq!(first.y, second.y);
        assert!(second.x > first.x);
        assert!(last.y > first.y);
        assert_eq!(first.width, CELL_WIDTH);
        assert_eq!(first.height, CELL_HEIGHT);
    }

    #[test]
    fn test_draw_fits_small_terminals() {
        let mut app = App::new(SortOrder::Ascending);
        for digit in ['5', '1', '9'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE));
        }

        for (width, height) in [(1, 1), (10, 5), (30, 12), (40, 20), (100, 40)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            let completed = terminal
                .draw(|frame| {
                    draw(frame, &app);
                })
                .unwrap();
            assert_eq!(completed.area, Rect::new(0, 0, width, height));
        }
    }
}
