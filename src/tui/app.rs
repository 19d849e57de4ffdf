//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::layout::Position as ScreenPosition;
use tracing::{debug, instrument, warn};

use super::input::{digit_position, move_cursor};
use super::ui::{Regions, visible_rows};
use crate::{Game, GameView, Position, SortOrder};

/// Which part of the screen receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move-list selection.
    MoveList,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh game.
    #[instrument]
    pub fn new(sort: SortOrder) -> Self {
        Self {
            game: Game::with_sort(sort),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Derives the view of the current state.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.game)
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_sort(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.activate_cell(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::MoveList => self.handle_list_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cell(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_row(self.selected),
            _ => {}
        }
    }

    /// Handles a left click at a terminal cell, using the regions of the
    /// last drawn frame.
    #[instrument(skip(self, regions))]
    pub fn handle_click(&mut self, column: u16, row: u16, regions: &Regions) {
        let point = ScreenPosition::new(column, row);

        if let Some(index) = regions.cells.iter().position(|rect| rect.contains(point)) {
            if let Some(pos) = Position::from_index(index) {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.activate_cell(pos);
            }
            return;
        }

        if regions.sort_toggle.contains(point) {
            self.toggle_sort();
            return;
        }

        let inner = regions.move_list_inner();
        if inner.contains(point) {
            let rows = visible_rows(
                self.game.history().len(),
                self.selected,
                inner.height as usize,
            );
            let row = rows.start + usize::from(row - inner.y);
            if rows.contains(&row) {
                self.focus = Focus::MoveList;
                self.selected = row;
                self.activate_row(row);
            }
        }
    }

    fn activate_cell(&mut self, pos: Position) {
        if self.game.click(pos) {
            self.sync_selection();
        }
    }

    fn activate_row(&mut self, row: usize) {
        let Some(item) = self.view().moves.into_iter().nth(row) else {
            return;
        };
        match item.jump_target() {
            Some(target) => {
                if let Err(e) = self.game.jump_to(target) {
                    warn!(error = %e, "Jump failed");
                }
                self.sync_selection();
            }
            None => debug!(row, "Current move selected, nothing to do"),
        }
    }

    fn toggle_sort(&mut self) {
        self.game.toggle_sort();
        self.sync_selection();
    }

    /// Moves the list selection onto the row of the current move.
    fn sync_selection(&mut self) {
        let current = self.game.current_move();
        self.selected = self
            .game
            .sort()
            .indices(self.game.history().len())
            .position(|move_number| move_number == current)
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digits_play_moves() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game().current_move(), 2);
        assert_eq!(*app.game().history()[2].location(), Some(Position::TopLeft));
        assert_eq!(*app.selected(), 2);
    }

    #[test]
    fn test_list_navigation_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_sort_key_keeps_selection_on_current_move() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.game().sort(), SortOrder::Descending);
        assert_eq!(*app.selected(), 0);
    }

    #[test]
    fn test_click_cell_and_sort_toggle() {
        let regions = super::super::ui::regions(Rect::new(0, 0, 100, 40));
        let mut app = App::new(SortOrder::Ascending);

        let cell = regions.cells[8];
        app.handle_click(cell.x + 1, cell.y + 1, &regions);
        assert_eq!(*app.game().history()[1].location(), Some(Position::BottomRight));

        let toggle = regions.sort_toggle;
        app.handle_click(toggle.x + 2, toggle.y + 1, &regions);
        assert_eq!(app.game().sort(), SortOrder::Descending);
    }

    #[test]
    fn test_click_move_list_row() {
        let regions = super::super::ui::regions(Rect::new(0, 0, 100, 40));
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));

        let inner = regions.move_list_inner();
        app.handle_click(inner.x + 1, inner.y, &regions);
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(*app.focus(), Focus::MoveList);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('q'));
        assert!(*app.should_quit());
    }
}
