use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;
use tracing::{debug, warn};

use crate::catalog::{Catalog, CommandError};
use crate::models::Column;

use super::forms::{ConfirmGameDelete, GameForm, Notice, LABEL_WIDTH};
use super::helpers::{centered_rect, key_hints};
use super::screens::GameTable;

/// Height of the command bar (buttons and search field).
const COMMAND_BAR_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Width of the "Game Details" panel.
const FORM_WIDTH: u16 = 46;
/// Width of the search field in the command bar.
const SEARCH_WIDTH: u16 = 36;
/// Rows skipped by PgUp / PgDn in the table.
const PAGE_STEP: isize = 10;
/// Column widths of the games table, in column order.
const TABLE_WIDTHS: [u16; 9] = [22, 12, 12, 18, 10, 10, 8, 6, 7];

/// Which panel receives typed keys.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Focus {
    Form,
    Table,
}

/// Overlay or input mode on top of the main screen.
enum Mode {
    Normal,
    Searching,
    ConfirmDelete(ConfirmGameDelete),
    Notice(Notice),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state: the catalog controller plus everything the
/// screen needs to remember between key presses.
pub struct App {
    catalog: Catalog,
    form: GameForm,
    table: GameTable,
    search_query: String,
    focus: Focus,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            form: GameForm::default(),
            table: GameTable::default(),
            search_query: String::new(),
            focus: Focus::Form,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Process one key press. Returns `true` when the user asked to exit.
    /// Storage failures come back as `Err` and end the event loop.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Searching => self.handle_search_key(code)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::Notice(notice) => match code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Mode::Normal,
                _ => Mode::Notice(notice),
            },
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::F(1) => return self.add_game(),
            KeyCode::F(2) => return self.update_selected(),
            KeyCode::F(3) => return Ok(self.request_delete()),
            KeyCode::F(4) => {
                self.catalog.sort_by_rating();
                self.table.reset();
                self.set_status("Sorted by rating, highest first.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::F(5) => {
                let ascending = self.catalog.sort_by_platform();
                self.table.reset();
                let direction = if ascending { "A-Z" } else { "Z-A" };
                self.set_status(format!("Sorted by platform, {direction}."), StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::F(6) => return Ok(self.show_highest_rated()),
            KeyCode::F(7) => {
                self.refresh()?;
                return Ok(Mode::Normal);
            }
            KeyCode::F(8) => {
                self.clear_status();
                return Ok(Mode::Searching);
            }
            KeyCode::F(9) => {
                self.form.clear();
                self.set_status("Form cleared.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::F(10) => {
                *exit = true;
                return Ok(Mode::Normal);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Form => Focus::Table,
                    Focus::Table => Focus::Form,
                };
                return Ok(Mode::Normal);
            }
            _ => {}
        }

        match self.focus {
            Focus::Form => match code {
                KeyCode::Up => self.form.focus_previous(),
                KeyCode::Down | KeyCode::Enter => self.form.focus_next(),
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Char(ch) => {
                    self.form.push_char(ch);
                }
                _ => {}
            },
            Focus::Table => {
                let len = self.catalog.view().len();
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                    KeyCode::Up => self.table.move_selection(-1, len),
                    KeyCode::Down => self.table.move_selection(1, len),
                    KeyCode::PageUp => self.table.move_selection(-PAGE_STEP, len),
                    KeyCode::PageDown => self.table.move_selection(PAGE_STEP, len),
                    KeyCode::Home => self.table.select_first(),
                    KeyCode::End => self.table.select_last(len),
                    KeyCode::Enter => self.choose_current_row(),
                    _ => {}
                }
            }
        }

        Ok(Mode::Normal)
    }

    fn handle_search_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc => Ok(Mode::Normal),
            KeyCode::Enter => self.search_game(),
            KeyCode::Backspace => {
                self.search_query.pop();
                Ok(Mode::Searching)
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                self.search_query.push(ch);
                Ok(Mode::Searching)
            }
            _ => Ok(Mode::Searching),
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmGameDelete) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.perform_delete(confirm)
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn add_game(&mut self) -> Result<Mode> {
        match self.catalog.add(self.form.to_record()) {
            Ok(_) => {
                self.table.reset();
                self.form.clear();
                self.clear_status();
                Ok(Mode::Notice(Notice::info("Added", "Game added successfully.")))
            }
            Err(err) => self.command_failed(err),
        }
    }

    fn update_selected(&mut self) -> Result<Mode> {
        let Some(id) = self.table.chosen else {
            return Ok(Mode::Notice(Notice::warning(
                "Select",
                "Select a row to update.",
            )));
        };

        match self.catalog.update(id, self.form.to_record()) {
            Ok(()) => {
                self.table.reset();
                self.clear_status();
                Ok(Mode::Notice(Notice::info(
                    "Updated",
                    "Game updated successfully.",
                )))
            }
            Err(err) => self.command_failed(err),
        }
    }

    fn request_delete(&mut self) -> Mode {
        let Some(id) = self.table.chosen else {
            return Mode::Notice(Notice::warning("Select", "Select a row to delete."));
        };

        match self.catalog.get(id) {
            Some(entry) => Mode::ConfirmDelete(ConfirmGameDelete {
                id,
                name: entry.record.name.clone(),
            }),
            None => {
                self.table.chosen = None;
                Mode::Notice(Notice::warning(
                    "Select",
                    CommandError::NotFound(id).to_string(),
                ))
            }
        }
    }

    fn perform_delete(&mut self, confirm: ConfirmGameDelete) -> Result<Mode> {
        match self.catalog.delete(confirm.id) {
            Ok(removed) => {
                self.table.reset();
                self.form.clear();
                self.clear_status();
                Ok(Mode::Notice(Notice::info(
                    "Deleted",
                    format!("'{}' deleted.", removed.name),
                )))
            }
            Err(err) => self.command_failed(err),
        }
    }

    fn show_highest_rated(&mut self) -> Mode {
        match self.catalog.highest_rated() {
            Some(best) => {
                self.table.reset();
                self.clear_status();
                Mode::Notice(Notice::info(
                    "Highest Rated",
                    format!("{} — Rating: {}", best.record.name, best.record.rating),
                ))
            }
            None => Mode::Notice(Notice::info("No Ratings", "No valid rated games found.")),
        }
    }

    fn search_game(&mut self) -> Result<Mode> {
        let term = self.search_query.trim().to_lowercase();
        let matches = self.catalog.search(&term)?;
        self.table.reset();
        self.focus = Focus::Table;

        if term.is_empty() {
            self.set_status(
                format!("Showing all {matches} games."),
                StatusKind::Info,
            );
            return Ok(Mode::Normal);
        }

        if matches == 0 {
            self.clear_status();
            return Ok(Mode::Notice(Notice::info(
                "Search",
                format!("No game found matching '{term}'."),
            )));
        }

        self.set_status(
            format!("{matches} game(s) matching '{term}'."),
            StatusKind::Info,
        );
        Ok(Mode::Normal)
    }

    fn refresh(&mut self) -> Result<()> {
        self.catalog.refresh()?;
        self.table.reset();
        let count = self.catalog.entries().len();
        self.set_status(format!("Reloaded {count} games."), StatusKind::Info);
        Ok(())
    }

    /// Pick the highlighted row as the target of Update/Delete and copy its
    /// values into the form.
    fn choose_current_row(&mut self) {
        let Some(entry) = self.table.current(self.catalog.view()).cloned() else {
            self.set_status("No game to select.", StatusKind::Error);
            return;
        };
        debug!(id = %entry.id, "selected game");
        self.table.chosen = Some(entry.id);
        self.form.load(&entry.record);
        self.set_status(format!("Selected '{}'.", entry.record.name), StatusKind::Info);
    }

    /// Turn a command failure into a notice. Storage errors are not
    /// recoverable here and are passed up to the event loop.
    fn command_failed(&mut self, err: CommandError) -> Result<Mode> {
        match err {
            CommandError::Invalid(reason) => {
                Ok(Mode::Notice(Notice::error("Invalid data", reason.to_string())))
            }
            CommandError::NotFound(id) => {
                warn!(%id, "selected game vanished");
                self.table.chosen = None;
                Ok(Mode::Notice(Notice::warning(
                    "Select",
                    CommandError::NotFound(id).to_string(),
                )))
            }
            CommandError::Storage(err) => Err(err),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(COMMAND_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_command_bar(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);
        self.draw_form(frame, body[0]);
        self.draw_table(frame, body[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Notice(notice) => self.draw_notice(frame, area, notice),
            Mode::Normal | Mode::Searching => {}
        }
    }

    fn draw_command_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SEARCH_WIDTH)])
            .split(area);

        let commands = Paragraph::new(key_hints(&[
            ("F1", "Add Game"),
            ("F2", "Update Selected"),
            ("F3", "Delete Selected"),
            ("F4", "Sort by Rating"),
            ("F5", "Sort by Platform"),
            ("F6", "Highest Rated"),
            ("F7", "Refresh"),
            ("F10", "Exit"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game Management System"),
        );
        frame.render_widget(commands, chunks[0]);

        let searching = matches!(self.mode, Mode::Searching);
        let mut block = Block::default().borders(Borders::ALL).title("[F8] Search Game");
        if searching {
            block = block.style(Style::default().fg(Color::Yellow));
        }
        let inner = block.inner(chunks[1]);
        let query = Paragraph::new(Span::raw(self.search_query.clone())).block(block);
        frame.render_widget(query, chunks[1]);

        if searching {
            let visible = (self.search_query.chars().count() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position((inner.x + visible, inner.y));
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Form && matches!(self.mode, Mode::Normal);
        let mut block = Block::default().borders(Borders::ALL).title("Game Details");
        if focused {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        let inner = block.inner(area);

        let mut lines: Vec<Line> = Column::ALL
            .iter()
            .map(|column| self.form.build_line(*column, focused))
            .collect();
        lines.push(Line::from(""));
        lines.push(key_hints(&[("F9", "Clear Form")]));
        if let Some(id) = self.table.chosen {
            lines.push(Line::from(Span::styled(
                format!("Editing selection {id}"),
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);

        if focused {
            let row = self.form.active.index() as u16;
            let col = (LABEL_WIDTH + self.form.value_len(self.form.active)) as u16;
            if row < inner.height {
                frame.set_cursor_position((
                    inner.x + col.min(inner.width.saturating_sub(1)),
                    inner.y + row,
                ));
            }
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let view = self.catalog.view();
        let title = format!(
            "Games ({} of {})",
            view.len(),
            self.catalog.entries().len()
        );
        let mut block = Block::default().borders(Borders::ALL).title(title);
        if self.focus == Focus::Table && matches!(self.mode, Mode::Normal) {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        if view.is_empty() {
            let message = if self.catalog.entries().is_empty() {
                "No games yet. Fill in the form and press F1 to add one."
            } else {
                "No games match the current view. Press F7 to show all."
            };
            let paragraph = Paragraph::new(message)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(
            Column::ALL
                .iter()
                .map(|column| Cell::from(column.label())),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = view.iter().map(|entry| {
            let row = Row::new(entry.record.fields().map(Cell::from));
            if Some(entry.id) == self.table.chosen {
                row.style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        });

        let table = Table::new(rows, TABLE_WIDTHS.map(Constraint::Length))
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(self.table.cursor));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match (&self.mode, self.focus) {
            (Mode::Searching, _) => key_hints(&[
                ("Enter", "Search"),
                ("Backspace", "Delete"),
                ("Esc", "Stop Editing"),
            ]),
            (Mode::ConfirmDelete(_), _) => key_hints(&[("y", "Delete"), ("n/Esc", "Keep")]),
            (Mode::Notice(_), _) => key_hints(&[("Enter/Esc", "Dismiss")]),
            (Mode::Normal, Focus::Form) => key_hints(&[
                ("↑↓", "Field"),
                ("Tab", "Table"),
                ("F1", "Add"),
                ("F2", "Update"),
                ("F8", "Search"),
                ("F9", "Clear"),
                ("F10", "Exit"),
            ]),
            (Mode::Normal, Focus::Table) => key_hints(&[
                ("↑↓", "Move"),
                ("Enter", "Select"),
                ("Tab", "Form"),
                ("F3", "Delete"),
                ("F4/F5", "Sort"),
                ("F6", "Highest"),
                ("q", "Quit"),
            ]),
        }
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmGameDelete) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Confirm").borders(Borders::ALL);
        let lines = vec![
            Line::from(format!("Delete '{}'?", confirm.name)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, notice: &Notice) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(notice.title.clone())
            .borders(Borders::ALL)
            .border_style(notice.kind.style());
        let lines = vec![
            Line::from(notice.message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to continue.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::{tempdir, TempDir};

    use super::*;
    use crate::models::GameRecord;
    use crate::store::{ensure_store, write_all};

    fn record(name: &str, platform: &str, rating: &str) -> GameRecord {
        GameRecord::from_fields([
            name,
            "Adventure",
            "03-03-2017",
            "Nintendo",
            platform,
            "1000",
            "1.0",
            rating,
            "12",
        ])
        .expect("record")
    }

    fn app_with(records: &[GameRecord]) -> (TempDir, App) {
        let dir = tempdir().expect("tempdir");
        let store = ensure_store(dir.path().join("games.csv")).expect("store");
        write_all(&store, records).expect("seed");
        let catalog = Catalog::open(store).expect("catalog");
        (dir, App::new(catalog))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).expect("key");
        }
    }

    fn fill_form(app: &mut App, values: [&str; 9]) {
        for value in values {
            type_text(app, value);
            app.handle_key(KeyCode::Down).expect("key");
        }
    }

    fn notice_message(app: &App) -> Option<&str> {
        match &app.mode {
            Mode::Notice(notice) => Some(notice.message.as_str()),
            _ => None,
        }
    }

    #[test]
    fn add_from_form_persists_and_clears() {
        let (_dir, mut app) = app_with(&[]);
        fill_form(
            &mut app,
            ["Celeste", "Platformer", "25-01-2018", "Maddy Makes Games", "PC", "900", "1.4", "9.1", "10"],
        );
        app.handle_key(KeyCode::F(1)).expect("add");

        assert_eq!(notice_message(&app), Some("Game added successfully."));
        assert_eq!(app.catalog.entries().len(), 1);
        assert_eq!(app.form.values, GameRecord::default());
    }

    #[test]
    fn invalid_form_shows_reason_and_keeps_values() {
        let (_dir, mut app) = app_with(&[]);
        type_text(&mut app, "Half");
        app.handle_key(KeyCode::F(1)).expect("add");

        assert_eq!(notice_message(&app), Some("All fields are required."));
        assert!(app.catalog.entries().is_empty());
        app.handle_key(KeyCode::Enter).expect("dismiss");
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.form.values.name, "Half");
    }

    #[test]
    fn update_and_delete_need_a_selection() {
        let (_dir, mut app) = app_with(&[record("Zelda", "Switch", "9.5")]);
        app.handle_key(KeyCode::F(2)).expect("update");
        assert_eq!(notice_message(&app), Some("Select a row to update."));
        app.handle_key(KeyCode::Esc).expect("dismiss");

        app.handle_key(KeyCode::F(3)).expect("delete");
        assert_eq!(notice_message(&app), Some("Select a row to delete."));
    }

    #[test]
    fn selecting_a_row_fills_the_form_and_delete_confirms() {
        let (_dir, mut app) = app_with(&[
            record("Zelda", "Switch", "9.5"),
            record("Metroid", "Switch", "8.0"),
        ]);
        app.handle_key(KeyCode::Tab).expect("focus table");
        app.handle_key(KeyCode::Down).expect("move");
        app.handle_key(KeyCode::Enter).expect("select");
        assert_eq!(app.form.values.name, "Metroid");

        app.handle_key(KeyCode::F(3)).expect("delete");
        assert!(matches!(app.mode, Mode::ConfirmDelete(_)));
        app.handle_key(KeyCode::Char('n')).expect("cancel");
        assert_eq!(app.catalog.entries().len(), 2);

        app.handle_key(KeyCode::F(3)).expect("delete");
        app.handle_key(KeyCode::Char('y')).expect("confirm");
        assert_eq!(notice_message(&app), Some("'Metroid' deleted."));
        assert_eq!(app.catalog.entries().len(), 1);
        assert_eq!(app.table.chosen, None);
        assert_eq!(app.form.values, GameRecord::default());
    }

    #[test]
    fn search_field_filters_by_name() {
        let (_dir, mut app) = app_with(&[
            record("The Legend of Zelda", "Switch", "9.5"),
            record("Metroid", "Switch", "8.0"),
        ]);
        app.handle_key(KeyCode::F(8)).expect("search");
        type_text(&mut app, "ZELDA");
        app.handle_key(KeyCode::Enter).expect("run");
        assert_eq!(app.catalog.view().len(), 1);

        app.handle_key(KeyCode::F(8)).expect("search");
        type_text(&mut app, "q");
        // typing inside the search field must not reach the table's quit key
        assert!(!app.handle_key(KeyCode::Enter).expect("run"));
        assert_eq!(notice_message(&app), Some("No game found matching 'zeldaq'."));
    }

    #[test]
    fn highest_rated_reports_the_winner() {
        let (_dir, mut app) = app_with(&[
            record("Okay Game", "PC", "7.5"),
            record("Great Game", "PC", "9.0"),
        ]);
        app.handle_key(KeyCode::F(6)).expect("highest");
        assert_eq!(notice_message(&app), Some("Great Game — Rating: 9.0"));
        assert_eq!(app.catalog.view().len(), 1);
    }

    #[test]
    fn exit_keys_stop_the_loop() {
        let (_dir, mut app) = app_with(&[]);
        assert!(!app.handle_key(KeyCode::Char('q')).expect("typed into form"));
        assert!(app.handle_key(KeyCode::F(10)).expect("exit"));
    }

    #[test]
    fn renders_form_table_and_notice() {
        let (_dir, mut app) = app_with(&[record("Zelda", "Switch", "9.5")]);
        app.handle_key(KeyCode::F(6)).expect("highest");

        let mut terminal = Terminal::new(TestBackend::new(160, 40)).expect("terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Game Details"));
        assert!(text.contains("Release Date"));
        assert!(text.contains("Zelda"));
        assert!(text.contains("Highest Rated"));
    }
}
