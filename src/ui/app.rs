use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::models::{Item, ItemId};
use crate::store::ItemStore;

use super::forms::{ConfirmItemDelete, ItemField, ItemForm};
use super::helpers::{centered_rect, cursor_column, item_row_line, name_column_width};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Header space for the title and item count.
const HEADER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;
/// Hint shown when the add dialog is confirmed with a blank field.
const ADD_HINT: &str = "Enter a name and a quantity to add an item.";

/// Fine-grained modes for the single list screen.
enum Mode {
    Normal,
    AddingItem(ItemForm),
    EditingItem { id: ItemId, form: ItemForm },
    ConfirmItemDelete(ConfirmItemDelete),
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

/// Central application state: the item store plus everything the screen
/// needs to know about selection and open dialogs.
pub struct App {
    store: ItemStore,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            selected: 0,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Read-only view of the list behind the screen.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Entry point for raw terminal key events. Only presses count, and
    /// Ctrl+C quits from any mode. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!(items = self.store.len(), "interrupted with ctrl+c");
            return true;
        }
        self.handle_key(key.code)
    }

    /// Route a key press to the active mode. Returns `true` when the user asked
    /// to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::AddingItem(form) => self.handle_add_item(code, form),
            Mode::EditingItem { id, form } => self.handle_edit_item(code, id, form),
            Mode::ConfirmItemDelete(confirm) => self.handle_confirm_delete(code, confirm),
        };

        if exit {
            info!(items = self.store.len(), "quit requested");
        }
        exit
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.store.len().saturating_sub(1),
            KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.clear_status();
                return Mode::AddingItem(ItemForm::default());
            }
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                if let Some(item) = self.current_item().cloned() {
                    self.clear_status();
                    self.store.begin_edit(item.id);
                    return Mode::EditingItem {
                        id: item.id,
                        form: ItemForm::from_item(&item),
                    };
                }
                self.set_status("No item selected to edit.", StatusKind::Error);
            }
            KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                if let Some(item) = self.current_item() {
                    let confirm = ConfirmItemDelete::from(item);
                    self.clear_status();
                    return Mode::ConfirmItemDelete(confirm);
                }
                self.set_status("No item selected to delete.", StatusKind::Error);
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_add_item(&mut self, code: KeyCode, mut form: ItemForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add item cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.store.add(&form.name, &form.quantity) {
                Some(id) => {
                    self.focus(id);
                    if let Some(item) = self.store.get(id) {
                        let text = format!("Added {item}.");
                        self.set_status(text, StatusKind::Info);
                    }
                    return Mode::Normal;
                }
                None => form.error = Some(ADD_HINT.to_string()),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::AddingItem(form)
    }

    fn handle_edit_item(&mut self, code: KeyCode, id: ItemId, mut form: ItemForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.store.cancel_edit(id);
                self.set_status("Edit cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok((name, quantity)) => {
                    self.store.commit_edit(id, &name, quantity);
                    self.focus(id);
                    self.set_status(format!("Updated {name}."), StatusKind::Info);
                    return Mode::Normal;
                }
                Err(err) => {
                    debug!(id, error = %err, "edit rejected");
                    form.error = Some(err.to_string());
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::EditingItem { id, form }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmItemDelete) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.store.delete(confirm.id);
                self.clamp_selection();
                self.set_status(format!("Deleted {}.", confirm.name), StatusKind::Info);
                Mode::Normal
            }
            _ => Mode::ConfirmItemDelete(confirm),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        // Too short for both: the list wins and the footer is dropped.
        if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            self.draw_list(frame, chunks[0]);
            self.draw_footer(frame, chunks[1]);
        } else {
            self.draw_list(frame, area);
        }

        match &self.mode {
            Mode::AddingItem(form) => self.draw_item_form(frame, area, "Add Shopping Item", form),
            Mode::EditingItem { form, .. } => {
                self.draw_item_form(frame, area, "Edit Shopping Item", form)
            }
            Mode::ConfirmItemDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
            .split(area);

        let count = self.store.len();
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Shopping List", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "  •  {count} {}",
                if count == 1 { "item" } else { "items" }
            )),
        ]))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let items = self.store.items();
        if items.is_empty() {
            let message = Paragraph::new("No items yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        let name_width = name_column_width(items);
        let rows: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| ListItem::new(item_row_line(item, name_width, idx == self.selected)))
            .collect();
        let list = List::new(rows)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Yellow));
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, chunks[1], &mut state);
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

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.mode {
            Mode::AddingItem(_) | Mode::EditingItem { .. } => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Field   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            Mode::ConfirmItemDelete(_) => Line::from(vec![
                Span::styled("[y]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[n]", key_style),
                Span::raw(" Keep"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[-]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_item_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &ItemForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let name_line = form.build_line("Name", ItemField::Name);
        let quantity_line = form.build_line("Quantity", ItemField::Quantity);

        let mut lines = vec![name_line, quantity_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            ItemField::Name => ("Name: ", 0),
            ItemField::Quantity => ("Quantity: ", 1),
        };
        let cursor_x = cursor_column(inner, prefix, form.value_width(form.active));
        let cursor_y = inner
            .y
            .saturating_add(row)
            .min(inner.bottom().saturating_sub(1).max(inner.y));
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmItemDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Confirm Delete").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete {} from the list?", confirm.name)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
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

    fn current_item(&self) -> Option<&Item> {
        self.store.items().get(self.selected)
    }

    fn focus(&mut self, id: ItemId) {
        if let Some(idx) = self.store.items().iter().position(|item| item.id == id) {
            self.selected = idx;
        }
    }

    fn move_selection(&mut self, offset: isize) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let new = (self.selected as isize + offset).clamp(0, len as isize - 1);
        self.selected = new as usize;
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }
}
