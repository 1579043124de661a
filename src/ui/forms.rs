use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::error::DraftError;
use crate::models::{Item, ItemId};
use crate::store::parse_quantity;

use super::helpers::display_width;

/// Draft buffers behind the add and edit dialogs. Nothing typed here reaches
/// the list until the dialog is confirmed.
#[derive(Default, Clone)]
pub(crate) struct ItemForm {
    pub(crate) name: String,
    pub(crate) quantity: String,
    pub(crate) active: ItemField,
    pub(crate) error: Option<String>,
}

/// Fields available within the item form.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub(crate) enum ItemField {
    #[default]
    Name,
    Quantity,
}

impl ItemForm {
    /// Copy an existing item's values into a fresh draft.
    pub(crate) fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            active: ItemField::Name,
            error: None,
        }
    }

    /// Swap focus between the name and quantity fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            ItemField::Name => ItemField::Quantity,
            ItemField::Quantity => ItemField::Name,
        };
    }

    /// Append a character to the active field. Control characters are
    /// rejected; the quantity field takes free text and is coerced on save.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            ItemField::Name => self.name.push(ch),
            ItemField::Quantity => self.quantity.push(ch),
        }
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            ItemField::Name => {
                self.name.pop();
            }
            ItemField::Quantity => {
                self.quantity.pop();
            }
        }
    }

    /// Validate the draft and return the values to write back.
    pub(crate) fn parse_inputs(&self) -> Result<(String, i64), DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::NameRequired);
        }
        if self.quantity.trim().is_empty() {
            return Err(DraftError::QuantityRequired);
        }
        Ok((name.to_string(), parse_quantity(&self.quantity)))
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: ItemField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Display width of the requested field, used to place the cursor.
    pub(crate) fn value_width(&self, field: ItemField) -> usize {
        display_width(self.value(field))
    }

    fn value(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Quantity => &self.quantity,
        }
    }
}

/// State for the delete confirmation dialog.
#[derive(Clone)]
pub(crate) struct ConfirmItemDelete {
    pub(crate) id: ItemId,
    pub(crate) name: String,
}

impl ConfirmItemDelete {
    pub(crate) fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
        }
    }
}
