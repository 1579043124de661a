use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Item;

/// Build the list row for an item: pointer, name padded to `name_width`, the
/// quantity label, and an edit marker while the item's dialog is open.
pub(crate) fn item_row_line(item: &Item, name_width: usize, selected: bool) -> Line<'static> {
    let pointer = if selected { "▶ " } else { "  " };
    let name_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::raw(pointer),
        Span::styled(pad_to_width(&item.name, name_width), name_style),
        Span::raw("  "),
        Span::styled(item.quantity_label(), Style::default().fg(Color::Cyan)),
    ];
    if item.is_editing {
        spans.push(Span::styled(
            "  (editing)",
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

/// Display width of the longest item name, so quantities line up in one
/// column even when names mix wide and narrow characters.
pub(crate) fn name_column_width(items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| display_width(&item.name))
        .max()
        .unwrap_or(0)
}

/// Terminal cell width of `text`.
pub(crate) fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(padding))
}

/// Column for a text cursor sitting after `prefix` and `value_width` cells,
/// pinned to the last column of `inner` once the text runs past it.
pub(crate) fn cursor_column(inner: Rect, prefix: &str, value_width: usize) -> u16 {
    let last = inner.right().saturating_sub(1).max(inner.x);
    let wanted = usize::from(inner.x)
        .saturating_add(display_width(prefix))
        .saturating_add(value_width);
    u16::try_from(wanted).unwrap_or(u16::MAX).min(last)
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn row_pads_names_into_a_column() {
        let item = Item::new(1, "Tea", 2);
        let line = item_row_line(&item, 6, false);
        assert_eq!(line_text(&line), "  Tea     Qty: 2");
    }

    #[test]
    fn row_marks_selection_and_editing() {
        let item = Item::new(1, "Tea", 2).with_editing(true);
        let text = line_text(&item_row_line(&item, 3, true));
        assert!(text.starts_with("▶ Tea"));
        assert!(text.ends_with("(editing)"));
    }

    #[test]
    fn name_column_uses_longest_name() {
        let items = vec![Item::new(1, "Tea", 1), Item::new(2, "Oat milk", 1)];
        assert_eq!(name_column_width(&items), 8);
        assert_eq!(name_column_width(&[]), 0);
    }

    #[test]
    fn wide_names_keep_quantities_aligned() {
        let items = vec![Item::new(1, "茶葉", 1), Item::new(2, "Tea", 3)];
        let width = name_column_width(&items);
        assert_eq!(width, 4);

        let first = item_row_line(&items[0], width, false);
        let second = item_row_line(&items[1], width, false);
        assert_eq!(first.width(), second.width());
        assert_eq!(line_text(&second), "  Tea   Qty: 3");
    }

    #[test]
    fn cursor_column_follows_short_text() {
        let inner = Rect::new(10, 5, 30, 4);
        assert_eq!(cursor_column(inner, "Name: ", 3), 19);
    }

    #[test]
    fn cursor_column_is_pinned_inside_for_long_text() {
        let inner = Rect::new(10, 5, 30, 4);
        assert_eq!(cursor_column(inner, "Name: ", 200), 39);
        assert_eq!(cursor_column(inner, "Name: ", usize::MAX), 39);
        assert_eq!(cursor_column(Rect::new(4, 0, 0, 0), "Name: ", 5), 4);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert!(popup.x >= area.x && popup.right() <= area.right());
    }
}
