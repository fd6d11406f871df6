//! Rendering for the checklist session.

use super::app::App;
use super::format::{checkbox, item_label, truncate_text};
use super::Focus;
use crate::item::Item;
use crate::stats::PackingState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

impl App {
    pub(super) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_header(frame, layout[0]);
        self.draw_form(frame, layout[1]);
        self.draw_list(frame, layout[2]);
        self.draw_stats(frame, layout[3]);
        self.draw_footer(frame, layout[4]);

        if self.pending_clear {
            self.draw_confirm(frame);
        }
        if self.show_help {
            self.draw_help(frame);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("Far Away", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" — what do you need for your trip?"),
            Span::raw(format!(" | sort: {}", self.sort_mode)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Form;
        let caret = if focused { "_" } else { "" };
        let line = Line::from(vec![
            Span::raw("item: "),
            Span::styled(
                format!("{}{caret}", self.form.description),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   qty: {:>2}", self.form.quantity)),
            Span::styled(" (up/down)", Style::default().fg(Color::DarkGray)),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Add item")
            .border_style(focus_style(focused));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::List;
        let visible = self.visible_items();
        let title = format!("Packing list ({})", visible.len());
        let items = visible
            .iter()
            .map(|item| packing_list_item(item, area.width))
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(focus_style(focused)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        if focused && !visible.is_empty() {
            state.select(Some(self.selected.min(visible.len() - 1)));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_stats(&self, frame: &mut Frame, area: Rect) {
        let stats = self.stats();
        let style = match stats.state {
            PackingState::Empty => Style::default().fg(Color::DarkGray),
            PackingState::Complete => Style::default().fg(Color::Green),
            PackingState::Partial => Style::default(),
        };
        let paragraph = Paragraph::new(stats.summary_line())
            .style(style.add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let legend = match self.focus {
            Focus::Form => "enter add | up/down qty | tab list | esc list",
            Focus::List => "space toggle | d delete | s sort | c clear | a add | ? help | q quit",
        };
        let message = self.message.clone().unwrap_or_else(|| legend.to_string());
        let message = truncate_text(&message, area.width as usize);
        let paragraph =
            Paragraph::new(message).style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(paragraph, area);
    }

    fn draw_confirm(&self, frame: &mut Frame) {
        let area = centered_rect(50, 20, frame.area());
        let lines = vec![
            Line::from(format!("Clear all {} items?", self.items.len())),
            Line::from(""),
            Line::from("y to clear, n to keep"),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Confirm"))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame) {
        let area = centered_rect(60, 60, frame.area());
        let lines = vec![
            Line::from("Form keys:"),
            Line::from("  type to edit the description"),
            Line::from("  Up/Down: change quantity"),
            Line::from("  Enter: add the item"),
            Line::from("  Tab / Esc: jump to the list"),
            Line::from(""),
            Line::from("List keys:"),
            Line::from("  Up/Down or j/k: move selection"),
            Line::from("  Space / Enter: toggle packed"),
            Line::from("  d / Delete: delete the selected item"),
            Line::from("  s: cycle sort mode (input, description, packed)"),
            Line::from("  c: clear the whole list"),
            Line::from("  a / Tab: back to the form"),
            Line::from("  q / Esc: quit"),
            Line::from(""),
            Line::from("Any key closes this help."),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn packing_list_item(item: &Item, width: u16) -> ListItem<'static> {
    let text = format!("{} {}", checkbox(item), item_label(item));
    let text = truncate_text(&text, width.saturating_sub(2) as usize);
    let style = if item.packed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    ListItem::new(Line::styled(text, style))
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
