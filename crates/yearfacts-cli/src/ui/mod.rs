//! Screen layout: list and detail side by side over a one-line status bar.

pub mod fact_detail;
pub mod fact_list;

use ratatui::{
  Frame,
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::Paragraph,
};

use crate::app::App;

/// The status bar.
const STATUS_ROWS: u16 = 1;

/// Top and bottom border of the list pane.
const BORDER_ROWS: u16 = 2;

const KEY_HINTS: &str = "jk/↑↓ move · PgUp/PgDn page · g/G ends · q quit ";

/// How many list rows fit in a terminal `terminal_height` rows tall.
pub fn list_height(terminal_height: u16) -> usize {
  terminal_height.saturating_sub(STATUS_ROWS + BORDER_ROWS) as usize
}

pub fn draw(f: &mut Frame, app: &App) {
  let [body, status] =
    Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_ROWS)])
      .areas(f.area());
  let [list, detail] =
    Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
      .areas(body);

  fact_list::draw(f, list, app);
  fact_detail::draw(f, detail, app);
  draw_status(f, status, app);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let [left, right] = Layout::horizontal([
    Constraint::Min(0),
    Constraint::Length(KEY_HINTS.chars().count() as u16),
  ])
  .areas(area);

  let mut spans = vec![Span::styled(
    format!(" {} loaded ", app.facts.len()),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Green)
      .add_modifier(Modifier::BOLD),
  )];
  if app.failures > 0 {
    spans.push(Span::styled(
      format!(" {} failed ", app.failures),
      Style::default().fg(Color::White).bg(Color::Red),
    ));
  }
  spans.push(Span::raw(" "));
  spans.push(if !app.status_msg.is_empty() {
    Span::raw(app.status_msg.clone()).yellow()
  } else if app.facts.is_empty() {
    Span::raw("waiting for the first page…").italic()
  } else {
    let range = app.visible_range();
    Span::raw(format!("showing {}–{}", range.start + 1, range.end))
  });

  f.render_widget(Paragraph::new(Line::from(spans)), left);
  f.render_widget(
    Paragraph::new(Line::from(KEY_HINTS).right_aligned()).dark_gray(),
    right,
  );
}
