//! Scrolling list of loaded facts, titled with today's date.

use chrono::Local;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState},
};
use yearfacts_core::fact::Fact;

use crate::app::App;

/// Render the fact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format(" %a %d %b %Y ").to_string();
  let block = Block::default()
    .title_top(Line::from(" yearfacts ").bold())
    .title_top(Line::from(date).right_aligned().gray())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = app.facts.iter().map(row).collect();

  let mut state = ListState::default()
    .with_offset(app.offset)
    .with_selected((!app.facts.is_empty()).then_some(app.cursor));

  f.render_stateful_widget(
    List::new(items).block(block).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    area,
    &mut state,
  );
}

fn row(fact: &Fact) -> ListItem<'_> {
  // Filler answers ("… is the year that nothing remarkable happened") dimmed.
  let text_style = if fact.found() {
    Style::default()
  } else {
    Style::default().fg(Color::DarkGray)
  };
  ListItem::new(Line::from(vec![
    Span::styled(
      format!("{:>5}  ", fact.year),
      Style::default().fg(Color::Cyan),
    ),
    Span::styled(fact.text.as_str(), text_style),
  ]))
}
