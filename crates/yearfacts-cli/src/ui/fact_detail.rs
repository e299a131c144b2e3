//! Fact detail pane — right panel, the fact under the cursor.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};
use serde_json::Value;

use crate::app::App;

/// Render the detail pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(fact) = app.cursor_fact() else {
    let block = Block::default()
      .title(" Detail ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let hint = Paragraph::new("Waiting for the first fact…")
      .style(Style::default().fg(Color::DarkGray))
      .block(block);
    f.render_widget(hint, area);
    return;
  };

  let block = Block::default()
    .title(format!(" {} ", fact.year))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut lines = vec![
    Line::from(Span::styled(
      fact.text.clone(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
  ];

  // Pass-through fields, in whatever order the service sent them.
  for (key, value) in &fact.extra {
    lines.push(Line::from(vec![
      Span::styled(format!("{key:<8}"), Style::default().fg(Color::Cyan)),
      Span::raw(display_value(value)),
    ]));
  }

  f.render_widget(
    Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
    area,
  );
}

fn display_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn strings_are_shown_unquoted() {
    assert_eq!(display_value(&json!("year")), "year");
    assert_eq!(display_value(&json!(true)), "true");
    assert_eq!(display_value(&json!(null)), "null");
  }
}
