use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use crate::display::{due_date_label, result_headers, result_row};
use crate::session::Step;
use super::app::{App, InputMode};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(3)  // Help
        ].as_ref())
        .split(f.area());

    match app.session.step() {
        Step::CollectingTasks => {
            let text = Paragraph::new(app.session.text())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Step 1: Enter Tasks (one per line)"));
            f.render_widget(text, chunks[0]);
        }
        Step::AssigningAttributes => {
            let tasks = app.session.tasks();
            let rows: Vec<Row> = tasks
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    let choices: Vec<String> = app.session.importance_choices(i).iter().map(u32::to_string).collect();
                    Row::new(vec![
                        Cell::from(t.description.clone()),
                        Cell::from(t.importance.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())),
                        Cell::from(choices.join(" ")),
                        Cell::from(t.due_date.kind().to_string()),
                        Cell::from(due_date_label(&t.due_date)),
                    ])
                })
                .collect();

            let widths = [
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(14),
                Constraint::Length(8),
                Constraint::Length(14),
            ];

            let table = Table::new(rows, widths)
                .header(Row::new(vec!["Task", "Importance", "Options", "Type", "Due"])
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .bottom_margin(1))
                .block(Block::default().borders(Borders::ALL).title("Step 2: Importance and Due Date"))
                .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
                .highlight_symbol(">> ");

            f.render_stateful_widget(table, chunks[0], &mut app.state);
        }
        Step::ViewingResults => {
            let all = app.session.show_all_columns();
            let rows: Vec<Row> = app
                .session
                .ranked()
                .iter()
                .map(|t| {
                    let style = match t.rank {
                        1 => Style::default().fg(Color::Red),
                        2 | 3 => Style::default().fg(Color::Yellow),
                        _ => Style::default().fg(Color::Green),
                    };
                    Row::new(result_row(t, all)).style(style)
                })
                .collect();

            let widths: Vec<Constraint> = if all {
                vec![
                    Constraint::Length(5),
                    Constraint::Min(20),
                    Constraint::Length(11),
                    Constraint::Length(8),
                    Constraint::Length(16),
                    Constraint::Length(14),
                ]
            } else {
                vec![Constraint::Length(5), Constraint::Min(20), Constraint::Length(14)]
            };

            let table = Table::new(rows, widths)
                .header(Row::new(result_headers(all))
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .bottom_margin(1))
                .block(Block::default().borders(Borders::ALL).title("Step 3: Priority Results"));

            f.render_widget(table, chunks[0]);
        }
    }

    let help_text = match (&app.message, &app.input_mode) {
        (Some(msg), _) => msg.clone(),
        (None, InputMode::Editing) => "Enter: Save | Esc: Cancel".to_string(),
        (None, InputMode::Normal) => step_help(app.session.step()).to_string(),
    };

    let help_style = if app.message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let help = Paragraph::new(help_text)
        .style(help_style)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, chunks[1]);

    // Render Input Box if needed
    if app.input_mode == InputMode::Editing {
        let area = centered_rect(60, 3, f.area());
        f.render_widget(Clear, area);

        let input = Paragraph::new(app.input_buffer.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(app.edit_title()));

        f.render_widget(input, area);
    }
}

fn step_help(step: Step) -> &'static str {
    match step {
        Step::CollectingTasks => "Type tasks | Enter: New line | Tab: Next Step | Esc: Quit",
        Step::AssigningAttributes => "i: Importance | t: Due Type | e: Edit Value | Tab: Results | Shift+Tab: Back | q: Quit",
        Step::ViewingResults => "c: Toggle All Columns | Shift+Tab: Back | r: Start Over | q: Quit",
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let margin = r.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(margin),
            Constraint::Length(height),
            Constraint::Length(margin),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
