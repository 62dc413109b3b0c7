use priorank::config::Config;
use priorank::models::DueDateKind;
use priorank::session::Step;
use priorank::tui::app::App;
use priorank::tui::ui::ui;
use ratatui::{backend::TestBackend, Terminal};

fn screen(app: &mut App) -> String {
    let backend = TestBackend::new(100, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_walk_through_wizard() {
    let mut app = App::new(&Config::default());
    for c in "Laundry\nTaxes".chars() {
        app.type_char(c);
    }
    assert!(screen(&mut app).contains("Step 1"));

    app.advance();
    assert_eq!(app.session.step(), Step::AssigningAttributes);
    app.session.set_due_date_kind(1, DueDateKind::Asap).unwrap();
    app.cycle_importance();
    let s = screen(&mut app);
    assert!(s.contains("Step 2"));
    assert!(s.contains("Laundry"));

    app.advance();
    assert_eq!(app.session.step(), Step::ViewingResults);
    let s = screen(&mut app);
    assert!(s.contains("Step 3"));
    assert!(!s.contains("Calculation"));

    app.toggle_columns();
    let s = screen(&mut app);
    assert!(s.contains("Calculation"));
    assert!(s.contains("1 * 1 = 1"));
    assert!(s.contains("2 * 3 = 6"));

    app.restart();
    assert_eq!(app.session.step(), Step::CollectingTasks);
}

#[test]
fn test_validation_message_is_shown() {
    let mut app = App::new(&Config::default());
    app.advance();
    assert!(screen(&mut app).contains("Please enter at least one task."));
}

#[test]
fn test_config_sets_initial_columns() {
    let config = Config { show_all_columns: true, ..Config::default() };
    let app = App::new(&config);
    assert!(app.session.show_all_columns());
}
