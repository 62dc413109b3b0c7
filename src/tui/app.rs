use ratatui::widgets::TableState;
use crate::config::Config;
use crate::display::due_date_label;
use crate::models::{DueDate, DueDateKind};
use crate::session::{Session, Step};

#[derive(PartialEq, Debug)]
pub enum InputMode {
    Normal,
    /// Typing a date or custom urgency for the selected task.
    Editing,
}

pub struct App {
    pub session: Session,
    pub state: TableState,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Validation or status message shown in the help bar.
    pub message: Option<String>,
}

impl App {
    /// Creates a new App with an empty session.
    pub fn new(config: &Config) -> App {
        let mut session = Session::new();
        session.set_show_all_columns(config.show_all_columns);
        App {
            session,
            state: TableState::default(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            message: None,
        }
    }

    fn row_count(&self) -> usize {
        self.session.tasks().len()
    }

    /// Selects the next row.
    pub fn next(&mut self) {
        if self.row_count() == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.row_count() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Selects the previous row.
    pub fn previous(&mut self) {
        if self.row_count() == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.row_count() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Moves to the next step, or shows why it can't.
    pub fn advance(&mut self) {
        let from = self.session.step();
        match self.session.next_step() {
            Ok(()) => {
                self.message = None;
                if from == Step::CollectingTasks {
                    self.state.select(Some(0));
                }
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    pub fn back(&mut self) {
        self.message = None;
        self.session.previous_step();
    }

    pub fn restart(&mut self) {
        self.message = None;
        self.session.restart();
        self.state.select(None);
    }

    pub fn toggle_columns(&mut self) {
        self.session.toggle_all_columns();
    }

    pub fn type_char(&mut self, c: char) {
        self.session.text_mut().push(c);
    }

    pub fn delete_char(&mut self) {
        self.session.text_mut().pop();
    }

    /// Steps the selected task through its importance choices.
    pub fn cycle_importance(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Err(e) = self.session.cycle_importance(i) {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Steps the selected task to the next due-date type.
    pub fn cycle_due_type(&mut self) {
        if let Some(i) = self.state.selected() {
            let next = match self.session.tasks().get(i) {
                Some(t) => t.due_date.kind().next(),
                None => return,
            };
            if let Err(e) = self.session.set_due_date_kind(i, next) {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Opens the value editor if the selected task's due date takes a value.
    pub fn start_edit_value(&mut self) {
        let Some(i) = self.state.selected() else { return };
        let Some(task) = self.session.tasks().get(i) else { return };
        if !task.due_date.kind().takes_value() {
            self.message = Some("Choose the date or custom type first (t).".to_string());
            return;
        }
        // Pre-fill buffer for editing
        self.input_buffer = match &task.due_date {
            DueDate::Date(Some(_)) => due_date_label(&task.due_date),
            DueDate::Custom(v) => v.clone(),
            _ => String::new(),
        };
        self.input_mode = InputMode::Editing;
        self.message = None;
    }

    /// Applies the edited value to the selected task.
    pub fn handle_input(&mut self) {
        if let Some(i) = self.state.selected() {
            match self.session.set_due_date_value(i, &self.input_buffer) {
                Ok(()) => self.message = None,
                Err(e) => self.message = Some(e.to_string()),
            }
        }
        self.cancel_input();
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    /// Title for the value editor popup.
    pub fn edit_title(&self) -> &'static str {
        let kind = self
            .state
            .selected()
            .and_then(|i| self.session.tasks().get(i))
            .map(|t| t.due_date.kind());
        match kind {
            Some(DueDateKind::Date) => "Due Date (YYYY-MM-DD)",
            Some(DueDateKind::Custom) => "Custom Urgency (1-10)",
            _ => "Edit",
        }
    }
}
