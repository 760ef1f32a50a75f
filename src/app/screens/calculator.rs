//! Calculator form screen
//!
//! A form with a mode selector, two value inputs with unit dropdowns,
//! and a Calculate action. The solved quantity's fields are hidden;
//! the result (or a validation error) renders inline below the form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::calc::{solver, CalcMode, SizeUnit, SpeedUnit, TimeUnit};
use crate::config::CalcConfig;
use crate::{CalcError, Result};

/// A single selectable row in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Mode,
    SizeValue,
    SizeUnit,
    SpeedValue,
    SpeedUnit,
    TimeValue,
    TimeUnit,
    Calculate,
}

impl FormField {
    /// Fields shown for a mode: the solved quantity has no input row
    fn for_mode(mode: CalcMode) -> Vec<Self> {
        match mode {
            CalcMode::SolveTime => vec![
                Self::Mode,
                Self::SizeValue,
                Self::SizeUnit,
                Self::SpeedValue,
                Self::SpeedUnit,
                Self::Calculate,
            ],
            CalcMode::SolveSize => vec![
                Self::Mode,
                Self::SpeedValue,
                Self::SpeedUnit,
                Self::TimeValue,
                Self::TimeUnit,
                Self::Calculate,
            ],
            CalcMode::SolveSpeed => vec![
                Self::Mode,
                Self::SizeValue,
                Self::SizeUnit,
                Self::TimeValue,
                Self::TimeUnit,
                Self::Calculate,
            ],
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Mode => "Solve For",
            Self::SizeValue => "File Size",
            Self::SizeUnit => "Size Unit",
            Self::SpeedValue => "Link Speed",
            Self::SpeedUnit => "Speed Unit",
            Self::TimeValue => "Transfer Time",
            Self::TimeUnit => "Time Unit",
            Self::Calculate => "Calculate",
        }
    }

    fn is_value(self) -> bool {
        matches!(self, Self::SizeValue | Self::SpeedValue | Self::TimeValue)
    }

    fn is_dropdown(self) -> bool {
        matches!(
            self,
            Self::Mode | Self::SizeUnit | Self::SpeedUnit | Self::TimeUnit
        )
    }
}

/// Calculator form screen component
pub struct CalculatorScreen {
    mode: CalcMode,
    size_input: String,
    size_unit: SizeUnit,
    speed_input: String,
    speed_unit: SpeedUnit,
    time_input: String,
    time_unit: TimeUnit,
    fields: Vec<FormField>,
    selected_field_index: usize,
    is_editing: bool,
    dropdown_state: ListState,
    is_dropdown_active: bool,
    result: Option<String>,
    error: Option<String>,
}

impl CalculatorScreen {
    /// Create a new calculator form from saved preferences
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            mode: config.mode,
            size_input: String::new(),
            size_unit: config.size_unit,
            speed_input: String::new(),
            speed_unit: config.speed_unit,
            time_input: String::new(),
            time_unit: config.time_unit,
            fields: FormField::for_mode(config.mode),
            selected_field_index: 0,
            is_editing: false,
            dropdown_state: ListState::default(),
            is_dropdown_active: false,
            result: None,
            error: None,
        }
    }

    /// Current mode and unit selections, for saving on exit
    pub fn preferences(&self) -> CalcConfig {
        CalcConfig {
            mode: self.mode,
            size_unit: self.size_unit,
            speed_unit: self.speed_unit,
            time_unit: self.time_unit,
        }
    }

    /// Formatted result of the last successful calculation
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Validation error from the last calculation attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a text edit or dropdown swallows ordinary keys
    pub fn is_capturing_input(&self) -> bool {
        self.is_editing || self.is_dropdown_active
    }

    /// Handle key events for the calculator form
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.is_dropdown_active {
            self.handle_dropdown_event(key);
        } else if self.is_editing {
            self.handle_edit_event(key);
        } else {
            self.handle_navigation_event(key);
        }
    }

    fn handle_navigation_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_field(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.select_next_field(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selected_field(),
            // Typing into a value field starts an edit directly
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                if let Some(input) = self.active_value_input() {
                    input.clear();
                    input.push(c);
                    self.is_editing = true;
                }
            }
            _ => {}
        }
    }

    fn handle_edit_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                if let Some(input) = self.active_value_input() {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.active_value_input() {
                    input.pop();
                }
            }
            KeyCode::Enter | KeyCode::Esc => self.is_editing = false,
            _ => {}
        }
    }

    fn handle_dropdown_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_option(),
            KeyCode::Enter => self.confirm_selection(),
            KeyCode::Esc => self.is_dropdown_active = false,
            _ => {}
        }
    }

    fn activate_selected_field(&mut self) {
        let field = self.fields[self.selected_field_index];
        if field.is_dropdown() {
            self.dropdown_state.select(Some(self.current_option_index()));
            self.is_dropdown_active = true;
        } else if field.is_value() {
            self.is_editing = true;
        } else {
            self.calculate();
        }
    }

    fn active_value_input(&mut self) -> Option<&mut String> {
        match self.fields[self.selected_field_index] {
            FormField::SizeValue => Some(&mut self.size_input),
            FormField::SpeedValue => Some(&mut self.speed_input),
            FormField::TimeValue => Some(&mut self.time_input),
            _ => None,
        }
    }

    fn select_previous_field(&mut self) {
        if self.selected_field_index > 0 {
            self.selected_field_index -= 1;
        }
    }

    fn select_next_field(&mut self) {
        if self.selected_field_index < self.fields.len() - 1 {
            self.selected_field_index += 1;
        }
    }

    fn select_previous_option(&mut self) {
        let selected = self.dropdown_state.selected().unwrap_or(0);
        if selected > 0 {
            self.dropdown_state.select(Some(selected - 1));
        }
    }

    fn select_next_option(&mut self) {
        let options = self.current_options();
        let selected = self.dropdown_state.selected().unwrap_or(0);
        if selected < options.len() - 1 {
            self.dropdown_state.select(Some(selected + 1));
        }
    }

    fn confirm_selection(&mut self) {
        let selected_index = self.dropdown_state.selected().unwrap_or(0);

        match self.fields[self.selected_field_index] {
            FormField::Mode => self.set_mode(CalcMode::all()[selected_index]),
            FormField::SizeUnit => self.size_unit = SizeUnit::all()[selected_index],
            FormField::SpeedUnit => self.speed_unit = SpeedUnit::all()[selected_index],
            FormField::TimeUnit => self.time_unit = TimeUnit::all()[selected_index],
            _ => {}
        }
        self.is_dropdown_active = false;
    }

    fn set_mode(&mut self, mode: CalcMode) {
        if mode != self.mode {
            self.mode = mode;
            self.fields = FormField::for_mode(mode);
            self.selected_field_index = 0;
            // A stale answer for another mode would be misleading
            self.result = None;
            self.error = None;
        }
    }

    fn current_options(&self) -> Vec<String> {
        match self.fields[self.selected_field_index] {
            FormField::Mode => CalcMode::all().iter().map(|m| m.label().to_string()).collect(),
            FormField::SizeUnit => SizeUnit::all().iter().map(|u| u.label().to_string()).collect(),
            FormField::SpeedUnit => SpeedUnit::all().iter().map(|u| u.label().to_string()).collect(),
            FormField::TimeUnit => TimeUnit::all().iter().map(|u| u.label().to_string()).collect(),
            _ => Vec::new(),
        }
    }

    fn current_option_index(&self) -> usize {
        match self.fields[self.selected_field_index] {
            FormField::Mode => CalcMode::all().iter().position(|m| *m == self.mode),
            FormField::SizeUnit => SizeUnit::all().iter().position(|u| *u == self.size_unit),
            FormField::SpeedUnit => SpeedUnit::all().iter().position(|u| *u == self.speed_unit),
            FormField::TimeUnit => TimeUnit::all().iter().position(|u| *u == self.time_unit),
            _ => None,
        }
        .unwrap_or(0)
    }

    /// Run the calculation against the current form values
    pub fn calculate(&mut self) {
        match self.try_calculate() {
            Ok(text) => {
                self.result = Some(format!("{}: {}", self.mode.label(), text));
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.result = None;
            }
        }
    }

    fn try_calculate(&self) -> Result<String> {
        let size = match self.mode {
            CalcMode::SolveTime | CalcMode::SolveSpeed => Some((
                parse_value(&self.size_input, "file size")?,
                self.size_unit,
            )),
            CalcMode::SolveSize => None,
        };
        let speed = match self.mode {
            CalcMode::SolveTime | CalcMode::SolveSize => Some((
                parse_value(&self.speed_input, "link speed")?,
                self.speed_unit,
            )),
            CalcMode::SolveSpeed => None,
        };
        let time = match self.mode {
            CalcMode::SolveSize | CalcMode::SolveSpeed => Some((
                parse_value(&self.time_input, "transfer time")?,
                self.time_unit,
            )),
            CalcMode::SolveTime => None,
        };
        solver::calculate(self.mode, size, speed, time)
    }

    /// Render the calculator form
    pub fn render(&mut self, frame: &mut Frame) {
        let field_rows = self.fields.len() as u16 * 3;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),          // Title
                Constraint::Length(field_rows), // Form fields
                Constraint::Length(4),          // Result / error
                Constraint::Length(3),          // Help text
                Constraint::Min(0),
            ])
            .split(frame.size());

        self.render_title(frame, chunks[0]);
        self.render_fields(frame, chunks[1]);
        self.render_result(frame, chunks[2]);
        self.render_help(frame, chunks[3]);

        if self.is_dropdown_active {
            self.render_dropdown(frame, chunks[1]);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Transfer Time Calculator")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, area);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> =
            self.fields.iter().map(|_| Constraint::Length(3)).collect();
        let field_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in self.fields.iter().enumerate() {
            let style = if i == self.selected_field_index {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            let block = Block::default().borders(Borders::ALL).border_style(style);
            let text = self.field_text(*field, i == self.selected_field_index);
            let p = Paragraph::new(text).block(block);
            frame.render_widget(p, field_chunks[i]);
        }
    }

    fn field_text(&self, field: FormField, selected: bool) -> String {
        let value = match field {
            FormField::Mode => self.mode.label().to_string(),
            FormField::SizeValue => self.size_input.clone(),
            FormField::SizeUnit => self.size_unit.label().to_string(),
            FormField::SpeedValue => self.speed_input.clone(),
            FormField::SpeedUnit => self.speed_unit.label().to_string(),
            FormField::TimeValue => self.time_input.clone(),
            FormField::TimeUnit => self.time_unit.label().to_string(),
            FormField::Calculate => return "▶ Calculate".to_string(),
        };
        if selected && self.is_editing {
            format!("{}: {}_", field.title(), value)
        } else {
            format!("{}: {}", field.title(), value)
        }
    }

    fn render_result(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if let Some(error) = &self.error {
            (error.clone(), Style::default().fg(Color::Red))
        } else if let Some(result) = &self.result {
            (
                result.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "Enter two values, then press Enter on Calculate".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        let result = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Result"));
        frame.render_widget(result, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = "↑↓: Navigate | Enter: Edit/Select | ?: Help | Esc: Quit";
        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }

    fn render_dropdown(&mut self, frame: &mut Frame, area: Rect) {
        let options = self.current_options();
        let items: Vec<ListItem> = options.iter().map(|o| ListItem::new(o.as_str())).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Select an option"),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        let list_height = (options.len() + 2).min(10) as u16;
        let list_area = centered_rect(50, list_height, area);

        frame.render_widget(Clear, list_area);
        frame.render_stateful_widget(list, list_area, &mut self.dropdown_state);
    }
}

fn parse_value(input: &str, what: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::InvalidInput(format!("{} is required", what)));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidInput(format!("{} must be a number", what)))
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_digits(screen: &mut CalculatorScreen, digits: &str) {
        screen.handle_key_event(key(KeyCode::Enter));
        for c in digits.chars() {
            screen.handle_key_event(key(KeyCode::Char(c)));
        }
        screen.handle_key_event(key(KeyCode::Enter));
    }

    #[test]
    fn test_field_layout_per_mode() {
        let screen = CalculatorScreen::new(&CalcConfig::default());
        // SolveTime hides the time fields
        assert_eq!(screen.fields.len(), 6);
        assert!(!screen.fields.contains(&FormField::TimeValue));

        let mut screen = screen;
        screen.set_mode(CalcMode::SolveSize);
        assert!(!screen.fields.contains(&FormField::SizeValue));
        assert!(screen.fields.contains(&FormField::TimeValue));
    }

    #[test]
    fn test_field_navigation_clamps() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.handle_key_event(key(KeyCode::Up));
        assert_eq!(screen.selected_field_index, 0);
        for _ in 0..20 {
            screen.handle_key_event(key(KeyCode::Down));
        }
        assert_eq!(screen.selected_field_index, screen.fields.len() - 1);
    }

    #[test]
    fn test_editing_value_field() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.handle_key_event(key(KeyCode::Down)); // File Size
        screen.handle_key_event(key(KeyCode::Enter));
        assert!(screen.is_capturing_input());
        screen.handle_key_event(key(KeyCode::Char('1')));
        screen.handle_key_event(key(KeyCode::Char('x'))); // ignored
        screen.handle_key_event(key(KeyCode::Char('0')));
        screen.handle_key_event(key(KeyCode::Backspace));
        screen.handle_key_event(key(KeyCode::Char('5')));
        screen.handle_key_event(key(KeyCode::Enter));
        assert!(!screen.is_capturing_input());
        assert_eq!(screen.size_input, "15");
    }

    #[test]
    fn test_dropdown_changes_unit() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.handle_key_event(key(KeyCode::Down)); // File Size
        screen.handle_key_event(key(KeyCode::Down)); // Size Unit
        screen.handle_key_event(key(KeyCode::Enter));
        assert!(screen.is_capturing_input());
        screen.handle_key_event(key(KeyCode::Down)); // GB
        screen.handle_key_event(key(KeyCode::Enter));
        assert_eq!(screen.size_unit, SizeUnit::Gigabytes);
        assert!(!screen.is_capturing_input());
    }

    #[test]
    fn test_mode_change_clears_result() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.size_input = "100".to_string();
        screen.speed_input = "10".to_string();
        screen.calculate();
        assert!(screen.result().is_some());

        screen.handle_key_event(key(KeyCode::Enter)); // open mode dropdown
        screen.handle_key_event(key(KeyCode::Down)); // File Size
        screen.handle_key_event(key(KeyCode::Enter));
        assert_eq!(screen.mode, CalcMode::SolveSize);
        assert!(screen.result().is_none());
    }

    #[test]
    fn test_calculate_transfer_time() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.handle_key_event(key(KeyCode::Down)); // File Size
        type_digits(&mut screen, "100");
        screen.handle_key_event(key(KeyCode::Down)); // Size Unit
        screen.handle_key_event(key(KeyCode::Down)); // Link Speed
        type_digits(&mut screen, "10");
        screen.handle_key_event(key(KeyCode::Down)); // Speed Unit
        screen.handle_key_event(key(KeyCode::Down)); // Calculate
        screen.handle_key_event(key(KeyCode::Enter));

        assert_eq!(
            screen.result(),
            Some("Transfer Time: 1 minutes 20 seconds")
        );
        assert!(screen.error().is_none());
    }

    #[test]
    fn test_calculate_reports_validation_error() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.size_input = "100".to_string();
        screen.speed_input = "0".to_string();
        screen.calculate();
        assert!(screen.result().is_none());
        assert!(screen.error().unwrap().contains("positive"));
    }

    #[test]
    fn test_missing_input_reports_error() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.size_input = "100".to_string();
        screen.calculate();
        assert!(screen.error().unwrap().contains("link speed"));
    }

    #[test]
    fn test_typing_digit_starts_edit() {
        let mut screen = CalculatorScreen::new(&CalcConfig::default());
        screen.handle_key_event(key(KeyCode::Down)); // File Size
        screen.handle_key_event(key(KeyCode::Char('4')));
        assert!(screen.is_capturing_input());
        screen.handle_key_event(key(KeyCode::Char('2')));
        screen.handle_key_event(key(KeyCode::Esc));
        assert_eq!(screen.size_input, "42");
    }
}
