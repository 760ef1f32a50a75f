//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event
//! mapping for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Calculator form with inline result
    Calculator,
    /// Key-binding and conversion-factor reference
    Help,
}

impl Default for AppState {
    fn default() -> Self {
        Self::Calculator
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Show the help screen (?, F1)
    Help,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the calculator form
    pub fn new() -> Self {
        Self {
            current_state: AppState::Calculator,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state.clone());
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise to the
    /// calculator form
    pub fn go_back(&mut self) {
        match self.previous_state.take() {
            Some(prev_state) => self.current_state = prev_state,
            None => self.current_state = AppState::Calculator,
        }
    }

    /// Handle state transitions based on current state and navigation action
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => self.should_quit = true,
            NavigationAction::Help => match self.current_state {
                AppState::Calculator => self.transition_to(AppState::Help),
                AppState::Help => self.go_back(),
            },
            NavigationAction::Back | NavigationAction::Select => match self.current_state {
                // Leaving the form is leaving the application
                AppState::Calculator => {
                    if action == NavigationAction::Back {
                        self.should_quit = true;
                    }
                }
                AppState::Help => self.go_back(),
            },
            _ => {}
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Char('?') | KeyCode::F(1) => NavigationAction::Help,

            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,

            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
