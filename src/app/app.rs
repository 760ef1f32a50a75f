//! Main application controller
//!
//! Manages the TUI, application state, and the draw/event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::{
        screens::{CalculatorScreen, HelpScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::Tui,
    },
    config::CalcConfig,
    Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    /// Screen components
    calculator_screen: CalculatorScreen,
    help_screen: HelpScreen,
}

impl App {
    /// Create a new application instance from saved preferences
    pub fn new() -> Result<Self> {
        let config = CalcConfig::load()?;
        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::new(),
            calculator_screen: CalculatorScreen::new(&config),
            help_screen: HelpScreen::new(),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop, saving preferences on exit
    pub fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.draw()?;
            self.handle_events()?;
        }
        self.calculator_screen.preferences().save()
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let state = self.state_manager.current_state().clone();
        self.tui.draw(|f| match state {
            AppState::Calculator => self.calculator_screen.render(f),
            AppState::Help => self.help_screen.render(f),
        })?;
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        let Some(key) = self.tui.poll_key()? else {
            return Ok(());
        };

        // Ctrl+C always quits, even mid-edit
        if is_ctrl_c(key) {
            self.state_manager.quit();
            return Ok(());
        }

        match self.state_manager.current_state() {
            AppState::Calculator => self.handle_calculator_events(key),
            AppState::Help => {
                let action = StateManager::key_to_navigation(key);
                self.state_manager.handle_navigation(action);
            }
        }
        Ok(())
    }

    fn handle_calculator_events(&mut self, key: KeyEvent) {
        // While a text edit or dropdown is open, the form owns the keys
        if !self.calculator_screen.is_capturing_input() {
            match StateManager::key_to_navigation(key) {
                NavigationAction::Quit | NavigationAction::Back => {
                    // Esc behaves as quit only outside edits; Back from the
                    // form is Back from the application
                    self.state_manager.quit();
                    return;
                }
                NavigationAction::Help => {
                    self.state_manager.transition_to(AppState::Help);
                    return;
                }
                _ => {}
            }
        }
        self.calculator_screen.handle_key_event(key);
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
