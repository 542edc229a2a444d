//! Main TUI application state and event loop

use crate::config::{self, Config};
use crate::driver::{Command, Driver, RunState, Tick};
use crate::ui::input::{self, Action, Button};
use crate::ui::paint;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input while nothing is running
const IDLE_POLL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    pub driver: Driver,

    /// Time between two steps while a run is active
    pub tick: Duration,

    /// Last time a step was taken
    pub last_tick: Instant,

    /// Button positions from the latest frame, for mouse hit testing
    pub buttons: Vec<(Button, Rect)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(driver: Driver, config: &Config) -> Self {
        App {
            driver,
            tick: config.tick,
            last_tick: Instant::now(),
            buttons: Vec::new(),
            should_quit: false,
            status_message: String::from("Press SPACE to start"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.driver.is_running() && self.last_tick.elapsed() >= self.tick {
                self.advance();
                self.last_tick = Instant::now();
            }

            let timeout = if self.driver.is_running() {
                self.tick.saturating_sub(self.last_tick.elapsed())
            } else {
                IDLE_POLL
            };

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key)
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Take one step of the active run
    pub fn advance(&mut self) {
        match self.driver.tick() {
            Tick::Stepped(_) => {
                self.status_message = format!("Sorting with {}...", self.driver.algorithm());
            }
            Tick::Completed => {
                self.status_message = format!(
                    "{} finished in {} steps",
                    self.driver.algorithm(),
                    self.driver.steps_taken()
                );
            }
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let control_rows = input::button_rows(size.width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(super::panes::HEADER_HEIGHT),
                Constraint::Length(control_rows),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_header(
            frame,
            chunks[0],
            self.driver.algorithm(),
            self.driver.direction(),
        );

        self.buttons = input::layout_buttons(chunks[1]);
        super::panes::render_controls(
            frame,
            &self.buttons,
            self.driver.algorithm(),
            self.driver.direction(),
            self.driver.is_running(),
        );

        let sequence = self.driver.sequence();
        let paints = paint::paint(sequence, self.driver.last_step());
        super::panes::render_bars_pane(frame, chunks[2], &paints, sequence.span() as u64);

        super::panes::render_status_bar(
            frame,
            chunks[3],
            super::panes::StatusRenderData {
                message: &self.status_message,
                steps: self.driver.steps_taken(),
                len: sequence.len(),
                state: self.driver.state(),
                tick: self.tick,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(action) = input::action_for_key(key) {
            self.perform(action);
        }
    }

    /// Handle mouse events; only left clicks on buttons do anything
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(button) = input::button_at(&self.buttons, mouse.column, mouse.row) {
            tracing::debug!(button = button.label(), "button pressed");
            self.perform(button.action());
        }
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Faster => {
                self.tick = config::faster(self.tick);
                self.status_message = format!("Tick {}ms", self.tick.as_millis());
            }
            Action::Slower => {
                self.tick = config::slower(self.tick);
                self.status_message = format!("Tick {}ms", self.tick.as_millis());
            }
            Action::SelectAndStart(algorithm) => {
                if self.driver.select_algorithm(algorithm) {
                    self.run_command(Command::Start);
                }
            }
            Action::Run(command) => self.run_command(command),
        }
    }

    fn run_command(&mut self, command: Command) {
        if !self.driver.apply(command) {
            // Rejected while running; leave the current message alone
            return;
        }
        self.status_message = match command {
            Command::Start => {
                self.last_tick = Instant::now()
                    .checked_sub(self.tick)
                    .unwrap_or_else(Instant::now);
                if self.driver.state() == RunState::Complete {
                    "Nothing to sort".to_string()
                } else {
                    format!("Sorting with {}...", self.driver.algorithm())
                }
            }
            Command::Reset => "New list generated".to_string(),
            Command::Resize(_) => format!("List size {}", self.driver.size()),
            Command::Select(algorithm) => format!("{} selected", algorithm),
            Command::SetDirection(direction) => format!("{} order", direction),
        };
    }
}
