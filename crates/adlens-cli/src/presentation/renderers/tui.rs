//! Dashboard renderer
//!
//! Owns the terminal for the lifetime of the dashboard and runs the event
//! loop. Campaign state lives in the `CampaignController`; this renderer
//! owns only UI state (table selection, overlay flag) through
//! `DashboardComponent`.
//!
//! Loads run on the tokio runtime and report back over a channel. The loop
//! polls keys with a short timeout and drains that channel between polls,
//! so the screen stays responsive while a request is in flight.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use adlens_runtime::{CampaignController, CampaignRepository, LoadOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Handle;

use crate::presentation::presenters::present_dashboard;
use crate::presentation::view_models::DashboardScreenViewModel;
use crate::presentation::views::tui::{DashboardAction, DashboardComponent};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct TuiRenderer {
    dashboard: DashboardComponent,
    /// Display label of the campaign source
    source: String,
    loaded_at: Option<String>,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            dashboard: DashboardComponent::new(),
            source: source.into(),
            loaded_at: None,
            should_quit: false,
        }
    }

    pub fn run<R>(mut self, controller: &mut CampaignController<R>, runtime: &Handle) -> Result<()>
    where
        R: CampaignRepository + ?Sized + 'static,
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let (tx, rx) = mpsc::channel();
        controller.spawn_load(runtime, tx.clone());

        let result = self.event_loop(&mut terminal, controller, runtime, &tx, &rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<R>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        controller: &mut CampaignController<R>,
        runtime: &Handle,
        tx: &mpsc::Sender<LoadOutcome>,
        rx: &Receiver<LoadOutcome>,
    ) -> Result<()>
    where
        R: CampaignRepository + ?Sized + 'static,
    {
        loop {
            let screen = present_dashboard(
                controller.state(),
                &self.source,
                self.loaded_at.as_deref(),
                self.dashboard.show_insights(),
            );
            terminal.draw(|f| {
                let area = f.area();
                self.dashboard.render(f, area, &screen);
            })?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    // Only handle key press events, not release
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, &screen, controller, runtime, tx);
                    }
                }
            }

            while let Ok(outcome) = rx.try_recv() {
                let succeeded = outcome.result.is_ok();
                if controller.apply(outcome) && succeeded {
                    self.loaded_at = Some(chrono::Local::now().format("%H:%M:%S").to_string());
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key_event<R>(
        &mut self,
        key: KeyEvent,
        screen: &DashboardScreenViewModel,
        controller: &mut CampaignController<R>,
        runtime: &Handle,
        tx: &mpsc::Sender<LoadOutcome>,
    ) where
        R: CampaignRepository + ?Sized + 'static,
    {
        // raw mode delivers Ctrl-C as a key, not a signal
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.dashboard.handle_input(key, screen) {
            self.apply(action, controller, runtime, tx);
        }
    }

    fn apply<R>(
        &mut self,
        action: DashboardAction,
        controller: &mut CampaignController<R>,
        runtime: &Handle,
        tx: &mpsc::Sender<LoadOutcome>,
    ) where
        R: CampaignRepository + ?Sized + 'static,
    {
        match action {
            DashboardAction::Quit => self.should_quit = true,
            DashboardAction::CycleStatusFilter => {
                let filter = controller.state_mut().cycle_status_filter();
                tracing::debug!(filter = filter.as_str(), "status filter changed");
            }
            DashboardAction::SortBy(key) => {
                controller.state_mut().set_sort(key);
                tracing::debug!(
                    key = key.as_str(),
                    direction = controller.state().sort_direction().as_str(),
                    "sort changed"
                );
            }
            DashboardAction::Reload => {
                self.loaded_at = None;
                controller.spawn_load(runtime, tx.clone());
            }
        }
    }
}
