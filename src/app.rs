use crate::config::{DashboardConfig, PanelConfig};
use crate::panel::{ManualScheduler, PanelLoader, PanelView, TickScheduler, TokioTickScheduler};
use crate::util::database::Database;
use crate::util::io::event::{AppEvent, Event, EventHandler};
use crate::util::theme::Theme;
use color_eyre::Result;
use ratatui::{
    backend::Backend,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    Terminal,
};
use tracing::{debug, error, info};
use uuid::Uuid;

/// Which way the panel strip moved on the last activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

/// Where mounted panels get their tick sources from.
#[derive(Debug, Clone)]
pub enum TickMode {
    /// Tokio interval tasks feeding the app's event channel.
    Live,
    /// Ticks are driven by hand; used by tests.
    Manual(ManualScheduler),
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: DashboardConfig,
    /// Index of the active panel in `config.panels`.
    pub active: usize,
    pub direction: SlideDirection,
    /// The active panel. Only one panel is mounted at a time.
    pub panel: PanelView,
    pub theme: Theme,
    /// Settings storage for the theme.
    pub database: Database,
    /// Event handler.
    pub events: EventHandler,
    tick_mode: TickMode,
}

impl App {
    /// Constructs a new instance of [`App`] reading terminal events and ticking on tokio timers.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let database = Database::open(&config.db_path)?;
        Self::with_parts(config, database, EventHandler::new(), TickMode::Live)
    }

    pub fn with_parts(
        config: DashboardConfig,
        database: Database,
        events: EventHandler,
        tick_mode: TickMode,
    ) -> Result<Self> {
        let theme = Theme::load(&database)?;
        let first = config
            .panels
            .first()
            .ok_or_else(|| color_eyre::eyre::eyre!("no panels configured"))?;
        let panel = Self::load_panel(first, &config.interval_options_ms, &events, &tick_mode);

        Ok(Self {
            running: true,
            config,
            active: 0,
            direction: SlideDirection::Right,
            panel,
            theme,
            database,
            events,
            tick_mode,
        })
    }

    /// Run the application's main loop.
    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;

        while self.running {
            let event = match self.events.next().await {
                Ok(event) => event,
                Err(e) => {
                    error!("Event error: {}", e);
                    break;
                }
            };

            // save power: only draw when the event changed something visible
            if self.dispatch(event)? && self.running {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
            }
        }

        self.panel.dispose();
        Ok(())
    }

    /// Apply one event; returns whether the screen needs a redraw.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Crossterm(CrosstermEvent::Key(key_event)) => {
                self.handle_key_events(key_event)?;
                Ok(false)
            }
            Event::Crossterm(CrosstermEvent::Resize(_, _)) => Ok(true),
            Event::Crossterm(_) => Ok(false),
            Event::App(app_event) => {
                self.handle_app_event(app_event)?;
                Ok(true)
            }
            Event::PanelTick { instance, generation } => Ok(self.on_panel_tick(instance, generation)),
        }
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Tab | KeyCode::Right => self.events.send(AppEvent::NextPanel),
            KeyCode::BackTab | KeyCode::Left => self.events.send(AppEvent::PrevPanel),
            KeyCode::Char(ch @ '1'..='9') => {
                let index = ch as usize - '1' as usize;
                self.events.send(AppEvent::SelectPanel(index))
            }
            KeyCode::Char('p') | KeyCode::Char(' ') => self.events.send(AppEvent::ToggleRun),
            KeyCode::Char('+') | KeyCode::Char('=') => self.events.send(AppEvent::SlowerInterval),
            KeyCode::Char('-') => self.events.send(AppEvent::FasterInterval),
            KeyCode::Char('c') => self.events.send(AppEvent::Clear),
            KeyCode::Char('t') => self.events.send(AppEvent::ToggleTheme),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) -> Result<()> {
        match app_event {
            AppEvent::NextPanel => self.activate((self.active + 1) % self.config.panels.len()),
            AppEvent::PrevPanel => {
                let count = self.config.panels.len();
                self.activate((self.active + count - 1) % count)
            }
            AppEvent::SelectPanel(index) => {
                if index < self.config.panels.len() {
                    self.activate(index)
                }
            }
            AppEvent::ToggleRun => {
                if let Some(state) = self.panel.state_mut() {
                    state.toggle_run();
                }
            }
            AppEvent::SlowerInterval => {
                if let Some(state) = self.panel.state_mut() {
                    state.step_interval(true);
                }
            }
            AppEvent::FasterInterval => {
                if let Some(state) = self.panel.state_mut() {
                    state.step_interval(false);
                }
            }
            AppEvent::Clear => {
                if let Some(state) = self.panel.state_mut() {
                    state.clear();
                }
            }
            AppEvent::ToggleTheme => self.theme.toggle(&self.database)?,
            AppEvent::Quit => self.quit(),
        }
        Ok(())
    }

    /// Dispose the current panel and mount the one at `index`.
    ///
    /// Re-activating the current tab re-runs its initialization.
    pub fn activate(&mut self, index: usize) {
        let Some(panel) = self.config.panels.get(index) else {
            return;
        };

        self.direction = if index >= self.active {
            SlideDirection::Right
        } else {
            SlideDirection::Left
        };

        self.panel.dispose();
        info!("Activating panel '{}' ({:?})", panel.id, self.direction);
        self.panel = Self::load_panel(panel, &self.config.interval_options_ms, &self.events, &self.tick_mode);
        self.active = index;
    }

    /// Route a timer tick to the mounted panel. Ticks for a panel that is no
    /// longer mounted are dropped.
    pub fn on_panel_tick(&mut self, instance: Uuid, generation: u64) -> bool {
        match self.panel.state_mut() {
            Some(state) if state.id == instance => state.on_tick(generation),
            _ => {
                debug!("Dropping tick for unmounted panel {}", instance);
                false
            }
        }
    }

    pub fn active_panel(&self) -> &PanelConfig {
        &self.config.panels[self.active]
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.panel.dispose();
        self.running = false;
    }

    fn load_panel(
        panel: &PanelConfig,
        interval_options_ms: &[u64],
        events: &EventHandler,
        tick_mode: &TickMode,
    ) -> PanelView {
        let sender = events.sender();
        let tick_mode = tick_mode.clone();
        PanelLoader::load(panel, interval_options_ms, move |instance| -> Box<dyn TickScheduler> {
            match tick_mode {
                TickMode::Live => Box::new(TokioTickScheduler::new(sender, instance)),
                TickMode::Manual(scheduler) => Box::new(scheduler),
            }
        })
    }
}
