use plant_monitor::app::{App, SlideDirection, TickMode};
use plant_monitor::config::DashboardConfig;
use plant_monitor::panel::{ManualScheduler, TimerState};
use plant_monitor::util::database::Database;
use plant_monitor::util::io::event::{AppEvent, Event, EventHandler};
use plant_monitor::util::theme::Theme;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use tempfile::TempDir;

fn app_with(scheduler: &ManualScheduler, database: Database) -> App {
    App::with_parts(
        DashboardConfig::default(),
        database,
        EventHandler::detached(),
        TickMode::Manual(scheduler.clone()),
    )
    .unwrap()
}

fn press(app: &mut App, code: KeyCode) -> Option<Event> {
    app.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    app.events.try_next()
}

#[tokio::test]
async fn test_first_panel_is_mounted_on_start() {
    let scheduler = ManualScheduler::new();
    let app = app_with(&scheduler, Database::open_in_memory().unwrap());

    assert_eq!(app.active, 0);
    assert_eq!(app.panel.panel_id(), "overview");
    assert_eq!(app.panel.state().unwrap().ticks(), 1);
    assert_eq!(scheduler.active_sources(), 1);
}

#[tokio::test]
async fn test_switching_panels_disposes_previous() {
    let scheduler = ManualScheduler::new();
    let mut app = app_with(&scheduler, Database::open_in_memory().unwrap());
    let first = app.panel.state().unwrap().id;

    app.handle_app_event(AppEvent::NextPanel).unwrap();
    assert_eq!(app.active, 1);
    assert_eq!(app.direction, SlideDirection::Right);
    assert_eq!(app.panel.panel_id(), "hydraulic");
    assert_eq!(scheduler.active_sources(), 1);
    assert_eq!(scheduler.cancelled_total(), 1);

    // a tick still queued for the old panel is dropped
    assert!(!app.on_panel_tick(first, 1));
    assert_eq!(app.panel.state().unwrap().ticks(), 1);

    app.handle_app_event(AppEvent::PrevPanel).unwrap();
    assert_eq!(app.active, 0);
    assert_eq!(app.direction, SlideDirection::Left);
    assert_eq!(scheduler.active_sources(), 1);
}

#[tokio::test]
async fn test_reactivating_tab_remounts() {
    let scheduler = ManualScheduler::new();
    let mut app = app_with(&scheduler, Database::open_in_memory().unwrap());
    let before = app.panel.state().unwrap().id;

    app.handle_app_event(AppEvent::SelectPanel(0)).unwrap();

    assert_ne!(app.panel.state().unwrap().id, before);
    assert_eq!(scheduler.active_sources(), 1);

    app.handle_app_event(AppEvent::SelectPanel(9)).unwrap();
    assert_eq!(app.active, 0);
}

#[tokio::test]
async fn test_panel_ticks_are_routed_by_instance_and_generation() {
    let scheduler = ManualScheduler::new();
    let mut app = app_with(&scheduler, Database::open_in_memory().unwrap());
    let state = app.panel.state().unwrap();
    let (instance, generation) = (state.id, state.timer().generation());

    assert!(app.dispatch(Event::PanelTick { instance, generation }).unwrap());
    assert!(!app.dispatch(Event::PanelTick { instance, generation: generation + 1 }).unwrap());
    assert_eq!(app.panel.state().unwrap().ticks(), 2);
}

#[tokio::test]
async fn test_keys_map_to_app_events() {
    let scheduler = ManualScheduler::new();
    let mut app = app_with(&scheduler, Database::open_in_memory().unwrap());

    let cases = [
        (KeyCode::Tab, AppEvent::NextPanel),
        (KeyCode::Right, AppEvent::NextPanel),
        (KeyCode::BackTab, AppEvent::PrevPanel),
        (KeyCode::Char('2'), AppEvent::SelectPanel(1)),
        (KeyCode::Char('p'), AppEvent::ToggleRun),
        (KeyCode::Char(' '), AppEvent::ToggleRun),
        (KeyCode::Char('+'), AppEvent::SlowerInterval),
        (KeyCode::Char('-'), AppEvent::FasterInterval),
        (KeyCode::Char('c'), AppEvent::Clear),
        (KeyCode::Char('t'), AppEvent::ToggleTheme),
        (KeyCode::Char('q'), AppEvent::Quit),
        (KeyCode::Esc, AppEvent::Quit),
    ];

    for (code, expected) in cases {
        match press(&mut app, code) {
            Some(Event::App(event)) => assert_eq!(event, expected, "key {:?}", code),
            other => panic!("key {:?} gave {:?}", code, other),
        }
    }

    app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(matches!(app.events.try_next(), Some(Event::App(AppEvent::Quit))));
}

#[tokio::test]
async fn test_pause_and_clear_act_on_mounted_panel() {
    let scheduler = ManualScheduler::new();
    let mut app = app_with(&scheduler, Database::open_in_memory().unwrap());

    app.handle_app_event(AppEvent::ToggleRun).unwrap();
    assert_eq!(app.panel.state().unwrap().timer().state(), TimerState::Stopped);
    assert_eq!(scheduler.active_sources(), 0);

    app.handle_app_event(AppEvent::Clear).unwrap();
    assert_eq!(app.panel.state().unwrap().renderer().row_count(), 0);

    app.handle_app_event(AppEvent::ToggleRun).unwrap();
    assert_eq!(scheduler.active_sources(), 1);
}

#[tokio::test]
async fn test_theme_survives_restart() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("db").join("plant-monitor.db");
    let scheduler = ManualScheduler::new();

    let mut app = app_with(&scheduler, Database::open(&db_path).unwrap());
    assert_eq!(app.theme, Theme::Dark);
    app.handle_app_event(AppEvent::ToggleTheme).unwrap();
    assert_eq!(app.theme, Theme::Light);
    drop(app);

    let app = app_with(&scheduler, Database::open(&db_path).unwrap());
    assert_eq!(app.theme, Theme::Light);
}

#[tokio::test]
async fn test_quit_disposes_panel() {
    let scheduler = ManualScheduler::new();
    let mut app = app_with(&scheduler, Database::open_in_memory().unwrap());

    app.handle_app_event(AppEvent::Quit).unwrap();

    assert!(!app.running);
    assert!(app.panel.state().unwrap().is_disposed());
    assert_eq!(scheduler.active_sources(), 0);
}

#[tokio::test]
async fn test_run_draws_and_stops_on_quit() {
    let scheduler = ManualScheduler::new();
    let app = app_with(&scheduler, Database::open_in_memory().unwrap());
    let state = app.panel.state().unwrap();
    let (instance, generation) = (state.id, state.timer().generation());

    let sender = app.events.sender();
    sender.send(Event::PanelTick { instance, generation }).unwrap();
    sender.send(Event::PanelTick { instance, generation: generation + 7 }).unwrap();
    sender.send(Event::App(AppEvent::Quit)).unwrap();

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    app.run(&mut terminal).await.unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("2 readings"));
    assert_eq!(scheduler.active_sources(), 0);
}
