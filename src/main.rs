use plant_monitor::app::App;
use plant_monitor::config::DashboardConfig;
use plant_monitor::util::log;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = DashboardConfig::load_default()?;
    log::init(&config.log_dir)?;

    let app = App::new(config)?;
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();
    result
}
