
pub mod config;
pub mod live;
pub mod market;
pub mod scanner;
pub mod state;
mod ui;

use {
    config::Config,
    live::feed::feed_task,
    market::rng::ThreadRngSource,
    scanner::scanner_task,
    state::DashboardState,
    std::sync::Arc,
    tokio::sync::RwLock,
};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();

    // Initialize logger if RUST_LOG is set
    // Write logs to stderr (suppressed once the UI enters the alternate screen)
    let mut builder = if config.rust_log.is_some() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    } else {
        env_logger::Builder::from_default_env()
    };
    builder.target(env_logger::Target::Stderr).init();

    // Log startup information (before the UI starts to avoid overlay)
    log::info!("🚀 Starting rugwatch...");
    log::info!("📊 Configuration:");
    log::info!("   Live window capacity: {}", config.live_window_capacity);
    log::info!("   Live tick: {}s", config.live_tick_secs);
    log::info!("   Scan interval: {}s", config.scan_interval_secs);
    log::info!("   Scan top N: {}", config.scan_top_n);

    // Build the catalog and seed the live window exactly once per session
    let state = {
        let mut rng = ThreadRngSource::new();
        Arc::new(RwLock::new(DashboardState::new(&config, &mut rng)))
    };

    {
        let guard = state.read().await;
        log::info!(
            "✅ Catalog generated: {} assets, window seeded with {} samples",
            guard.catalog().len(),
            guard.live().window().len()
        );
    }

    // Spawn UI task first; the dashboard owns the screen from here on
    let ui_state = state.clone();
    let ui_handle = tokio::spawn(async move {
        if let Err(e) = ui::run_ui(ui_state).await {
            log::error!("UI error: {}", e);
        }
    });

    // Arm periodic updates now that the session owner is in place; any
    // timer tick arriving earlier is dropped by the feed itself
    state.write().await.live_mut().confirm_ready();

    let feed_handle = tokio::spawn(feed_task(state.clone(), config.live_tick_secs));
    let scanner_handle = tokio::spawn(scanner_task(
        state.clone(),
        config.scan_interval_secs,
        config.scan_top_n,
    ));

    // The UI quitting ends the session; stop the timers with it
    ui_handle.await?;
    feed_handle.abort();
    scanner_handle.abort();

    log::info!("✅ rugwatch shut down");
    Ok(())
}
