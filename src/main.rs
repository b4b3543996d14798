//! BrewBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;

use teloxide::dispatching::UpdateHandler;
use teloxide::{prelude::*, types::Update};
use tracing::{error, info, warn};

use BrewBuddy::{
    config::Settings,
    handlers::{self, commands::Command},
    services::ServiceFactory,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the dispatcher so the
    // file writer keeps flushing
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting BrewBuddy Telegram Bot...");

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(bot.clone(), &settings)?;

    // Start the schedule poller
    let (shutdown_tx, _) = tokio::sync::broadcast::channel(1);
    let poll_interval = Duration::from_secs(settings.scheduler.poll_interval_seconds);
    let poller = services
        .scheduler
        .spawn_poller(poll_interval, shutdown_tx.subscribe());

    // Wrap dependencies for injection
    let services_arc = Arc::new(services.clone());
    let settings_arc = Arc::new(settings);

    // Create the handler
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc, settings_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("BrewBuddy bot is ready!");
    dispatcher.dispatch().await;

    // Stop the poller and persist state
    info!("Shutting down...");
    let _ = shutdown_tx.send(());
    if let Err(e) = poller.await {
        warn!(error = %e, "Schedule poller did not stop cleanly");
    }
    if let Err(e) = services.flush().await {
        error!(error = %e, "Failed to flush state on shutdown");
    }

    info!("BrewBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    // Handle public commands
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(
                    // Handle regular messages, including admin routing
                    dptree::endpoint(handle_messages),
                ),
        )
        .branch(
            // Handle callback queries
            Update::filter_callback_query().endpoint(handle_callbacks),
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
    settings: Arc<Settings>,
) -> HandlerResult {
    let services = (*services).clone();
    let settings = (*settings).clone();

    if let Err(e) = handlers::handle_command(bot, msg, cmd, services, settings).await {
        error!(error = %e, severity = %e.severity(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
    settings: Arc<Settings>,
) -> HandlerResult {
    let services = (*services).clone();
    let settings = (*settings).clone();

    if let Err(e) = handlers::handle_message(bot, msg, services, settings).await {
        if e.is_recoverable() {
            warn!(error = %e, "Recoverable error while handling message");
            return Ok(());
        }
        error!(error = %e, severity = %e.severity(), "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: teloxide::types::CallbackQuery,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handlers::handle_callback_query(bot, query, services).await {
        error!(error = %e, "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
