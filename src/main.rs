use homework_bot::config::{self, AppConfig};
use homework_bot::notifier::Notifier;
use homework_bot::providers::{practicum::PracticumClient, telegram::TelegramClient};
use homework_bot::runner::{Poller, TokioSleeper};
use homework_bot::{banner, logging};
use log::{debug, error, info};
use reqwest::Client;

#[tokio::main]
async fn main() {
    // Print the startup banner
    banner::print_banner();

    // A missing .env is fine as long as the variables come from the environment
    let dotenv_result = dotenvy::dotenv();

    logging::init(&config::log_file_from_env());

    if let Err(e) = dotenv_result {
        debug!("No .env file loaded: {}", e);
    }

    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(target: "critical", "{}", e);
            error!(target: "critical", "Bot stopped before polling started");
            std::process::exit(0);
        }
    };

    let client = Client::new();
    let notifier = Notifier::new(
        TelegramClient::new(client.clone(), app_config.telegram.clone()),
        app_config.telegram.chat_id.clone(),
    );
    let api = PracticumClient::new(client, app_config.practicum.clone());

    let start = chrono::Utc::now().timestamp();
    info!("🚀 Starting bot for chat {}", notifier.chat_id());

    Poller::new(api, notifier, TokioSleeper, app_config.retry_period, start)
        .run()
        .await;
}
