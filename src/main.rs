use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use burrito_bot::config::Config;
use burrito_bot::emoji::EmojiRegistry;
use burrito_bot::engine::Distributor;
use burrito_bot::handler::Handler;
use burrito_bot::model::Workspace;
use burrito_bot::notify::{Messenger, Notifier};
use burrito_bot::slack::api::SlackClient;
use burrito_bot::slack::rtm;
use burrito_bot::store::memory::MemoryStore;
use burrito_bot::store::postgres::PgStore;
use burrito_bot::store::BurritoStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A bot with an undefined quota must not run.
    let config = Config::from_env().expect("Invalid configuration, refusing to start.");

    let registry = EmojiRegistry::from_lists(&config.emoji_inc, &config.emoji_dec);
    if registry.is_empty() {
        tracing::warn!("no emoji tokens configured; no message will ever parse");
    }

    let store: Arc<dyn BurritoStore> = match &config.database_url {
        Some(url) => Arc::new(
            PgStore::connect(url)
                .await
                .expect("Failed to connect to the database."),
        ),
        None => {
            tracing::warn!("DATABASE_URL not set, burritos are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let client = Arc::new(SlackClient::new(&config.api_token).expect("Failed to build the http client."));
    let workspace = Workspace {
        self_id: client.self_id().await.expect("auth.test failed."),
        bot_ids: client.bot_ids().await.expect("users.list failed."),
    };
    tracing::info!(self_id = %workspace.self_id, bots = workspace.bot_ids.len(), "workspace identity resolved");

    let icon = registry.primary_token().unwrap_or_default().to_string();
    let messenger = Arc::new(Messenger::new(client.clone(), config.bot_name.clone(), icon));
    let distributor = Distributor::new(store, messenger.clone(), config.daily_cap);
    let notifier = Notifier::new(messenger, &config, registry.primary_token());
    let handler = Arc::new(Handler::new(registry, workspace, distributor, notifier));

    let url = client.rtm_url().await.expect("rtm.connect failed.");
    let (events_tx, mut events_rx) = mpsc::channel(64);
    tokio::spawn(async move {
        if let Err(err) = rtm::run(url, events_tx).await {
            tracing::error!(error = %err, "rtm stream ended");
        }
    });

    // One task per event: a slow store or send never blocks the stream.
    while let Some(event) = events_rx.recv().await {
        let handler = Arc::clone(&handler);
        tokio::spawn(async move { handler.handle_event(event).await });
    }
}
