use api::{app, AppState};
use chatgpt_proxy::{ChatGptService, Config};

const SERVICE_NAME: &str = "ask_chat_gpt";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Stdout)
        .init();

    if let Err(e) = run().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Configuration errors must stop us before the socket is bound.
    let config = Config::from_env()?;
    log::debug!("Loaded {:?}", config);

    let chat_gpt = ChatGptService::new(&config)?;
    let app = app(AppState::new(chat_gpt));

    let addr = config.bind_addr();
    log::info!("Starting the <{}> at {}", SERVICE_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
