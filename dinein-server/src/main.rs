use dinein_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_environment();
    print_banner();

    let config = Config::from_env()?;
    let state = ServerState::initialize(config).await?;

    Server::with_state(state).run().await
}
