use spotlight_core::Config;

// Use mimalloc as the global allocator; it behaves better than the system
// allocator under containerized musl builds.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, image pipeline, routes)
    let (_state, router) = spotlight_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    spotlight_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
