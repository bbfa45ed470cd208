use smart_gym::api::routes::create_routes;
use smart_gym::config::{AppConfig, DemoSeeder};
use smart_gym::services::GymService;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    // One directory for the whole process, handed to the router by value
    let gym = GymService::new();
    DemoSeeder::new(gym.clone()).seed_all()?;

    let app = create_routes(gym, &config.jwt_secret);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "Smart gym server starting on http://{}",
        config.server_address()
    );
    info!(
        "Health check available at http://{}/health",
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
