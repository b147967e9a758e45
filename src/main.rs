use config::Config;
use dotenvy::dotenv;

use bookify_portal::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config = Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?
        .try_deserialize::<ServerConfig>()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    bookify_portal::run(server_config).await
}
