//! Basic usage example

use envbind::EnvBind;
use tracing_subscriber::EnvFilter;

#[derive(Debug, EnvBind)]
struct Config {
    // Required: fails when DATABASE_URL is unset or empty
    #[env("name=DATABASE_URL,required")]
    pub database_url: String,

    // With default value
    #[env("name=SERVER_ADDR,default=127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env("name=MAX_CONNECTIONS,default=10")]
    pub max_connections: u32,

    // Boolean type, accepts 1/t/true/TRUE/True and 0/f/false/FALSE/False
    #[env("name=DEBUG_MODE,default=false")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
