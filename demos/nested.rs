//! Nested records are bound recursively

use envbind::EnvBind;
use tracing_subscriber::EnvFilter;

#[derive(Debug, EnvBind)]
struct DatabaseConfig {
    #[env("name=DB_HOST,required")]
    pub host: String,

    #[env("name=DB_PORT,default=5432")]
    pub port: u16,
}

#[derive(Debug, EnvBind)]
struct Config {
    #[env("name=LOG_LEVEL,default=info")]
    pub log_level: String,

    // No attribute: DatabaseConfig derives EnvBind and is walked field by field
    pub database: DatabaseConfig,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    std::env::set_var("DB_HOST", "db.internal");

    let config = Config::from_env()?;

    println!("Nested configuration:");
    println!("  Log Level: {}", config.log_level);
    println!("  Database Host: {}", config.database.host);
    println!("  Database Port: {}", config.database.port);

    Ok(())
}
