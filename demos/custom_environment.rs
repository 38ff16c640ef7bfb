//! Binding from a map instead of the process environment

use envbind::{bind_with, EnvBind, EnvField};
use std::collections::HashMap;

#[derive(Debug, EnvBind)]
struct Config {
    #[env("name=HOST,required")]
    pub host: String,

    #[env("name=PORT,default=8080")]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    let env = HashMap::from([("HOST".to_string(), "example.com".to_string())]);

    // Start from the zero value and bind in place
    let mut config = Config::zero();
    bind_with(&mut config, &env)?;

    println!("Host: {}", config.host);
    println!("Port: {}", config.port);

    Ok(())
}
