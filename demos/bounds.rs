//! Numeric bounds with min/max

use envbind::{BindError, EnvBind};

#[derive(Debug, EnvBind)]
struct Config {
    // Inclusive range, checked after parsing
    #[env("name=WORKERS,default=4,min=1,max=64")]
    pub workers: u32,

    // A zero bound is a real bound
    #[env("name=SAMPLE_RATE,default=1.0,min=0,max=1")]
    pub sample_rate: f64,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("WORKERS", "16");
    std::env::set_var("SAMPLE_RATE", "0.25");

    let config = Config::from_env()?;
    println!("Workers: {}", config.workers);
    println!("Sample Rate: {}", config.sample_rate);

    // Out of range values are rejected
    std::env::set_var("WORKERS", "128");
    match Config::from_env() {
        Err(err @ BindError::OutOfRange { .. }) => println!("Rejected: {}", err),
        other => anyhow::bail!("expected an out of range error, got {:?}", other),
    }

    Ok(())
}
