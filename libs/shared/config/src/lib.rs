use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub bind_port: u16,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_host = env::var("SYNAPSE_BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let bind_port = match env::var("SYNAPSE_BIND_PORT").map(|v| v.parse::<u16>()) {
            Ok(Ok(port)) => port,
            Ok(Err(_)) => {
                warn!("SYNAPSE_BIND_PORT is not a valid port, using 3000");
                3000
            }
            Err(_) => 3000,
        };

        let seed_demo_data = env::var("SYNAPSE_SEED_DEMO")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        Self {
            bind_host,
            bind_port,
            seed_demo_data,
        }
    }
}
