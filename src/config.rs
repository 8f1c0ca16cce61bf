use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub mongo_url: String,
    pub server_addr: String,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        Self {
            mongo_url: env::var("MONGO_URL").expect("MONGO_URL must be set"),
            server_addr: format!("0.0.0.0:{port}"),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "dist/FrontEnd".to_string())
                .into(),
        }
    }
}
