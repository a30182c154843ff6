//! Runtime configuration from the environment. `.env` is loaded by the
//! binary before this is read.

pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// `DATABASE_URL` (default `sqlite:holocron.db`), `HOST` (default
    /// `0.0.0.0`) and `PORT` (default `3000`).
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:holocron.db".into());
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Self {
            database_url,
            bind_addr: format!("{}:{}", host, port),
        }
    }
}
