/// Configuration options specific to the Storebot service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Number of recently-seen webhook `update_id`s kept for replay
    /// protection.
    pub dedup_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            dedup_capacity: 1024,
        }
    }
}
