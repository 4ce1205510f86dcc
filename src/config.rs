use std::env;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub csrf_token: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("ROOMLY_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string()),
            csrf_token: env::var("ROOMLY_CSRF_TOKEN").unwrap_or_default(),
        }
    }
}
