use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_host: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpFields {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}
