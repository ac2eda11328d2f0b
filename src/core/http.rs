use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

pub const APP_USER_AGENT: &str = "PackCrafter/0.1.0";

pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .user_agent(user_agent)
        .default_headers(default_headers)
        .build()
}
