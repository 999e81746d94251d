#![allow(dead_code)]

use catalog::configuration::{DatabaseSettings, Settings, StoreBackend};
use catalog::store::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bearer tokens accepted by the mocked identity provider: (token, id, username).
pub const USERS: [(&str, &str, &str); 3] = [
    ("token-u1", "u1", "alice"),
    ("token-u2", "u2", "bob"),
    ("token-u3", "u3", "carol"),
];

pub struct TestApp {
    pub address: String,
    pub auth_server: MockServer,
    pub client: reqwest::Client,
}

fn settings(auth_url: String) -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        auth_url,
        auth_cache_ttl_secs: 60,
        store: StoreBackend::Memory,
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            database_name: "catalog".to_string(),
            max_connections: 1,
        },
    }
}

async fn mock_auth_server() -> MockServer {
    let server = MockServer::start().await;
    for (token, id, username) in USERS {
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {
                    "id": id,
                    "username": username,
                    "email": format!("{}@example.com", username),
                }
            })))
            .mount(&server)
            .await;
    }
    // anything else is an unknown token
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401))
        .with_priority(u8::MAX)
        .mount(&server)
        .await;

    server
}

// the server runs on a random port with the in-memory store
pub async fn spawn_app() -> TestApp {
    let auth_server = mock_auth_server().await;
    let configuration = settings(format!("{}/me", auth_server.uri()));

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = catalog::startup::run(listener, Arc::new(MemoryStore::new()), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        auth_server,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn get(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        authorize(self.client.get(self.url(path)), token)
    }

    pub fn post(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        authorize(self.client.post(self.url(path)), token)
    }

    pub fn put(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        authorize(self.client.put(self.url(path)), token)
    }

    pub fn patch(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        authorize(self.client.patch(self.url(path)), token)
    }

    pub fn delete(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        authorize(self.client.delete(self.url(path)), token)
    }

    /// Creates a product owned by the token's user and returns its slug.
    pub async fn create_product(&self, token: &str, title: &str) -> String {
        let response = self
            .post("/product", Some(token))
            .json(&json!({ "title": title, "description": "a product" }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        body["item"]["slug"].as_str().unwrap().to_string()
    }

    pub async fn view(&self, slug: &str) -> Value {
        let response = self
            .get(&format!("/product/{}", slug), None)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        body["item"].clone()
    }
}

fn authorize(builder: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}
