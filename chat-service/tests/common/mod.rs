//! Test helpers for chat-service integration tests.

#![allow(dead_code)]

use chat_service::config::{ChatConfig, GoogleConfig};
use chat_service::services::providers::ChatProvider;
use chat_service::startup::Application;
use service_core::config::Config;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port with the given provider.
    pub async fn spawn(provider: impl ChatProvider + 'static) -> TestApp {
        let config = ChatConfig {
            common: Config { port: 0 },
            google: GoogleConfig {
                api_key: "test-api-key".to_string(),
            },
            model: "gemini-2.5-flash".to_string(),
        };

        let app = Application::build(config, Arc::new(provider))
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
        }
    }

    /// POST a chat message and return the response.
    pub async fn chat(&self, message: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/chat", self.address))
            .json(&serde_json::json!({"message": message}))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
