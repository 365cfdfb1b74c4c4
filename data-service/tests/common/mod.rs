//! Test helpers for data-service integration tests.
//!
//! Spawns the real server on a random port with a temporary CSV fixture and
//! drives it over HTTP.

#![allow(dead_code)]

use data_service::config::DataConfig;
use data_service::startup::Application;
use service_core::config::Config;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

pub const PREMIUM_KEY: &str = "PREMIUM_KEY_A1B2C3D4";
pub const BASIC_KEY: &str = "BASIC_KEY_E5F6G7H8";

/// Five-row fixture covering both category casings and the full rating range.
pub const FIXTURE_CSV: &str = "\
Transaction_ID,Product_Category,Total_Value_USD,Feedback_Rating_1_5
T-1001,Electronics,1200.50,5
T-1002,Groceries,80.25,4
T-1003,Home Goods,310.00,3
T-1004,electronics,45.75,2
T-1005,Groceries,22.10,5
";

pub struct TestApp {
    pub address: String,
    client: reqwest::Client,
    _data_file: Option<NamedTempFile>,
}

impl TestApp {
    /// Spawn with the default five-row fixture.
    pub async fn spawn() -> TestApp {
        Self::spawn_with_csv(FIXTURE_CSV).await
    }

    /// Spawn with a caller-provided CSV fixture.
    pub async fn spawn_with_csv(csv: &str) -> TestApp {
        let mut file = NamedTempFile::new().expect("Failed to create CSV fixture");
        file.write_all(csv.as_bytes())
            .expect("Failed to write CSV fixture");
        Self::spawn_inner(Some(file)).await
    }

    /// Spawn pointing at a missing data file: degraded empty-store mode.
    pub async fn spawn_without_data() -> TestApp {
        Self::spawn_inner(None).await
    }

    async fn spawn_inner(data_file: Option<NamedTempFile>) -> TestApp {
        let path = data_file
            .as_ref()
            .map(|file| file.path().display().to_string())
            .unwrap_or_else(|| "/nonexistent/transactions.csv".to_string());

        let config = DataConfig {
            common: Config { port: 0 },
            data_file: path,
            api_keys: HashMap::from([
                (PREMIUM_KEY.to_string(), "Premium Client Tier".to_string()),
                (BASIC_KEY.to_string(), "Basic Client Tier".to_string()),
            ]),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
            _data_file: data_file,
        }
    }

    /// GET a path, optionally with a bearer key.
    pub async fn get(&self, path: &str, key: Option<&str>) -> reqwest::Response {
        let mut request = self.client.get(format!("{}{}", self.address, path));
        if let Some(key) = key {
            request = request.bearer_auth(key);
        }
        request.send().await.expect("Failed to execute request")
    }
}
