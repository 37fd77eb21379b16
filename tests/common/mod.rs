//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for standing up a fake instance metadata
//! endpoint and building the application router against it.

use std::sync::Arc;

use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use instance_metadata_api::application::use_cases::instance::GetInstanceSummaryUseCase;
use instance_metadata_api::infrastructure::driven_adapters::config::MetadataConfig;
use instance_metadata_api::infrastructure::driven_adapters::metadata_client::AzureMetadataClient;
use instance_metadata_api::infrastructure::driving_adapters::api_rest::{self, AppState};

pub const METADATA_PATH: &str = "/metadata/instance";
pub const API_VERSION: &str = "2017-12-01";

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub metadata_server: MockServer,
}

impl TestApp {
    /// Create a new test application backed by a fresh mock metadata server
    pub async fn new() -> Self {
        let metadata_server = MockServer::start().await;

        let config = MetadataConfig {
            endpoint: format!("{}{}", metadata_server.uri(), METADATA_PATH),
            api_version: API_VERSION.to_string(),
            format: "json".to_string(),
            timeout_secs: 2,
        };

        let metadata_source =
            Arc::new(AzureMetadataClient::new(&config).expect("Failed to build metadata client"));
        let get_instance_summary_use_case = Arc::new(GetInstanceSummaryUseCase::new(metadata_source));

        let router = api_rest::app(AppState {
            get_instance_summary_use_case,
        });

        Self {
            router,
            metadata_server,
        }
    }

    /// Serve `document` for well-formed metadata requests
    pub async fn mock_metadata(&self, document: Value) {
        Mock::given(method("GET"))
            .and(path(METADATA_PATH))
            .and(header("Metadata", "True"))
            .and(query_param("format", "json"))
            .and(query_param("api-version", API_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(document))
            .mount(&self.metadata_server)
            .await;
    }

    /// Serve a raw response for any metadata request
    pub async fn mock_metadata_response(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(METADATA_PATH))
            .respond_with(response)
            .mount(&self.metadata_server)
            .await;
    }

    /// Number of requests the mock metadata server has received
    pub async fn metadata_request_count(&self) -> usize {
        self.metadata_server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// A realistic metadata document for a zonal VM
pub fn sample_document() -> Value {
    json!({
        "compute": {
            "location": "westeurope",
            "name": "web-vm-01",
            "offer": "UbuntuServer",
            "osType": "Linux",
            "placementGroupId": "",
            "platformFaultDomain": "0",
            "platformUpdateDomain": "0",
            "publisher": "Canonical",
            "resourceGroupName": "rg-web",
            "sku": "18.04-LTS",
            "subscriptionId": "8d10da13-8125-4ba9-a717-bf7490507b3d",
            "tags": "env:prod",
            "version": "18.04.202001210",
            "vmId": "13f56399-bd52-4150-9748-7190aae1ff21",
            "vmScaleSetName": "",
            "vmSize": "Standard_D2s_v3",
            "zone": "2"
        },
        "network": {
            "interface": [
                {
                    "ipv4": {
                        "ipAddress": [
                            {"privateIpAddress": "10.0.0.4", "publicIpAddress": "52.174.34.95"}
                        ],
                        "subnet": [{"address": "10.0.0.0", "prefix": "24"}]
                    },
                    "ipv6": {"ipAddress": []},
                    "macAddress": "000D3A36DDED"
                },
                {
                    "ipv4": {
                        "ipAddress": [{"privateIpAddress": "10.0.1.4", "publicIpAddress": ""}],
                        "subnet": [{"address": "10.0.1.0", "prefix": "24"}]
                    },
                    "ipv6": {"ipAddress": []},
                    "macAddress": "000D3A36DDEE"
                }
            ]
        }
    })
}

/// Instance summary JSON body
#[derive(Debug, Deserialize)]
pub struct InstanceSummaryResponse {
    pub name: String,
    pub zone: String,
    pub private_ip: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
