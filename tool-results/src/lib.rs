//! # google-cloud-tool-results
//!
//! Google Cloud Platform Cloud Tool Results API v1beta3 client library.
//! Reads and publishes results from Firebase Test Lab: histories, executions, steps and
//! the perf metrics, test cases and thumbnails attached to them.
//!
//! Timestamps and durations are carried as `{seconds, nanos}` objects by this API.
//! [`http::types::Timestamp`] converts to and from `time::OffsetDateTime`,
//! [`http::types::Duration`] to and from `std::time::Duration`.
//!
//! ## Quickstart
//!
//! ```
//! use google_cloud_tool_results::client::{ClientConfig, Client};
//! use google_cloud_tool_results::http::steps::list::ListStepsRequest;
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!     let project_id = client.project_id().unwrap().to_string();
//!     let steps = client
//!         .steps()
//!         .list(&ListStepsRequest {
//!             project_id,
//!             history_id: "bh.1234567890abcdef".to_string(),
//!             execution_id: "1234567890123456789".to_string(),
//!             ..Default::default()
//!         })
//!         .await
//!         .unwrap();
//!     for step in steps.steps {
//!         println!("{:?} {:?}", step.name, step.outcome);
//!     }
//! }
//! ```
pub mod client;
pub mod http;
