//! # google-cloud-life-sciences
//!
//! Google Cloud Platform Life Sciences API v2beta client library.
//! Runs pipelines of containers on Compute Engine virtual machines and reports their progress
//! through long-running operations.
//!
//! ## Quickstart
//!
//! ```
//! use std::collections::HashMap;
//! use google_cloud_life_sciences::client::{ClientConfig, Client};
//! use google_cloud_life_sciences::http::pipelines::{Action, Pipeline, Resources};
//! use google_cloud_life_sciences::http::pipelines::run::RunPipelineRequest;
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!     let mut operation = client
//!         .pipelines()
//!         .run(&RunPipelineRequest {
//!             parent: "projects/my-project/locations/us-central1".to_string(),
//!             pipeline: Pipeline {
//!                 actions: vec![Action {
//!                     image_uri: "bash".to_string(),
//!                     commands: vec!["-c".to_string(), "echo hello".to_string()],
//!                     ..Default::default()
//!                 }],
//!                 resources: Some(Resources {
//!                     regions: vec!["us-central1".to_string()],
//!                     ..Default::default()
//!                 }),
//!                 ..Default::default()
//!             },
//!             ..Default::default()
//!         })
//!         .await
//!         .unwrap();
//!     // poll performs a single request. Waiting between polls is up to the caller.
//!     while operation.poll().await.unwrap().is_none() {
//!         tokio::time::sleep(std::time::Duration::from_secs(10)).await;
//!     }
//! }
//! ```
pub mod client;
pub mod http;
