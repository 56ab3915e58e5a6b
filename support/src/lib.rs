//! # google-cloud-support
//!
//! Google Cloud Platform Cloud Support API v2 client library.
//! Manages Google Cloud technical support cases for Customer Care support offerings.
//!
//! ## Quickstart
//!
//! ```
//! use google_cloud_support::client::{ClientConfig, Client};
//! use google_cloud_support::http::cases::{Case, CaseClassification, Priority};
//! use google_cloud_support::http::cases::create::CreateCaseRequest;
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!     let case = client
//!         .cases()
//!         .create(&CreateCaseRequest {
//!             parent: "projects/my-project".to_string(),
//!             case: Case {
//!                 display_name: Some("VM does not boot".to_string()),
//!                 classification: Some(CaseClassification {
//!                     id: Some("100H41Q3DTMN0TBKCKD0SGRVNO0".to_string()),
//!                     ..Default::default()
//!                 }),
//!                 priority: Some(Priority::P2),
//!                 ..Default::default()
//!             },
//!         })
//!         .await
//!         .unwrap();
//!     let attachment = client
//!         .media()
//!         .upload_media(case.name.as_deref().unwrap(), "log.txt", "text/plain", b"boot log".to_vec())
//!         .await
//!         .unwrap();
//! }
//! ```
pub mod client;
pub mod http;
