//! # google-cloud-adexchange-buyer
//!
//! Google Cloud Platform Ad Exchange Buyer API v1.4 client library.
//! Manages Authorized Buyers accounts, creatives, pretargeting configs and budgets,
//! and negotiates marketplace proposals, deals and notes.
//!
//! Most ids, revision numbers, budgets and millisecond timestamps are 64-bit integers that the
//! API carries as JSON strings. They are exposed as `i64` and converted on the wire.
//!
//! ## Quickstart
//!
//! ```
//! use google_cloud_adexchange_buyer::client::{ClientConfig, Client};
//! use google_cloud_adexchange_buyer::http::creatives::list::ListCreativesRequest;
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!     let accounts = client.accounts().list().await.unwrap();
//!     let account_ids = accounts.items.iter().filter_map(|a| a.id).collect();
//!     let creatives = client
//!         .creatives()
//!         .list(&ListCreativesRequest {
//!             account_id: account_ids,
//!             max_results: Some(100),
//!             ..Default::default()
//!         })
//!         .await
//!         .unwrap();
//!     for creative in creatives.items {
//!         println!("{:?} {:?}", creative.buyer_creative_id, creative.open_auction_status);
//!     }
//! }
//! ```
pub mod client;
pub mod http;
