pub mod accounts;
pub mod accounts_client;
pub mod billing_info;
pub mod billing_info_client;
pub mod budget;
pub mod budget_client;
pub mod creatives;
pub mod creatives_client;
pub mod marketplace_deals;
pub mod marketplace_deals_client;
pub mod marketplace_notes;
pub mod marketplace_notes_client;
pub mod marketplace_private_auction;
pub mod marketplace_private_auction_client;
pub mod performance_report;
pub mod performance_report_client;
pub mod pretargeting_config;
pub mod pretargeting_config_client;
pub mod products;
pub mod products_client;
pub mod proposals;
pub mod proposals_client;
pub mod publisher_profiles;
pub mod publisher_profiles_client;
pub mod types;

pub const ENDPOINT: &str = "https://www.googleapis.com/adexchangebuyer/v1.4";

pub const USER_AGENT: &str = "google-cloud-adexchange-buyer";

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/adexchange.buyer"];
