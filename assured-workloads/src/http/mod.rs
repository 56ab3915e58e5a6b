pub mod violations;
pub mod violations_client;
pub mod workloads;
pub mod workloads_client;

pub const ENDPOINT: &str = "https://assuredworkloads.googleapis.com/v1";

pub const USER_AGENT: &str = "google-cloud-assured-workloads";

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];
