pub mod locations;
pub mod locations_client;
pub mod pipelines;
pub mod pipelines_client;

pub const ENDPOINT: &str = "https://lifesciences.googleapis.com/v2beta";

pub const USER_AGENT: &str = "google-cloud-life-sciences";

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];
