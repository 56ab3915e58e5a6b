pub mod attachments;
pub mod attachments_client;
pub mod case_classifications;
pub mod case_classifications_client;
pub mod cases;
pub mod cases_client;
pub mod comments;
pub mod comments_client;
pub mod media;
pub mod media_client;

pub const ENDPOINT: &str = "https://cloudsupport.googleapis.com/v2";

pub const USER_AGENT: &str = "google-cloud-support";

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];
