use google_cloud_gax::Escape;

pub mod clusters;
pub mod clusters_client;
pub mod environments;
pub mod environments_client;
pub mod executions;
pub mod executions_client;
pub mod histories;
pub mod histories_client;
pub mod perf_metrics_summary;
pub mod perf_metrics_summary_client;
pub mod perf_sample_series;
pub mod perf_sample_series_client;
pub mod projects;
pub mod projects_client;
pub mod samples;
pub mod samples_client;
pub mod steps;
pub mod steps_client;
pub mod test_cases;
pub mod test_cases_client;
pub mod thumbnails;
pub mod thumbnails_client;
pub mod types;

pub const ENDPOINT: &str = "https://toolresults.googleapis.com/toolresults/v1beta3";

pub const USER_AGENT: &str = "google-cloud-tool-results";

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];

pub(crate) fn project_url(base_url: &str, project_id: &str) -> String {
    format!("{}/projects/{}", base_url, project_id.escape())
}

pub(crate) fn history_url(base_url: &str, project_id: &str, history_id: &str) -> String {
    format!("{}/histories/{}", project_url(base_url, project_id), history_id.escape())
}

pub(crate) fn execution_url(base_url: &str, project_id: &str, history_id: &str, execution_id: &str) -> String {
    format!(
        "{}/executions/{}",
        history_url(base_url, project_id, history_id),
        execution_id.escape()
    )
}

pub(crate) fn step_url(
    base_url: &str,
    project_id: &str,
    history_id: &str,
    execution_id: &str,
    step_id: &str,
) -> String {
    format!(
        "{}/steps/{}",
        execution_url(base_url, project_id, history_id, execution_id),
        step_id.escape()
    )
}

#[cfg(test)]
pub(crate) mod test {
    use httpmock::MockServer;

    use crate::client::{Client, ClientConfig};

    #[ctor::ctor]
    fn init() {
        let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
            .add_directive("google_cloud_tool_results=trace".parse().unwrap());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    pub fn create_client(server: &MockServer) -> Client {
        let config = ClientConfig {
            endpoint: server.url("/toolresults/v1beta3"),
            ..Default::default()
        };
        Client::new(config.anonymous())
    }

    #[test]
    fn test_step_url_escapes_ids() {
        let url = super::step_url("https://example.com/v1beta3", "my project", "bh.1", "e/1", "s1");
        assert_eq!(
            url,
            "https://example.com/v1beta3/projects/my%20project/histories/bh.1/executions/e%2F1/steps/s1"
        );
    }
}
