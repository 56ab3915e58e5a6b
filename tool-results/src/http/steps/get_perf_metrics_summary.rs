use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::steps::StepReference;

pub(crate) fn build(base_url: &str, client: &Client, step: &StepReference) -> RequestBuilder {
    let url = format!("{}/perfMetricsSummary", step.url(base_url));
    client.get(url)
}
