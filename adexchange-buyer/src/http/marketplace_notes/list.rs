use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, proposal_id: &str, pql_query: Option<&str>) -> RequestBuilder {
    let url = format!("{}/proposals/{}/notes", base_url, proposal_id.escape());
    let builder = client.get(url);
    match pql_query {
        Some(query) => builder.query(&[("pqlQuery", query)]),
        None => builder,
    }
}
