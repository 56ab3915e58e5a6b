use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, pql_query: Option<&str>) -> RequestBuilder {
    let url = format!("{base_url}/proposals/search");
    let builder = client.get(url);
    match pql_query {
        Some(query) => builder.query(&[("pqlQuery", query)]),
        None => builder,
    }
}
