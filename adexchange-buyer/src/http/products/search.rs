use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::products::Product;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetOffersResponse {
    /// The returned list of products.
    #[serde(default)]
    pub products: Vec<Product>,
}

pub(crate) fn build(base_url: &str, client: &Client, pql_query: Option<&str>) -> RequestBuilder {
    let url = format!("{base_url}/products/search");
    let builder = client.get(url);
    match pql_query {
        Some(query) => builder.query(&[("pqlQuery", query)]),
        None => builder,
    }
}
