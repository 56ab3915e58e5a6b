use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, account_id: i64, billing_id: i64) -> RequestBuilder {
    let url = format!("{base_url}/billinginfo/{account_id}/{billing_id}");
    client.get(url)
}
