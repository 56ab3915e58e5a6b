use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::marketplace_notes::MarketplaceNotes;

pub(crate) fn build(base_url: &str, client: &Client, proposal_id: &str, notes: &MarketplaceNotes) -> RequestBuilder {
    let url = format!("{}/proposals/{}/notes/insert", base_url, proposal_id.escape());
    client.post(url).json(notes)
}
