use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::pretargeting_config::{account_url, PretargetingConfig};

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PretargetingConfigList {
    /// A list of pretargeting configs
    #[serde(default)]
    pub items: Vec<PretargetingConfig>,
    /// Resource type.
    pub kind: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, account_id: i64) -> RequestBuilder {
    client.get(account_url(base_url, account_id))
}
