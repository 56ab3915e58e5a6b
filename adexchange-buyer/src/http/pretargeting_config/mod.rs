pub mod delete;
pub mod get;
pub mod insert;
pub mod list;
pub mod patch;

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PretargetingConfig {
    /// The id for billing purposes, provided for reference. Leave this field blank for insert requests; the id will be generated automatically.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub billing_id: Option<i64>,
    /// The config id; generated automatically. Leave this field blank for insert requests.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub config_id: Option<i64>,
    /// The name of the config. Must be unique. Required for all requests.
    pub config_name: Option<String>,
    /// List must contain exactly one of PRETARGETING_CREATIVE_TYPE_HTML or PRETARGETING_CREATIVE_TYPE_VIDEO.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creative_type: Vec<String>,
    /// Requests which allow one of these (width, height) pairs will match. All pairs must be supported ad dimensions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<PretargetingConfigDimension>,
    /// Requests with any of these content labels will not match. Values are from content-labels.txt in the downloadable files section.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub excluded_content_labels: Vec<i64>,
    /// Requests containing any of these geo criteria ids will not match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub excluded_geo_criteria_ids: Vec<i64>,
    /// Requests containing any of these placements will not match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_placements: Vec<PretargetingConfigPlacement>,
    /// Requests containing any of these users list ids will not match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub excluded_user_lists: Vec<i64>,
    /// Requests containing any of these vertical ids will not match. Values are from the publisher-verticals.txt file in the downloadable files section.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub excluded_verticals: Vec<i64>,
    /// Requests containing any of these geo criteria ids will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub geo_criteria_ids: Vec<i64>,
    /// Whether this config is active. Required for all requests.
    pub is_active: Option<bool>,
    /// The kind of the resource, i.e. "adexchangebuyer#pretargetingConfig".
    pub kind: Option<String>,
    /// Request containing any of these language codes will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    /// Requests where the predicted viewability is below the specified decile will not match.
    /// E.g. if the buyer sets this value to 5, requests from slots where the predicted viewability is below 50% will not match.
    /// If the predicted viewability is unknown this field will be ignored.
    pub minimum_viewability_decile: Option<i32>,
    /// Requests containing any of these mobile carrier ids will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub mobile_carriers: Vec<i64>,
    /// Requests containing any of these mobile device ids will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub mobile_devices: Vec<i64>,
    /// Requests containing any of these mobile operating system version ids will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub mobile_operating_system_versions: Vec<i64>,
    /// Requests containing any of these placements will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placements: Vec<PretargetingConfigPlacement>,
    /// Requests matching any of these platforms will match.
    /// Possible values are PRETARGETING_PLATFORM_MOBILE, PRETARGETING_PLATFORM_DESKTOP, and PRETARGETING_PLATFORM_TABLET.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    /// Creative attributes should be declared here if all creatives corresponding to this pretargeting configuration have that creative attribute.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub supported_creative_attributes: Vec<i64>,
    /// Requests containing the specified type of user data will match.
    /// Possible values are HOSTED_MATCH_DATA, which means the request is cookie-targetable and has a match in the buyer's hosted match table,
    /// and COOKIE_OR_IDFA, which means the request has either a targetable cookie or an iOS IDFA.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_identifier_data_required: Vec<String>,
    /// Requests containing any of these user list ids will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub user_lists: Vec<i64>,
    /// Requests that allow any of these vendor ids will match. Values are from vendors.txt in the downloadable files section.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub vendor_types: Vec<i64>,
    /// Requests containing any of these vertical ids will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub verticals: Vec<i64>,
    /// Video requests satisfying any of these player size constraints will match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_player_sizes: Vec<PretargetingConfigVideoPlayerSize>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PretargetingConfigDimension {
    /// Height in pixels.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub height: Option<i64>,
    /// Width in pixels.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub width: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PretargetingConfigPlacement {
    /// The value of the placement. Interpretation depends on the placement type, e.g. URL for a site placement, channel name for a channel placement, app id for a mobile app placement.
    pub token: Option<String>,
    /// The type of the placement.
    #[serde(rename = "type")]
    pub placement_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PretargetingConfigVideoPlayerSize {
    /// The type of aspect ratio. Leave this field blank to match all aspect ratios.
    pub aspect_ratio: Option<String>,
    /// The minimum player height in pixels. Leave this field blank to match any player height.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub min_height: Option<i64>,
    /// The minimum player width in pixels. Leave this field blank to match any player width.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub min_width: Option<i64>,
}

/// Body and location of `insert`, `patch` and `update`. `config_id` is ignored by `insert`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PretargetingConfigRequest {
    /// The account id to get the pretargeting config for.
    pub account_id: i64,
    /// The specific id of the configuration to update.
    pub config_id: i64,
    pub config: PretargetingConfig,
}

pub(crate) fn account_url(base_url: &str, account_id: i64) -> String {
    format!("{base_url}/pretargetingconfigs/{account_id}")
}

pub(crate) fn config_url(base_url: &str, account_id: i64, config_id: i64) -> String {
    format!("{}/{}", account_url(base_url, account_id), config_id)
}
