pub mod list;

use crate::http::types::{PublisherProvidedForecast, Seller};

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublisherProfile {
    /// Publisher provided info on its audience.
    pub audience: Option<String>,
    /// A pitch statement for the buyer
    pub buyer_pitch_statement: Option<String>,
    /// Direct contact for the publisher profile.
    pub direct_contact: Option<String>,
    /// Exchange where this publisher profile is from. E.g. AdX, Rubicon etc...
    pub exchange: Option<String>,
    /// Link to publisher's Google+ page.
    pub google_plus_link: Option<String>,
    /// True, if this is the parent profile, which represents all domains owned by the publisher.
    pub is_parent: Option<bool>,
    /// True, if this profile is published. Deprecated for state.
    pub is_published: Option<bool>,
    /// Identifies what kind of resource this is. Value: the fixed string "adexchangebuyer#publisherProfileApiProto".
    pub kind: Option<String>,
    /// The url to the logo for the publisher.
    pub logo_url: Option<String>,
    /// The url for additional marketing and sales materials.
    pub media_kit_link: Option<String>,
    pub name: Option<String>,
    /// Publisher provided overview.
    pub overview: Option<String>,
    /// The pair of (seller.account_id, profile_id) uniquely identifies a publisher profile for a given publisher.
    pub profile_id: Option<i32>,
    /// Programmatic contact for the publisher profile.
    pub programmatic_contact: Option<String>,
    /// The list of domains represented in this publisher profile. Empty if this is a parent profile.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publisher_domains: Vec<String>,
    /// Unique Id for publisher profile.
    pub publisher_profile_id: Option<String>,
    /// Publisher provided forecasting information.
    pub publisher_provided_forecast: Option<PublisherProvidedForecast>,
    /// Link to publisher rate card
    pub rate_card_info_link: Option<String>,
    /// Link for a sample content page.
    pub sample_page_link: Option<String>,
    /// Seller of the publisher profile.
    pub seller: Option<Seller>,
    /// State of the publisher profile.
    pub state: Option<String>,
    /// Publisher provided key metrics and rankings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_headlines: Vec<String>,
}
