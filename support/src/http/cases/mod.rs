use time::OffsetDateTime;

pub mod close;
pub mod create;
pub mod escalate;
pub mod get;
pub mod list;
pub mod patch;
pub mod search;

/// A support case.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// The resource name for the case.
    pub name: Option<String>,
    /// The short summary of the issue reported in this case.
    pub display_name: Option<String>,
    /// A broad description of the issue.
    pub description: Option<String>,
    /// The issue classification applicable to this case.
    pub classification: Option<CaseClassification>,
    /// The timezone of the user who created the support case.
    /// It should be in a format IANA recognizes: https://www.iana.org/time-zones.
    /// There is no additional validation done by the API.
    pub time_zone: Option<String>,
    /// The email addresses to receive updates on this case.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscriber_email_addresses: Vec<String>,
    /// Output only. The current status of the support case.
    pub state: Option<State>,
    /// Output only. The time this case was created.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    /// Output only. The time this case was last updated.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub update_time: Option<OffsetDateTime>,
    /// The user who created the case.
    /// Note: The name and email will be obfuscated if the case was created by Google Support.
    pub creator: Option<Actor>,
    /// A user-supplied email address to send case update notifications for.
    /// This should only be used in BYOID flows, where we cannot infer the user's email address directly from their EUCs.
    pub contact_email: Option<String>,
    /// Whether the case is currently escalated.
    pub escalated: Option<bool>,
    /// Whether this case was created for internal API testing and should not be acted on by the support team.
    pub test_case: Option<bool>,
    /// The language the user has requested to receive support in.
    /// This should be a BCP 47 language code (e.g., `"en"`, `"zh-CN"`, `"zh-TW"`, `"ja"`, `"ko"`).
    /// If no language or an unsupported language is specified, this field defaults to English (en).
    pub language_code: Option<String>,
    /// The priority of this case.
    pub priority: Option<Priority>,
}

/// The status of a support case.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    /// The case has been created but no one is assigned to work on it yet.
    New,
    /// The case is currently being handled by Google support.
    InProgressGoogleSupport,
    /// Google is waiting for a response.
    ActionRequired,
    /// A solution has been offered for the case, but it isn't yet closed.
    SolutionProvided,
    /// The case has been resolved.
    Closed,
    /// Case is in an unknown state.
    #[default]
    #[serde(other)]
    StateUnspecified,
}

/// The case Priority. P0 is most urgent and P4 the least.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Extreme impact on a production service. Service is hard down.
    P0,
    /// Critical impact on a production service. Service is currently unusable.
    P1,
    /// Severe impact on a production service. Service is usable but greatly impaired.
    P2,
    /// Medium impact on a production service. Service is available, but moderately impaired.
    P3,
    /// General questions or minor issues. Production service is fully available.
    P4,
    /// Priority is undefined or has not been set yet.
    #[default]
    #[serde(other)]
    PriorityUnspecified,
}

/// A Case Classification represents the topic that a case is about.
/// It's very important to use accurate classifications, because they're used to route your cases to specialists who can help you.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CaseClassification {
    /// The unique ID for a classification. Must be specified for case creation.
    /// To retrieve valid classification IDs for case creation, use `caseClassifications.search`.
    /// Classification IDs returned by `caseClassifications.search` are guaranteed to be valid for at least 6 months.
    pub id: Option<String>,
    /// A display name for the classification.
    /// The display name is not static and can change.
    /// To uniquely and consistently identify classifications, use the `CaseClassification.id` field.
    pub display_name: Option<String>,
}

/// An Actor represents an entity that performed an action.
/// For example, an actor could be a user who posted a comment on a support case, a user who uploaded an attachment, or a service account that created a support case.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// The name to display for the actor. If not provided, it is inferred from credentials supplied during case creation.
    /// When an email is provided, a display name must also be provided.
    /// This will be obfuscated if the user is a Google Support agent.
    pub display_name: Option<String>,
    /// The email address of the actor. If not provided, it is inferred from the credentials supplied during case creation.
    /// When a name is provided, an email must also be provided.
    /// If the user is a Google Support agent, this is obfuscated.
    pub email: Option<String>,
    /// Output only. Whether the actor is a Google support actor.
    pub google_support: Option<bool>,
    /// Output only. The username of the actor. It may look like an email or other format provided by the identity provider.
    /// If not provided, it is inferred from the credentials supplied.
    /// When a name is provided, a username must also be provided.
    /// If the user is a Google Support agent, this will not be set.
    pub username: Option<String>,
}

/// An escalation of a support case.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Escalation {
    /// Required. The reason why the Case is being escalated.
    pub reason: Option<Reason>,
    /// Required. A free text description to accompany the `reason` field above.
    /// Provides additional context on why the case is being escalated.
    pub justification: Option<String>,
}

/// An enum detailing the possible reasons a case may be escalated.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// The case is taking too long to resolve.
    ResolutionTime,
    /// The support agent does not have the expertise required to successfully resolve the issue.
    TechnicalExpertise,
    /// The issue is having a significant business impact.
    BusinessImpact,
    /// The escalation reason is in an unknown state or has not been specified.
    #[default]
    #[serde(other)]
    ReasonUnspecified,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::cases::{Case, Priority, State};

    #[test]
    fn test_case_wire_format() {
        let case: Case = serde_json::from_value(json!({
            "name": "projects/p/cases/123",
            "displayName": "Disk full",
            "state": "IN_PROGRESS_GOOGLE_SUPPORT",
            "priority": "P1",
            "createTime": "2024-04-01T09:00:00Z",
            "subscriberEmailAddresses": ["ops@example.com"],
            "creator": {"displayName": "Ops", "email": "ops@example.com", "googleSupport": false}
        }))
        .unwrap();
        assert_eq!(case.state, Some(State::InProgressGoogleSupport));
        assert_eq!(case.priority, Some(Priority::P1));
        assert_eq!(case.creator.as_ref().unwrap().google_support, Some(false));

        let value = serde_json::to_value(&case).unwrap();
        assert_eq!(value["createTime"], json!("2024-04-01T09:00:00Z"));
        assert_eq!(value["priority"], json!("P1"));
        assert!(value.get("description").is_none());
    }
}
