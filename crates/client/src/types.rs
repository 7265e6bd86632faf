// Wire types for the Slidecast platform API
//
// Field names are camelCase on the wire. The platform issues CUID-style ids,
// so identifiers are opaque strings throughout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreated {
    pub room_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlideRequest {
    pub display_name: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideCreated {
    pub slide_id: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePageRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCreated {
    pub page_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScriptRequest {
    pub script_content: String,
}

/// The template payload carries the slide id even though it also appears in
/// the request path; the platform expects both.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoteTemplateRequest {
    pub slide_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    pub title: String,
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct VoteTemplateCreated {
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoteOptionRequest {
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VoteOptionCreated {
    pub id: String,
}

/// Display fields for a vote option
#[derive(Debug, Clone, Default)]
pub struct VoteOptionSpec {
    pub title: String,
    pub description: String,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStarted {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct OtpIssued {
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpRequest {
    pub otp: String,
}

/// Returned when a one-time passcode is redeemed: the session it belongs to,
/// a role-scoped token, and the aggregator endpoint to join with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerified {
    pub session_id: String,
    pub token: String,
    pub aggregator_url: String,
}
