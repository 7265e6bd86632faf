// HTTP client wrapper for the Slidecast platform API

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ClientError, Result};
use crate::types::*;

/// Role a one-time passcode is issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpRole {
    Agent,
    Audience,
    Presenter,
}

impl OtpRole {
    /// Path segment used by the issue and verify endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpRole::Agent => "agent",
            OtpRole::Audience => "audience",
            OtpRole::Presenter => "presenter",
        }
    }
}

impl std::fmt::Display for OtpRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Install the bearer token attached to every subsequent request
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a user and return the bearer token. The only
    /// unauthenticated call.
    pub async fn register(&self, username: &str, password: &str) -> Result<String> {
        let request = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: RegisterResponse = self.post("/auth/username/register", Some(&request)).await?;
        Ok(response.token)
    }

    pub async fn create_room(&self, display_name: &str) -> Result<String> {
        let request = CreateRoomRequest {
            display_name: display_name.to_string(),
        };
        let response: RoomCreated = self.post("/room/create", Some(&request)).await?;
        Ok(response.room_id)
    }

    pub async fn create_slide(
        &self,
        room_id: &str,
        display_name: &str,
        summary: &str,
    ) -> Result<String> {
        let request = CreateSlideRequest {
            display_name: display_name.to_string(),
            summary: summary.to_string(),
        };
        let response: SlideCreated = self
            .post(&format!("/room/{}/slide/create", room_id), Some(&request))
            .await?;
        Ok(response.slide_id)
    }

    pub async fn create_page(&self, room_id: &str, slide_id: &str, content: &str) -> Result<String> {
        let request = CreatePageRequest {
            content: content.to_string(),
        };
        let response: PageCreated = self
            .post(
                &format!("/room/{}/slide/{}/page/create", room_id, slide_id),
                Some(&request),
            )
            .await?;
        Ok(response.page_id)
    }

    /// Attach presenter-script content to a page. The response carries no id
    /// the caller needs, so the body is discarded.
    pub async fn create_script(
        &self,
        room_id: &str,
        slide_id: &str,
        page_id: &str,
        script_content: &str,
    ) -> Result<()> {
        let request = CreateScriptRequest {
            script_content: script_content.to_string(),
        };
        let _: serde_json::Value = self
            .post(
                &format!(
                    "/room/{}/slide/{}/page/{}/script/create",
                    room_id, slide_id, page_id
                ),
                Some(&request),
            )
            .await?;
        Ok(())
    }

    pub async fn create_vote_template(
        &self,
        room_id: &str,
        slide_id: &str,
        title: &str,
        question: &str,
    ) -> Result<String> {
        let request = CreateVoteTemplateRequest {
            slide_id: slide_id.to_string(),
            index: None,
            title: title.to_string(),
            question: question.to_string(),
        };
        let response: VoteTemplateCreated = self
            .post(
                &format!("/room/{}/slide/{}/vote/create", room_id, slide_id),
                Some(&request),
            )
            .await?;
        Ok(response.id)
    }

    pub async fn create_vote_option(
        &self,
        room_id: &str,
        slide_id: &str,
        template_id: &str,
        option: &VoteOptionSpec,
    ) -> Result<String> {
        let request = CreateVoteOptionRequest {
            template_id: template_id.to_string(),
            index: None,
            title: option.title.clone(),
            description: option.description.clone(),
            background_color: option.background_color.clone(),
            border_color: option.border_color.clone(),
        };
        let response: VoteOptionCreated = self
            .post(
                &format!(
                    "/room/{}/slide/{}/vote/{}/option/create",
                    room_id, slide_id, template_id
                ),
                Some(&request),
            )
            .await?;
        Ok(response.id)
    }

    /// Start a presentation session. The session id is client-chosen; the
    /// response echoes the id the platform actually registered.
    pub async fn start_session(
        &self,
        room_id: &str,
        slide_id: &str,
        session_id: &str,
    ) -> Result<String> {
        let request = StartSessionRequest {
            session_id: session_id.to_string(),
        };
        let response: SessionStarted = self
            .post(
                &format!("/room/{}/slide/{}/session/create", room_id, slide_id),
                Some(&request),
            )
            .await?;
        Ok(response.session_id)
    }

    /// Issue a one-time passcode for the given role. No request body.
    pub async fn issue_otp(
        &self,
        room_id: &str,
        slide_id: &str,
        session_id: &str,
        role: OtpRole,
    ) -> Result<String> {
        let response: OtpIssued = self
            .post_empty(&format!(
                "/room/{}/slide/{}/session/{}/{}/issue",
                room_id,
                slide_id,
                session_id,
                role.as_str()
            ))
            .await?;
        Ok(response.otp)
    }

    /// Redeem a one-time passcode. Consumes the passcode on the platform
    /// side; a second redemption fails.
    pub async fn verify_otp(&self, role: OtpRole, otp: &str) -> Result<OtpVerified> {
        let request = VerifyOtpRequest {
            otp: otp.to_string(),
        };
        self.post(
            &format!("/session/{}/verify", role.as_str()),
            Some(&request),
        )
        .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, authenticated = self.token.is_some(), "POST");

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.post::<T, ()>(path, None).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json().await?;
        Ok(body)
    }
}
