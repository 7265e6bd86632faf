// Seeding sequence
//
// Fixed order, fail-fast: register user -> room -> slide -> pages -> scripts
// -> vote templates + options -> session -> three OTPs. Every step is one
// POST whose response id feeds the next request's path or payload.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use slidecast_client::{ApiClient, OtpRole, VoteOptionSpec};

use crate::content;
use crate::style;

/// Inputs for one seeding run
pub struct SeedConfig {
    pub username: String,
    pub password: String,
    pub room_name: String,
    pub slide_name: String,
    pub slide_summary: String,
    pub script_content: String,
    pub session_id: String,
    /// Wait before each OTP issuance; the platform needs the session to
    /// propagate before passcodes can be issued.
    pub otp_delay: Duration,
    /// Redeem each issued OTP and record the aggregator URL. Consumes the
    /// passcodes, so off by default.
    pub verify: bool,
    pub show_progress: bool,
}

/// Everything created during one seeding run
#[derive(Debug, Serialize)]
pub struct SeedSummary {
    pub username: String,
    pub room: CreatedResource,
    pub slide: CreatedResource,
    pub pages: Vec<CreatedResource>,
    pub votes: Vec<VoteSummary>,
    pub session_id: String,
    pub otps: OtpSet,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub verifications: Vec<VerifiedRole>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResource {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct VoteSummary {
    pub id: String,
    pub title: String,
    pub question: String,
    pub option_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OtpSet {
    pub agent: String,
    pub audience: String,
    pub presenter: String,
}

#[derive(Debug, Serialize)]
pub struct VerifiedRole {
    pub role: String,
    pub session_id: String,
    pub aggregator_url: String,
}

pub async fn run(client: &mut ApiClient, config: &SeedConfig) -> Result<SeedSummary> {
    if config.show_progress {
        println!("{}Initializing resources...{}", style::GREEN, style::RESET);
    }

    step(config, "Registering user...");
    let token = client
        .register(&config.username, &config.password)
        .await
        .context("registering user")?;
    client.set_token(token);

    step(config, "Creating room...");
    let room_id = client
        .create_room(&config.room_name)
        .await
        .context("creating room")?;

    step(config, "Creating slide...");
    let slide_id = client
        .create_slide(&room_id, &config.slide_name, &config.slide_summary)
        .await
        .context("creating slide")?;

    let mut pages = Vec::with_capacity(content::PAGE_CONTENTS.len());
    for (i, page_content) in content::PAGE_CONTENTS.iter().enumerate() {
        step(config, &format!("Creating page {}...", i + 1));
        let page_id = client
            .create_page(&room_id, &slide_id, page_content)
            .await
            .with_context(|| format!("creating page {}", i + 1))?;
        pages.push(CreatedResource {
            id: page_id,
            name: format!("Page {}", i + 1),
        });
    }

    for (i, page) in pages.iter().enumerate() {
        step(config, &format!("Creating script for page {}...", i + 1));
        client
            .create_script(&room_id, &slide_id, &page.id, &config.script_content)
            .await
            .with_context(|| format!("creating script for page {}", i + 1))?;
    }

    let mut votes = Vec::with_capacity(content::VOTES.len());
    for (i, vote) in content::VOTES.iter().enumerate() {
        step(config, &format!("Creating vote template for page {}...", i + 1));
        let template_id = client
            .create_vote_template(&room_id, &slide_id, vote.title, vote.question)
            .await
            .with_context(|| format!("creating vote template for page {}", i + 1))?;

        let mut option_ids = Vec::with_capacity(content::VOTE_OPTIONS.len());
        for (j, option) in content::VOTE_OPTIONS.iter().enumerate() {
            step(
                config,
                &format!("Creating vote option {} for vote template {}...", j + 1, i + 1),
            );
            let spec = VoteOptionSpec {
                title: option.title.to_string(),
                description: option.description.to_string(),
                ..Default::default()
            };
            let option_id = client
                .create_vote_option(&room_id, &slide_id, &template_id, &spec)
                .await
                .with_context(|| {
                    format!("creating vote option {} for vote template {}", j + 1, i + 1)
                })?;
            option_ids.push(option_id);
        }

        votes.push(VoteSummary {
            id: template_id,
            title: vote.title.to_string(),
            question: vote.question.to_string(),
            option_ids,
        });
    }

    step(config, "Starting session...");
    let session_id = client
        .start_session(&room_id, &slide_id, &config.session_id)
        .await
        .context("starting session")?;

    let agent =
        issue_otp(client, config, &room_id, &slide_id, &session_id, OtpRole::Agent).await?;
    let audience =
        issue_otp(client, config, &room_id, &slide_id, &session_id, OtpRole::Audience).await?;
    let presenter =
        issue_otp(client, config, &room_id, &slide_id, &session_id, OtpRole::Presenter).await?;

    let otps = OtpSet {
        agent,
        audience,
        presenter,
    };

    let mut verifications = Vec::new();
    if config.verify {
        let issued = [
            (OtpRole::Agent, otps.agent.as_str()),
            (OtpRole::Audience, otps.audience.as_str()),
            (OtpRole::Presenter, otps.presenter.as_str()),
        ];
        for (role, otp) in issued {
            step(config, &format!("Verifying {} OTP...", role));
            let verified = client
                .verify_otp(role, otp)
                .await
                .with_context(|| format!("verifying {} OTP", role))?;
            verifications.push(VerifiedRole {
                role: role.to_string(),
                session_id: verified.session_id,
                aggregator_url: verified.aggregator_url,
            });
        }
    }

    Ok(SeedSummary {
        username: config.username.clone(),
        room: CreatedResource {
            id: room_id,
            name: config.room_name.clone(),
        },
        slide: CreatedResource {
            id: slide_id,
            name: config.slide_name.clone(),
        },
        pages,
        votes,
        session_id,
        otps,
        verifications,
    })
}

async fn issue_otp(
    client: &ApiClient,
    config: &SeedConfig,
    room_id: &str,
    slide_id: &str,
    session_id: &str,
    role: OtpRole,
) -> Result<String> {
    step(config, &format!("Issuing {} OTP...", role));
    tokio::time::sleep(config.otp_delay).await;
    client
        .issue_otp(room_id, slide_id, session_id, role)
        .await
        .with_context(|| format!("issuing {} OTP", role))
}

fn step(config: &SeedConfig, message: &str) {
    if config.show_progress {
        println!("{}{}{}", style::YELLOW, message, style::RESET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> SeedConfig {
        SeedConfig {
            username: "alice".to_string(),
            password: "secret".to_string(),
            room_name: "demo-room".to_string(),
            slide_name: "demo-slide".to_string(),
            slide_summary: "A slide".to_string(),
            script_content: "Say hello".to_string(),
            session_id: "demo-session".to_string(),
            otp_delay: Duration::ZERO,
            verify: false,
            show_progress: false,
        }
    }

    async fn mount_register(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/auth/username/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
            .expect(1)
            .mount(server)
            .await;
    }

    /// Mounts one-shot mocks so consecutive calls to the same endpoint get
    /// distinct ids, in order.
    async fn mount_sequence(server: &MockServer, endpoint: &str, key: &str, ids: &[&str]) {
        for id in ids {
            Mock::given(method("POST"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ key: id })))
                .up_to_n_times(1)
                .mount(server)
                .await;
        }
    }

    async fn mount_happy_path(server: &MockServer) {
        mount_register(server).await;

        Mock::given(method("POST"))
            .and(path("/room/create"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"roomId": "r1"})))
            .expect(1)
            .mount(server)
            .await;

        Mock::given(method("POST"))
            .and(path("/room/r1/slide/create"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"slideId": "s1"})))
            .expect(1)
            .mount(server)
            .await;

        mount_sequence(
            server,
            "/room/r1/slide/s1/page/create",
            "pageId",
            &["p1", "p2", "p3"],
        )
        .await;

        for page in ["p1", "p2", "p3"] {
            Mock::given(method("POST"))
                .and(path(format!(
                    "/room/r1/slide/s1/page/{}/script/create",
                    page
                )))
                .and(body_json(json!({"scriptContent": "Say hello"})))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                .expect(1)
                .mount(server)
                .await;
        }

        mount_sequence(
            server,
            "/room/r1/slide/s1/vote/create",
            "id",
            &["vt1", "vt2", "vt3"],
        )
        .await;

        for (template, option_ids) in [
            ("vt1", ["vt1-a", "vt1-b", "vt1-c"]),
            ("vt2", ["vt2-a", "vt2-b", "vt2-c"]),
            ("vt3", ["vt3-a", "vt3-b", "vt3-c"]),
        ] {
            mount_sequence(
                server,
                &format!("/room/r1/slide/s1/vote/{}/option/create", template),
                "id",
                &option_ids,
            )
            .await;
        }

        Mock::given(method("POST"))
            .and(path("/room/r1/slide/s1/session/create"))
            .and(body_json(json!({"sessionId": "demo-session"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "sess-1"})),
            )
            .expect(1)
            .mount(server)
            .await;

        for (role, otp) in [
            ("agent", "111111"),
            ("audience", "222222"),
            ("presenter", "333333"),
        ] {
            Mock::given(method("POST"))
                .and(path(format!(
                    "/room/r1/slide/s1/session/sess-1/{}/issue",
                    role
                )))
                .and(header("Authorization", "Bearer tok-1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"otp": otp})))
                .expect(1)
                .mount(server)
                .await;
        }
    }

    #[tokio::test]
    async fn seeds_every_resource_in_order() {
        let server = MockServer::start().await;
        mount_happy_path(&server).await;

        let mut client = ApiClient::new(&server.uri());
        let summary = run(&mut client, &test_config()).await.unwrap();

        assert_eq!(summary.username, "alice");
        assert_eq!(summary.room.id, "r1");
        assert_eq!(summary.slide.id, "s1");
        assert_eq!(
            summary.pages.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["p1", "p2", "p3"]
        );
        assert_eq!(
            summary.votes.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
            ["vt1", "vt2", "vt3"]
        );
        assert_eq!(summary.votes[0].option_ids, ["vt1-a", "vt1-b", "vt1-c"]);
        assert_eq!(summary.votes[2].option_ids, ["vt3-a", "vt3-b", "vt3-c"]);
        assert_eq!(summary.session_id, "sess-1");
        assert_eq!(summary.otps.agent, "111111");
        assert_eq!(summary.otps.audience, "222222");
        assert_eq!(summary.otps.presenter, "333333");
        assert!(summary.verifications.is_empty());
    }

    #[tokio::test]
    async fn failed_step_halts_before_later_steps_fire() {
        let server = MockServer::start().await;
        mount_register(&server).await;

        Mock::given(method("POST"))
            .and(path("/room/create"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        // Nothing below the failed step may be reached
        Mock::given(method("POST"))
            .and(path_regex(r"^/room/.+/slide"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let mut client = ApiClient::new(&server.uri());
        let err = run(&mut client, &test_config()).await.unwrap_err();
        assert!(err.to_string().contains("creating room"));
    }

    #[tokio::test]
    async fn verify_flag_redeems_each_otp() {
        let server = MockServer::start().await;
        mount_happy_path(&server).await;

        for (role, otp) in [
            ("agent", "111111"),
            ("audience", "222222"),
            ("presenter", "333333"),
        ] {
            Mock::given(method("POST"))
                .and(path(format!("/session/{}/verify", role)))
                .and(body_json(json!({"otp": otp})))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "sessionId": "sess-1",
                    "token": format!("{}-token", role),
                    "aggregatorUrl": format!("ws://aggregator.local/{}", role),
                })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let mut config = test_config();
        config.verify = true;

        let mut client = ApiClient::new(&server.uri());
        let summary = run(&mut client, &config).await.unwrap();

        assert_eq!(summary.verifications.len(), 3);
        assert_eq!(summary.verifications[0].role, "agent");
        assert_eq!(
            summary.verifications[2].aggregator_url,
            "ws://aggregator.local/presenter"
        );
    }
}
