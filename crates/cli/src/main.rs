// Slidecast demo-data seeder
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: Progress lines and the summary table are product output
// and go to stdout; tracing (RUST_LOG) is for diagnostics only.

mod content;
mod report;
mod seed;
mod style;

use std::time::Duration;

use clap::Parser;
use slidecast_client::ApiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "slidecast-seed")]
#[command(about = "Seed a Slidecast deployment with a demo room, slide, votes, and session")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "SLIDECAST_API_URL",
        default_value = "http://localhost:8080"
    )]
    pub base_url: String,

    /// Username to register
    #[arg(long, default_value = "test")]
    pub username: String,

    /// Password for the registered user
    #[arg(long, default_value = "test")]
    pub password: String,

    /// Display name of the room
    #[arg(long, default_value = "test-room")]
    pub room: String,

    /// Display name of the slide
    #[arg(long, default_value = "test-slide")]
    pub slide: String,

    /// Slide summary
    #[arg(long, default_value = "This is a test slide")]
    pub summary: String,

    /// Script content attached to every page
    #[arg(long, default_value = "This is a test script")]
    pub script: String,

    /// Client-chosen session id
    #[arg(long, default_value = "test-session")]
    pub session_id: String,

    /// Seconds to wait before each OTP issuance
    #[arg(long, default_value = "2")]
    pub otp_delay_secs: u64,

    /// Redeem each issued OTP and report the aggregator URL (consumes the passcodes)
    #[arg(long)]
    pub verify: bool,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    /// Suppress progress output
    #[arg(long, short)]
    pub quiet: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slidecast_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let output = report::OutputFormat::from_str(&cli.output);

    let config = seed::SeedConfig {
        username: cli.username,
        password: cli.password,
        room_name: cli.room,
        slide_name: cli.slide,
        slide_summary: cli.summary,
        script_content: cli.script,
        session_id: cli.session_id,
        otp_delay: Duration::from_secs(cli.otp_delay_secs),
        verify: cli.verify,
        show_progress: !cli.quiet && output.is_text(),
    };

    let mut client = ApiClient::new(&cli.base_url);
    match seed::run(&mut client, &config).await {
        Ok(summary) => report::print_summary(&summary, output, cli.quiet),
        Err(err) => {
            eprintln!("{}Error: {:#}{}", style::RED, err, style::RESET);
            std::process::exit(1);
        }
    }
}
