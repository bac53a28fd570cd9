//! Login bot: drives an OIDC login and consent flow end-to-end

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use login_bot_flow::config::WalkerConfig;
use login_bot_flow::types::Credentials;
use login_bot_flow::walker::FlowWalker;
use std::process::ExitCode;
use url::Url;

#[derive(Parser, Debug)]
#[clap(name = "login-bot")]
#[clap(about = "Log in through an OIDC provider and check the application accepts the session", version)]
struct Cli {
    /// Email of the user to log in as
    email: String,

    /// Password of the user
    password: String,

    /// URL the flow starts from (default: http://localhost:8082/login)
    start_url: Option<Url>,

    /// Trailing arguments are accepted and ignored
    #[clap(hide = true)]
    _rest: Vec<String>,
}

fn init_logging() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Cli) -> Result<ExitCode> {
    let config = WalkerConfig::from_env()?;
    let start_url = match args.start_url {
        Some(url) => url,
        None => Url::parse(&config.default_start_url)
            .with_context(|| format!("parsing default start url {}", config.default_start_url))?,
    };
    let walker = FlowWalker::new(&config)?;
    let credentials = Credentials::new(args.email, args.password);

    report::print_start(&start_url);
    let flow_report = walker.walk(&credentials, &start_url).await?;
    report::print_report(&flow_report);

    if flow_report.succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            println!("ERROR: {e:?}");
            ExitCode::FAILURE
        }
    }
}
