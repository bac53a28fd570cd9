//! Scripted OIDC authorization-code flow for end-to-end tests
//!
//! This crate drives the browser side of an OpenID Connect login without a
//! browser: it follows the redirects issued by the relying application and
//! the identity provider, submits the login and consent forms it lands on,
//! and checks that the final page reports an authenticated session.
//!
//! The step the flow is in is never tracked. It is recomputed from the URL
//! of the most recent response by [`classify::classify`].
//!
//! # Example
//!
//! ```rust,no_run
//! use login_bot_flow::config::WalkerConfig;
//! use login_bot_flow::types::Credentials;
//! use login_bot_flow::walker::FlowWalker;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = WalkerConfig::default();
//! let walker = FlowWalker::new(&config)?;
//! let credentials = Credentials::new("user@example.com", "hunter2");
//! let start_url = url::Url::parse("http://localhost:8082/login")?;
//!
//! let report = walker.walk(&credentials, &start_url).await?;
//! assert!(report.succeeded());
//! # Ok(())
//! # }
//! ```

/// Flow states, credentials and run reports
pub mod types;

/// URL to flow state classification
pub mod classify;

/// Login and consent form payloads
pub mod forms;

/// HTTP session with cookie store and redirect policy
pub mod session;

/// Success marker verification
pub mod verify;

/// Walker configuration
pub mod config;

/// Flow errors
pub mod error;

/// The redirect-following state walk
pub mod walker;
