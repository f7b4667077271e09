//! Password strength analysis with k-anonymity breach lookup
//!
//! This library scores the strength of a password (character classes,
//! entropy, brute-force crack time, weak-word dictionary) and checks it
//! against a breach corpus without ever sending the password, or its full
//! digest, over the network.
//!
//! # Features
//!
//! - `server` (default): Enables the HTTP API layer and the
//!   `passguard-server` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PASSGUARD_WORDLIST_PATH`: Custom path to the weak-word list file
//!   (default: `./assets/weak-words.txt`; built-in list used until loaded)
//! - `PASSGUARD_CONFIG_PATH`: Custom path to the server config file
//!   (default: `./passguard.toml`)
//!
//! # Example
//!
//! ```rust,no_run
//! use passguard::{BreachChecker, analyze_password, init_wordlist};
//! use secrecy::SecretString;
//!
//! # async fn demo() {
//! // Optionally load a larger weak-word list (built-ins apply otherwise)
//! let _ = init_wordlist();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let checker = BreachChecker::new();
//!
//! let report = analyze_password(&password, &checker, None).await;
//!
//! println!("Strength: {:?}", report.strength);
//! println!("Entropy: {:.2} bits", report.entropy);
//! # }
//! ```

// Internal modules
mod analyze;
mod breach;
mod classifier;
mod metrics;
mod report;
mod wordlist;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

// Public API
pub use analyze::{analyze_password, analyze_password_tx, merge_report, strength_tier};
pub use breach::{BreachChecker, BreachError};
pub use classifier::classify;
pub use report::{AnalysisReport, BreachStatus, Classification, Strength};
pub use wordlist::{WordlistError, contains_weak_word, init_wordlist, init_wordlist_from_path};

/// Installs the global tracing subscriber for the server binary.
#[cfg(feature = "server")]
pub fn setup_logger() -> eyre::Result<()> {
    use eyre::WrapErr;
    use tracing::metadata::LevelFilter;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::from_default_env()
        // Set the base level when not matched by other directives to WARN.
        .add_directive(LevelFilter::WARN.into())
        .add_directive("passguard=debug".parse()?);

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}
