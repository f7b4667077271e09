//! HTTP surface: the analysis endpoint plus a health probe.
//!
//! Thin transport wrapper over [`crate::analyze_password`]; the password
//! arrives as a request parameter and the report is rendered as JSON.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use warp::Filter;

use crate::analyze::analyze_password;
use crate::breach::BreachChecker;
use crate::config::ApiConfig;

#[derive(Deserialize)]
struct AnalyzeQuery {
    password: String,
}

#[derive(Serialize)]
struct Health {
    message: &'static str,
}

/// Binds the configured address and serves until the process exits.
pub async fn run(config: ApiConfig) -> eyre::Result<()> {
    let checker = BreachChecker::new();
    let filter = routes(checker, &config);

    let (addr, server) = warp::serve(filter).try_bind_ephemeral(config.listen_addr)?;
    tracing::info!("listening on {}", addr);
    server.await;

    Ok(())
}

fn routes(
    checker: BreachChecker,
    config: &ApiConfig,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    health().or(analyze(checker)).with(cors(config))
}

fn health() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::get().and(warp::path::end()).map(|| {
        warp::reply::json(&Health {
            message: "passguard service running",
        })
    })
}

fn analyze(
    checker: BreachChecker,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path("analyze-password"))
        .and(warp::path::end())
        .and(warp::query::<AnalyzeQuery>())
        .and_then(move |query: AnalyzeQuery| {
            let checker = checker.clone();
            async move {
                let password = SecretString::new(query.password.into());
                let report = analyze_password(&password, &checker, None).await;
                Ok::<_, warp::Rejection>(warp::reply::json(&report))
            }
        })
}

fn cors(config: &ApiConfig) -> warp::filters::cors::Builder {
    let mut cors = warp::cors()
        .allow_methods(vec!["GET", "POST"])
        .allow_header("content-type")
        .allow_credentials(true);
    for origin in &config.allowed_origins {
        cors = cors.allow_origin(origin.as_str());
    }
    cors
}
