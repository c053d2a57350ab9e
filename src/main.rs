use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_client::config::ClientConfig;
use portfolio_client::content::adapter::outgoing::{HttpContentSource, SampleContentSource};
use portfolio_client::content::application::service::ContentService;
use portfolio_client::session::adapter::outgoing::FileSessionStore;
use portfolio_client::session::application::ports::outgoing::SessionStore;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    info!(api_base = %config.api_base, mode = ?config.mode, "starting portfolio client");

    let session = FileSessionStore::open_default()?;
    info!(
        authenticated = session.is_authenticated().unwrap_or(false),
        "session loaded"
    );

    let content = ContentService::new(
        HttpContentSource::new(&config),
        SampleContentSource::new(),
        &config,
    );

    let case_studies = content.get_case_studies(true).await?;
    println!("Featured case studies ({}):", case_studies.len());
    for cs in &case_studies {
        println!("  {} [{}]", cs.title, cs.slug);
    }

    let now = Utc::now();
    let sessions = content.get_mentorship_sessions(false).await?;
    println!("Mentorship sessions ({}):", sessions.len());
    for s in &sessions {
        let offer = if s.has_active_offer(now) { " (offer)" } else { "" };
        println!(
            "  {} [{}] {:.0} {}{}",
            s.title,
            s.slug,
            s.current_price(now),
            s.currency.as_deref().unwrap_or("USD"),
            offer
        );
    }

    if !content.is_api_available() {
        println!("Note: live API unavailable, showing bundled sample data.");
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting client: {e}");
    }
}
