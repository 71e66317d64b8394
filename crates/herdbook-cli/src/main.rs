//! herdbook - terminal front end for the farm management service.
//!
//! Restores the saved session on every start, then runs one command:
//! `status`, `login [username]`, `guest`, `logout` or `show <assessment.json>`.

mod ui;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use herdbook_core::{
    store, ApiClient, AssessmentView, Config, Credentials, KeyValueStore, MedicalAssessment,
    SessionEvent, SessionManager,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variables that pre-fill the login prompt
const USERNAME_ENV: &str = "HERDBOOK_USERNAME";
const PASSWORD_ENV: &str = "HERDBOOK_PASSWORD";

const USAGE: &str = "Usage: herdbook [status | login [username] | guest | logout | show <assessment.json>]";

type Session = SessionManager<Box<dyn KeyValueStore>, ApiClient>;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("status");
    if matches!(command, "-h" | "--help" | "help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    };

    let mut session = open_session(&config).await?;

    match command {
        "status" => ui::print_status(&session.state()),
        "login" => login(&mut session, &mut config, args.get(1).cloned()).await?,
        "guest" => {
            session.login_guest().await;
            ui::print_status(&session.state());
        }
        "logout" => logout(&mut session),
        "show" => {
            let path = args.get(1).context(USAGE)?;
            show_assessment(&session, path)?;
        }
        other => bail!("Unknown command '{}'\n{}", other, USAGE),
    }

    Ok(())
}

/// Build the session manager and restore the saved session behind a loading line
async fn open_session(config: &Config) -> Result<Session> {
    let api = ApiClient::new(&config.api_base_url, config.request_timeout())?;
    let cache_dir = config.cache_dir()?;
    let store = store::open(config.store, cache_dir);

    let mut session = SessionManager::new(store, api, config.session_config());
    ui::spawn_loader(session.subscribe());
    session.restore().await;
    info!(authenticated = session.is_authenticated(), "Session ready");
    Ok(session)
}

async fn login(session: &mut Session, config: &mut Config, username: Option<String>) -> Result<()> {
    let username = match username
        .or_else(|| std::env::var(USERNAME_ENV).ok())
        .or_else(|| config.last_username.clone())
    {
        Some(name) if !name.is_empty() => name,
        _ => prompt("Username: ")?,
    };
    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => password,
        _ => rpassword::prompt_password(format!("Password for {}: ", username))?,
    };

    session.login(Credentials::new(username.clone(), password)).await?;

    config.last_username = Some(username);
    if let Err(e) = config.save() {
        warn!(error = %e, "Failed to save config");
    }
    ui::print_status(&session.state());
    Ok(())
}

fn logout(session: &mut Session) {
    let mut events = session.events();
    session.logout();
    if let Ok(SessionEvent::LoggedOut) = events.try_recv() {
        println!("Signed out. Run `herdbook login` to sign in again.");
    }
}

fn show_assessment(session: &Session, path: &str) -> Result<()> {
    if !session.is_authenticated() {
        bail!("Not signed in. Run `herdbook login` or `herdbook guest` first.");
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path))?;
    let assessment: MedicalAssessment = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse assessment in {}", path))?;
    ui::print_assessment(&AssessmentView::from(&assessment));
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim().to_string();
    if value.is_empty() {
        bail!("Username required");
    }
    Ok(value)
}
