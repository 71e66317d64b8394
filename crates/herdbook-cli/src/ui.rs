//! Plain-text presentation: session status, the assessment detail view and
//! a loading line driven by the session state.

use std::io::{self, Write};

use herdbook_core::models::Field;
use herdbook_core::{AssessmentView, SessionState};
use tokio::sync::watch;
use tokio::task::JoinHandle;

const LOADING_MESSAGE: &str = "Loading...";

/// Show a loading line on stderr whenever the session reports `is_loading`.
/// The task ends when the session manager is dropped.
pub fn spawn_loader(mut rx: watch::Receiver<SessionState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut shown = false;
        loop {
            let loading = rx.borrow_and_update().is_loading;
            if loading && !shown {
                eprint!("{}", LOADING_MESSAGE);
                let _ = io::stderr().flush();
                shown = true;
            } else if !loading && shown {
                eprint!("\r{:width$}\r", "", width = LOADING_MESSAGE.len());
                let _ = io::stderr().flush();
                shown = false;
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
}

pub fn print_status(state: &SessionState) {
    match state.user {
        Some(ref user) if user.is_guest() => {
            println!("Signed in as {} ({}, guest access)", user.username, user.role)
        }
        Some(ref user) => println!("Signed in as {} ({})", user.username, user.role),
        None => println!("Not signed in. Run `herdbook login` or `herdbook guest`."),
    }
}

fn print_fields(heading: &str, fields: &[Field]) {
    println!("{}", heading.to_uppercase());
    let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
    for field in fields {
        println!("  {:width$}  {}", field.label, field.value, width = width);
    }
}

pub fn print_assessment(view: &AssessmentView) {
    println!("{}  [{}]", view.title, view.badge.label());
    println!("Assessment Date: {}", view.date);
    println!();
    print_fields("Clinical Findings", &view.findings);
    println!();
    print_fields("Treatments", &view.treatments);
    if !view.notes.is_empty() {
        println!();
        print_fields("Medical Notes & Prescription", &view.notes);
    }
}
