//! Draft form binary entry point
//!
//! Loads a session file, then reads one JSON event per line from stdin and
//! prints the form snapshot after each one.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use draft_form::{DraftForm, DraftSession, FormEvent, SessionError, SessionResult};
use shared::logging::{init_tracing_with_level, log_error, log_shutdown, log_startup, log_success};
use shared::{form_info, form_warn, Component};

#[derive(Parser)]
#[command(name = "draft-form")]
#[command(about = "Live pricing and contact autofill for a draft proposal form")]
struct Args {
    /// Session file describing the form as loaded
    session: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DRAFT_FORM_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Contact lookup URL template ending in `/0/`, overrides the session file
    #[arg(long, env = "DRAFT_FORM_CONTACT_ENDPOINT")]
    contact_endpoint: Option<String>,

    /// Maximum number of rows, overrides the session file
    #[arg(long, env = "DRAFT_FORM_MAX_ROWS")]
    max_rows: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> SessionResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_tracing_with_level(Some(&args.log_level));
    log_startup(Component::Session, &format!("draft form from {}", args.session.display()));

    let session = load_session(&args)?;
    let mut form = DraftForm::from_session(session)?;
    print_snapshot(&form)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_number = 0usize;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                log_shutdown(Component::Session, "interrupted");
                return Ok(());
            }
        };
        let Some(line) = line else {
            break;
        };
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let event = match FormEvent::from_json(&line) {
            Ok(event) => event,
            Err(e) => {
                let err = SessionError::InvalidEvent {
                    line: line_number,
                    message: e.to_string(),
                };
                form_warn!(Component::Session, "⚠️ Skipping event: {}", err);
                continue;
            }
        };

        if let Err(e) = form.handle_event(event) {
            log_error(Component::Session, &format!("event on line {}", line_number), &e);
            continue;
        }
        print_snapshot(&form)?;
    }

    let outcomes = form.drain_lookups().await;
    form_info!(Component::Session, lookups = outcomes.len(), "Input closed, lookups settled");
    print_snapshot(&form)?;

    log_success(Component::Session, &format!("Processed {} lines", line_number));
    log_shutdown(Component::Session, "end of input");
    Ok(())
}

fn load_session(args: &Args) -> SessionResult<DraftSession> {
    let raw = std::fs::read_to_string(&args.session)?;
    let mut session = DraftSession::from_json(&raw)?;

    if let Some(endpoint) = &args.contact_endpoint {
        session.config.contact_endpoint = Some(endpoint.clone());
    }
    if let Some(max_rows) = args.max_rows {
        session.config.max_rows = max_rows;
    }
    session.config.validate()?;
    Ok(session)
}

fn print_snapshot<L, F>(form: &DraftForm<L, F>) -> SessionResult<()>
where
    L: autofill::ContactLookup + 'static,
    F: pricing::RowFactory,
{
    println!("{}", serde_json::to_string(&form.snapshot())?);
    Ok(())
}
