//! CLI for seebeben.
//!
//! Runs one fetch cycle against the USGS earthquake feed: build the query URL,
//! GET the GeoJSON document, extract the first feature, and put its title,
//! date and tsunami label on the screen. One cycle per launch, no retries, no
//! polling. Failures are reported once on stderr and never reach the screen;
//! the display simply stays at its placeholder state.

use anyhow::{Context, Result};
use clap::Parser;
use seebeben_core::extract::extract_first_event;
use seebeben_core::format::{format_event_date, tsunami_alert_label};
use seebeben_core::Event;
use std::future::Future;
use std::time::Duration;
use tokio::sync::oneshot;
use url::Url;

/// Fixed query: strong quakes (magnitude ≥ 6) over the 2012 window the feed
/// was originally built around.
const USGS_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&starttime=2012-01-01&endtime=2012-12-01&minmagnitude=6";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

/// Result of one fetch-and-extract cycle. Only `Quake` updates the screen;
/// the three failure-ish variants each carry enough to log one useful line.
#[derive(Debug, PartialEq)]
enum FetchOutcome {
    Quake(Event),
    NoEvents,
    NetworkFailure(String),
    BadDocument(String),
}

/// The three settable text fields of the surrounding display. The terminal
/// implementation prints them; tests substitute a recording fake.
trait DisplaySurface {
    fn set_title(&mut self, text: &str);
    fn set_date(&mut self, text: &str);
    fn set_alert(&mut self, text: &str);
}

struct TerminalScreen;

impl DisplaySurface for TerminalScreen {
    fn set_title(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_date(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_alert(&mut self, text: &str) {
        println!("{text}");
    }
}

/// The endpoint is a compile-time constant, so a parse failure here is a
/// configuration error and aborts the launch.
fn build_query_url() -> Result<Url> {
    Url::parse(USGS_QUERY_URL).context("Invalid USGS query URL")
}

fn http_client() -> Result<reqwest::Client> {
    client_with_timeouts(CONNECT_TIMEOUT, READ_TIMEOUT)
}

/// Connect and read are independent budgets: a slow connect gets the full
/// 15 s, and the read clock only starts ticking per read operation. There is
/// deliberately no whole-request deadline.
fn client_with_timeouts(connect: Duration, read: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(connect)
        .read_timeout(read)
        .build()
        .context("Failed to build HTTP client")
}

/// GETs the response body. An absent URL yields an empty body, not an error;
/// anything but status 200 does. The connection is released on every exit
/// path when the response is dropped.
async fn fetch_body(client: &reqwest::Client, url: Option<&Url>) -> Result<String> {
    let Some(url) = url else {
        return Ok(String::new());
    };

    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        anyhow::bail!("USGS API returned status {status}");
    }

    response
        .text()
        .await
        .context("Failed to read response body")
}

/// Folds an already-fetched body into the cycle outcome.
fn outcome_from_body(body: &str) -> FetchOutcome {
    match extract_first_event(body) {
        Ok(Some(event)) => FetchOutcome::Quake(event),
        Ok(None) => FetchOutcome::NoEvents,
        Err(err) => FetchOutcome::BadDocument(err.to_string()),
    }
}

/// The background unit of work: fetch the document, extract the first event.
async fn fetch_and_extract(url: Url) -> FetchOutcome {
    let client = match http_client() {
        Ok(client) => client,
        Err(err) => return FetchOutcome::NetworkFailure(format!("{err:#}")),
    };

    let body = match fetch_body(&client, Some(&url)).await {
        Ok(body) => body,
        Err(err) => return FetchOutcome::NetworkFailure(format!("{err:#}")),
    };

    outcome_from_body(&body)
}

/// Runs the work as a single spawned task and receives its outcome over a
/// one-shot channel: exactly one message, exactly one handoff back to the
/// foreground. If the task dies before sending, the cycle counts as failed.
async fn run_in_background<F>(work: F) -> FetchOutcome
where
    F: Future<Output = FetchOutcome> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        // A dropped receiver means the process is already shutting down.
        let _ = tx.send(work.await);
    });

    match rx.await {
        Ok(outcome) => outcome,
        Err(_) => FetchOutcome::NetworkFailure("Background fetch terminated early".to_string()),
    }
}

/// Applies one cycle's outcome on the foreground. Only an event touches the
/// screen, and it touches each field exactly once; every failure variant
/// leaves the placeholder state in place and logs a single line.
fn apply_outcome(screen: &mut impl DisplaySurface, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Quake(event) => {
            screen.set_title(&event.title);
            screen.set_date(&format_event_date(event.occurred_at));
            screen.set_alert(tsunami_alert_label(event.tsunami_alert));
        }
        FetchOutcome::NoEvents => {
            eprintln!("No earthquakes matched the query window.");
        }
        FetchOutcome::NetworkFailure(reason) => {
            eprintln!("Fetch failed: {reason}");
        }
        FetchOutcome::BadDocument(reason) => {
            eprintln!("Response could not be interpreted: {reason}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    let url = build_query_url()?;
    let outcome = run_in_background(fetch_and_extract(url)).await;

    let mut screen = TerminalScreen;
    apply_outcome(&mut screen, outcome);

    Ok(())
}
