// src/bin/snapshot.rs
// DOCUMENTATION: Fallback snapshot refresher
// PURPOSE: Pull the live listing from a running service into the local seed file

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const DEFAULT_API_URL: &str = "http://127.0.0.1:8003/api/lodgings";
const DEFAULT_OUT: &str = "data/seed-lodgings.json";

#[derive(Debug)]
struct Options {
    api_url: String,
    out: PathBuf,
}

impl Options {
    /// `--url` / `--out` override LODGINGS_API_URL / SEED_PATH
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut options = Options {
            api_url: env::var("LODGINGS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            out: PathBuf::from(env::var("SEED_PATH").unwrap_or_else(|_| DEFAULT_OUT.to_string())),
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--url" => options.api_url = args.next().context("--url needs a value")?,
                "--out" => options.out = PathBuf::from(args.next().context("--out needs a value")?),
                "-h" | "--help" => {
                    println!("Usage: snapshot [--url URL] [--out PATH]");
                    process::exit(0);
                }
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(options)
    }
}

struct SnapshotWriter {
    client: Client,
    options: Options,
}

impl SnapshotWriter {
    fn new(options: Options) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, options })
    }

    async fn fetch(&self) -> Result<Value> {
        let response = self
            .client
            .get(&self.options.api_url)
            .query(&[("limit", "200")])
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.options.api_url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("HTTP {} - {}", status, body);
        }

        let body: Value = response.json().await.context("Response is not JSON")?;
        envelope_items(&body).map(|items| {
            json!({
                "total": items.len(),
                "items": items,
            })
        })
    }

    async fn run(&self) -> Result<usize> {
        let snapshot = self.fetch().await?;
        let count = snapshot["items"].as_array().map(Vec::len).unwrap_or(0);
        write_snapshot(&self.options.out, &snapshot)?;
        Ok(count)
    }
}

/// Extract the items of a `{ total, items }` envelope, rejecting error bodies
fn envelope_items(body: &Value) -> Result<Vec<Value>> {
    if body.get("error").and_then(Value::as_bool).unwrap_or(false) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        bail!("Service reported an error: {}", message);
    }

    match body.get("items").and_then(Value::as_array) {
        Some(items) => Ok(items.clone()),
        None => bail!("Response has no items array"),
    }
}

fn write_snapshot(path: &Path, snapshot: &Value) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create {}", parent.display()))?;
    }

    let pretty = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, pretty + "\n")
        .with_context(|| format!("Cannot write {}", path.display()))
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            println!("{}❌ {}{}", RED, e, RESET);
            process::exit(2);
        }
    };

    println!(
        "{}📥 Fetching {} -> {}{}",
        CYAN,
        options.api_url,
        options.out.display(),
        RESET
    );

    if options.api_url.contains("/.netlify/") {
        println!("{}⚠️  Using the serverless path; /api/lodgings is equivalent{}", YELLOW, RESET);
    }

    let started = Instant::now();
    let result = match SnapshotWriter::new(options) {
        Ok(writer) => writer.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => println!(
            "{}{}✅ Wrote {} lodgings ({:.1}s){}",
            BOLD,
            GREEN,
            count,
            started.elapsed().as_secs_f64(),
            RESET
        ),
        Err(e) => {
            println!("{}❌ Snapshot failed: {:#}{}", RED, e, RESET);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_items() {
        let items = envelope_items(&json!({ "total": 1, "items": [{ "id": "a" }] })).unwrap();
        assert_eq!(items.len(), 1);

        let err = envelope_items(&json!({ "error": true, "message": "boom" })).unwrap_err();
        assert!(err.to_string().contains("boom"));

        assert!(envelope_items(&json!({ "total": 0 })).is_err());
    }

    #[test]
    fn test_parse_args() {
        let options = Options::parse(
            ["--url", "http://x/api/lodgings", "--out", "out/seed.json"]
                .into_iter()
                .map(String::from),
        )
        .unwrap();
        assert_eq!(options.api_url, "http://x/api/lodgings");
        assert_eq!(options.out, PathBuf::from("out/seed.json"));

        assert!(Options::parse(["--bogus".to_string()]).is_err());
        assert!(Options::parse(["--url".to_string()]).is_err());
    }

    #[test]
    fn test_write_snapshot_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/seed.json");

        write_snapshot(&path, &json!({ "total": 0, "items": [] })).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["total"], 0);
    }
}
