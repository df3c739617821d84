mod config;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use resume_parser::{
    parse_resume_with_scores, resume_to_json, Line, ParseError, ParserOptions, Resume,
    ResumeScores,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

#[derive(Serialize)]
struct ScoredOutput<'a> {
    resume: &'a Resume,
    scores: &'a ResumeScores,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // stdout carries the JSON output, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting resume-parser v{}", env!("CARGO_PKG_VERSION"));

    let options = ParserOptions {
        featured_skill_slots: config.featured_skill_slots,
        ..ParserOptions::default()
    };

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read input from stdin")?;

    // Accepts one document or a stream of documents, one JSON array each.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut documents = 0usize;
    for document in serde_json::Deserializer::from_str(&input).into_iter::<Vec<Line>>() {
        let lines = document
            .map_err(ParseError::InvalidInput)
            .with_context(|| format!("Failed to decode document #{}", documents + 1))?;
        let (resume, scores) = parse_resume_with_scores(&lines, &options);

        let encoded = if config.include_scores {
            let output = ScoredOutput {
                resume: &resume,
                scores: &scores,
            };
            if config.pretty_output {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }
            .map_err(ParseError::Serialize)?
        } else {
            resume_to_json(&resume, config.pretty_output)?
        };
        writeln!(out, "{encoded}").context("Failed to write output to stdout")?;
        documents += 1;
    }

    info!(documents, "Done");
    Ok(())
}
