use std::fs;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::cli::{EssayArgs, OutputFormat, ReportArgs, SearchArgs, SimilarityArgs};
use crate::compare::{Comparison, Request, Response};
use crate::config::resolve_threshold;
use crate::diagnostics::{render_response, render_similarity, render_warnings, summarize};
use crate::ir::{DocumentSummary, Report, Verdict, Warning};
use crate::jaccard::Similarity;
use crate::load::load_essay;

/// Both essays loaded for one command invocation.
pub struct Session {
    pub comparison: Comparison,
    pub essays: [DocumentSummary; 2],
    pub warnings: Vec<Warning>,
}

impl Session {
    pub fn open(args: &EssayArgs) -> Self {
        let mut warnings = Vec::new();
        let first = load_essay(&args.essay1, &mut warnings);
        let second = load_essay(&args.essay2, &mut warnings);
        Self {
            comparison: Comparison::new(first.document, second.document),
            essays: [first.summary, second.summary],
            warnings,
        }
    }

    fn not_loaded_notice(&self) -> Option<&'static str> {
        if self.comparison.both_loaded() {
            None
        } else {
            Some("warning: at least one essay is empty or missing; results are degenerate")
        }
    }
}

/// Rejects empty or non-alphabetic lookups before they reach the comparator.
pub fn validate_query(word: &str) -> Result<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        bail!("search word must not be empty");
    }
    if !trimmed.chars().all(char::is_alphabetic) {
        bail!("search word must contain letters only: {trimmed}");
    }
    Ok(trimmed.to_string())
}

pub fn common(args: &EssayArgs, format: OutputFormat) -> Result<()> {
    let session = Session::open(args);
    let response = session.comparison.answer(&Request::CommonWords);
    emit(&session, &response, format)
}

pub fn search(args: &SearchArgs, format: OutputFormat) -> Result<()> {
    let word = validate_query(&args.word)?;
    let session = Session::open(&args.essays);
    let response = session.comparison.answer(&Request::Search(word));
    emit(&session, &response, format)
}

pub fn similarity(args: &SimilarityArgs, format: OutputFormat) -> Result<()> {
    let threshold = resolve_threshold(args.threshold)?;
    let session = Session::open(&args.essays);
    let result = session.comparison.similarity();
    let verdict = Verdict::from_percentage(result.percentage, threshold);
    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Output<'a> {
                #[serde(flatten)]
                similarity: &'a Similarity,
                threshold: f64,
                verdict: Verdict,
                warnings: &'a [Warning],
            }
            print_json(&Output {
                similarity: &result,
                threshold,
                verdict,
                warnings: &session.warnings,
            })
        }
        OutputFormat::Text => {
            print_text_warnings(&session);
            println!("{}", render_similarity(&result, verdict));
            Ok(())
        }
    }
}

pub fn build_report(session: Session, threshold: f64, word: Option<String>) -> Report {
    let similarity = session.comparison.similarity();
    let lookup = word.map(|word| session.comparison.search_word(&word));
    Report {
        version: 1,
        generated_at: now_rfc3339(),
        essays: session.essays,
        common_words: session.comparison.common_words(),
        similarity,
        threshold,
        verdict: Verdict::from_percentage(similarity.percentage, threshold),
        lookup,
        warnings: session.warnings,
    }
}

pub fn report(args: &ReportArgs, format: OutputFormat) -> Result<()> {
    let threshold = resolve_threshold(args.threshold)?;
    let word = args.word.as_deref().map(validate_query).transpose()?;
    let session = Session::open(&args.essays);
    let report = build_report(session, threshold, word);
    info!(
        percentage = report.similarity.percentage,
        verdict = ?report.verdict,
        "report generated"
    );

    if let Some(out) = args.out.as_ref() {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
    }

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!("{}", summarize(&report));
            if let Some(out) = args.out.as_ref() {
                println!("Report written to {}", out.display());
            }
            Ok(())
        }
    }
}

fn emit(session: &Session, response: &Response, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Output<'a> {
                #[serde(flatten)]
                response: &'a Response,
                warnings: &'a [Warning],
            }
            print_json(&Output {
                response,
                warnings: &session.warnings,
            })
        }
        OutputFormat::Text => {
            print_text_warnings(session);
            println!("{}", render_response(response));
            Ok(())
        }
    }
}

fn print_text_warnings(session: &Session) {
    if !session.warnings.is_empty() {
        println!("{}", render_warnings(&session.warnings));
    }
    if let Some(notice) = session.not_loaded_notice() {
        println!("{notice}");
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
