//! One-shot command line contract
//!
//! `recommend <user_id> [top_n=10] [min_rating=4.0]`
//!
//! Stages run strictly in order: parse arguments, read configuration, load artifacts,
//! score. The first failure ends the invocation. Exactly one JSON object is
//! written per invocation: the response on stdout, or `{"error": ...}` on stderr.

use std::io::Write;
use std::path::Path;

use crate::artifacts::ArtifactBundle;
use crate::error::{AppError, ErrorResponse, Result};
use crate::models::{RecommendationRequest, DEFAULT_MIN_RATING, DEFAULT_TOP_N};
use crate::services::RecommendationService;

/// Parse positional arguments (program name already stripped)
pub fn parse_args<I, S>(args: I) -> Result<RecommendationRequest>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();

    let user_id = match args.next() {
        Some(raw) => parse_arg::<i64>(raw.as_ref(), "user_id", "an integer")?,
        None => return Err(AppError::InputValidation("User ID required".to_string())),
    };

    let top_n = match args.next() {
        Some(raw) => parse_arg::<i64>(raw.as_ref(), "top_n", "an integer")?,
        None => DEFAULT_TOP_N as i64,
    };

    let min_rating = match args.next() {
        Some(raw) => parse_arg::<f64>(raw.as_ref(), "min_rating", "a number")?,
        None => DEFAULT_MIN_RATING,
    };

    RecommendationRequest::new(user_id, top_n, min_rating)
}

fn parse_arg<T: std::str::FromStr>(raw: &str, name: &str, expected: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| {
        AppError::InputValidation(format!("{} must be {}, got '{}'", name, expected, raw))
    })
}

/// Load the artifacts and score an already validated request
pub fn execute(request: &RecommendationRequest, model_dir: &Path) -> Result<String> {
    let bundle = ArtifactBundle::load(model_dir)?;
    let service = RecommendationService::new(bundle.into());
    let response = service.recommend(request)?;

    serde_json::to_string(&response).map_err(|err| AppError::Computation(err.to_string()))
}

/// Write the outcome to the matching stream and return the process exit code
pub fn emit<O: Write, E: Write>(outcome: Result<String>, stdout: &mut O, stderr: &mut E) -> i32 {
    match outcome {
        Ok(body) => match writeln!(stdout, "{}", body) {
            Ok(()) => 0,
            Err(_) => 1,
        },
        Err(err) => {
            let body = serde_json::to_string(&ErrorResponse::from(&err))
                .unwrap_or_else(|_| r#"{"error": "unknown error"}"#.to_string());
            let _ = writeln!(stderr, "{}", body);
            1
        }
    }
}
