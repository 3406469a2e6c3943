use hashcash_checker::{
    puzzle_digest, Checker, CheckerConfig, CheckerConfigBuilder, PuzzleFields,
    HASHCASH_DATE_FORMAT,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<CheckerConfig, String> {
    // A JSON config file takes precedence over individual variables.
    if let Ok(path) = std::env::var("HASHCASH_CONFIG") {
        let json = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
        return CheckerConfig::from_json(&json).map_err(|e| e.to_string());
    }
    let difficulty: u8 = std::env::var("HASHCASH_DIFFICULTY")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2);
    let date_format =
        std::env::var("HASHCASH_DATE_FORMAT").unwrap_or_else(|_| HASHCASH_DATE_FORMAT.to_owned());
    let window_secs: u64 = std::env::var("HASHCASH_WINDOW_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600);
    CheckerConfigBuilder::default()
        .difficulty(difficulty)
        .date_format(date_format)
        .validity_window(Duration::from_secs(window_secs))
        .build_validated()
        .map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let token = std::env::args()
        .nth(1)
        .ok_or_else(|| "usage: check_token <token>".to_owned())?;
    let config = load_config()?;
    tracing::info!(
        difficulty = config.difficulty,
        date_format = %config.date_format,
        window_secs = config.validity_window.as_secs(),
        "checker configured"
    );

    let digest = puzzle_digest(&token);
    let resource = PuzzleFields::parse(&token)
        .map(|fields| fields.resource)
        .unwrap_or("<none>");
    tracing::info!(
        digest = %hex::encode(digest),
        zero_bytes = digest.iter().take_while(|byte| **byte == 0).count(),
        resource,
        "token digest"
    );

    let checker = Checker::from_config(config);
    match checker.check(&token) {
        Ok(()) => {
            tracing::info!(resource, "puzzle accepted");
            println!("accepted");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(resource, kind = ?err.kind(), reason = %err, "puzzle rejected");
            println!("rejected ({:?}): {err}", err.kind());
            Err(err.to_string())
        }
    }
}
