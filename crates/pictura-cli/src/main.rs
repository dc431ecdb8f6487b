//! Pictura: text analysis and photo-search query synthesis from the command line.

use std::io::Read;
use std::path::{Path, PathBuf};

use pictura_analyze::{analyze, detect_content_type};
use pictura_core::{load_config_file, QueryGenerationConfig, RandomPicker};
use pictura_images::NoopSearch;
use pictura_query::generate_queries_with;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod article;

/// Environment variable naming a JSON configuration override file.
const CONFIG_ENV: &str = "PICTURA_CONFIG";

fn resolve_config(path: Option<&Path>) -> anyhow::Result<QueryGenerationConfig> {
    match path {
        Some(path) => load_config_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e)),
        None => Ok(QueryGenerationConfig::default()),
    }
}

/// Text from the file argument, or stdin when absent or `-`.
fn read_input(arg: Option<&String>) -> anyhow::Result<String> {
    match arg.map(String::as_str) {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e)),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_help() {
    println!("Pictura — photo-search queries from prose");
    println!();
    println!("Usage: pictura <command> [file]");
    println!();
    println!("Reads text from [file], or stdin when omitted, and prints JSON.");
    println!();
    println!("Commands:");
    println!("  analyze [file]        Keywords, themes, entities and sentences");
    println!("  content-type [file]   Writing-style classification");
    println!("  queries [file]        Ranked photo-search queries");
    println!("  generate [file]       Title, queries and images for an article");
    println!("  help                  Show this help message");
    println!();
    println!("Environment:");
    println!("  {}        JSON file overriding query generation settings", CONFIG_ENV);
    println!("  RUST_LOG              Log filter (default: info)");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "analyze" => {
            let text = read_input(args.get(2))?;
            print_json(&analyze(&text))
        }
        "content-type" => {
            let text = read_input(args.get(2))?;
            print_json(&detect_content_type(&analyze(&text)))
        }
        "queries" | "generate" => {
            let config_path = std::env::var(CONFIG_ENV).ok().map(PathBuf::from);
            let config = resolve_config(config_path.as_deref())?;
            let text = read_input(args.get(2))?;
            let mut picker = RandomPicker::new();

            if command == "queries" {
                let analysis = analyze(&text);
                let queries = generate_queries_with(&analysis, &config, &mut picker);
                info!("Generated {} queries", queries.len());
                print_json(&queries)
            } else {
                let report = article::build_report(&text, &config, &NoopSearch, &mut picker)?;
                print_json(&report)
            }
        }
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}. Use 'pictura help' for usage.", other);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(None).unwrap();
        assert_eq!(config, QueryGenerationConfig::default());
    }

    #[test]
    fn test_resolve_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"thresholds": {{"maxQueries": 4}}}}"#).unwrap();
        let config = resolve_config(Some(file.path())).unwrap();
        assert_eq!(config.thresholds.max_queries, 4);
    }

    #[test]
    fn test_resolve_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_config(Some(dir.path().join("absent.json").as_path())).is_err());
    }
}
