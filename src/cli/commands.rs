use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use char_codec::catalog::{Catalog, VocabQuery, VocabStats};
use char_codec::config::{load_settings, OutputFormat, Settings, CONFIG_FILENAME};
use char_codec::error::{CodecError, Result};
use char_codec::ids::{format_token_ids, parse_token_ids, parse_token_ids_strict, RejectedEntry};
use char_codec::{VocabKind, CODEC};

#[derive(Parser)]
#[command(name = "char-codec")]
#[command(about = "Character-level text codec over a fixed 74-symbol vocabulary")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Encode text, bracketed by <BOS>/<EOS>
    char-codec encode "Hello World!"

    # Encode without the reserved markers
    char-codec encode "Hello" --no-special

    # Decode a comma-separated id list
    char-codec decode "0, 55, 26, 33, 33, 36, 1"

    # Show each character with its id and category
    char-codec breakdown "AI Tokenizer"

    # List uppercase letters matching a search term
    char-codec vocab --kind uppercase --search h

    # Vocabulary statistics as JSON
    char-codec stats --format json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode text into token ids
    Encode {
        /// Text to encode (reads stdin when omitted)
        text: Option<String>,

        /// Do not add the <BOS>/<EOS> markers
        #[arg(long, conflicts_with = "special")]
        no_special: bool,

        /// Add the <BOS>/<EOS> markers even if the settings disable them
        #[arg(long)]
        special: bool,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Decode a comma-separated list of token ids
    Decode {
        /// Token ids, e.g. "0, 55, 26, 1"
        ids: String,

        /// Fail on entries that are not numbers instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Show each encodable character with its id and category
    Breakdown {
        /// Text to inspect (reads stdin when omitted)
        text: Option<String>,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// List the vocabulary
    Vocab {
        /// Filter by kind (special, space, punctuation, number, lowercase, uppercase, other)
        #[arg(long)]
        kind: Option<String>,

        /// Filter by character or id substring
        #[arg(long)]
        search: Option<String>,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Show vocabulary statistics
    Stats {
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
}

/// Loads settings from the explicit path or the default file name.
pub fn resolve_settings(config: Option<&Path>) -> Result<Settings> {
    let path = config
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    load_settings(&path)
}

/// Flag value if given, otherwise the settings default.
pub fn resolve_format(flag: Option<&str>, settings: &Settings) -> Result<OutputFormat> {
    match flag {
        Some(name) => OutputFormat::from_str(name)
            .ok_or_else(|| CodecError::Config(format!("Unknown output format: {}", name))),
        None => Ok(settings.format),
    }
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn encode_text(text: Option<String>, wrap_special: bool, format: OutputFormat) -> Result<()> {
    let text = read_input(text)?;
    let encoding = CODEC.encode_report(&text, wrap_special);
    debug!(
        "Encoded {} characters into {} tokens",
        encoding.characters,
        encoding.token_count()
    );

    if !encoding.dropped.is_empty() {
        info!("{} unsupported characters were dropped", encoding.dropped.len());
    }

    match format {
        OutputFormat::Json => print_json(&encoding)?,
        OutputFormat::Text => {
            println!("[{}]", format_token_ids(&encoding.ids));
            println!(
                "Characters: {}  Tokens: {}",
                encoding.characters,
                encoding.token_count()
            );
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DecodeOutput {
    text: String,
    ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rejected: Vec<RejectedEntry>,
}

/// Wraps decoded text in quotes without escaping its contents.
fn quote_decoded(text: &str) -> String {
    format!("\"{}\"", text)
}

pub fn decode_ids(input: &str, strict: bool, format: OutputFormat) -> Result<()> {
    let (ids, rejected) = if strict {
        (parse_token_ids_strict(input)?, Vec::new())
    } else {
        let parsed = parse_token_ids(input);
        (parsed.ids, parsed.rejected)
    };

    let text = CODEC.decode(&ids);

    match format {
        OutputFormat::Json => print_json(&DecodeOutput {
            text,
            ids,
            rejected,
        })?,
        OutputFormat::Text => {
            println!("{}", quote_decoded(&text));
            println!(
                "Valid tokens: {}  Characters: {}",
                ids.len(),
                text.chars().count()
            );
            for entry in &rejected {
                println!("  Skipped {:?} at position {}", entry.token, entry.position);
            }
        }
    }

    Ok(())
}

pub fn show_breakdown(text: Option<String>, format: OutputFormat) -> Result<()> {
    let text = read_input(text)?;
    let tokens = CODEC.breakdown(&text);

    match format {
        OutputFormat::Json => print_json(&tokens)?,
        OutputFormat::Text => {
            if tokens.is_empty() {
                println!("No encodable characters");
                return Ok(());
            }
            for token in &tokens {
                println!(
                    "{:>4}  {:?}  {}",
                    token.id,
                    token.ch,
                    token.category.as_str()
                );
            }
        }
    }

    Ok(())
}

pub fn list_vocab(kind: Option<&str>, search: Option<String>, format: OutputFormat) -> Result<()> {
    let mut query = VocabQuery::new();
    if let Some(name) = kind {
        let kind =
            VocabKind::from_str(name).ok_or_else(|| CodecError::UnknownKind(name.to_string()))?;
        query = query.with_kind(kind);
    }
    if let Some(term) = search {
        query = query.with_search(term);
    }

    let catalog = Catalog::new(&CODEC);
    let entries = catalog.filter(&query);

    match format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No tokens found matching your search criteria.");
            }
            for entry in &entries {
                println!(
                    "{:>4}  {:<6} {}",
                    entry.id,
                    format!("{:?}", entry.label()),
                    entry.kind.as_str()
                );
            }
            println!("Showing {} of {} tokens", entries.len(), catalog.len());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct StatsOutput {
    vocab_size: usize,
    supported_chars: usize,
    kinds: VocabStats,
}

pub fn show_stats(format: OutputFormat) -> Result<()> {
    let stats = StatsOutput {
        vocab_size: CODEC.vocab_size(),
        supported_chars: CODEC.supported_chars().len(),
        kinds: Catalog::new(&CODEC).stats(),
    };

    match format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Text => {
            println!("Vocabulary Statistics:");
            println!("  Vocabulary size: {}", stats.vocab_size);
            println!("  Supported characters: {}", stats.supported_chars);
            println!("\n  Tokens by kind:");
            for kind in VocabKind::ALL {
                println!("    {}: {}", kind.as_str(), stats.kinds.count(kind));
            }
            let chars: String = CODEC.supported_chars().into_iter().collect();
            println!("\n  Characters: {:?}", chars);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_encode_flags() {
        let cli = Cli::parse_from(["char-codec", "encode", "Hi", "--no-special", "--format", "json"]);
        match cli.command {
            Commands::Encode {
                text,
                no_special,
                special,
                format,
            } => {
                assert_eq!(text.as_deref(), Some("Hi"));
                assert!(no_special);
                assert!(!special);
                assert_eq!(format.as_deref(), Some("json"));
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_cli_rejects_conflicting_marker_flags() {
        let result = Cli::try_parse_from(["char-codec", "encode", "Hi", "--special", "--no-special"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_format() {
        let settings = Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        };
        assert_eq!(resolve_format(None, &settings).unwrap(), OutputFormat::Json);
        assert_eq!(resolve_format(Some("text"), &settings).unwrap(), OutputFormat::Text);
        assert!(matches!(
            resolve_format(Some("xml"), &settings),
            Err(CodecError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_settings_from_explicit_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("codec.yml");
        fs::write(&path, "strict_ids: true\n").expect("Failed to write settings");

        let settings = resolve_settings(Some(&path)).unwrap();
        assert!(settings.strict_ids);
        assert!(settings.wrap_special);
    }

    #[test]
    fn test_list_vocab_unknown_kind() {
        let err = list_vocab(Some("emoji"), None, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, CodecError::UnknownKind(name) if name == "emoji"));
    }

    #[test]
    fn test_decoded_text_is_quoted_raw() {
        let text = CODEC.decode(&[52, 29, 2, 40, 22, 30, 25, 2, 11, 29, 30, 11]);
        assert_eq!(text, "Eh said \"hi\"");
        assert_eq!(quote_decoded(&text), "\"Eh said \"hi\"\"");
        assert_eq!(quote_decoded(""), "\"\"");
    }

    #[test]
    fn test_decode_strict_fails_on_garbage() {
        let err = decode_ids("55, nope", true, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, CodecError::InvalidTokenId { position: 1, .. }));
    }
}
