use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use kanaslug::config::{parse_config_toml, ConfigFile};
use kanaslug::{SlugConfig, SlugConverter};

#[cfg(feature = "morph")]
use kanaslug::morph::MorphAnalyzer;

#[derive(Parser)]
#[command(
    name = "kanaslug",
    version,
    about = "Convert Japanese text into romaji slugs"
)]
struct Cli {
    /// Text to convert; reads lines from stdin when omitted
    text: Option<String>,

    /// Maximum slug length in bytes, 0 disables truncation
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,

    /// Word separator
    #[arg(long, value_name = "CHAR")]
    separator: Option<String>,

    /// Transliterate the raw character stream without word segmentation
    #[arg(long)]
    no_morph: bool,

    /// Path to a vibrato system dictionary (.dic or .dic.zst)
    #[arg(long, value_name = "PATH")]
    dict: Option<PathBuf>,

    /// Path to a TOML configuration file; flags override file values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn build_converter(config: SlugConfig, dict: Option<PathBuf>) -> SlugConverter {
    #[cfg(feature = "morph")]
    if config.use_morphology {
        match dict {
            Some(path) => {
                let analyzer = MorphAnalyzer::from_dict_path(&path).unwrap_or_else(|e| {
                    eprintln!("Failed to open dictionary at {}: {}", path.display(), e);
                    process::exit(1);
                });
                return SlugConverter::with_analyzer(config, Box::new(analyzer))
                    .unwrap_or_else(|e| {
                        eprintln!("Invalid configuration: {}", e);
                        process::exit(1);
                    });
            }
            None => {
                eprintln!("No dictionary configured; converting without word segmentation");
            }
        }
    }

    #[cfg(not(feature = "morph"))]
    let _ = dict;

    SlugConverter::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    })
}

fn main() {
    kanaslug::trace_init::init_tracing();

    let Cli {
        text,
        max_length,
        separator,
        no_morph,
        dict,
        config: config_path,
    } = Cli::parse();

    let file = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read config at {}: {}", path.display(), e);
                process::exit(1);
            });
            parse_config_toml(&content).unwrap_or_else(|e| {
                eprintln!("Invalid config at {}: {}", path.display(), e);
                process::exit(1);
            })
        }
        None => ConfigFile::default(),
    };

    let mut config = file.slug;
    if let Some(max_length) = max_length {
        config.max_length = max_length;
    }
    if let Some(separator) = separator {
        config.separator = separator;
    }
    if no_morph {
        config.use_morphology = false;
    }

    let converter = build_converter(config, dict.or(file.morph.dict));

    match text {
        Some(text) => {
            let slug = converter.convert(&text).unwrap_or_else(|e| {
                eprintln!("Conversion failed: {}", e);
                process::exit(1);
            });
            println!("{slug}");
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read line: {}", e);
                    process::exit(1);
                });
                if line.trim().is_empty() {
                    continue;
                }
                let slug = converter.convert(&line).unwrap_or_else(|e| {
                    eprintln!("Conversion failed: {}", e);
                    process::exit(1);
                });
                println!("{slug}");
            }
        }
    }
}
