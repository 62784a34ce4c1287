mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use phonotax_core::features::{decode, encode};
use phonotax_core::{
    Inventory, Pattern, Phoneme, PhonemeTable, Syllable, can_be_vocalic, check, parse_ipa, spell,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{Language, LanguageConfig};

/// Phoneme, syllable and phonotactics toolkit for constructed languages
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show what the built-in table knows about one or more sounds
    Describe {
        #[arg(required = true)]
        symbols: Vec<String>,
        #[arg(long, help = "Treat the symbols as X-SAMPA instead of IPA")]
        xsampa: bool,
    },
    /// Encode a feature phrase such as "voiced bilabial plosive"
    Features {
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
    /// Split IPA text into onset, nucleus and coda
    Syllable { text: String },
    /// Report the first phonotactic violation in IPA text
    Check {
        text: String,
        #[arg(long, value_name = "SOUNDS", default_value = "")]
        doubles: String,
    },
    /// Enumerate legal syllables for a language
    Generate {
        #[arg(long, value_name = "DIR", help = "Language directory holding cfg.json")]
        lang: Option<PathBuf>,
        #[arg(long, value_name = "SOUNDS")]
        vowels: Option<String>,
        #[arg(long, value_name = "SOUNDS")]
        consonants: Option<String>,
        #[arg(long, value_name = "SOUNDS")]
        doubles: Option<String>,
        #[arg(long = "pattern", value_name = "SHAPE", help = "Syllable shape, e.g. CV or sCVC")]
        patterns: Vec<String>,
        #[arg(long, value_name = "N", help = "Stop after N syllables")]
        limit: Option<usize>,
    },
    /// List the built-in phoneme table
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    execute(cli)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Describe { symbols, xsampa } => describe(&symbols, xsampa),
        Command::Features { phrase } => {
            let phrase = phrase.join(" ");
            let bits =
                encode(&phrase).with_context(|| format!("failed to encode '{phrase}'"))?;
            println!("0x{bits:08x}\t{}", decode(bits));
            Ok(())
        }
        Command::Syllable { text } => {
            let syllable =
                Syllable::parse(&text).with_context(|| format!("'{text}' is not one syllable"))?;
            println!("onset:   {}", syllable.onset_text());
            println!("nucleus: {}", syllable.nucleus_text());
            println!("coda:    {}", syllable.coda_text());
            println!("rime:    {}", spell(syllable.rime()));
            Ok(())
        }
        Command::Check { text, doubles } => {
            let sequence = parse_ipa(&text).with_context(|| format!("failed to parse '{text}'"))?;
            let doubles =
                parse_ipa(&doubles).with_context(|| format!("failed to parse '{doubles}'"))?;
            check(&sequence, &doubles).with_context(|| format!("'{text}' is not allowed"))?;
            println!("{text}: ok");
            Ok(())
        }
        Command::Generate {
            lang,
            vowels,
            consonants,
            doubles,
            patterns,
            limit,
        } => {
            let config = match lang {
                Some(dir) => {
                    let language = Language::open(&dir)?;
                    debug!(
                        name = %language.name,
                        path = %language.path.display(),
                        "loaded language"
                    );
                    language.config
                }
                None => LanguageConfig::default(),
            };
            let vowels = vowels.unwrap_or_else(|| config.vowels.to_text());
            let consonants = consonants.unwrap_or_else(|| config.consonants.to_text());
            let doubles = doubles.unwrap_or_else(|| config.doubles.to_text());
            let patterns = if patterns.is_empty() {
                config.sylpats
            } else {
                patterns
            };
            generate(&vowels, &consonants, &doubles, &patterns, limit)
        }
        Command::Table => {
            for ph in PhonemeTable::global().iter() {
                println!("{}\t{}\t{}", ph.symbol(), ph.alt_symbol(), ph.description());
            }
            Ok(())
        }
    }
}

fn describe(symbols: &[String], xsampa: bool) -> Result<()> {
    let table = PhonemeTable::global();
    for symbol in symbols {
        let found = if xsampa {
            table.by_alt(symbol)
        } else {
            table.by_symbol(symbol)
        };
        let Some(ph) = found else {
            bail!("unrecognized phoneme '{symbol}'");
        };
        print_phoneme(ph);
    }
    Ok(())
}

fn print_phoneme(ph: &Phoneme) {
    println!("/{}/ (X-SAMPA {})", ph.symbol(), ph.alt_symbol());
    println!("  {}", ph.description());
    let vocalic = if can_be_vocalic(ph) { ", can be vocalic" } else { "" };
    println!("  sonority {}{vocalic}", ph.sonority());
    if !ph.example().is_empty() {
        println!("  e.g. {}", ph.example());
    }
}

fn generate(
    vowels: &str,
    consonants: &str,
    doubles: &str,
    patterns: &[String],
    limit: Option<usize>,
) -> Result<()> {
    let inventory = Inventory::new(vowels, consonants, doubles)
        .context("failed to build the sound inventory")?;
    let patterns = patterns
        .iter()
        .map(|p| Pattern::parse(p).with_context(|| format!("bad syllable pattern '{p}'")))
        .collect::<Result<Vec<_>>>()?;

    let mut count = 0usize;
    for syllable in inventory.candidates(&patterns).take(limit.unwrap_or(usize::MAX)) {
        println!("{}", spell(&syllable));
        count += 1;
    }
    println!("{count} syllables");
    Ok(())
}
