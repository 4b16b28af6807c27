use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use kanaconv::convert::{convert, SEMI_VOICED_MARK, VOICED_MARK};
use kanaconv::mode::{ConvFlags, ConvMode, ModeError};
use kanaconv::report::{self, Divergence};

#[derive(Parser)]
#[command(name = "kanatool", about = "Character form conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ModeArgs {
    /// Convert to full-width forms
    #[arg(long)]
    wide: bool,
    /// Convert to half-width forms
    #[arg(long)]
    narrow: bool,
    /// Convert hiragana to katakana
    #[arg(long)]
    katakana: bool,
    /// Convert katakana to hiragana
    #[arg(long)]
    hiragana: bool,
}

impl ModeArgs {
    fn mode(&self) -> Result<ConvMode, ModeError> {
        let mut flags = ConvFlags::empty();
        if self.wide {
            flags |= ConvFlags::WIDE;
        }
        if self.narrow {
            flags |= ConvFlags::NARROW;
        }
        if self.katakana {
            flags |= ConvFlags::KATAKANA;
        }
        if self.hiragana {
            flags |= ConvFlags::HIRAGANA;
        }
        ConvMode::from_flags(flags)
    }

    fn label(&self) -> String {
        let mut label = String::new();
        if self.wide {
            label.push_str("Wide");
        }
        if self.narrow {
            label.push_str("Narrow");
        }
        if self.katakana {
            label.push_str("Katakana");
        }
        if self.hiragana {
            label.push_str("Hiragana");
        }
        if label.is_empty() {
            label.push_str("None");
        }
        label
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert text from the argument or stdin
    Convert {
        #[command(flatten)]
        mode: ModeArgs,
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
    },

    /// Write full-range divergence reports
    Scan {
        #[command(flatten)]
        mode: ModeArgs,
        /// Scan every mode combination, including the mark-combination passes
        #[arg(long)]
        all: bool,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Write JSON instead of the plain-text line format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error(transparent)]
    Mode(#[from] ModeError),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stdin: {0}")]
    Stdin(io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// The eight scannable modes, named the way the original reports were.
const SCAN_MODES: &[(&str, ConvMode)] = &[
    ("Wide", ConvMode::WIDE),
    ("Narrow", ConvMode::NARROW),
    ("Katakana", ConvMode::KATAKANA),
    ("Hiragana", ConvMode::HIRAGANA),
    ("WideKatakana", ConvMode::WIDE_KATAKANA),
    ("WideHiragana", ConvMode::WIDE_HIRAGANA),
    ("NarrowKatakana", ConvMode::NARROW_KATAKANA),
    ("NarrowHiragana", ConvMode::NARROW_HIRAGANA),
];

/// The mark-combination passes: wide modes with each half-width mark.
const COMBINED_SCANS: &[(&str, ConvMode, char)] = &[
    ("WideKatakana-Voiced", ConvMode::WIDE_KATAKANA, VOICED_MARK),
    ("WideHiragana-Voiced", ConvMode::WIDE_HIRAGANA, VOICED_MARK),
    ("WideKatakana-SemiVoiced", ConvMode::WIDE_KATAKANA, SEMI_VOICED_MARK),
    ("WideHiragana-SemiVoiced", ConvMode::WIDE_HIRAGANA, SEMI_VOICED_MARK),
];

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("kanatool: {e}");
        process::exit(1);
    }
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kanaconv=debug")),
        )
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "trace"))]
fn init_tracing() {}

fn run(cli: Cli) -> Result<(), ToolError> {
    match cli.command {
        Command::Convert { mode, text } => {
            let mode = mode.mode()?;
            let input = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .map_err(ToolError::Stdin)?;
                    buf
                }
            };
            print!("{}", convert(&input, mode));
            if !input.ends_with('\n') {
                println!();
            }
            Ok(())
        }

        Command::Scan {
            mode,
            all,
            out,
            json,
        } => {
            if all {
                for &(label, m) in SCAN_MODES {
                    write_report(&out, label, &report::scan(m), json)?;
                }
                for &(label, m, mark) in COMBINED_SCANS {
                    write_report(&out, label, &report::scan_combined(mark, m), json)?;
                }
            } else {
                let label = mode.label();
                let mode = mode.mode()?;
                write_report(&out, &label, &report::scan(mode), json)?;
            }
            Ok(())
        }
    }
}

fn write_report(
    dir: &Path,
    label: &str,
    divergences: &[Divergence],
    json: bool,
) -> Result<(), ToolError> {
    let ext = if json { "json" } else { "txt" };
    let path = dir.join(format!("kanaconv-{label}.{ext}"));
    if json {
        let body = serde_json::to_string_pretty(divergences)?;
        std::fs::write(&path, body).map_err(|source| ToolError::Io {
            path: path.clone(),
            source,
        })?;
    } else {
        report::write_lines(&path, divergences).map_err(|source| ToolError::Io {
            path: path.clone(),
            source,
        })?;
    }
    println!("{} divergences > {}", divergences.len(), path.display());
    Ok(())
}
