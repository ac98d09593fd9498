//! MIPS instruction format classifier CLI.
//!
//! This binary exposes the library through three subcommands:
//! 1. **classify:** Print the format of each word and its field breakdown.
//! 2. **disasm:** Print each word as assembly text.
//! 3. **reg:** Print the rendered name of each register code.
//!
//! Words are given as 32-character binary strings or `0x` hex literals. Every
//! word is processed even if an earlier one fails; the exit status is non-zero
//! if any of them did.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdma_core::config::Config;
use mdma_core::isa::decode::decode;
use mdma_core::isa::disasm::Disassembler;
use mdma_core::isa::table::{MnemonicLookup, MnemonicTable};
use mdma_core::isa::{registers, word};

#[derive(Parser, Debug)]
#[command(
    name = "mdma",
    author,
    version,
    about = "MIPS instruction format classifier and disassembler",
    long_about = "Classify 32-bit MIPS words into R, I, J, or shift format and render them.\n\nWords are 32-character binary strings (most-significant bit first) or 0x hex literals.\n\nExamples:\n  mdma classify 0x012A4020\n  mdma disasm 00000001001010100100000000100000 0x08000010\n  mdma reg 29 31"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the format and field values of each word.
    Classify {
        /// Instruction words.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Disassemble each word.
    Disasm {
        /// JSON mnemonic table (overrides the configuration file).
        #[arg(long)]
        table: Option<PathBuf>,

        /// Instruction words.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Render register codes as `$name`.
    Reg {
        /// Register codes (0-31).
        #[arg(required = true)]
        codes: Vec<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(Config::from_path).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.general.trace);

    let ok = match cli.command {
        Commands::Classify { words } => report(&words, |input| classify_line(input)),
        Commands::Disasm { table, words } => {
            let table = match table {
                Some(path) => MnemonicTable::from_path(path),
                None => config.mnemonic_table(),
            };
            let table = match table {
                Ok(table) => table,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let dis = Disassembler::new(&table, config.disasm);
            report(&words, |input| disasm_line(&dis, input))
        }
        Commands::Reg { codes } => report(&codes, |&code| registers::render(code)),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` controls the filter unless tracing is forced on by the configuration.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs `render` on every input, printing results to stdout and failures to stderr.
///
/// Returns `false` if any input failed.
fn report<I: std::fmt::Display>(
    inputs: &[I],
    mut render: impl FnMut(&I) -> mdma_core::Result<String>,
) -> bool {
    let mut ok = true;
    for input in inputs {
        match render(input) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                tracing::debug!(%input, error = ?e, "rejected input");
                eprintln!("error: {input}: {e}");
                ok = false;
            }
        }
    }
    ok
}

/// Formats one `classify` output line: the input, then the decoded fields.
///
/// Surrounding whitespace (e.g. from a quoted shell argument) is dropped first.
fn classify_line(input: &str) -> mdma_core::Result<String> {
    let input = input.trim();
    let inst = word::parse_word(input)?;
    Ok(format!("{input}\t{}", decode(inst)))
}

/// Formats one `disasm` output line.
fn disasm_line<T: MnemonicLookup + ?Sized>(
    dis: &Disassembler<'_, T>,
    input: &str,
) -> mdma_core::Result<String> {
    let inst = word::parse_word(input.trim())?;
    Ok(format!("{inst:#010x}\t{}", dis.disassemble(inst)?))
}
