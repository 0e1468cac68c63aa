use ahdb::tokenizer::{Tokenizer, TokenizerConfig};
use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

pub mod cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    run(args)
}

pub fn run(args: cli::Args) -> Result<()> {
    let tokenizer = Tokenizer::new(TokenizerConfig {
        identifier_rule: args.identifier_rule,
        ..TokenizerConfig::default()
    });
    debug!("Identifier rule: {}", args.identifier_rule);

    let mut out = io::stdout().lock();
    if args.queries.is_empty() {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        return cli::repl_mode(&tokenizer, args.format, &mut stdin.lock(), &mut out, prompt);
    }

    for query in &args.queries {
        cli::print_tokens(&mut out, &tokenizer.tokenize(query), args.format)?;
    }
    Ok(())
}
