use ahdb::tokenizer::{IdentifierRule, Token, Tokenizer};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};

/// Split SQL queries into classified tokens
#[derive(Parser, Debug)]
#[command(name = "ahdb-tokenize", version, about, long_about = None)]
pub struct Args {
    /// Queries to tokenize; without any, queries are read from stdin one per line
    pub queries: Vec<String>,

    /// How identifiers are recognized: `word` accepts digits, `strict` does not
    #[arg(long, default_value_t = IdentifierRule::Word)]
    pub identifier_rule: IdentifierRule,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log each tokenize call to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How tokens are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<Type>\t<value>` line per token
    Plain,
    /// Rust debug representation, one token per line
    Debug,
}

pub struct InputBuffer {
    buffer: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Reads one line, returning `false` at end of input
    pub fn read_input<R: BufRead>(&mut self, reader: &mut R) -> Result<bool> {
        self.buffer.clear();
        if reader.read_line(&mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.buffer = self.buffer.trim_end().to_string();
        Ok(true)
    }
}

pub fn print_prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "ahdb> ")?;
    out.flush()?;
    Ok(())
}

pub fn print_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    for token in tokens {
        match format {
            OutputFormat::Plain => writeln!(out, "{}", token)?,
            OutputFormat::Debug => writeln!(out, "{:?}", token)?,
        }
    }
    Ok(())
}

/// Handles one line of REPL input, returning `true` when the REPL should exit
pub fn handle_command<W: Write>(
    command: &str,
    tokenizer: &Tokenizer,
    format: OutputFormat,
    out: &mut W,
) -> Result<bool> {
    match command {
        ".exit" => Ok(true),
        cmd if cmd.trim().is_empty() => Ok(false),
        query => {
            print_tokens(out, &tokenizer.tokenize(query), format)?;
            Ok(false)
        }
    }
}

pub fn repl_mode<R: BufRead, W: Write>(
    tokenizer: &Tokenizer,
    format: OutputFormat,
    reader: &mut R,
    out: &mut W,
    prompt: bool,
) -> Result<()> {
    let mut input_buffer = InputBuffer::new();

    loop {
        if prompt {
            print_prompt(out)?;
        }
        if !input_buffer.read_input(reader)? {
            break Ok(());
        }
        if handle_command(&input_buffer.buffer, tokenizer, format, out)? {
            break Ok(());
        }
    }
}
