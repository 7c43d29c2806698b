// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use hixa::{ConfigRoot, SourceAnalysis, CONFIG_FILE_NAME};
use hixa_interpreter::{ErrorPrinter, Interpreter};
use log::{debug, LevelFilter};
use logger::Logger;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Print interpreter logging to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a Hixa program.
    Run {
        file: PathBuf,

        /// Print the tokens before running.
        #[arg(long)]
        show_tokens: bool,

        /// Print every top-level statement before running.
        #[arg(long)]
        show_ast: bool,
    },

    /// Only report lexical and syntax errors.
    Check {
        file: PathBuf,
    },
}

impl Commands {
    fn file(&self) -> &Path {
        match self {
            Self::Run { file, .. } => file,
            Self::Check { file } => file,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse_args();

    let config = match load_config(args.command.file()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            return ExitCode::from(1);
        }
    };

    let level = if args.verbose || config.log.debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level);

    match run(&args.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::from(1)
        }
    }
}

/// Reads `hixa.toml` from the directory of the program, falling back to
/// the defaults when there is none.
fn load_config(file: &Path) -> anyhow::Result<ConfigRoot> {
    let Some(path) = file.parent().map(|dir| dir.join(CONFIG_FILE_NAME)) else {
        return Ok(ConfigRoot::default());
    };

    if !path.exists() {
        return Ok(ConfigRoot::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

fn run(command: &Commands, config: &ConfigRoot) -> anyhow::Result<ExitCode> {
    let path = command.file();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let analysis = hixa::analyze(&source);
    debug!("Analyzed {} tokens into {} statements", analysis.tokens.len(), analysis.program.len());

    if let Commands::Run { show_tokens: true, .. } = command {
        for token in &analysis.tokens {
            println!("{}:{} {:?} {:?}", token.begin.line(), token.begin.column(), token.kind, token.lexeme);
        }
    }

    if let Commands::Run { show_ast: true, .. } = command {
        println!("{:#?}", analysis.program);
    }

    if analysis.has_errors() {
        report_diagnostics(path, &source, &analysis);
        return Ok(ExitCode::from(1));
    }

    match command {
        Commands::Check { .. } => {
            println!(
                "{}: {} tokens, {} statements",
                path.display(),
                analysis.tokens.len(),
                analysis.program.len(),
            );
            Ok(ExitCode::SUCCESS)
        }

        Commands::Run { .. } => {
            let mut interpreter = Interpreter::new(()).with_config(&config.interpreter);

            match interpreter.interpret(&analysis.program) {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(e) => {
                    eprintln!("{}: {}", "error".red().bold(), e.to_string().bold());
                    Ok(ExitCode::from(2))
                }
            }
        }
    }
}

fn report_diagnostics(path: &Path, source: &str, analysis: &SourceAnalysis) {
    for diagnostic in &analysis.diagnostics {
        ErrorPrinter::new(path, source, diagnostic.range(), diagnostic.message())
            .print();
    }

    let count = analysis.diagnostics.len();
    eprintln!("{count} {} found", if count == 1 { "problem" } else { "problems" });
}
