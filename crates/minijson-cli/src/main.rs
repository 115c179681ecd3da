//! `minijson` CLI — parse, validate, and analyze JSON files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat JSON to canonical compact text (stdin → stdout)
//! echo '{"name": "Alice", "age": 30}' | minijson parse
//!
//! # Parse from file to file
//! minijson parse -i data.json -o canonical.json
//!
//! # Pretty-print instead of compact output
//! minijson parse --pretty -i data.json
//!
//! # Validate without printing the document
//! minijson check -i data.json
//!
//! # Show document statistics
//! minijson stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minijson_core::Value;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "minijson",
    version,
    about = "Minimal JSON parser and serializer CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and print the canonical serialized form
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the output instead of the compact form
        #[arg(long)]
        pretty: bool,
    },
    /// Validate JSON without printing the document
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show document statistics (value counts, nesting depth, sizes)
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            pretty,
        } => {
            let text = read_input(input.as_deref())?;
            let value = minijson_core::parse(&text).context("Failed to parse JSON")?;
            let rendered = if pretty {
                // Pretty rendering goes through the serde bridge; numeric
                // formatting follows serde_json in this mode.
                serde_json::to_string_pretty(&value)?
            } else {
                minijson_core::stringify(&value).context("Failed to serialize value")?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            minijson_core::parse(&text).context("Invalid JSON")?;
            println!("OK");
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let value = minijson_core::parse(&text).context("Failed to parse JSON")?;
            let canonical =
                minijson_core::stringify(&value).context("Failed to serialize value")?;
            let stats = Stats::collect(&value);
            println!("Input size:      {} bytes", text.len());
            println!("Canonical size:  {} bytes", canonical.len());
            println!("Max depth:       {}", stats.max_depth);
            println!("Objects:         {}", stats.objects);
            println!("Arrays:          {}", stats.arrays);
            println!("Strings:         {}", stats.strings);
            println!("Numbers:         {}", stats.numbers);
            println!("Booleans:        {}", stats.booleans);
            println!("Nulls:           {}", stats.nulls);
        }
    }

    Ok(())
}

/// Per-kind value counts and the deepest nesting level of one document.
#[derive(Default)]
struct Stats {
    objects: usize,
    arrays: usize,
    strings: usize,
    numbers: usize,
    booleans: usize,
    nulls: usize,
    max_depth: usize,
}

impl Stats {
    fn collect(value: &Value) -> Self {
        let mut stats = Stats::default();
        stats.visit(value, 1);
        stats
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match value {
            Value::Null => self.nulls += 1,
            Value::Bool(_) => self.booleans += 1,
            Value::Number(_) => self.numbers += 1,
            Value::String(_) => self.strings += 1,
            Value::Array(elements) => {
                self.arrays += 1;
                for element in elements {
                    self.visit(element, depth + 1);
                }
            }
            Value::Object(members) => {
                self.objects += 1;
                for (_, member) in members {
                    self.visit(member, depth + 1);
                }
            }
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
