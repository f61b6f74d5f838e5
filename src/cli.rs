use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Start symbol (default: the first rule's left side)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Sections to print (default: all)
    #[arg(short, long, value_enum)]
    pub emit: Vec<Emit>,

    /// Print in LaTeX format
    #[arg(short, long)]
    pub latex: bool,

    /// Print in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Fail when two productions claim the same table cell
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Emit {
    /// Grammar after left factoring and left-recursion removal
    Grammar,
    /// FIRST and FOLLOW sets
    Sets,
    /// LL(1) parsing table
    Table,
}
