use std::io::BufRead;
use std::{fs, io};

use clap::Parser;

use ll1_prep::grammar::{analyze, transform, Grammar};

mod cli;
use cli::{Cli, Emit};

fn read_input(cli: &Cli) -> io::Result<String> {
    match &cli.file {
        Some(path) => fs::read_to_string(path),
        None => {
            let lines: Result<Vec<String>, _> = io::stdin().lock().lines().collect();
            Ok(lines?.join("\n"))
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let input = read_input(cli).map_err(|e| format!("failed to read grammar: {}", e))?;
    let raw = Grammar::parse(&input).map_err(|e| e.to_string())?;
    let start = raw
        .resolve_start(cli.start.as_deref())
        .map_err(|e| e.to_string())?
        .to_string();

    let transformed = transform(&raw);
    let final_grammar = &transformed.final_grammar;
    let analysis = analyze(final_grammar, &start);

    let emit = if cli.emit.is_empty() {
        vec![Emit::Grammar, Emit::Sets, Emit::Table]
    } else {
        cli.emit.clone()
    };

    for section in emit {
        match section {
            Emit::Grammar => {
                let factored = transformed.factored.to_grammar_output();
                let grammar = final_grammar.to_grammar_output();
                if cli.json {
                    println!("{}", factored.to_json());
                    println!("{}", grammar.to_json());
                } else if cli.latex {
                    println!("{}", factored.to_latex());
                    println!("{}", grammar.to_latex());
                } else {
                    println!("Grammar after Left Factoring:");
                    println!("{}", factored.to_plaintext());
                    println!();
                    println!("Grammar after Left Recursion Removal:");
                    println!("{}", grammar.to_plaintext());
                }
            }
            Emit::Sets => {
                let sets = final_grammar.to_sets_output(&analysis.first, &analysis.follow);
                if cli.json {
                    println!("{}", sets.to_json());
                } else if cli.latex {
                    println!("{}", sets.to_latex());
                } else {
                    println!("{}", sets.to_plaintext());
                }
            }
            Emit::Table => {
                let table = final_grammar.to_table_output(&analysis.table);
                if cli.json {
                    println!("{}", table.to_json());
                } else if cli.latex {
                    println!("{}", table.to_latex());
                } else {
                    println!("LL(1) Parsing Table:");
                    println!("{}", table.to_plaintext());
                }
            }
        }
    }

    if cli.strict && !analysis.table.is_ll1() {
        return Err(format!(
            "grammar is not LL(1): {} conflicting table cell(s)",
            analysis.table.conflicts().len()
        ));
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
