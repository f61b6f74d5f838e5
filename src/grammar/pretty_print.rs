use crowbook_text_processing::escape;
use itertools::Itertools;
use serde::Serialize;

use super::first_follow::{FirstSets, FollowSets, SymbolSet};
use super::ll1_parsing_table::ParsingTable;
use super::{Grammar, Symbol, END_MARK, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self, left_width: usize) -> String {
        let rights = self.rights.iter().map(|right| right.join(" ")).join(" | ");
        format!("{:>width$} -> {}", self.left, rights, width = left_width)
    }

    pub fn to_latex(&self) -> String {
        let rights = self
            .rights
            .iter()
            .map(|right| right.iter().map(|s| escape::tex(*s)).join(" \\ "))
            .join(" \\mid ");
        format!("{} & \\rightarrow & {}", escape::tex(self.left), rights).replace(EPSILON, "\\epsilon")
    }
}

#[derive(Debug, Serialize)]
pub struct GrammarOutput<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl GrammarOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        let left_width = self
            .productions
            .iter()
            .map(|p| p.left.len())
            .max()
            .unwrap_or(0);
        self.productions
            .iter()
            .map(|p| p.to_plaintext(left_width))
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.productions.iter().map(|p| p.to_latex()))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .join("\\\\\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

#[derive(Debug, Serialize)]
struct SymbolSetsRow<'a> {
    name: &'a str,
    first: Vec<&'a str>,
    follow: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct SymbolSetsOutput<'a> {
    rows: Vec<SymbolSetsRow<'a>>,
}

impl SymbolSetsOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        let firsts = self
            .rows
            .iter()
            .map(|row| format!("FIRST({}) = {{ {} }}", row.name, row.first.join(", ")));
        let follows = self
            .rows
            .iter()
            .map(|row| format!("FOLLOW({}) = {{ {} }}", row.name, row.follow.join(", ")));
        firsts.chain(std::iter::once(String::new())).chain(follows).join("\n")
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .rows
            .iter()
            .map(|row| {
                format!(
                    "{} & {} & {}",
                    escape::tex(row.name),
                    escape::tex(row.first.join(", ")).replace(EPSILON, "$\\epsilon$"),
                    escape::tex(row.follow.join(", "))
                )
            })
            .join("\\\\\n");

        "\\begin{tabular}{c|c|c}\n".to_string()
            + "Symbol & First & Follow\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

#[derive(Debug, Serialize)]
struct TableRow<'a> {
    left: &'a str,
    cells: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ConflictOutput<'a> {
    left: &'a str,
    lookahead: &'a str,
    discarded: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct TableOutput<'a> {
    terminals: Vec<&'a str>,
    rows: Vec<TableRow<'a>>,
    conflicts: Vec<ConflictOutput<'a>>,
}

impl TableOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        let mut header: Vec<String> = vec![String::new()];
        header.extend(self.terminals.iter().map(|t| t.to_string()));
        let mut output: Vec<Vec<String>> = vec![header];
        for row in &self.rows {
            let mut line: Vec<String> = vec![row.left.to_string()];
            line.extend(row.cells.iter().cloned());
            output.push(line);
        }

        let mut width = vec![0; self.terminals.len() + 1];
        for j in 0..output[0].len() {
            width[j] = output.iter().map(|line| line[j].len()).max().unwrap();
        }
        let mut text = output
            .iter()
            .map(|line| {
                line.iter()
                    .enumerate()
                    .map(|(i, s)| format!("{:>width$}", s, width = width[i]))
                    .join(" | ")
            })
            .join("\n");

        for conflict in &self.conflicts {
            text.push_str(&format!(
                "\nconflict: {} on {} discarded {}",
                conflict.left,
                conflict.lookahead,
                conflict.discarded.join(" ")
            ));
        }
        text
    }

    pub fn to_latex(&self) -> String {
        let header = std::iter::once(String::new())
            .chain(
                self.terminals
                    .iter()
                    .map(|t| format!("\\text{{{}}}", escape::tex(*t))),
            )
            .join(" & ");

        let body = self
            .rows
            .iter()
            .map(|row| {
                std::iter::once(escape::tex(row.left).to_string())
                    .chain(row.cells.iter().map(|cell| escape::tex(cell.as_str()).to_string()))
                    .join(" & ")
            })
            .join("\\\\\n");

        format!(
            "\\[\\begin{{array}}{{c{}}}\n{}\\\\\\hline\n{}\n\\end{{array}}\\]",
            "|l".repeat(self.terminals.len()),
            header,
            body
        )
        .replace(EPSILON, "\\epsilon")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

fn sorted_names(set: Option<&SymbolSet>) -> Vec<&str> {
    let mut names: Vec<&str> = set
        .map(|s| s.iter().map(Symbol::name).collect())
        .unwrap_or_default();
    names.sort_unstable();
    names
}

impl Grammar {
    pub fn to_grammar_output(&self) -> GrammarOutput {
        let productions = self
            .non_terminals()
            .map(|left| ProductionOutput {
                left,
                rights: self
                    .productions(left)
                    .iter()
                    .map(|production| production.iter().map(Symbol::name).collect())
                    .collect(),
            })
            .collect();
        GrammarOutput { productions }
    }

    pub fn to_sets_output<'a>(
        &'a self,
        first: &'a FirstSets,
        follow: &'a FollowSets,
    ) -> SymbolSetsOutput<'a> {
        let rows = self
            .non_terminals()
            .map(|name| SymbolSetsRow {
                name,
                first: sorted_names(first.get(name)),
                follow: sorted_names(follow.get(name)),
            })
            .collect();
        SymbolSetsOutput { rows }
    }

    pub fn to_table_output<'a>(&'a self, table: &'a ParsingTable) -> TableOutput<'a> {
        let mut terminals = self.terminals();
        terminals.push(END_MARK);

        let lookaheads: Vec<Symbol> = terminals
            .iter()
            .map(|&name| {
                if name == END_MARK {
                    Symbol::End
                } else {
                    Symbol::Terminal(name.to_string())
                }
            })
            .collect();

        let rows = self
            .non_terminals()
            .map(|left| TableRow {
                left,
                cells: lookaheads
                    .iter()
                    .map(|lookahead| match table.get(left, lookahead) {
                        Some(production) => production.iter().map(Symbol::name).join(" "),
                        None => String::new(),
                    })
                    .collect(),
            })
            .collect();

        let conflicts = table
            .conflicts()
            .iter()
            .map(|conflict| ConflictOutput {
                left: conflict.non_terminal.as_str(),
                lookahead: conflict.lookahead.name(),
                discarded: conflict.discarded.iter().map(Symbol::name).collect(),
            })
            .collect();

        TableOutput {
            terminals,
            rows,
            conflicts,
        }
    }
}
