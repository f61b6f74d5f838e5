use thiserror::Error;

use super::{Grammar, Production};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrammarError {
    #[error("line {0}: too many \"->\"")]
    ExtraArrow(usize),
    #[error("line {0}: left side contains whitespace")]
    SpaceInLeft(usize),
    #[error("line {0}: empty left side")]
    EmptyLeft(usize),
    #[error("line {0}: no rule to continue")]
    DanglingAlternative(usize),
    #[error("grammar has no rules")]
    Empty,
    #[error("start symbol {0} has no rule")]
    UnknownStart(String),
}

impl Grammar {
    /// Reads the textual form `NonTerminal -> alt1 | alt2`, one rule per
    /// line, symbols separated by whitespace, `ε` as the empty production.
    /// A line starting with `|` continues the previous rule.
    ///
    /// Construction is two-phase: all left sides are registered first so
    /// that right-hand tokens classify against the complete key set.
    pub fn parse(text: &str) -> Result<Self, GrammarError> {
        let mut g = Self::new();

        let mut raw_rules: Vec<(String, &str)> = Vec::new();
        let mut previous_left: Option<String> = None;

        for (i, line) in text.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(GrammarError::ExtraArrow(i + 1));
            }
            let (left, rights) = if parts.len() == 2 {
                let left = parts[0].trim();
                if left.is_empty() {
                    return Err(GrammarError::EmptyLeft(i + 1));
                }
                if left.split_whitespace().count() != 1 {
                    return Err(GrammarError::SpaceInLeft(i + 1));
                }
                (left.to_string(), parts[1])
            } else {
                let rest = parts[0].trim();
                let Some(rest) = rest.strip_prefix('|') else {
                    return Err(GrammarError::DanglingAlternative(i + 1));
                };
                match &previous_left {
                    Some(left) => (left.clone(), rest),
                    None => return Err(GrammarError::DanglingAlternative(i + 1)),
                }
            };

            g.add_rule(&left);
            previous_left = Some(left.clone());
            raw_rules.push((left, rights));
        }

        for (left, rights) in raw_rules {
            for alternative in rights.split('|') {
                let production: Production = alternative
                    .split_whitespace()
                    .map(|token| g.classify(token))
                    .collect();
                if !production.is_empty() {
                    g.add_production(&left, production);
                }
            }
        }

        Ok(g)
    }

    /// Picks the start symbol: the requested one if it names a rule,
    /// otherwise the first declared non-terminal.
    pub fn resolve_start(&self, requested: Option<&str>) -> Result<&str, GrammarError> {
        match requested {
            Some(name) => self
                .non_terminals()
                .find(|nt| *nt == name)
                .ok_or_else(|| GrammarError::UnknownStart(name.to_string())),
            None => self.non_terminals().next().ok_or(GrammarError::Empty),
        }
    }
}
