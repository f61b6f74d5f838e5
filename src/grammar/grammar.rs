use std::collections::{HashMap, HashSet};

use super::{END_MARK, EPSILON};

// The base unit in a grammar rule. Classification into Terminal/NonTerminal
// is always relative to one grammar snapshot (see `Grammar::classify`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(String),
    NonTerminal(String),
    Epsilon,
    End,
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::NonTerminal(name) => name.as_str(),
            Symbol::Epsilon => EPSILON,
            Symbol::End => END_MARK,
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

// The symbols of a single alternative. Never empty: an empty right-hand
// side is represented by a lone `Symbol::Epsilon`.
pub type Production = Vec<Symbol>;

/// A context-free grammar: rule keys in declaration order, each with its
/// ordered alternatives. Pipeline stages never mutate their input; each
/// produces a fresh `Grammar` snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grammar {
    order: Vec<String>,
    rules: HashMap<String, Vec<Production>>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `left` as a non-terminal, keeping declaration order.
    pub fn add_rule(&mut self, left: &str) {
        if !self.rules.contains_key(left) {
            self.order.push(left.to_string());
            self.rules.insert(left.to_string(), Vec::new());
        }
    }

    pub fn add_production(&mut self, left: &str, right: Production) {
        self.add_rule(left);
        self.rules.get_mut(left).unwrap().push(right);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Classifies a token against this snapshot: a name is a non-terminal
    /// iff it is a rule key here. The same name may classify differently
    /// against another snapshot.
    pub fn classify(&self, token: &str) -> Symbol {
        if token == EPSILON {
            Symbol::Epsilon
        } else if token == END_MARK {
            Symbol::End
        } else if self.contains(token) {
            Symbol::NonTerminal(token.to_string())
        } else {
            Symbol::Terminal(token.to_string())
        }
    }

    /// Non-terminal names in declaration order.
    pub fn non_terminals(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn productions(&self, left: &str) -> &[Production] {
        self.rules.get(left).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Terminal names in order of first appearance, scanning rules in
    /// declaration order. Excludes epsilon and the end-marker.
    pub fn terminals(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut terminals = Vec::new();
        for left in self.non_terminals() {
            for production in self.productions(left) {
                for symbol in production {
                    if let Symbol::Terminal(name) = symbol {
                        if seen.insert(name.as_str()) {
                            terminals.push(name.as_str());
                        }
                    }
                }
            }
        }
        terminals
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Allocates fresh non-terminal names for both transformation stages.
/// Seeded with every name of the source grammar so a fresh name can never
/// collide with an existing symbol or with another fresh name.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    taken: HashSet<String>,
}

impl NameAllocator {
    pub fn for_grammar(grammar: &Grammar) -> Self {
        let mut taken: HashSet<String> = HashSet::new();
        for left in grammar.non_terminals() {
            taken.insert(left.to_string());
            for production in grammar.productions(left) {
                for symbol in production {
                    taken.insert(symbol.name().to_string());
                }
            }
        }
        Self { taken }
    }

    /// Appends `'` to `base` until the name is unused, then reserves it.
    pub fn fresh(&mut self, base: &str) -> String {
        let mut name = format!("{}'", base);
        while self.taken.contains(&name) {
            name.push('\'');
        }
        self.taken.insert(name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_relative_to_snapshot() {
        let mut g = Grammar::new();
        g.add_production("S", vec![Symbol::Terminal("a".to_string())]);

        assert_eq!(g.classify("S"), Symbol::NonTerminal("S".to_string()));
        assert_eq!(g.classify("a"), Symbol::Terminal("a".to_string()));
        assert_eq!(g.classify(EPSILON), Symbol::Epsilon);
        assert_eq!(g.classify(END_MARK), Symbol::End);

        let other = Grammar::new();
        assert_eq!(other.classify("S"), Symbol::Terminal("S".to_string()));
    }

    #[test]
    fn declaration_order_is_kept() {
        let mut g = Grammar::new();
        g.add_production("S", vec![Symbol::Terminal("x".to_string())]);
        g.add_production("A", vec![Symbol::Terminal("y".to_string())]);
        g.add_production("S", vec![Symbol::Terminal("z".to_string())]);

        assert_eq!(g.non_terminals().collect::<Vec<_>>(), vec!["S", "A"]);
        assert_eq!(g.productions("S").len(), 2);
    }

    #[test]
    fn terminals_in_first_appearance_order() {
        let mut g = Grammar::new();
        g.add_production(
            "S",
            vec![
                Symbol::Terminal("b".to_string()),
                Symbol::NonTerminal("A".to_string()),
            ],
        );
        g.add_production("A", vec![Symbol::Terminal("a".to_string())]);
        g.add_production("A", vec![Symbol::Terminal("b".to_string())]);

        assert_eq!(g.terminals(), vec!["b", "a"]);
    }

    #[test]
    fn fresh_names_never_collide() {
        let mut g = Grammar::new();
        g.add_production("A", vec![Symbol::Terminal("a".to_string())]);
        g.add_production("A'", vec![Symbol::Terminal("b".to_string())]);

        let mut names = NameAllocator::for_grammar(&g);
        assert_eq!(names.fresh("A"), "A''");
        assert_eq!(names.fresh("A"), "A'''");
    }
}
