use std::collections::HashMap;

use super::first_follow::{FirstSets, FollowSets};
use super::{Grammar, Production, Symbol};

/// A displaced table entry: `discarded` had claimed the cell before a
/// later production of the same non-terminal overwrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub non_terminal: String,
    pub lookahead: Symbol,
    pub discarded: Production,
}

/// The LL(1) predictive parsing table. Cell assignment is last-write-wins
/// over productions in rule order; every overwrite that discards a
/// different production is kept in the conflict ledger so callers can be
/// strict about non-LL(1) grammars or keep the permissive behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsingTable {
    entries: HashMap<(String, Symbol), Production>,
    conflicts: Vec<Conflict>,
}

impl ParsingTable {
    fn insert(&mut self, non_terminal: &str, lookahead: Symbol, production: &Production) {
        let previous = self
            .entries
            .insert((non_terminal.to_string(), lookahead.clone()), production.clone());
        if let Some(discarded) = previous {
            if discarded != *production {
                self.conflicts.push(Conflict {
                    non_terminal: non_terminal.to_string(),
                    lookahead,
                    discarded,
                });
            }
        }
    }

    pub fn get(&self, non_terminal: &str, lookahead: &Symbol) -> Option<&Production> {
        self.entries
            .get(&(non_terminal.to_string(), lookahead.clone()))
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }
}

impl Grammar {
    /// Builds the predictive table: each production lands in the cells of
    /// FIRST(rhs) \ {ε}, and additionally in the cells of FOLLOW(A) when
    /// its right-hand side can derive ε.
    pub fn ll1_parsing_table(&self, first: &FirstSets, follow: &FollowSets) -> ParsingTable {
        let mut table = ParsingTable::default();

        for left in self.non_terminals() {
            for production in self.productions(left) {
                let first_alpha = self.first_of_sequence(production, first);
                for symbol in &first_alpha {
                    if !symbol.is_epsilon() {
                        table.insert(left, symbol.clone(), production);
                    }
                }
                if first_alpha.contains(&Symbol::Epsilon) {
                    if let Some(set) = follow.get(left) {
                        for symbol in set {
                            table.insert(left, symbol.clone(), production);
                        }
                    }
                }
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(name: &str) -> Symbol {
        Symbol::Terminal(name.to_string())
    }

    fn nt(name: &str) -> Symbol {
        Symbol::NonTerminal(name.to_string())
    }

    #[test]
    fn cells_follow_first_of_rhs() {
        let g = Grammar::parse("S -> A S'\nS' -> a | b\nA -> c | d").unwrap();
        let first = g.first_sets();
        let follow = g.follow_sets(&first, "S");
        let table = g.ll1_parsing_table(&first, &follow);

        let s_rhs = vec![nt("A"), nt("S'")];
        assert_eq!(table.get("S", &t("c")), Some(&s_rhs));
        assert_eq!(table.get("S", &t("d")), Some(&s_rhs));
        assert_eq!(table.get("S'", &t("a")), Some(&vec![t("a")]));
        assert_eq!(table.get("S'", &t("b")), Some(&vec![t("b")]));
        assert_eq!(table.get("A", &t("c")), Some(&vec![t("c")]));
        assert_eq!(table.get("A", &t("d")), Some(&vec![t("d")]));
        assert_eq!(table.get("S", &t("a")), None);
        assert!(table.is_ll1());
    }

    #[test]
    fn epsilon_production_lands_in_follow_cells() {
        let g = Grammar::parse("S -> A b\nA -> a | ε").unwrap();
        let first = g.first_sets();
        let follow = g.follow_sets(&first, "S");
        let table = g.ll1_parsing_table(&first, &follow);

        // FOLLOW(A) = {b}, so A's ε-production fills the b cell.
        assert_eq!(table.get("A", &t("b")), Some(&vec![Symbol::Epsilon]));
        assert_eq!(table.get("A", &t("a")), Some(&vec![t("a")]));
        assert!(table.is_ll1());
    }

    #[test]
    fn end_marker_cell_via_follow_of_start() {
        let g = Grammar::parse("S -> a S | ε").unwrap();
        let first = g.first_sets();
        let follow = g.follow_sets(&first, "S");
        let table = g.ll1_parsing_table(&first, &follow);

        assert_eq!(table.get("S", &Symbol::End), Some(&vec![Symbol::Epsilon]));
        assert_eq!(table.get("S", &t("a")), Some(&vec![t("a"), nt("S")]));
    }

    #[test]
    fn overwrite_is_recorded_and_last_write_wins() {
        // FIRST of both alternatives contains a; the grammar is not LL(1).
        let g = Grammar::parse("S -> a b | a c").unwrap();
        let first = g.first_sets();
        let follow = g.follow_sets(&first, "S");
        let table = g.ll1_parsing_table(&first, &follow);

        assert_eq!(table.get("S", &t("a")), Some(&vec![t("a"), t("c")]));
        assert!(!table.is_ll1());
        assert_eq!(
            table.conflicts(),
            &[Conflict {
                non_terminal: "S".to_string(),
                lookahead: t("a"),
                discarded: vec![t("a"), t("b")],
            }]
        );
    }

    #[test]
    fn rewriting_same_cell_with_same_production_is_not_a_conflict() {
        // FIRST(B) and FOLLOW(A) overlap on a, so A's only production is
        // written to the (A, a) cell twice, once via FIRST and once via
        // FOLLOW. Only B, which genuinely clashes, reaches the ledger.
        let g = Grammar::parse("S -> A a\nA -> B\nB -> a | ε").unwrap();
        let first = g.first_sets();
        let follow = g.follow_sets(&first, "S");
        let table = g.ll1_parsing_table(&first, &follow);

        assert_eq!(table.get("A", &t("a")), Some(&vec![nt("B")]));
        assert_eq!(table.get("B", &t("a")), Some(&vec![Symbol::Epsilon]));
        assert_eq!(table.conflicts().len(), 1);
        assert_eq!(table.conflicts()[0].non_terminal, "B");
        assert_eq!(table.conflicts()[0].discarded, vec![t("a")]);
    }
}
