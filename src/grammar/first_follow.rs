use std::collections::{HashMap, HashSet};

use super::{Grammar, Symbol};

pub type SymbolSet = HashSet<Symbol>;
pub type FirstSets = HashMap<String, SymbolSet>;
pub type FollowSets = HashMap<String, SymbolSet>;

impl Grammar {
    /// FIRST of a symbol sequence: left-to-right scan, stopping at the
    /// first symbol that cannot derive ε. Used per production by the FIRST
    /// solver and on whole right-hand sides by the table builder.
    pub fn first_of_sequence(&self, symbols: &[Symbol], first: &FirstSets) -> SymbolSet {
        let mut out = SymbolSet::new();
        for symbol in symbols {
            match symbol {
                Symbol::Epsilon => {
                    out.insert(Symbol::Epsilon);
                    return out;
                }
                Symbol::NonTerminal(name) => match first.get(name.as_str()) {
                    Some(set) => {
                        out.extend(set.iter().filter(|s| !s.is_epsilon()).cloned());
                        if !set.contains(&Symbol::Epsilon) {
                            return out;
                        }
                    }
                    // No entry means the name is not a rule of this
                    // snapshot; it behaves like a terminal.
                    None => {
                        out.insert(symbol.clone());
                        return out;
                    }
                },
                terminal => {
                    out.insert(terminal.clone());
                    return out;
                }
            }
        }
        // Every symbol derived ε (or the sequence was empty).
        out.insert(Symbol::Epsilon);
        out
    }

    /// Computes FIRST for every non-terminal by full-pass iteration to a
    /// fixed point. Sets only grow within a finite universe, so the loop
    /// terminates.
    pub fn first_sets(&self) -> FirstSets {
        let mut first: FirstSets = self
            .non_terminals()
            .map(|nt| (nt.to_string(), SymbolSet::new()))
            .collect();

        let mut changed = true;
        while changed {
            changed = false;
            for left in self.non_terminals() {
                for production in self.productions(left) {
                    let derived = self.first_of_sequence(production, &first);
                    let set = first.get_mut(left).unwrap();
                    for symbol in derived {
                        changed |= set.insert(symbol);
                    }
                }
            }
        }

        first
    }

    /// Computes FOLLOW for every non-terminal, seeding FOLLOW(start) with
    /// the end-marker and iterating to a fixed point.
    pub fn follow_sets(&self, first: &FirstSets, start: &str) -> FollowSets {
        let mut follow: FollowSets = self
            .non_terminals()
            .map(|nt| (nt.to_string(), SymbolSet::new()))
            .collect();
        if let Some(set) = follow.get_mut(start) {
            set.insert(Symbol::End);
        }

        let mut changed = true;
        while changed {
            changed = false;
            for left in self.non_terminals() {
                for production in self.productions(left) {
                    for (i, symbol) in production.iter().enumerate() {
                        let Symbol::NonTerminal(b) = symbol else {
                            continue;
                        };

                        let mut pending = SymbolSet::new();
                        let mut inherits = true;
                        for next in &production[i + 1..] {
                            match next {
                                Symbol::Epsilon => continue,
                                Symbol::NonTerminal(name) => match first.get(name.as_str()) {
                                    Some(set) => {
                                        pending.extend(
                                            set.iter().filter(|s| !s.is_epsilon()).cloned(),
                                        );
                                        if !set.contains(&Symbol::Epsilon) {
                                            inherits = false;
                                            break;
                                        }
                                    }
                                    None => {
                                        pending.insert(next.clone());
                                        inherits = false;
                                        break;
                                    }
                                },
                                terminal => {
                                    pending.insert(terminal.clone());
                                    inherits = false;
                                    break;
                                }
                            }
                        }
                        // Remainder exhausted or entirely ε-derivable:
                        // FOLLOW(left) flows into FOLLOW(b).
                        if inherits {
                            if let Some(set) = follow.get(left) {
                                pending.extend(set.iter().cloned());
                            }
                        }

                        let Some(set) = follow.get_mut(b.as_str()) else {
                            continue;
                        };
                        for symbol in pending {
                            changed |= set.insert(symbol);
                        }
                    }
                }
            }
        }

        follow
    }
}
