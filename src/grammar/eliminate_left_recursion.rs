use super::{Grammar, NameAllocator, Production, Symbol};

impl Grammar {
    /// Rewrites immediate left recursion: `A -> A α | β` becomes
    /// `A -> β A'` with `A' -> α A' | ε`. Indirect recursion (through
    /// another non-terminal) is left alone.
    pub fn without_left_recursion(&self, names: &mut NameAllocator) -> Grammar {
        let mut out = Grammar::new();

        for left in self.non_terminals() {
            let this = Symbol::NonTerminal(left.to_string());
            let mut recursive: Vec<Production> = Vec::new();
            let mut base: Vec<Production> = Vec::new();

            for production in self.productions(left) {
                if production.first() == Some(&this) {
                    recursive.push(production[1..].to_vec());
                } else {
                    base.push(production.clone());
                }
            }

            out.add_rule(left);
            if recursive.is_empty() {
                for production in base {
                    out.add_production(left, production);
                }
                continue;
            }

            let fresh = names.fresh(left);
            for mut production in base {
                production.push(Symbol::NonTerminal(fresh.clone()));
                out.add_production(left, production);
            }
            for mut alpha in recursive {
                alpha.push(Symbol::NonTerminal(fresh.clone()));
                out.add_production(&fresh, alpha);
            }
            out.add_production(&fresh, vec![Symbol::Epsilon]);
        }

        out
    }
}
