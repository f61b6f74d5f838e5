use super::{Grammar, NameAllocator, Production, Symbol};

// Longest common prefix of two alternatives, symbol-wise.
fn common_prefix<'a>(a: &'a [Symbol], b: &[Symbol]) -> &'a [Symbol] {
    let len = a
        .iter()
        .zip(b.iter())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

impl Grammar {
    /// Left-factors every rule: when all alternatives of a non-terminal
    /// share a common prefix, the rule collapses to `A -> prefix A'` and
    /// the fresh `A'` carries the residual suffixes (`ε` for an empty
    /// suffix). Each rule is factored at most once; residual suffixes are
    /// not re-factored even if they still share a prefix.
    pub fn left_factored(&self, names: &mut NameAllocator) -> Grammar {
        let mut out = Grammar::new();

        for left in self.non_terminals() {
            let productions = self.productions(left);
            out.add_rule(left);

            if productions.len() < 2 {
                for production in productions {
                    out.add_production(left, production.clone());
                }
                continue;
            }

            let mut prefix: &[Symbol] = &productions[0];
            for production in &productions[1..] {
                prefix = common_prefix(prefix, production);
                if prefix.is_empty() {
                    break;
                }
            }

            if prefix.is_empty() {
                for production in productions {
                    out.add_production(left, production.clone());
                }
                continue;
            }

            let fresh = names.fresh(left);
            let mut factored: Production = prefix.to_vec();
            factored.push(Symbol::NonTerminal(fresh.clone()));
            out.add_production(left, factored);

            for production in productions {
                let suffix = &production[prefix.len()..];
                let residual = if suffix.is_empty() {
                    vec![Symbol::Epsilon]
                } else {
                    suffix.to_vec()
                };
                out.add_production(&fresh, residual);
            }
        }

        out
    }
}
