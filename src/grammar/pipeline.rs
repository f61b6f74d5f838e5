use super::first_follow::{FirstSets, FollowSets};
use super::ll1_parsing_table::ParsingTable;
use super::{Grammar, NameAllocator};

/// The two grammar snapshots the transformation produces. The input, the
/// factored and the final grammar all stay around as distinct values so
/// every intermediate stage can still be reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub factored: Grammar,
    pub final_grammar: Grammar,
}

/// Left-factors the grammar, then removes immediate left recursion.
/// Both stages draw fresh names from one shared allocator, so a name
/// introduced by factoring is never reused by the recursion rewrite.
pub fn transform(grammar: &Grammar) -> Transformed {
    let mut names = NameAllocator::for_grammar(grammar);
    let factored = grammar.left_factored(&mut names);
    let final_grammar = factored.without_left_recursion(&mut names);
    Transformed {
        factored,
        final_grammar,
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub first: FirstSets,
    pub follow: FollowSets,
    pub table: ParsingTable,
}

/// Runs FIRST, FOLLOW and table construction over the final grammar.
pub fn analyze(grammar: &Grammar, start: &str) -> Analysis {
    let first = grammar.first_sets();
    let follow = grammar.follow_sets(&first, start);
    let table = grammar.ll1_parsing_table(&first, &follow);
    Analysis {
        first,
        follow,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Symbol;

    fn t(name: &str) -> Symbol {
        Symbol::Terminal(name.to_string())
    }

    fn nt(name: &str) -> Symbol {
        Symbol::NonTerminal(name.to_string())
    }

    #[test]
    fn factoring_runs_before_recursion_removal() {
        let g = Grammar::parse("S -> A a | A b\nA -> c | d").unwrap();
        let out = transform(&g);

        assert_eq!(out.factored.productions("S"), &[vec![nt("A"), nt("S'")]]);
        // No left recursion anywhere, so the second stage changes nothing.
        assert_eq!(out.final_grammar, out.factored);
    }

    #[test]
    fn stages_share_the_name_allocator() {
        // Factoring takes S', so the recursion rewrite of the factored
        // S -> S x | y grammar must allocate S'' for its fresh rule.
        let g = Grammar::parse("S -> S x a | S x b").unwrap();
        let out = transform(&g);

        assert_eq!(
            out.factored.productions("S"),
            &[vec![nt("S"), t("x"), nt("S'")]]
        );
        assert_eq!(out.final_grammar.productions("S"), &[] as &[Vec<Symbol>]);
        assert_eq!(
            out.final_grammar.productions("S''"),
            &[
                vec![t("x"), nt("S'"), nt("S''")],
                vec![Symbol::Epsilon],
            ]
        );
    }

    #[test]
    fn analyze_builds_the_scenario_table() {
        let g = Grammar::parse("S -> A a | A b\nA -> c | d").unwrap();
        let out = transform(&g);
        let analysis = analyze(&out.final_grammar, "S");

        assert!(analysis.first["S'"].contains(&t("a")));
        assert!(analysis.follow["A"].contains(&t("b")));
        assert!(analysis.follow["S"].contains(&Symbol::End));
        assert_eq!(
            analysis.table.get("S", &t("c")),
            Some(&vec![nt("A"), nt("S'")])
        );
        assert!(analysis.table.is_ll1());
    }
}
