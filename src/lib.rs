extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{analyze, transform, Grammar};

/// Runs the whole pipeline over a textual grammar and bundles every
/// result (transformed grammars, FIRST/FOLLOW, table) as JSON.
#[wasm_bindgen]
pub fn ll1_to_json(grammar: &str) -> String {
    let raw = match Grammar::parse(grammar) {
        Ok(g) => g,
        Err(e) => return serde_json::json!({ "error": e.to_string() }).to_string(),
    };
    let start = match raw.resolve_start(None) {
        Ok(start) => start.to_string(),
        Err(e) => return serde_json::json!({ "error": e.to_string() }).to_string(),
    };

    let transformed = transform(&raw);
    let final_grammar = &transformed.final_grammar;
    let analysis = analyze(final_grammar, &start);

    serde_json::json!({
        "factored": transformed.factored.to_grammar_output(),
        "grammar": final_grammar.to_grammar_output(),
        "sets": final_grammar.to_sets_output(&analysis.first, &analysis.follow),
        "table": final_grammar.to_table_output(&analysis.table),
    })
    .to_string()
}
