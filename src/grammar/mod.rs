pub mod eliminate_left_recursion;
pub mod first_follow;
pub mod grammar;
pub mod left_factoring;
pub mod ll1_parsing_table;
pub mod parse;
pub mod pipeline;
pub mod pretty_print;

pub use grammar::{Grammar, NameAllocator, Production, Symbol};
pub use pipeline::{analyze, transform, Analysis, Transformed};

pub const EPSILON: &str = "ε";
pub const END_MARK: &str = "$";
