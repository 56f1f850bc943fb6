//! Scalar evaluators
//!
//! Each evaluator pairs a field name with an annotation and checks one
//! value against it, clause by clause, stopping at the first clause that
//! is malformed or not satisfied.
//!
//! | clause  | integer                  | text                                   |
//! |---------|--------------------------|----------------------------------------|
//! | `len:N` | invalid syntax           | byte length `== N`, `N >= 0`           |
//! | `in:…`  | equals one literal       | substring of one literal               |
//! | `min:N` | `value >= N`             | byte length `>= N`                     |
//! | `max:N` | `value <= N`             | byte length `<= N`                     |

mod argument;
pub mod integer;
pub mod text;

pub use integer::IntegerRules;
pub use text::TextRules;
