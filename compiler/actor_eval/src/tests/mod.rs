//! Operator tests kept out of `operators.rs` to keep that file readable.
