//! PostgreSQL-backed tests; run with `cargo test -- --ignored`

pub mod store_test;
