#[path = "../common/mod.rs"]
mod common;

mod optimizer_tests;
