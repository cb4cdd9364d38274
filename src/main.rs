// src/main.rs

pub mod commands;
pub mod rewrite;
pub mod style_ref;

use anyhow::Result;

fn main() -> Result<()> {
    commands::run_cli()
}
