// src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod style_ref;
pub mod rewrite;

pub mod commands;
