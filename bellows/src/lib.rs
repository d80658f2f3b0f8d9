#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod rank;
pub mod repl;
pub mod session;
pub mod text;
pub mod wiki;
