//! CLI module for the byline command-line interface
//!
//! Argument parsing, logging setup and report rendering. The library does the
//! actual work; this layer only turns flags into a [`byline::Config`].

pub mod args;
pub mod commands;
