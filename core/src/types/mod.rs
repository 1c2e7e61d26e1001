//! Core type definitions for fixture generation
//!
//! - [`FixtureSyntax`]: Transfer syntaxes a fixture can be encoded with
//! - [`Preamble`]: Presence of the 128-byte file preamble
//! - [`FixtureSpec`]: One syntax/preamble combination and its file name
//! - [`GeneratorConfig`]: Output directory and the combinations to generate

mod config;
mod enums;
mod fixture;

pub use config::GeneratorConfig;
pub use enums::{FixtureSyntax, Preamble, PREAMBLE_LENGTH};
pub use fixture::{FixtureSpec, FIXTURE_EXTENSION};
