pub mod api;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod extraction;
pub mod types;
pub mod writer;

pub use api::{FixtureGenerator, GeneratedFixture, Verification};
pub use cli::report::{GenerationReport, VerificationReport};
pub use error::{FixtureError, Result};
pub use extraction::{inspect_fixture, inspect_fixture_stream, FixtureReport, Mismatch};
pub use types::*;
pub use writer::{write_fixture, write_fixture_file};
