pub mod reader;
pub mod tags;

pub use reader::{
    detect_preamble, inspect_fixture, inspect_fixture_stream, FixtureReport, Mismatch,
};
pub use tags::*;
