use clap::Parser;
use dcm_fixtures::cli::{Cli, OutputFormat};
use dcm_fixtures::{
    FixtureGenerator, GeneratedFixture, GenerationReport, Verification, VerificationReport,
};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let generator = FixtureGenerator::new(cli.config());
    let config = generator.config();
    info!(
        "Fixture set: {} syntaxes x {} preamble states in {}",
        config.syntaxes.len(),
        config.preambles.len(),
        config.output_dir.display()
    );

    let generated = if cli.check_only {
        Vec::new()
    } else {
        match generator.generate() {
            Ok(generated) => generated,
            Err(e) => {
                error!("Failed to generate fixtures: {}", e);
                eprintln!("Error: Failed to generate fixtures: {}", e);
                process::exit(1);
            }
        }
    };

    let verifications = if cli.verify || cli.check_only {
        match generator.verify() {
            Ok(verifications) => verifications,
            Err(e) => {
                error!("Failed to verify fixtures: {}", e);
                eprintln!("Error: Failed to verify fixtures: {}", e);
                process::exit(1);
            }
        }
    } else {
        Vec::new()
    };

    output_results(&generated, &verifications, cli.format);

    if verifications.iter().any(|v| !v.is_ok()) {
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn output_results(
    generated: &[GeneratedFixture],
    verifications: &[Verification],
    format: OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            if !generated.is_empty() {
                println!("{}", GenerationReport::new(generated));
            }
            if !verifications.is_empty() {
                println!("{}", VerificationReport::new(verifications));
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(generated, verifications) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(
    generated: &[GeneratedFixture],
    verifications: &[Verification],
) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct RunJson<'a> {
        generated: &'a [GeneratedFixture],
        verifications: &'a [Verification],
    }

    serde_json::to_string_pretty(&RunJson {
        generated,
        verifications,
    })
}
