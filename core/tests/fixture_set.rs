use dcm_fixtures::{
    inspect_fixture, FixtureGenerator, FixtureSpec, FixtureSyntax, GeneratorConfig, Preamble,
};
use rstest::rstest;
use std::collections::BTreeSet;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn file_names(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_default_run_writes_expected_files() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        FixtureGenerator::new(GeneratorConfig::default().with_output_dir(temp_dir.path()));

    generator.generate().unwrap();

    let expected: BTreeSet<String> = [
        "ExplicitVRLittleEndian-NoPreamble.dcm",
        "ExplicitVRLittleEndian-Preamble.dcm",
        "ImplicitVRLittleEndian-NoPreamble.dcm",
        "ImplicitVRLittleEndian-Preamble.dcm",
        "ExplicitVRBigEndian-NoPreamble.dcm",
        "ExplicitVRBigEndian-Preamble.dcm",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    assert_eq!(file_names(temp_dir.path()), expected);
}

#[test]
fn test_deflated_run_writes_eight_files() {
    let temp_dir = TempDir::new().unwrap();
    let generator = FixtureGenerator::new(
        GeneratorConfig::default()
            .with_output_dir(temp_dir.path())
            .include_deflated(true),
    );

    let generated = generator.generate().unwrap();

    assert_eq!(generated.len(), 8);
    let names = file_names(temp_dir.path());
    assert!(names.contains("DeflatedExplicitVRLittleEndian-NoPreamble.dcm"));
    assert!(names.contains("DeflatedExplicitVRLittleEndian-Preamble.dcm"));
    assert!(generator.verify().unwrap().iter().all(|v| v.is_ok()));
}

#[test]
fn test_generated_files_verify() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        FixtureGenerator::new(GeneratorConfig::default().with_output_dir(temp_dir.path()));

    generator.generate().unwrap();
    let checks = generator.verify().unwrap();

    assert_eq!(checks.len(), 6);
    for check in &checks {
        assert!(check.is_ok(), "{}: {:?}", check.spec, check.mismatches);
    }
}

#[test]
fn test_regenerating_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        FixtureGenerator::new(GeneratorConfig::default().with_output_dir(temp_dir.path()));

    let first: Vec<Vec<u8>> = generator
        .generate()
        .unwrap()
        .iter()
        .map(|f| std::fs::read(&f.path).unwrap())
        .collect();
    let second: Vec<Vec<u8>> = generator
        .generate()
        .unwrap()
        .iter()
        .map(|f| std::fs::read(&f.path).unwrap())
        .collect();

    assert_eq!(first, second);
}

/// Each file, parsed back, reports what its name says
#[rstest]
#[case("ExplicitVRLittleEndian-Preamble.dcm")]
#[case("ExplicitVRLittleEndian-NoPreamble.dcm")]
#[case("ImplicitVRLittleEndian-Preamble.dcm")]
#[case("ImplicitVRLittleEndian-NoPreamble.dcm")]
#[case("ExplicitVRBigEndian-Preamble.dcm")]
#[case("ExplicitVRBigEndian-NoPreamble.dcm")]
fn test_file_reports_its_name(#[case] file_name: &str) {
    let temp_dir = TempDir::new().unwrap();
    FixtureGenerator::new(GeneratorConfig::default().with_output_dir(temp_dir.path()))
        .generate()
        .unwrap();

    let spec = FixtureSpec::parse_file_name(file_name).unwrap();
    let report = inspect_fixture(temp_dir.path().join(file_name)).unwrap();

    assert_eq!(report.syntax, Some(spec.syntax));
    assert_eq!(report.preamble, spec.preamble);
    assert_eq!(report.patient_name.as_deref(), file_name.strip_suffix(".dcm"));
}

#[test]
fn test_preamble_file_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let generated =
        FixtureGenerator::new(GeneratorConfig::default().with_output_dir(temp_dir.path()))
            .generate()
            .unwrap();

    for syntax in FixtureSyntax::default_active() {
        let size_of = |preamble: Preamble| {
            generated
                .iter()
                .find(|f| f.spec == FixtureSpec::new(syntax, preamble))
                .map(|f| f.size)
                .unwrap()
        };
        // preamble and magic code add 132 bytes; "NoPreamble" names are two
        // characters longer, and padding keeps the gap even
        assert_eq!(size_of(Preamble::Present) + 2, size_of(Preamble::Absent) + 132);
    }
}

#[test]
fn test_no_preamble_files_open_with_meta_group() {
    let temp_dir = TempDir::new().unwrap();
    let generated =
        FixtureGenerator::new(GeneratorConfig::default().with_output_dir(temp_dir.path()))
            .generate()
            .unwrap();

    for fixture in generated.iter().filter(|f| f.spec.preamble == Preamble::Absent) {
        let bytes = std::fs::read(&fixture.path).unwrap();
        assert_eq!(&bytes[..6], b"\x02\x00\x00\x00UL", "{}", fixture.spec);
    }
}

#[test]
fn test_check_only_flags_corrupted_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default().with_output_dir(temp_dir.path());
    FixtureGenerator::new(config.clone()).generate().unwrap();

    let corrupted = FixtureSpec::new(FixtureSyntax::ImplicitVRLittleEndian, Preamble::Absent);
    std::fs::write(temp_dir.path().join(corrupted.file_name()), b"garbage").unwrap();

    // a fresh generator that only reads, as with --check-only
    let checks = FixtureGenerator::new(config).verify().unwrap();
    let failed: Vec<FixtureSpec> = checks
        .iter()
        .filter(|c| !c.is_ok())
        .map(|c| c.spec)
        .collect();

    assert_eq!(checks.len(), 6);
    assert_eq!(failed, vec![corrupted]);
}

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dcm-fixtures"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_binary_check_only_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    // nothing generated yet: every file is missing
    let output = run_binary(&[dir, "--check-only"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(file_names(temp_dir.path()).is_empty());

    let output = run_binary(&[dir, "--verify"]);
    assert!(output.status.success());
    assert_eq!(file_names(temp_dir.path()).len(), 6);

    let output = run_binary(&[dir, "--check-only"]);
    assert!(output.status.success());

    std::fs::write(
        temp_dir.path().join("ExplicitVRBigEndian-Preamble.dcm"),
        b"garbage",
    )
    .unwrap();
    let output = run_binary(&[dir, "--check-only"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ExplicitVRBigEndian-Preamble.dcm"));
    assert!(stdout.contains("Passed: 5/6"));
}
