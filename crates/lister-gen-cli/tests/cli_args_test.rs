use clap::Parser;
use lister_gen::{ConfigError, GroupVersion};
use lister_gen_cli::Cli;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("lister-gen").chain(args.iter().copied()))
        .expect("Failed to parse arguments")
}

#[test]
fn test_all_flags_bind_to_config() {
    let cli = parse(&[
        "--output-dir",
        "pkg/client/listers",
        "--output-pkg",
        "example.com/project/pkg/client/listers",
        "--go-header-file",
        "hack/boilerplate.go.txt",
        "--plural-exceptions",
        "Endpoints:Endpoints,Chassis:Chassis",
        "--included-types-overrides",
        "apps/v1=Deployment,StatefulSet",
        "--included-types-overrides",
        "core/v1=Pod",
    ]);

    let config = cli.generation_config().expect("Config should be valid");

    assert_eq!(config.output_dir.to_str(), Some("pkg/client/listers"));
    assert_eq!(config.output_pkg, "example.com/project/pkg/client/listers");
    assert_eq!(
        config.header_file().and_then(|p| p.to_str()),
        Some("hack/boilerplate.go.txt")
    );
    assert_eq!(config.plural_exceptions.len(), 2);
    assert_eq!(config.plural_namer().pluralize("Endpoints"), "Endpoints");

    let apps_v1 = GroupVersion::new("apps", "v1");
    let core_v1 = GroupVersion::new("", "v1");
    assert_eq!(config.included_types_overrides.len(), 2);
    assert!(config.includes_type(&apps_v1, "StatefulSet", false));
    assert!(!config.includes_type(&apps_v1, "DaemonSet", true));
    assert!(config.includes_type(&core_v1, "Pod", false));
    assert!(!config.includes_type(&core_v1, "Service", true));
}

#[test]
fn test_missing_output_dir_is_reported() {
    let cli = parse(&["--output-pkg", "example.com/listers"]);
    assert_eq!(
        cli.generation_config(),
        Err(ConfigError::MissingOutputDirectory)
    );
}

#[test]
fn test_missing_output_pkg_is_reported() {
    let cli = parse(&["--output-dir", "out"]);
    assert_eq!(
        cli.generation_config(),
        Err(ConfigError::MissingOutputPackage)
    );
}

#[test]
fn test_empty_output_pkg_counts_as_missing() {
    let cli = parse(&["--output-dir", "out", "--output-pkg", ""]);
    assert_eq!(
        cli.generation_config(),
        Err(ConfigError::MissingOutputPackage)
    );
}

#[test]
fn test_empty_output_dir_counts_as_missing() {
    let cli = parse(&["--output-dir", "", "--output-pkg", "example.com/listers"]);
    assert_eq!(
        cli.generation_config(),
        Err(ConfigError::MissingOutputDirectory)
    );
}

#[test]
fn test_empty_header_file_means_no_header() {
    let cli = parse(&[
        "--output-dir",
        "out",
        "--output-pkg",
        "example.com/listers",
        "--go-header-file",
        "",
    ]);

    let config = cli.generation_config().expect("Config should be valid");
    assert!(config.header_file().is_none());
}

#[test]
fn test_malformed_override_rejected_before_validation() {
    // Both required flags are missing, but the bad token is reported first.
    let cli = parse(&["--included-types-overrides", "apps/v1"]);
    assert!(matches!(
        cli.generation_config(),
        Err(ConfigError::MalformedOverride { .. })
    ));
}

#[test]
fn test_malformed_plural_exception_rejected() {
    let cli = parse(&[
        "--output-dir",
        "out",
        "--output-pkg",
        "example.com/listers",
        "--plural-exceptions",
        "Endpoints",
    ]);
    assert_eq!(
        cli.generation_config(),
        Err(ConfigError::MalformedPluralException {
            entry: "Endpoints".to_string()
        })
    );
}

#[test]
fn test_repeated_override_last_wins() {
    let cli = parse(&[
        "--output-dir",
        "out",
        "--output-pkg",
        "example.com/listers",
        "--included-types-overrides",
        "apps/v1=Deployment",
        "--included-types-overrides",
        "apps/v1=ReplicaSet",
    ]);

    let config = cli.generation_config().expect("Config should be valid");
    let apps_v1 = GroupVersion::new("apps", "v1");
    assert_eq!(
        config.included_types_overrides.get(&apps_v1),
        Some(&["ReplicaSet".to_string()][..])
    );
}

#[test]
fn test_verbosity_sets_log_level() {
    assert_eq!(parse(&[]).log_level(), "warn");
    assert_eq!(parse(&["-v"]).log_level(), "info");
    assert_eq!(parse(&["-vv"]).log_level(), "debug");
    assert_eq!(parse(&["-vvvv"]).log_level(), "trace");
}
