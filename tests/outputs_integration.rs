//! Integration tests driving the public library API the way a Rust plugin
//! would: context in, outputs and artifact out.

use std::collections::BTreeMap;
use std::fs;

use ci_plugin_env::artifact::{write_plugin_artifact_file, RegistryType};
use ci_plugin_env::context::Pipeline;
use ci_plugin_env::error::Error;
use ci_plugin_env::outputs::Outputs;
use tempfile::TempDir;

fn env_for(dir: &TempDir, pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    let mut env: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (var, file) in [
        ("DRONE_OUTPUT", "output.env"),
        ("HARNESS_OUTPUT_SECRET_FILE", "secret.out"),
        ("ERROR_METADATA_FILE", "metadata.env"),
    ] {
        env.insert(
            var.to_string(),
            dir.path().join(file).to_string_lossy().into_owned(),
        );
    }
    env
}

#[test]
fn test_plugin_round_trip() {
    let dir = TempDir::new().unwrap();
    let env = env_for(
        &dir,
        &[
            ("DRONE_REPO", "octocat/app"),
            ("DRONE_TAG", "v1.2.3"),
            ("DRONE_SEMVER", "1.2.3"),
        ],
    );

    let pipeline = Pipeline::from_env(&env);
    let version = pipeline.sem_ver.parse().unwrap();
    let tags = vec![pipeline.build.tag.clone(), format!("{}.{}", version.major, version.minor)];

    let outputs = Outputs::new(&env);
    outputs.set_output("IMAGE", &pipeline.repo.slug).unwrap();
    outputs.set_output("TAGS", &tags.join(",")).unwrap();
    outputs.set_secret("REGISTRY_TOKEN", "s3cr3t").unwrap();

    let artifact = dir.path().join("artifacts").join("docker.json");
    write_plugin_artifact_file(
        RegistryType::Docker,
        &artifact,
        "https://index.docker.io/v1/",
        &pipeline.repo.slug,
        "sha256:0123",
        &tags,
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("output.env")).unwrap(),
        "IMAGE=octocat/app\nTAGS=v1.2.3,1.2\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("secret.out")).unwrap(),
        "REGISTRY_TOKEN s3cr3t\n"
    );
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&artifact).unwrap()).unwrap();
    assert_eq!(json["data"]["images"][1]["image"], "octocat/app:1.2");
}

#[test]
fn test_error_metadata_after_failed_step() {
    let dir = TempDir::new().unwrap();
    let env = env_for(&dir, &[]);
    let outputs = Outputs::new(&env);

    outputs
        .set_error_metadata("connection refused", "ECONNREFUSED", "network")
        .unwrap();
    outputs
        .set_error_metadata("connection reset", "ECONNRESET", "network")
        .unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("metadata.env")).unwrap(),
        "ERROR_MESSAGE=connection reset\nERROR_CODE=ECONNRESET\nERROR_CATEGORY=network\n"
    );
}

#[test]
fn test_missing_variable_names_it() {
    let env: BTreeMap<String, String> = BTreeMap::new();
    let err = Outputs::new(&env).delete_secret("TOKEN").unwrap_err();

    assert!(matches!(err, Error::Config { ref var } if var == "HARNESS_OUTPUT_SECRET_FILE"));
    assert!(format!("{}", err).contains("HARNESS_OUTPUT_SECRET_FILE"));
}
