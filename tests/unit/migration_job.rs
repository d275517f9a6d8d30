use anyhow::Result;
use pachctl::migration::{JobArtifact, JobDescription, MigrationRequest, image_reference};
use pachctl::reconcile::ResolvedVersions;
use pachctl::version::Version;
use serde_json::Value;

fn request(namespace: &str) -> MigrationRequest {
    let own = Version::new(1, 5, 0).with_additional("-rc1");
    MigrationRequest::new(
        ResolvedVersions {
            from: "1.4.8".to_string(),
            to: own.pretty_no_additional(),
        },
        image_reference("pachyderm", &own),
        namespace,
    )
}

#[test]
fn test_job_file_is_a_valid_batch_job() -> Result<()> {
    let job = JobDescription::for_migration(&request("pach"));
    let artifact = JobArtifact::write(&job)?;

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(artifact.path())?)?;
    assert_eq!(parsed["apiVersion"], "batch/v1");
    assert_eq!(parsed["kind"], "Job");
    assert_eq!(parsed["metadata"]["name"], "pach-migration");
    assert_eq!(parsed["metadata"]["namespace"], "pach");
    assert_eq!(parsed["metadata"]["labels"]["suite"], "pachyderm");

    let pod = &parsed["spec"]["template"]["spec"];
    assert_eq!(pod["restartPolicy"], "OnFailure");
    assert_eq!(pod["containers"][0]["name"], "migration");
    assert_eq!(pod["containers"][0]["image"], "pachyderm/pachd:1.5.0-rc1");
    assert_eq!(
        pod["containers"][0]["command"],
        serde_json::json!(["/pachd", "--migrate=1.4.8-1.5.0"])
    );
    Ok(())
}

#[test]
fn test_identical_requests_serialize_identically() -> Result<()> {
    let first = JobDescription::for_migration(&request("default")).to_canonical_json()?;
    let second = JobDescription::for_migration(&request("default")).to_canonical_json()?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_artifact_removed_on_drop() -> Result<()> {
    let artifact = JobArtifact::write(&JobDescription::for_migration(&request("default")))?;
    let path = artifact.path().to_path_buf();
    assert!(path.exists());

    drop(artifact);
    assert!(!path.exists());
    Ok(())
}
