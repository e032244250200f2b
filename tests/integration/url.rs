use predicates::prelude::*;

use crate::TestProject;

#[test]
fn test_url_for_module_and_asset_match() {
    let project = TestProject::new();

    let module = project.assetref().args(["url", "~/scripts/app"]).output().unwrap();
    let asset = project.assetref().args(["url", "scripts/app/ui.js"]).output().unwrap();

    assert!(module.status.success());
    assert_eq!(module.stdout, asset.stdout);
    assert!(String::from_utf8_lossy(&module.stdout).starts_with("/_assets/scripts/scripts/app_"));
}

#[test]
fn test_url_uses_manifest_prefix() {
    let project = TestProject::new();
    project.write_file(
        "assetref.toml",
        "[settings]\nurl_prefix = \"https://static.example.com\"\n\n\
         [[modules]]\npath = \"~/styles/site\"\nkind = \"stylesheet\"\nassets = [\"site.css\"]\n",
    );

    project
        .assetref()
        .args(["url", "~/styles/site"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://static.example.com/styles/styles/site_"));
}

#[test]
fn test_url_unknown_path_fails() {
    let project = TestProject::new();

    project
        .assetref()
        .args(["url", "~/scripts/missing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Cannot find an asset module containing the path \"~/scripts/missing\"",
        ));
}
