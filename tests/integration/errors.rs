use predicates::prelude::*;

use crate::TestProject;

#[test]
fn test_missing_manifest() {
    let project = TestProject::empty();

    project
        .assetref()
        .args(["url", "~/scripts/app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Bundle manifest not found"))
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn test_unknown_reference_in_page() {
    let project = TestProject::new();
    project.write_file("index.html", "<body>\n@reference ~/scripts/nope\n</body>\n");

    project
        .assetref()
        .args(["render", "index.html"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("~/scripts/nope"));
}

#[test]
fn test_invalid_directive() {
    let project = TestProject::new();
    project.write_file("index.html", "@include header.html\n@render head body\n");

    project
        .assetref()
        .args(["render", "index.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("@reference <path> [location]"));
}

#[test]
fn test_circular_manifest() {
    let project = TestProject::new();
    project.write_file(
        "assetref.toml",
        "[[modules]]\npath = \"~/a\"\nkind = \"script\"\nreferences = [\"~/b\"]\n\n\
         [[modules]]\npath = \"~/b\"\nkind = \"script\"\nreferences = [\"~/a\"]\n",
    );
    project.write_file("index.html", "@render\n@reference ~/a\n");

    project
        .assetref()
        .args(["render", "index.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency detected"));
}

#[test]
fn test_invalid_manifest() {
    let project = TestProject::new();
    project.write_file("assetref.toml", "[[modules]]\npath = \"~/a\"\nkind = \"script\"\nmedia = \"print\"\n");

    project
        .assetref()
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("media"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let project = TestProject::new();

    project.assetref().args(["-v", "-q", "list"]).assert().failure().code(2);
}

#[test]
fn test_url_reference_in_manifest() {
    let project = TestProject::new();
    project.write_file(
        "assetref.toml",
        "[[modules]]\npath = \"~/scripts/app\"\nkind = \"script\"\n\
         references = [\"https://cdn.example.com/jquery.js\"]\n",
    );
    project.write_file("index.html", "@render body\n@reference ~/scripts/app body\n");

    project
        .assetref()
        .args(["render", "index.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid bundle manifest"))
        .stderr(predicate::str::contains("https://cdn.example.com/jquery.js"));
}
