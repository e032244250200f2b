use predicates::prelude::*;

use crate::TestProject;

const PAGE: &str = "\
<head>
@render head
</head>
<body>
@render body
@reference ~/scripts/app
@reference ~/styles/site
</body>
";

#[test]
fn test_render_prints_finalized_page() {
    let project = TestProject::new();
    project.write_file("index.html", PAGE);

    project
        .assetref()
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<head>\n<link href=\"/_assets/styles/styles/site_"))
        .stdout(predicate::str::contains("<script src=\"/_assets/scripts/scripts/lib_"))
        .stdout(predicate::str::contains("<script src=\"/_assets/scripts/scripts/app_"))
        .stdout(predicate::str::contains("__ASSETREF_PLACEHOLDER_").not())
        .stdout(predicate::str::ends_with("</body>\n"));
}

#[test]
fn test_render_debug_assets_with_prefix() {
    let project = TestProject::new();
    project.write_file("index.html", PAGE);

    project
        .assetref()
        .args(["render", "--debug-assets", "--url-prefix", "/static/", "index.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/static/asset/scripts/lib/jquery.js?"))
        .stdout(predicate::str::contains("/static/asset/scripts/app/app.js?"))
        .stdout(predicate::str::contains("/static/asset/styles/site/site.css?"))
        .stdout(predicate::str::contains("/_assets").not());
}

#[test]
fn test_render_to_output_file() {
    let project = TestProject::new();
    project.write_file("index.html", PAGE);

    project
        .assetref()
        .args(["render", "index.html", "--output", "rendered.html"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(project.path().join("rendered.html")).unwrap();
    assert!(written.starts_with("<head>\n<link href="));
    assert!(written.ends_with("</body>\n"));
}

#[test]
fn test_render_with_manifest_elsewhere() {
    let project = TestProject::empty();
    project.write_file("site/bundles.toml", assetref::test_utils::SAMPLE_MANIFEST);
    project.write_file("page.html", "@render body\n@reference https://cdn.example.com/a.js body\n");

    project
        .assetref()
        .args(["--manifest", "site/bundles.toml", "render", "page.html"])
        .assert()
        .success()
        .stdout("<script src=\"https://cdn.example.com/a.js\" type=\"text/javascript\"></script>\n");
}

#[test]
fn test_render_keeps_css_at_rules() {
    let project = TestProject::new();
    project.write_file(
        "print.html",
        "<style>\n@import url(base.css);\n@media print {\n  nav { display: none; }\n}\n</style>\n@render\n@reference ~/styles/print\n",
    );

    project
        .assetref()
        .args(["render", "print.html"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<style>\n@import url(base.css);\n@media print {\n"))
        .stdout(predicate::str::contains("media=\"print\"/>"));
}
