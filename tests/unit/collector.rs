//! Reference collector behavior through the public API.

use std::collections::HashSet;
use std::rc::Rc;

use assetref::container::ModuleContainer;
use assetref::core::{AssetError, Location};
use assetref::module::{ModuleInfo, ModuleRef, ScriptModule, StylesheetModule};
use assetref::test_utils::{collector_with, init_test_logging, sample_container};

fn paths(modules: &[ModuleRef]) -> Vec<String> {
    modules.iter().map(|m| m.path().to_string()).collect()
}

fn script(path: &str, references: &[&str]) -> ModuleRef {
    Rc::new(ScriptModule::new(
        ModuleInfo::new(path).with_assets(["index.js"]).with_references(references),
    ))
}

#[test]
fn repeated_references_register_once() {
    init_test_logging(None);
    let container = sample_container();
    let lib = container.find_module_containing_path("~/scripts/lib").unwrap();
    let (collector, _) = collector_with(container);

    for _ in 0..5 {
        collector.add_reference(lib.clone(), "body");
        collector.add_reference_path("~/scripts/lib/jquery.js", Some("body")).unwrap();
        collector.add_reference_path("SCRIPTS/LIB", None).unwrap();
    }

    assert_eq!(paths(&collector.get_items("body").unwrap()), ["~/scripts/lib"]);
}

#[test]
fn same_module_under_two_locations_registers_in_both() {
    let (collector, _) = collector_with(sample_container());

    collector.add_reference_path("~/scripts/lib", Some("head")).unwrap();
    collector.add_reference_path("~/scripts/lib", Some("body")).unwrap();

    assert_eq!(paths(&collector.get_items("head").unwrap()), ["~/scripts/lib"]);
    assert_eq!(paths(&collector.get_items("body").unwrap()), ["~/scripts/lib"]);
}

#[test]
fn preferred_location_is_used_when_none_given() {
    let (collector, _) = collector_with(sample_container());

    collector.add_reference_path("~/styles/site/site.css", None).unwrap();

    assert_eq!(paths(&collector.get_items("head").unwrap()), ["~/styles/site"]);
    assert!(collector.get_items(Location::Default).unwrap().is_empty());
}

#[test]
fn module_without_preferred_location_lands_in_default() {
    let (collector, _) = collector_with(sample_container());

    collector.add_reference_path("~/styles/print", None).unwrap();

    assert_eq!(paths(&collector.get_items("").unwrap()), ["~/styles/print"]);
}

#[test]
fn empty_location_yields_empty_items() {
    let (collector, _) = collector_with(sample_container());

    assert!(collector.get_items("nowhere").unwrap().is_empty());
    assert!(collector.get_items(Location::Default).unwrap().is_empty());
}

#[test]
fn unknown_path_is_not_found() {
    let (collector, _) = collector_with(sample_container());

    for path in ["~/scripts/unknown", "not a url", "ftp://files.example.com/a.js", "//cdn.example.com/a.js"] {
        let error = collector.add_reference_path(path, None).unwrap_err();
        assert!(
            matches!(error.downcast_ref::<AssetError>(), Some(AssetError::ModuleNotFound { .. })),
            "expected ModuleNotFound for {path}, got {error}"
        );
    }
    assert!(collector.referenced_locations().is_empty());
}

#[test]
fn absolute_url_becomes_external_module() {
    let (collector, tracker) = collector_with(sample_container());

    let head = collector.render("head");
    let body = collector.render("body");
    collector.add_reference_path("https://cdn.example.com/reset.css", Some("head")).unwrap();
    collector.add_reference_path("https://cdn.example.com/analytics.js", Some("body")).unwrap();

    let items = collector.get_items("head").unwrap();
    assert_eq!(paths(&items), ["https://cdn.example.com/reset.css"]);
    assert!(items[0].is_external());

    let html = tracker.replace_placeholders(&format!("{head}\n{body}")).unwrap();
    assert_eq!(
        html,
        "<link href=\"https://cdn.example.com/reset.css\" type=\"text/css\" rel=\"stylesheet\"/>\n\
         <script src=\"https://cdn.example.com/analytics.js\" type=\"text/javascript\"></script>"
    );
}

#[test]
fn external_module_without_location_uses_default() {
    let (collector, _) = collector_with(sample_container());

    collector.add_reference_path("https://cdn.example.com/analytics.js", None).unwrap();

    assert_eq!(collector.get_items(Location::Default).unwrap().len(), 1);
}

#[test]
fn render_then_reference_is_included_at_finalization() {
    let (collector, tracker) = collector_with(sample_container());

    let token = collector.render("body");
    let document = format!("<body>{token}</body>");
    assert_eq!(tracker.pending(), 1);

    let lib = collector.get_items("body").unwrap();
    assert!(lib.is_empty());
    collector.add_reference_path("~/scripts/lib", Some("body")).unwrap();

    let html = tracker.replace_placeholders(&document).unwrap();
    assert!(html.starts_with("<body><script src=\"/_assets/scripts/scripts/lib_"));
    assert!(html.ends_with("</script></body>"));
    assert!(!html.contains(&token));
    assert_eq!(tracker.pending(), 0);
}

#[test]
fn null_and_empty_location_share_a_bucket() {
    let (collector, tracker) = collector_with(sample_container());

    let first = collector.render(Location::from_option(None));
    let second = collector.render("");
    assert_ne!(first, second);

    collector.add_reference_path("~/scripts/lib", Some("")).unwrap();
    collector.add_reference_path("~/styles/print", None).unwrap();

    let html = tracker.replace_placeholders(&format!("{first}|{second}")).unwrap();
    let (a, b) = html.split_once('|').unwrap();
    assert_eq!(a, b);
    assert!(a.contains("scripts/lib_"));
    assert!(a.contains("media=\"print\""));
    assert_eq!(collector.rendered_locations(), HashSet::from([Location::Default]));
}

#[test]
fn resolve_url_is_stable() {
    let (collector, _) = collector_with(sample_container());

    let by_module = collector.resolve_url("~/scripts/app").unwrap();
    let by_asset = collector.resolve_url("scripts/app/ui.js").unwrap();
    assert_eq!(by_module, by_asset);
    assert_eq!(by_module, collector.resolve_url("~/scripts/app").unwrap());

    let error = collector.resolve_url("~/scripts/none").unwrap_err();
    assert!(matches!(
        error.downcast_ref::<AssetError>(),
        Some(AssetError::ModuleNotFound { .. })
    ));
}

#[test]
fn dependencies_precede_dependents() {
    let container = ModuleContainer::new(vec![
        script("~/a", &["~/b", "~/c"]),
        script("~/b", &["~/d"]),
        script("~/c", &["~/d"]),
        script("~/d", &[]),
        script("~/e", &[]),
    ])
    .unwrap();
    let (collector, _) = collector_with(container);

    collector.add_reference_path("~/e", Some("body")).unwrap();
    collector.add_reference_path("~/a", Some("body")).unwrap();

    assert_eq!(paths(&collector.get_items("body").unwrap()), ["~/e", "~/d", "~/b", "~/c", "~/a"]);
}

#[test]
fn cycle_fails_at_finalization() {
    let container =
        ModuleContainer::new(vec![script("~/a", &["~/b"]), script("~/b", &["~/a"])]).unwrap();
    let (collector, tracker) = collector_with(container);

    let token = collector.render("body");
    collector.add_reference_path("~/a", Some("body")).unwrap();

    let error = tracker.replace_placeholders(&token).unwrap_err();
    match error.downcast_ref::<AssetError>() {
        Some(AssetError::CircularDependency { chain }) => {
            assert_eq!(chain.first(), chain.last());
            assert!(chain.contains(&"~/a".to_string()));
            assert!(chain.contains(&"~/b".to_string()));
        }
        other => panic!("expected CircularDependency, got {other:?}"),
    }
}

#[test]
fn unresolved_reference_is_reported() {
    let container = ModuleContainer::new(vec![script("~/a", &["~/missing"])]).unwrap();
    let (collector, _) = collector_with(container);

    collector.add_reference_path("~/a", Some("body")).unwrap();

    let error = collector.get_items("body").unwrap_err();
    assert!(matches!(
        error.downcast_ref::<AssetError>(),
        Some(AssetError::UnresolvedReference { module, reference })
            if module == "~/a" && reference == "~/missing"
    ));
}

#[test]
fn stylesheet_media_is_rendered() {
    let container = ModuleContainer::new(vec![Rc::new(
        StylesheetModule::new(ModuleInfo::new("~/styles/screen").with_assets(["a.css"]))
            .with_media("screen"),
    ) as ModuleRef])
    .unwrap();
    let (collector, tracker) = collector_with(container);

    let token = collector.render("head");
    collector.add_reference_path("~/styles/screen/a.css", Some("head")).unwrap();

    let html = tracker.replace_placeholders(&token).unwrap();
    assert!(html.contains("media=\"screen\""));
}

#[test]
fn urls_differing_in_case_render_once() {
    let (collector, tracker) = collector_with(sample_container());

    let token = collector.render("body");
    collector.add_reference_path("https://CDN.example.com/a.js", Some("body")).unwrap();
    collector.add_reference_path("https://cdn.example.com/a.js", Some("body")).unwrap();

    assert_eq!(collector.get_items("body").unwrap().len(), 1);
    let html = tracker.replace_placeholders(&token).unwrap();
    assert_eq!(html.matches("<script").count(), 1);
}
