//! Integration test: extraction over fixture files.
//!
//! Uses sources under `tests/fixtures/` to verify names, roles, and the
//! recorded call and markup sites of real-looking component files.

use rag_core::{Dialect, FunctionDescriptor, Location, Role};
use rag_ts::{JsExtractor, LanguageExtractor};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn extract(name: &str) -> Vec<FunctionDescriptor> {
    let path = fixture(name);
    JsExtractor::new()
        .extract_file(&path, Dialect::from_path(&path))
        .expect("fixture should parse")
}

fn find<'a>(functions: &'a [FunctionDescriptor], name: &str) -> &'a FunctionDescriptor {
    functions
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no function named {name}"))
}

// ── Dashboard.tsx ──

#[test]
fn dashboard_functions_in_source_order() {
    let functions = extract("Dashboard.tsx");
    let names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        ["Dashboard", "UserCard", "useUser", "useBadge", "formatName"]
    );
}

#[test]
fn dashboard_roles() {
    let functions = extract("Dashboard.tsx");
    assert_eq!(find(&functions, "Dashboard").role, Role::Component);
    assert_eq!(find(&functions, "UserCard").role, Role::Component);
    assert_eq!(find(&functions, "useUser").role, Role::Hook);
    assert_eq!(find(&functions, "useBadge").role, Role::Hook);
    assert_eq!(find(&functions, "formatName").role, Role::Utility);
}

#[test]
fn component_effect_callback_is_excluded() {
    let functions = extract("Dashboard.tsx");
    let dashboard = find(&functions, "Dashboard");
    // Only the direct `axios.get` counts; the `fetch` lives inside the effect.
    assert_eq!(dashboard.api_calls, [Location::new(13, 16)]);
    assert_eq!(dashboard.location, Location::new(6, 16));
    assert_eq!(dashboard.jsx_returns, [Location::new(15, 9)]);
}

#[test]
fn memo_wrapped_component_has_implicit_markup() {
    let functions = extract("Dashboard.tsx");
    let card = find(&functions, "UserCard");
    assert!(card.api_calls.is_empty());
    assert_eq!(card.jsx_returns, [Location::new(18, 58)]);
}

#[test]
fn hooks_markup_and_calls() {
    let functions = extract("Dashboard.tsx");
    let use_user = find(&functions, "useUser");
    assert!(use_user.api_calls.is_empty());
    assert!(use_user.jsx_returns.is_empty());

    let use_badge = find(&functions, "useBadge");
    assert_eq!(use_badge.jsx_returns, [Location::new(32, 9)]);
}

// ── hooks.ts ──

#[test]
fn typescript_hooks_file() {
    let functions = extract("hooks.ts");
    let names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["useFetch", "load", "Loader", "user"]);

    assert!(find(&functions, "useFetch").api_calls.is_empty());
    assert_eq!(find(&functions, "load").api_calls, [Location::new(3, 22)]);
    assert_eq!(find(&functions, "Loader").api_calls, [Location::new(9, 39)]);

    let user = find(&functions, "user");
    assert_eq!(user.role, Role::Utility);
    assert_eq!(user.api_calls, [Location::new(12, 9)]);
}

// ── legacy.jsx ──

#[test]
fn jsx_fragments_and_implicit_returns() {
    let functions = extract("legacy.jsx");
    assert_eq!(find(&functions, "Header").jsx_returns, [Location::new(3, 4)]);
    assert_eq!(find(&functions, "useTitle").jsx_returns, [Location::new(9, 23)]);
    assert_eq!(find(&functions, "Footer").jsx_returns, [Location::new(13, 9)]);
}

#[test]
fn extraction_is_deterministic() {
    assert_eq!(extract("Dashboard.tsx"), extract("Dashboard.tsx"));
}
