//! End-to-end behaviour of `JsonForge` with model files on disk.
use std::fs;
use std::path::Path;

use json_forge::{parse_json, stringify_json, Error, ForgeOptions, JsonForge, Language, ParseError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn options(models: &Path, name: &str) -> ForgeOptions {
    ForgeOptions {
        generate_models: true,
        models_path: models.to_path_buf(),
        interface_name: name.to_string(),
        ..ForgeOptions::default()
    }
}

fn single_model(files: &[std::path::PathBuf]) -> String {
    assert_eq!(files.len(), 1, "expected exactly one model file");
    fs::read_to_string(&files[0]).unwrap()
}

#[test]
fn invalid_json_fails_with_unexpected_token() {
    let err = JsonForge::default().parse_to_object(r#"{name: "John"}"#).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedToken { .. })), "{err:?}");
    assert!(err.to_string().contains("unexpected token"));
}

#[test]
fn parse_generates_a_typescript_model() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(options(tmp.path(), "User"));
    let parsed = forge.parse_to_object(r#"{"name": "John", "age": 30, "active": true}"#).unwrap();

    assert_eq!(parsed.model_files, vec![tmp.path().join("User.ts")]);
    assert_eq!(
        single_model(&parsed.model_files),
        "export interface User {\n  name: string;\n  age: number;\n  active: boolean;\n}"
    );
}

#[test]
fn stringify_generates_a_javascript_model() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(ForgeOptions {
        language: Language::JavaScript,
        ..options(tmp.path(), "Product")
    });
    let parsed = forge.parse_to_string(&json!({"id": 1, "name": "Product", "price": 99.99})).unwrap();
    assert!(parsed.model_files[0].to_string_lossy().ends_with(".js"));
    assert!(parsed.data.contains('\n'));
}

#[test]
fn quick_helpers() {
    let parsed = parse_json(r#"{"test": true}"#, ForgeOptions::default()).unwrap();
    assert_eq!(parsed.data, json!({"test": true}));

    let compact = ForgeOptions { prettify: false, ..ForgeOptions::default() };
    let out = stringify_json(&json!({"test": true}), compact).unwrap();
    assert_eq!(out.data, r#"{"test":true}"#);
}

#[test]
fn nested_objects() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(options(tmp.path(), "NestedData"));
    let parsed = forge
        .parse_to_string(&json!({"user": {"profile": {"name": "John", "age": 30}}}))
        .unwrap();
    let model = single_model(&parsed.model_files);
    assert_eq!(model, "\
export interface NestedDataUserProfile {
  name: string;
  age: number;
}

export interface NestedDataUser {
  profile: NestedDataUserProfile;
}

export interface NestedData {
  user: NestedDataUser;
}");
}

#[test]
fn deeply_nested_arrays_of_objects() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(options(tmp.path(), "ComplexData"));
    let data = json!({
        "company": {
            "departments": [{
                "deptId": 1,
                "name": "Engineering",
                "teams": [{"teamId": "t1", "members": [{"id": 1, "name": "Dev 1"}]}]
            }]
        }
    });
    let model = single_model(&forge.parse_to_string(&data).unwrap().model_files);
    for name in [
        "interface ComplexDataCompanyDepartmentsItem {",
        "interface ComplexDataCompanyDepartmentsItemTeamsItem {",
        "interface ComplexDataCompanyDepartmentsItemTeamsItemMembersItem {",
    ] {
        assert!(model.contains(name), "missing {name} in\n{model}");
    }
    assert!(model.contains("teams: ComplexDataCompanyDepartmentsItemTeamsItem[];"));
}

#[test]
fn mixed_structures() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(options(tmp.path(), "MixedData"));
    let data = json!({
        "project": {
            "id": "proj-1",
            "team": [{"memberId": 1, "name": "Alice", "skills": ["TypeScript", "React"]}],
            "budget": {"total": 100000, "breakdown": {"dev": 60000, "ops": 40000}}
        },
        "tags": ["important", "active"]
    });
    let model = single_model(&forge.parse_to_string(&data).unwrap().model_files);
    for needle in [
        "interface MixedDataProjectTeamItem {",
        "interface MixedDataProjectBudget {",
        "interface MixedDataProjectBudgetBreakdown {",
        "skills: string[];",
        "tags: string[];",
    ] {
        assert!(model.contains(needle), "missing {needle} in\n{model}");
    }
}

#[test]
fn javascript_models_with_nesting() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(ForgeOptions {
        language: Language::JavaScript,
        ..options(tmp.path(), "JsNested")
    });
    let data = json!({"items": [{"id": 1, "name": "Item 1"}], "metadata": {"version": "1.0"}});
    let model = single_model(&forge.parse_to_string(&data).unwrap().model_files);
    assert!(model.contains("@typedef {Object} JsNestedItemsItem"));
    assert!(model.contains("@typedef {Object} JsNestedMetadata"));
    assert!(model.contains("@property {Array<JsNestedItemsItem>} items"));
}

#[test]
fn representative_element_only() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(options(tmp.path(), "Root"));
    let model = single_model(&forge.parse_to_string(&json!({"items": [{"x": 1}, {"y": 2}]})).unwrap().model_files);
    assert!(model.contains("export interface RootItemsItem {\n  x: number;\n}"), "{model}");
    assert!(!model.contains("y:"));
}

#[test]
fn regenerating_overwrites_byte_identically() {
    let tmp = tempfile::tempdir().unwrap();
    let forge = JsonForge::new(options(tmp.path(), "Stable"));
    let data = json!({"b": {"c": [1]}, "a": [{"z": null}]});
    let first = single_model(&forge.parse_to_string(&data).unwrap().model_files);
    let second = single_model(&forge.parse_to_string(&data).unwrap().model_files);
    assert_eq!(first, second);
}
