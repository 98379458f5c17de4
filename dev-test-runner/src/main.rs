//! Runs fixture documents through `json_forge` and prints what comes out.
//!
//! Not a test suite: a quick way to eyeball error messages and generated
//! declarations after touching the codec or the renderers.
use colored::Colorize;
use serde_json::{json, Value};

use json_forge::codegen::{generate, GenerateOptions};
use json_forge::{parse_json, ForgeOptions, Language, Report};

fn invalid_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("missing quotes around property", r#"{name: "John"}"#),
        ("trailing comma", r#"{"name": "John",}"#),
        ("single quotes", "{'name': 'John'}"),
        ("incomplete (missing closing brace)", r#"{"name": "John""#),
        ("plain text", "Hello World"),
        ("empty string", ""),
        ("undefined keyword", r#"{"name": undefined}"#),
        ("valid, for comparison", r#"{"name": "John", "age": 30}"#),
    ]
}

fn model_samples() -> Vec<(&'static str, Value)> {
    vec![
        ("UserData", json!({
            "users": [{"id": 1, "name": "John", "email": "john@example.com", "active": true}],
            "posts": [{"postId": 1, "title": "Hello", "views": 10}]
        })),
        ("AppConfig", json!({
            "app": {"name": "MyApp", "version": "1.0.0", "environment": "production"},
            "server": {"host": "localhost", "port": 3000, "ssl": true},
            "features": {"authentication": true, "logging": true, "caching": false}
        })),
        ("ApiResponse", json!({
            "status": "success",
            "data": {
                "items": [{"id": "a1", "name": "Widget", "price": 9.99, "attributes": {"color": "red", "size": "M"}}],
                "pagination": {"page": 1, "perPage": 20, "total": 1}
            },
            "errors": []
        })),
    ]
}

fn main() -> anyhow::Result<()> {
    eprintln!("{}", "—— invalid JSON ——".bold());
    for (label, src) in invalid_samples() {
        let report: Report<Value> = parse_json(src, ForgeOptions::default()).into();
        let status = if report.success { "ok".green() } else { "failed".red() };
        eprintln!("{status} {label}");
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    eprintln!("{}", "—— generated models ——".bold());
    for language in [Language::TypeScript, Language::JavaScript] {
        let opts = GenerateOptions { language, ..GenerateOptions::default() };
        for (name, value) in model_samples() {
            eprintln!("{} {name}.{}", "→".cyan(), language.extension());
            println!("{}\n", generate(&value, name, &opts)?);
        }
    }
    Ok(())
}
