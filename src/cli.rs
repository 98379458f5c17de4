//! CLI: parse | stringify | types
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;
use tracing::{info, warn};

use json_forge::codegen::generate;
use json_forge::lower::capitalize;
use json_forge::{codec, writer, ForgeOptions, ForgeOptionsPatch, JsonForge, Language, Report, UntypedPolicy};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// parse, validate and re-encode JSON, and infer TypeScript / JSDoc declarations from it
#[derive(Parser, Debug)]
#[command(name = "json-forge", version)]
pub struct CommandLineInterface {
    /// JSON options file (camelCase keys, e.g. {"interfaceName": "User"})
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// parse each input and print a `{success, data, modelFiles, error}` report
    Parse(ParseOut),
    /// re-encode a JSON document
    Stringify(StringifyOut),
    /// infer and emit type declarations
    Types(TypesOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal paths, quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
struct ModelSettings {
    /// declaration language
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// top-level type name
    #[arg(long)]
    root_type: Option<String>,

    /// omit `export` / `module.exports`
    #[arg(long)]
    no_export: bool,

    /// how to type empty arrays
    #[arg(long, value_enum)]
    untyped: Option<UntypedPolicy>,

    /// maximum object nesting depth
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(clap::Parser, Debug)]
struct ParseOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    model_settings: ModelSettings,

    /// write a model file for every parsed document
    #[arg(long)]
    generate_models: bool,

    /// directory for generated model files
    #[arg(long)]
    models_path: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct StringifyOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// single-line output
    #[arg(long)]
    compact: bool,
}

#[derive(clap::Parser, Debug)]
struct TypesOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    model_settings: ModelSettings,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document.
    #[arg(long)]
    jq_expr: Option<String>,

    /// write one model file per input into this directory (stdout if omitted)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
}

/// One loaded input document.
struct Source {
    label: String,
    stem: Option<String>,
    text: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<Source>> {
        let mut out = Vec::new();
        for raw in &self.input {
            if raw == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                out.push(Source { label: "<stdin>".to_string(), stem: None, text });
                continue;
            }
            for path in resolve_file_path_patterns([raw])? {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read source file {}", path.display()))?;
                out.push(Source {
                    label: path.display().to_string(),
                    stem: path.file_stem().map(|s| s.to_string_lossy().to_string()),
                    text,
                });
            }
        }
        Ok(out)
    }
}

impl ModelSettings {
    fn patch(&self) -> ForgeOptionsPatch {
        ForgeOptionsPatch {
            language: self.language,
            interface_name: self.root_type.clone(),
            export_models: self.no_export.then_some(false),
            untyped: self.untyped,
            max_depth: self.max_depth,
            ..ForgeOptionsPatch::default()
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        let base = match &self.config {
            Some(path) => ForgeOptions::from_file(path)?,
            None => ForgeOptions::default(),
        };
        match &self.cmd {
            Command::Parse(target) => target.run(base),
            Command::Stringify(target) => target.run(base),
            Command::Types(target) => target.run(base),
        }
    }
}

impl ParseOut {
    fn run(&self, base: ForgeOptions) -> Result<()> {
        let mut patch = self.model_settings.patch();
        patch.models_path = self.models_path.clone();
        if self.generate_models {
            patch.generate_models = Some(true);
        }
        let forge = JsonForge::new(base.with(patch));

        let mut failures = 0usize;
        for source in self.input_settings.load()? {
            let report = Report::from(forge.parse_to_object(&source.text));
            let status = if report.success {
                "✓".green()
            } else {
                failures += 1;
                "✗".red()
            };
            eprintln!("{status} {}", source.label);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        if failures > 0 {
            bail!("{failures} input(s) failed to parse");
        }
        Ok(())
    }
}

impl StringifyOut {
    fn run(&self, base: ForgeOptions) -> Result<()> {
        let prettify = base.prettify && !self.compact;
        for source in self.input_settings.load()? {
            let value = codec::parse_value(&source.text)
                .with_context(|| format!("invalid JSON in {}", source.label))?;
            println!("{}", codec::stringify(&value, prettify)?);
        }
        Ok(())
    }
}

impl TypesOut {
    fn run(&self, base: ForgeOptions) -> Result<()> {
        let options = base.with(self.model_settings.patch());
        let sources = self.input_settings.load()?;
        let single = sources.len() == 1;

        let mut jobs = Vec::with_capacity(sources.len());
        for source in &sources {
            let name = match (&source.stem, single) {
                (Some(stem), false) => type_name_from_stem(stem),
                _ => options.interface_name.clone(),
            };
            let value = self.select(source)?;
            jobs.push((source.label.as_str(), name, value));
        }

        // every document is independent, so generate them in parallel
        let gen_opts = options.generate_options();
        let models = jobs
            .par_iter()
            .map(|(label, name, value)| {
                generate(value, name, &gen_opts)
                    .map(|src| (name.as_str(), src))
                    .with_context(|| format!("failed to generate declarations for {label}"))
            })
            .collect::<Result<Vec<_>>>()?;

        match self.out_dir.as_deref() {
            Some(dir) => {
                for (name, src) in &models {
                    let path = writer::model_path(dir, name, options.language);
                    writer::write_model_file(&path, src)?;
                    eprintln!("{} {}", "✓".green(), path.display());
                }
            }
            None => {
                let docs: Vec<&str> = models.iter().map(|(_, src)| src.as_str()).collect();
                println!("{}", docs.join("\n\n"));
            }
        }
        info!(documents = models.len(), "done");
        Ok(())
    }

    /// Decode one input, then apply the JSON pointer and the jq filter.
    fn select(&self, source: &Source) -> Result<Value> {
        let mut value = codec::parse_value(&source.text)
            .with_context(|| format!("invalid JSON in {}", source.label))?;

        if let Some(pointer) = self.json_pointer.as_deref() {
            value = value
                .pointer(pointer)
                .cloned()
                .with_context(|| format!("JSON pointer {pointer} matched nothing in {}", source.label))?;
        }

        if let Some(jq_expr) = self.jq_expr.as_deref() {
            let outputs = json_forge::jq_exec::run_jaq(jq_expr, &value)
                .with_context(|| format!("failed to apply jq expression to {}", source.label))?;
            let count = outputs.len();
            let Some(first) = outputs.into_iter().next() else {
                bail!("jq expression produced no output for {}", source.label);
            };
            if count > 1 {
                warn!(input = %source.label, outputs = count, "jq produced several documents; typing the first one");
            }
            value = first;
        }
        Ok(value)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// `user-data` → `UserData`
fn type_name_from_stem(stem: &str) -> String {
    let name: String = stem
        .split(|c: char| !c.is_alphanumeric())
        .map(capitalize)
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) || name.is_empty() {
        format!("T{name}")
    } else {
        name
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(Path::new(pattern).to_path_buf());
        }
    }

    Ok(out)
}
