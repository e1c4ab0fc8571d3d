//! Generate Rust bindings for a unit of schema files.
//!
//! Usage:
//!   protobind-gen --out DIR [--root DIR] [--param P] [--unit-files N] SCHEMA...
//!
//! Every SCHEMA is loaded into one descriptor pool; import paths are the file paths
//! relative to `--root` (default: current directory). The first N files (default: all)
//! form the unit being generated, and the first of them owns `generated.rs`. The rest
//! are dependencies, which must be listed in the `crate_mapping` file named by the
//! parameter string.
//!
//! Options:
//!   --param P        Generator parameter, e.g. `kind=native,crate_mapping=map.txt`
//!   --unit-files N   Number of leading SCHEMA files that belong to the unit
//!
//! The level of diagnostics is taken from RUST_LOG (default: info).

use anyhow::{bail, Context};
use protobind::generator::{generate_with, GeneratorContext, Options};
use protobind::{parse_schema, DescriptorPool};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct Args {
    out: PathBuf,
    root: PathBuf,
    param: String,
    unit_files: Option<usize>,
    schemas: Vec<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut out = None;
    let mut root = PathBuf::from(".");
    let mut param = String::new();
    let mut unit_files = None;
    let mut schemas = Vec::new();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" | "-o" => out = Some(PathBuf::from(it.next().context("--out needs a directory")?)),
            "--root" => root = PathBuf::from(it.next().context("--root needs a directory")?),
            "--param" => param = it.next().context("--param needs a value")?,
            "--unit-files" => {
                let n = it.next().context("--unit-files needs a count")?;
                unit_files = Some(n.parse().with_context(|| format!("bad --unit-files value `{}`", n))?);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            s if s.starts_with('-') => bail!("unknown option `{}`", s),
            _ => schemas.push(PathBuf::from(arg)),
        }
    }
    let Some(out) = out else {
        bail!("missing --out DIR");
    };
    if schemas.is_empty() {
        bail!("no schema files given");
    }
    Ok(Args {
        out,
        root,
        param,
        unit_files,
        schemas,
    })
}

fn import_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut files = Vec::with_capacity(args.schemas.len());
    for path in &args.schemas {
        let source = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        files.push(parse_schema(&import_path(&args.root, path), &source)?);
    }
    let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
    let unit_len = args.unit_files.unwrap_or(names.len());
    if unit_len == 0 || unit_len > names.len() {
        bail!("--unit-files must be between 1 and {}", names.len());
    }
    let pool = DescriptorPool::build(files)?;

    let options = Options::parse(&args.param)?;
    let unit: Vec<&str> = names[..unit_len].iter().map(String::as_str).collect();
    let ctx = GeneratorContext::new(&pool, &unit, options)?;
    let generated = generate_with(&ctx)?;
    generated.write_to(&args.out)?;
    for path in generated.paths() {
        tracing::info!(path = %args.out.join(path).display(), "wrote");
    }
    Ok(())
}

fn print_help() {
    println!("protobind-gen {}", protobind::version::GENERATOR_VERSION);
    println!();
    println!("USAGE:");
    println!("    protobind-gen --out DIR [--root DIR] [--param P] [--unit-files N] SCHEMA...");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args().and_then(run);
    if let Err(e) = result {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}
