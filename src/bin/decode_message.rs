//! Decode a binary message (or a delimited stream of them) and print a text dump.
//!
//! Usage:
//!   decode_message --schema FILE [--schema FILE ...] --message FULL_NAME [--delimited] [FILE]
//!
//! Reads FILE, or stdin when absent. Schema import paths are the paths as given.

use anyhow::{bail, Context};
use protobind::dump::format_message;
use protobind::frame::decode_delimited_stream;
use protobind::{parse_schema, DescriptorPool, DispatchTable, Message};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut schemas = Vec::new();
    let mut message_name = None;
    let mut delimited = false;
    let mut input = None;
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--schema" => schemas.push(PathBuf::from(it.next().context("--schema needs a file")?)),
            "--message" => message_name = Some(it.next().context("--message needs a type name")?),
            "--delimited" => delimited = true,
            s if s.starts_with('-') => bail!("unknown option `{}`", s),
            _ => input = Some(PathBuf::from(arg)),
        }
    }
    let message_name = message_name.context("missing --message FULL_NAME")?;
    if schemas.is_empty() {
        bail!("missing --schema FILE");
    }

    let mut files = Vec::new();
    for path in &schemas {
        let source = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let name = path.to_string_lossy().replace('\\', "/");
        files.push(parse_schema(&name, &source)?);
    }
    let pool = DescriptorPool::build(files)?;
    let desc = pool
        .find_message(&message_name)
        .with_context(|| format!("no message named `{}`", message_name))?;
    let table = DispatchTable::from_descriptor(desc);

    let bytes = match &input {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    if delimited {
        let result = decode_delimited_stream(&table, &bytes)?;
        for (i, d) in result.messages.iter().enumerate() {
            println!("#{} [{}..{}] {}", i, d.byte_range.0, d.byte_range.1, format_message(&d.message, Some(&pool)));
        }
        for r in &result.removed {
            println!("removed [{}..{}]: {}", r.byte_range.0, r.byte_range.1, r.reason);
        }
    } else {
        let mut msg = Message::new(&table);
        msg.parse(&bytes)?;
        println!("{}", format_message(&msg, Some(&pool)));
    }
    Ok(())
}
