//! `inspect` — parse an annotation document and summarize it.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use provenir_core::{Annotation, AnnotationList};

/// Arguments for `provenir inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Document to read; omit or pass `-` for stdin.
    pub path: Option<PathBuf>,
}

/// Parse the document and print a per-record summary.
pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let text = read_input(&args)?;
    let annotations = parse_document(&text)?;
    tracing::debug!(count = annotations.len(), "parsed annotation document");

    for annotation in &annotations {
        println!("{}", summarize(annotation));
    }
    println!("{} annotation(s)", annotations.len());
    Ok(())
}

fn read_input(args: &InspectArgs) -> anyhow::Result<String> {
    match &args.path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// A document is either one record or an `{"items":[...]}` envelope; the
/// envelope key decides which decoder runs.
fn parse_document(text: &str) -> anyhow::Result<Vec<Annotation>> {
    let value: serde_json::Value =
        serde_json::from_str(text).context("document is not valid JSON")?;
    let is_envelope = value
        .as_object()
        .is_some_and(|object| object.contains_key("items"));

    if is_envelope {
        let list = AnnotationList::from_json(text).context("decoding annotation list")?;
        Ok(list.into_iter().collect())
    } else {
        let annotation = Annotation::from_json(text).context("decoding annotation")?;
        Ok(vec![annotation])
    }
}

fn summarize(annotation: &Annotation) -> String {
    let signed = if annotation.signature.is_some() {
        "signed"
    } else {
        "unsigned"
    };
    let verdict = match annotation.is_satisfied {
        Some(true) => "satisfied",
        Some(false) => "not satisfied",
        None => "unverified",
    };
    format!(
        "{}  kind={} hash={} host={} key={} [{signed}, {verdict}] at {}",
        annotation.id,
        annotation.kind,
        annotation.hash,
        annotation.host,
        annotation.key,
        annotation.timestamp,
    )
}
