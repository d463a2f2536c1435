//! `annotate` — mint a single annotation record.

use anyhow::Context;
use clap::Args;

use provenir_core::{Annotation, AnnotationKind};
use provenir_hash::HashAlgorithm;

/// Arguments for `provenir annotate`.
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Subject reference being annotated (e.g. a content address).
    #[arg(long)]
    pub key: String,

    /// Evidence hash algorithm: sha256, md5, or none.
    #[arg(long)]
    pub hash: HashAlgorithm,

    /// Originating node identity.
    #[arg(long)]
    pub host: String,

    /// Provenance mechanism: tpm, pki, tls, src, or mock.
    #[arg(long)]
    pub kind: AnnotationKind,

    /// Attach a signature to the minted record.
    #[arg(long)]
    pub signature: Option<String>,

    /// Attach a verifier verdict to the minted record.
    #[arg(long)]
    pub satisfied: Option<bool>,

    /// Pretty-print instead of emitting the compact wire text.
    #[arg(long)]
    pub pretty: bool,
}

/// Mint the record and print it to stdout.
pub fn run(args: AnnotateArgs) -> anyhow::Result<()> {
    let mut annotation = Annotation::new(args.key, args.hash, args.host, args.kind);
    if let Some(signature) = args.signature {
        annotation.set_signature(signature);
    }
    if let Some(satisfied) = args.satisfied {
        annotation.set_satisfied(satisfied);
    }
    tracing::debug!(id = %annotation.id, kind = %annotation.kind, "minted annotation");

    let text = if args.pretty {
        serde_json::to_string_pretty(&annotation).context("encoding annotation")?
    } else {
        annotation.to_json().context("encoding annotation")?
    };
    println!("{text}");
    Ok(())
}
