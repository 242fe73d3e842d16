use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_vcf::{Record, VcfRecords, VcfWriter};

/// Stream a VCF file and write its records back out.
#[derive(Parser, Debug)]
#[command(name = "vcf-cursor", version, about)]
struct Args {
    /// Input VCF, optionally gzip-compressed
    input: PathBuf,

    /// Drop records whose CHROM, POS and ALT repeat the previous record (input must be sorted)
    #[arg(long)]
    unique: bool,

    /// Do not write the header lines
    #[arg(long)]
    no_header: bool,

    /// Print CHROM, POS and the genotype alleles of this sample instead of records
    #[arg(long, value_name = "SAMPLE")]
    genotypes: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let records = VcfRecords::from_path(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let (mut written, mut skipped) = (0usize, 0usize);

    if let Some(sample) = &args.genotypes {
        if !records.header().samples().contains(sample) {
            anyhow::bail!("sample {} not found in {}", sample, args.input.display());
        }
        for entry in records {
            let entry = entry?;
            if args.unique && !entry.unique {
                skipped += 1;
                continue;
            }
            let record = &entry.record;
            let genotype = record
                .genotype(sample)?
                .map(|alleles| alleles.iter().join("/"))
                .unwrap_or_else(|| ".".to_owned());
            writeln!(out, "{}\t{}\t{}", record.chrom(), record.pos(), genotype)?;
            written += 1;
        }
    } else {
        let mut writer = VcfWriter::new(out);
        if !args.no_header {
            writer.write_header(records.header())?;
        }
        for entry in records {
            let entry = entry?;
            if args.unique && !entry.unique {
                skipped += 1;
                continue;
            }
            writer.write_record(&entry.record)?;
            written += 1;
        }
        out = writer.into_inner();
    }
    out.flush()?;

    info!(written, skipped, "done");
    Ok(())
}
