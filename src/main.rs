//! FHD checksum CLI
//!
//! # Commands
//!
//! - `hash` - digest files (or stdin) and print manifest lines
//! - `check` - verify digests recorded in a manifest
//! - `benchmark` - run performance benchmark

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use fhd::checkfile::{self, Entry};
use fhd::io::{hash_file, hash_reader};

#[derive(Parser)]
#[command(name = "fhd")]
#[command(version = "0.1.0")]
#[command(about = "FHD 128-bit message digest tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digest files, or stdin when no files are given
    Hash {
        /// Files to digest
        files: Vec<PathBuf>,

        /// Emit entries as JSON instead of manifest lines
        #[arg(long)]
        json: bool,
    },

    /// Verify digests recorded in a manifest produced by `fhd hash`
    Check {
        /// Manifest file
        manifest: PathBuf,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of buffers to digest
        #[arg(short, long, default_value = "1000")]
        count: u32,

        /// Buffer size in bytes
        #[arg(short, long, default_value = "16384")]
        size: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash { files, json } => cmd_hash(&files, json),
        Commands::Check { manifest } => cmd_check(&manifest),
        Commands::Benchmark { count, size } => cmd_benchmark(count, size),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_hash(files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let mut entries = Vec::new();

    if files.is_empty() {
        let digest = hash_reader(std::io::stdin().lock())?;
        entries.push(Entry::new(&digest, "-"));
    } else {
        for path in files {
            let digest =
                hash_file(path).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
            entries.push(Entry::new(&digest, path.display().to_string()));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}  {}", entry.fhd, entry.path);
        }
    }

    Ok(())
}

fn cmd_check(manifest: &PathBuf) -> anyhow::Result<()> {
    let entries = checkfile::load(manifest)
        .map_err(|e| anyhow::anyhow!("{}: {}", manifest.display(), e))?;

    if entries.is_empty() {
        anyhow::bail!("{}: no entries to check", manifest.display());
    }

    let mut failed = 0u32;
    for entry in &entries {
        let expected = entry
            .digest()
            .ok_or_else(|| anyhow::anyhow!("bad digest for {}", entry.path))?;

        match hash_file(&entry.path) {
            Ok(actual) if actual == expected => println!("{}: OK", entry.path),
            Ok(_) => {
                failed += 1;
                println!("{}: FAILED", entry.path);
            }
            Err(e) => {
                failed += 1;
                println!("{}: FAILED ({})", entry.path, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} checks failed", failed, entries.len());
    }
    Ok(())
}

fn cmd_benchmark(count: u32, size: usize) -> anyhow::Result<()> {
    println!("Running benchmark: {} buffers of {} bytes...", count, size);

    let buf: Vec<u8> = (0..size).map(|i| (i * 31 + 7) as u8).collect();

    let start = Instant::now();
    for _ in 0..count {
        let _ = fhd::hash(&buf);
    }
    let elapsed = start.elapsed();

    let rate = count as f64 / elapsed.as_secs_f64();
    let throughput = (count as u64 * size as u64) as f64
        / elapsed.as_secs_f64()
        / (1024.0 * 1024.0);

    println!("\nResults:");
    println!("  Total digests: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Rate: {:.2} digests/s", rate);
    println!("  Throughput: {:.2} MiB/s", throughput);

    println!("\nAlgorithm parameters:");
    println!("  State words: {}", fhd::algorithm::STATE_WORDS);
    println!("  Block size: {} bytes", fhd::algorithm::BLOCK_SIZE);
    println!("  Rounds per block: {}", fhd::algorithm::ROUNDS);
    println!("  Digest size: {} bytes", fhd::algorithm::DIGEST_SIZE);

    Ok(())
}
