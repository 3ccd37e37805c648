use std::io::{self, Read, Write};
use std::time::Instant;

use anyhow::Context;
use clap::{ArgGroup, Parser};

use snapb_core::{compress, decompress, max_compressed_len, uncompressed_len};

/// Default input buffer capacity: 1 GiB.
const DEFAULT_MAX_BUFFER: u64 = 1 << 30;

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "snapb",
    about = "Snappy block codec: reads all of stdin, writes the transformed bytes to stdout",
    version
)]
#[command(group(ArgGroup::new("mode").required(true)))]
struct Cli {
    /// Compress stdin into a single snappy-format block
    #[arg(short, long, group = "mode")]
    compress: bool,

    /// Decompress a single snappy-format block from stdin
    #[arg(short, long, group = "mode")]
    decompress: bool,

    /// Input buffer capacity in bytes; larger input is rejected up front
    #[arg(long, default_value_t = DEFAULT_MAX_BUFFER)]
    max_buffer: u64,

    /// Print size/ratio/throughput statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

/// Read all of stdin, refusing input longer than `cap` bytes.
fn read_stdin(cap: u64) -> anyhow::Result<Vec<u8>> {
    let mut input = Vec::new();
    // One byte of headroom so an oversized stream is distinguishable from
    // one that exactly fills the buffer.
    io::stdin()
        .lock()
        .take(cap.saturating_add(1))
        .read_to_end(&mut input)
        .context("reading stdin")?;
    if input.len() as u64 > cap {
        anyhow::bail!(
            "input exceeds the {} buffer capacity (use --max-buffer to raise it)",
            human_bytes(cap)
        );
    }
    Ok(input)
}

// ── Mode implementations ───────────────────────────────────────────────────

fn run_compress(input: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut output = vec![0u8; max_compressed_len(input.len())];
    let n = compress(input, &mut output).context("compressing stdin")?;
    output.truncate(n);
    Ok(output)
}

fn run_decompress(input: &[u8], cap: u64) -> anyhow::Result<Vec<u8>> {
    let declared = uncompressed_len(input).context("reading block header")?;
    if declared as u64 > cap {
        anyhow::bail!(
            "block declares {} of uncompressed data, over the {} buffer capacity",
            human_bytes(declared as u64),
            human_bytes(cap)
        );
    }
    let mut output = vec![0u8; declared];
    let n = decompress(input, &mut output).context("decompressing stdin")?;
    output.truncate(n);
    Ok(output)
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let input = read_stdin(cli.max_buffer)?;
    let t0 = Instant::now();
    let output = if cli.compress {
        run_compress(&input)?
    } else {
        run_decompress(&input, cli.max_buffer)?
    };
    let elapsed = t0.elapsed();

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output).context("writing stdout")?;
    stdout.flush().context("flushing stdout")?;

    if cli.verbose {
        let (raw, coded) = if cli.decompress {
            (output.len() as u64, input.len() as u64)
        } else {
            (input.len() as u64, output.len() as u64)
        };
        let ratio = if coded == 0 { 1.0 } else { raw as f64 / coded as f64 };
        eprintln!("  mode        : {}", if cli.decompress { "decompress" } else { "compress" });
        eprintln!("  raw size    : {}", human_bytes(raw));
        eprintln!("  compressed  : {}", human_bytes(coded));
        eprintln!("  ratio       : {:.2}x", ratio);
        eprintln!(
            "  throughput  : {}/s",
            human_bytes((raw as f64 / elapsed.as_secs_f64()) as u64)
        );
        eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    }

    Ok(())
}
