use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use avr_decode::hex::parse_hex;
use avr_decode::Listing;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Pick by extension: .hex/.ihx are Intel HEX, anything else raw binary
    Auto,
    Hex,
    Bin,
}

/// avr-disasm - AVR disassembler
#[derive(Parser, Debug)]
#[command(name = "avr-disasm", version, about = "Disassemble AVR program images")]
struct Args {
    /// Program image (Intel HEX or raw binary)
    #[arg(required_unless_present = "load_listing")]
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Word address of the first image byte (decimal or 0x-prefixed hex)
    #[arg(long, default_value = "0", value_parser = parse_num)]
    base: u32,

    /// First byte offset to disassemble
    #[arg(long, default_value = "0", value_parser = parse_num)]
    start: u32,

    /// Byte offset to stop at (default: end of image)
    #[arg(long, value_parser = parse_num)]
    end: Option<u32>,

    /// Write the decoded listing to this file
    #[arg(long)]
    save_listing: Option<PathBuf>,

    /// Print a previously saved listing instead of decoding an image
    #[arg(long, conflicts_with = "save_listing")]
    load_listing: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_num(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number {:?}: {}", s, e))
}

fn is_hex_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref(),
        Some("hex") | Some("ihx")
    )
}

fn load_image(path: &Path, format: Format) -> Result<Vec<u8>> {
    let as_hex = match format {
        Format::Hex => true,
        Format::Bin => false,
        Format::Auto => is_hex_path(path),
    };
    if as_hex {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        parse_hex(&text).with_context(|| format!("parsing {}", path.display()))
    } else {
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn print_lines(lines: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Some(path) = &args.load_listing {
        let listing = Listing::load(path)
            .with_context(|| format!("loading listing {}", path.display()))?;
        info!("Loaded {} entries from {}", listing.len(), path.display());
        return print_lines(&listing.lines());
    }

    let Some(input) = args.input.as_deref() else {
        anyhow::bail!("no input image given");
    };
    let image = load_image(input, args.format)?;
    info!("Loaded {} bytes from {}", image.len(), input.display());

    let start = args.start as usize;
    let end = args.end.map_or(image.len(), |e| e as usize);
    if start >= image.len() {
        warn!("start offset 0x{:X} is past the end of the image (0x{:X} bytes)", start, image.len());
    }

    let listing = Listing::scan_range(&image, args.base, start, end);
    let invalid = listing.invalid_count();
    info!("Decoded {} instructions, {} invalid words", listing.len() - invalid, invalid);
    if invalid > 0 {
        warn!("{} words did not decode", invalid);
    }

    print_lines(&listing.lines())?;

    if let Some(path) = &args.save_listing {
        listing
            .save(path)
            .with_context(|| format!("saving listing {}", path.display()))?;
        info!("Listing saved to {}", path.display());
    }

    Ok(())
}
