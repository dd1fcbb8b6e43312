//! Print the CRC-64 of each file given on the command line.
//!
//! Usage:
//!   cargo run --release --example checksum -- file1 [file2 ...]

use crc64_xz::LocalFileMedia;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: checksum <file> [file ...]");
        eprintln!("  checksum ./backup.tar");
        std::process::exit(1);
    }

    for path in &paths {
        let media = LocalFileMedia::new(path)?;
        let crc = media.checksum_sync()?;
        println!("{:016x}  {} ({} bytes)", crc, media.name(), media.length());
    }

    Ok(())
}
