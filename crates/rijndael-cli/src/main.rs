//! Command-line interface for `rijndael-rs`.
//!
//! Applies the cipher to whole files one block at a time. Blocks are
//! independent (no chaining, no padding), so inputs must be a whole number of
//! blocks long.

#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use rijndael_core::{
    decrypt_block, decrypt_in_place, encrypt_block, encrypt_in_place, expand_key_with,
    KeyExpansion, KeySchedule,
};

/// Rijndael CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Rijndael block cipher CLI (independent blocks, no padding)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file block by block.
    Encrypt(FileArgs),
    /// Decrypt a file block by block.
    Decrypt(FileArgs),
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Block size in 32-bit words (4 to 8).
        #[arg(long, default_value_t = 4)]
        block_words: usize,
        /// Key length in bytes (16, 24 or 32).
        #[arg(long, default_value_t = 16)]
        key_bytes: usize,
    },
}

#[derive(Args)]
struct FileArgs {
    /// Key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Input file (length must be a multiple of the block size).
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output path. Defaults to the input path with `.enc` or `.dec` appended.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Block size in 32-bit words (4 to 8).
    #[arg(long, default_value_t = 4)]
    block_words: usize,
    /// Use the FIPS-197 key expansion for 256-bit keys.
    #[arg(long, default_value_t = false)]
    standard_expansion: bool,
    /// Print a summary once the file is written.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn extension(self) -> &'static str {
        match self {
            Direction::Encrypt => "enc",
            Direction::Decrypt => "dec",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypted",
            Direction::Decrypt => "decrypted",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt(args) => cmd_file(&args, Direction::Encrypt),
        Commands::Decrypt(args) => cmd_file(&args, Direction::Decrypt),
        Commands::Demo {
            seed,
            block_words,
            key_bytes,
        } => cmd_demo(seed, block_words, key_bytes),
    }
}

fn cmd_file(args: &FileArgs, direction: Direction) -> Result<()> {
    let expansion = if args.standard_expansion {
        KeyExpansion::Standard
    } else {
        KeyExpansion::Compact
    };
    let schedule = parse_schedule(&args.key_hex, args.block_words, expansion)?;
    let block_bytes = schedule.block_size().bytes();

    let mut data =
        fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    if data.len() % block_bytes != 0 {
        bail!(
            "input length {} is not a multiple of {} bytes",
            data.len(),
            block_bytes
        );
    }

    transform(&mut data, &schedule, direction)?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output(&args.input, direction),
    };
    fs::write(&output, &data).with_context(|| format!("write {}", output.display()))?;

    if args.verbose {
        println!(
            "{} {} blocks ({} bytes, {} rounds) -> {}",
            direction.verb(),
            data.len() / block_bytes,
            data.len(),
            schedule.rounds(),
            output.display()
        );
    }
    Ok(())
}

/// Runs every block through the cipher, sharing one schedule across workers.
fn transform(data: &mut [u8], schedule: &KeySchedule, direction: Direction) -> Result<()> {
    let block_bytes = schedule.block_size().bytes();
    data.par_chunks_mut(block_bytes)
        .try_for_each(|chunk| match direction {
            Direction::Encrypt => encrypt_in_place(chunk, schedule),
            Direction::Decrypt => decrypt_in_place(chunk, schedule),
        })
        .context("transform blocks")
}

fn cmd_demo(seed: Option<u64>, block_words: usize, key_bytes: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; key_bytes];
    rng.fill_bytes(&mut key);
    let schedule = expand_key_with(&key, block_words, KeyExpansion::Compact)
        .context("build key schedule")?;

    let mut block = vec![0u8; schedule.block_size().bytes()];
    rng.fill_bytes(&mut block);

    let ciphertext = encrypt_block(&block, &schedule)?;
    let decrypted = decrypt_block(&ciphertext, &schedule)?;

    println!("demo key: {}", hex::encode(&key));
    println!("rounds: {}", schedule.rounds());
    println!("plaintext: {}", hex::encode(&block));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_schedule(
    key_hex: &str,
    block_words: usize,
    expansion: KeyExpansion,
) -> Result<KeySchedule> {
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    expand_key_with(&key, block_words, expansion).context("build key schedule")
}

fn default_output(input: &Path, direction: Direction) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(direction.extension());
    PathBuf::from(name)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rijndael_core::expand_key;

    #[test]
    fn default_output_appends_direction() {
        let input = Path::new("dir/plain.txt");
        assert_eq!(
            default_output(input, Direction::Encrypt),
            PathBuf::from("dir/plain.txt.enc")
        );
        assert_eq!(
            default_output(input, Direction::Decrypt),
            PathBuf::from("dir/plain.txt.dec")
        );
    }

    #[test]
    fn transform_round_trips_many_blocks() {
        let schedule = expand_key(&[0x11u8; 24], 6).unwrap();
        let original: Vec<u8> = (0..24 * 50).map(|i| (i % 251) as u8).collect();
        let mut data = original.clone();
        transform(&mut data, &schedule, Direction::Encrypt).unwrap();
        assert_ne!(data, original);
        assert_eq!(&data[..24], &encrypt_block(&original[..24], &schedule).unwrap()[..]);
        transform(&mut data, &schedule, Direction::Decrypt).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn parse_schedule_rejects_bad_input() {
        assert!(parse_schedule("zz", 4, KeyExpansion::Compact).is_err());
        let err = parse_schedule("00112233", 4, KeyExpansion::Compact).unwrap_err();
        assert!(format!("{err:#}").contains("key length 4 bytes"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
