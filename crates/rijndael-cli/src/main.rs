//! Command-line interface for `rijndael-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{
    decrypt_block, encrypt_block, expand_key, mult_by_x, Block, CipherKey, KeyLength, KeySchedule,
    Params,
};

/// Rijndael key-schedule CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Expand and exercise AES-128/192/256 key schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// How `expand` prints the schedule.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Layout {
    /// One 4-byte word per line.
    #[default]
    Words,
    /// One 16-byte round key per line.
    Rounds,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a cipher key and print its schedule.
    Expand {
        /// Cipher key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Key length in bits; must agree with the key if given.
        #[arg(long)]
        bits: Option<u32>,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = Layout::Words)]
        layout: Layout,
    },
    /// Print the round-constant sequence.
    Rcon {
        /// Number of constants to print.
        #[arg(long, default_value_t = 10)]
        count: u8,
    },
    /// Encrypt 16-byte blocks from a file.
    Enc {
        /// Cipher key as hex.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (must be a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt 16-byte blocks from a file.
    Dec {
        /// Cipher key as hex.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (ciphertext).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run the built-in FIPS-197 known-answer tests.
    Check,
    /// Expand a random key and round-trip a random block through it.
    Demo {
        /// Key length in bits.
        #[arg(long, default_value_t = 256)]
        bits: u32,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Expand {
            key_hex,
            bits,
            layout,
        } => cmd_expand(&key_hex, bits, layout),
        Commands::Rcon { count } => cmd_rcon(count),
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_blocks(&key_hex, &input, &output, encrypt_block),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_blocks(&key_hex, &input, &output, decrypt_block),
        Commands::Check => cmd_check(),
        Commands::Demo { bits, seed } => cmd_demo(bits, seed),
    }
}

fn cmd_expand(key_hex: &str, bits: Option<u32>, layout: Layout) -> Result<()> {
    let key = decode_hex(key_hex)?;
    let params = match bits {
        Some(bits) => Params::from_bits(bits).context("key length")?,
        None => CipherKey::new(&key).context("key")?.params(),
    };
    let schedule = expand_key(&key, params).context("expand key")?;
    log::info!(
        "expanded {}-bit key into {} round keys",
        params.key_length().bits(),
        params.round_keys()
    );
    match layout {
        Layout::Words => {
            for (i, word) in schedule.words().enumerate() {
                println!("w[{i:2}] {}", hex::encode(word));
            }
        }
        Layout::Rounds => {
            for round in 0..params.round_keys() {
                let round_key = schedule.round_key(round);
                println!("round {round:2}: {}", hex::encode(round_key));
            }
        }
    }
    Ok(())
}

fn cmd_rcon(count: u8) -> Result<()> {
    let constants: Vec<String> = (0..count)
        .map(|n| format!("{:02x}", mult_by_x(1, n)))
        .collect();
    println!("{}", constants.join(" "));
    Ok(())
}

fn cmd_blocks(
    key_hex: &str,
    input_path: &Path,
    output_path: &Path,
    transform: fn(&Block, &KeySchedule) -> Block,
) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?.expand();
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % 16 != 0 {
        bail!("input length must be a multiple of 16 bytes");
    }
    for chunk in data.chunks_mut(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&transform(&block, &schedule));
    }
    log::info!("processed {} blocks", data.len() / 16);
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

/// FIPS-197 Appendix C: key bytes `00 01 .. 1f` truncated to the key length.
const KNOWN_ANSWERS: [(KeyLength, &str); 3] = [
    (KeyLength::Aes128, "69c4e0d86a7b0430d8cdb78070b4c55a"),
    (KeyLength::Aes192, "dda97ca4864cdfe06eaf70a0ec0d7191"),
    (KeyLength::Aes256, "8ea2b7ca516745bfeafc49904b496089"),
];
const KNOWN_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

fn cmd_check() -> Result<()> {
    let plaintext = decode_block(KNOWN_PLAINTEXT)?;
    for (length, expected_hex) in KNOWN_ANSWERS {
        let key_bytes: Vec<u8> = (0..length.bytes() as u8).collect();
        let schedule = CipherKey::new(&key_bytes)?.expand();
        let expected = decode_block(expected_hex)?;
        let ciphertext = encrypt_block(&plaintext, &schedule);
        if ciphertext != expected {
            bail!(
                "AES-{} mismatch: got {}, expected {}",
                length.bits(),
                hex::encode(ciphertext),
                expected_hex
            );
        }
        if decrypt_block(&ciphertext, &schedule) != plaintext {
            bail!(
                "AES-{} decryption did not restore the plaintext",
                length.bits()
            );
        }
        println!("AES-{}: ok", length.bits());
    }
    Ok(())
}

fn cmd_demo(bits: u32, seed: Option<u64>) -> Result<()> {
    let length = KeyLength::try_from(bits).context("key length")?;
    let mut rng = seeded_rng(seed);
    let mut key_bytes = vec![0u8; length.bytes()];
    rng.fill_bytes(&mut key_bytes);
    let schedule = CipherKey::new(&key_bytes)?.expand();

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ciphertext = encrypt_block(&block, &schedule);
    let decrypted = decrypt_block(&ciphertext, &schedule);

    println!("demo key: {}", hex::encode(&key_bytes));
    let last_round_key = schedule.round_key(schedule.rounds());
    println!("last round key: {}", hex::encode(last_round_key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn decode_hex(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).context("decode hex")
}

fn decode_block(hex_str: &str) -> Result<Block> {
    let bytes = decode_hex(hex_str)?;
    if bytes.len() != 16 {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn parse_key_hex(hex_str: &str) -> Result<CipherKey> {
    let bytes = decode_hex(hex_str)?;
    CipherKey::new(&bytes).context("key must be 16, 24 or 32 bytes")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_expand() {
        let cli = Cli::try_parse_from([
            "rijndael",
            "expand",
            "--key-hex",
            "000102030405060708090a0b0c0d0e0f",
            "--bits",
            "128",
            "--layout",
            "rounds",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Expand {
                bits: Some(128),
                layout: Layout::Rounds,
                ..
            }
        ));
    }

    #[test]
    fn known_answers_pass() {
        cmd_check().unwrap();
    }

    #[test]
    fn expand_rejects_bits_mismatch() {
        const KEY: &str = "000102030405060708090a0b0c0d0e0f";
        assert!(cmd_expand(KEY, Some(256), Layout::Words).is_err());
        assert!(cmd_expand(KEY, Some(100), Layout::Words).is_err());
        assert!(cmd_expand(KEY, Some(128), Layout::Rounds).is_ok());
    }

    #[test]
    fn parse_key_rejects_short_keys() {
        assert!(parse_key_hex("0011").is_err());
        assert!(parse_key_hex("zz").is_err());
        assert_eq!(
            parse_key_hex(&"00".repeat(24)).unwrap().length(),
            KeyLength::Aes192
        );
    }

    #[test]
    fn demo_round_trips_with_seed() {
        for bits in [128, 192, 256] {
            cmd_demo(bits, Some(7)).unwrap();
        }
        assert!(cmd_demo(100, Some(7)).is_err());
    }
}
