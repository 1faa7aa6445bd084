//! Command-line interface for the `saes64` functional unit.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use saes64::{Opcode, RconIndex, Saes64};
use saes64_aes::{decrypt_block, encrypt_block, expand_key};

/// Scalar AES-64 functional unit CLI.
#[derive(Parser)]
#[command(
    name = "saes64",
    version,
    author,
    about = "Execute 64-bit AES functional-unit operations and block-level round loops"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a single unit operation on two 64-bit hex operands.
    Exec {
        /// Operation name: ks1, ks2, imix, encs, encsm, decs, or decsm.
        op: String,
        /// First operand as 16 hex characters.
        op1: String,
        /// Second operand as 16 hex characters.
        op2: String,
        /// Round-constant selector (0..=15), required by ks1.
        #[arg(long)]
        rcon: Option<u8>,
        /// Model a unit built without the decrypt datapath.
        #[arg(long, default_value_t = false)]
        encrypt_only: bool,
    },
    /// Encrypt one 16-byte block through the unit-driven round loop.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block through the unit-driven round loop.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Cross-check the unit-driven cipher against the AES reference for
    /// random samples.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and plaintext, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Exec {
            op,
            op1,
            op2,
            rcon,
            encrypt_only,
        } => cmd_exec(&op, &op1, &op2, rcon, encrypt_only),
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_exec(op: &str, op1: &str, op2: &str, rcon: Option<u8>, encrypt_only: bool) -> Result<()> {
    let opcode = parse_opcode(op, rcon)?;
    let op1 = parse_operand_hex(op1).context("parse first operand")?;
    let op2 = parse_operand_hex(op2).context("parse second operand")?;
    let unit = if encrypt_only {
        Saes64::encrypt_only()
    } else {
        Saes64::new()
    };
    println!("{:016x}", unit.execute(opcode, op1, op2));
    Ok(())
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_block_hex(key_hex).context("parse key hex")?;
    let block = parse_block_hex(block_hex).context("parse block hex")?;
    let unit = Saes64::new();
    let keys = expand_key(&unit, &key);
    println!("{}", hex::encode(encrypt_block(&unit, &keys, &block)));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_block_hex(key_hex).context("parse key hex")?;
    let block = parse_block_hex(block_hex).context("parse block hex")?;
    let unit = Saes64::new();
    let keys = expand_key(&unit, &key);
    println!("{}", hex::encode(decrypt_block(&unit, &keys, &block)));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let unit = Saes64::new();
    let mut rng = seeded_rng(seed);

    for _ in 0..samples {
        let mut key = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let keys = expand_key(&unit, &key);
        let w = aes_prims::expand_key(&key);
        let actual = encrypt_block(&unit, &keys, &block);
        let expected = aes_prims::encrypt_block(&block, &w);
        if actual != expected {
            bail!("mismatch between unit-driven cipher and AES reference");
        }
        if decrypt_block(&unit, &keys, &actual) != block {
            bail!("unit-driven decryption failed to invert encryption");
        }
    }
    println!("checked {samples} samples against the AES reference");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);

    let unit = Saes64::new();
    let keys = expand_key(&unit, &key);
    let ciphertext = encrypt_block(&unit, &keys, &block);
    let decrypted = decrypt_block(&unit, &keys, &ciphertext);

    println!("demo key: {}", hex::encode(key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_opcode(name: &str, rcon: Option<u8>) -> Result<Opcode> {
    let opcode = match name {
        "ks1" => {
            let value = match rcon {
                Some(value) => value,
                None => bail!("ks1 requires --rcon"),
            };
            let idx = RconIndex::new(value)
                .with_context(|| format!("round-constant selector {value} exceeds 4 bits"))?;
            Opcode::Ks1(idx)
        }
        "ks2" => Opcode::Ks2,
        "imix" => Opcode::Imix,
        "encs" => Opcode::Encs,
        "encsm" => Opcode::Encsm,
        "decs" => Opcode::Decs,
        "decsm" => Opcode::Decsm,
        other => bail!("unknown operation `{other}`"),
    };
    if rcon.is_some() && !matches!(opcode, Opcode::Ks1(_)) {
        bail!("--rcon only applies to ks1");
    }
    Ok(opcode)
}

fn parse_operand_hex(hex_str: &str) -> Result<u64> {
    let bytes = hex::decode(hex_str.trim()).context("decode operand hex")?;
    if bytes.len() != 8 {
        bail!("operand must be 8 bytes (16 hex characters)");
    }
    let mut operand = [0u8; 8];
    operand.copy_from_slice(&bytes);
    Ok(u64::from_be_bytes(operand))
}

fn parse_block_hex(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != 16 {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
