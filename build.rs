use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

/// Writes compile-time application metadata into `OUT_DIR/app_metadata.rs`.
///
/// The generated constants (`APP_METADATA_*`) carry the package identity and
/// the AES key material used to protect credentials at rest, so the binary
/// never reads key files at runtime.
struct AppMetadata {
    file: File,
}

impl AppMetadata {
    fn create() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
        let dest_path = Path::new(&out_dir).join("app_metadata.rs");
        Ok(Self { file: File::create(dest_path)? })
    }

    fn write_str(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.file, "#[allow(unused)]\npub const APP_METADATA_{}: &str = \"{}\";", key.to_uppercase(), value)
    }

    fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        let body = value.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(self.file, "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];", key.to_uppercase(), value.len(), body)
    }
}

/// Pads or truncates `seed` to exactly `len` bytes.
fn fit(mut seed: String, len: usize) -> Vec<u8> {
    seed.truncate(len);
    while seed.len() < len {
        seed.push('!');
    }
    seed.into_bytes()
}

fn main() -> io::Result<()> {
    // Pick up ENCRYPTION_KEY / ENCRYPTION_IV from a local .env if present
    let _ = dotenv();

    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo_toml: Value = toml::from_str(&cargo_toml).expect("Failed to parse Cargo.toml");

    let mut app_metadata = AppMetadata::create()?;
    app_metadata.write_str("NAME", &env::var("CARGO_PKG_NAME").unwrap())?;
    app_metadata.write_str("VERSION", &env::var("CARGO_PKG_VERSION").unwrap())?;

    // Forward [package.metadata] string entries (owner, etc.)
    if let Some(metadata) = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                app_metadata.write_str(key, value)?;
            }
        }
    }

    let (encryption_key, encryption_iv) = match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != 32 {
                panic!("ENCRYPTION_KEY must be exactly 32 bytes long, got {} bytes", key.len());
            }
            if iv.len() != 16 {
                panic!("ENCRYPTION_IV must be exactly 16 bytes long, got {} bytes", iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            // Deterministic per-package fallback so development builds work
            // without a .env file; release builds must provide real keys.
            let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "tusk".to_string());
            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not found in environment.");
            println!("cargo:warning=Using default keys. For production, create a .env file with:");
            println!("cargo:warning=ENCRYPTION_KEY=your_32_byte_key_here!!!!!!!!!");
            println!("cargo:warning=ENCRYPTION_IV=your_16_byte_iv!");
            (fit(format!("{}_default_encryption_key_32b", package_name), 32), fit(format!("{}_iv_16b", package_name), 16))
        }
    };

    app_metadata.write_bytes("ENCRYPTION_KEY", &encryption_key)?;
    app_metadata.write_bytes("ENCRYPTION_IV", &encryption_iv)?;

    Ok(())
}
