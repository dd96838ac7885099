use textbin_seal::crypto;
use textbin_seal::Result;

/// Print a fresh base64 salt, suitable for `encryptionSalt`.
pub fn run() -> Result<()> {
    println!("{}", crypto::generate_salt().to_base64());
    Ok(())
}
