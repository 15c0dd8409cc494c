//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so the layout can link a content-addressed
//! copy that browsers may cache forever.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex characters of the digest kept in the file name.
const FINGERPRINT_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    let fingerprint = fingerprint_stylesheet(&manifest_dir.join("static/css"));
    println!("cargo:rustc-env=CSS_HASH={fingerprint}");
}

/// Copy `main.css` to `derived/main.<fingerprint>.css` and return the
/// fingerprint, or an empty string when the stylesheet is missing.
fn fingerprint_stylesheet(css_dir: &Path) -> String {
    let source = css_dir.join("main.css");
    println!("cargo:rerun-if-changed={}", source.display());

    let Ok(content) = fs::read(&source) else {
        println!("cargo:warning=No stylesheet at {}", source.display());
        return String::new();
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let fingerprint = digest[..FINGERPRINT_LEN].to_string();

    let derived = css_dir.join("derived");
    fs::create_dir_all(&derived).expect("create derived stylesheet directory");
    fs::write(derived.join(format!("main.{fingerprint}.css")), &content)
        .expect("write fingerprinted stylesheet");

    fingerprint
}
