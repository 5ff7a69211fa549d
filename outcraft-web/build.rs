//! Build script capturing deployment settings.
//!
//! Reads `.env` files (workspace root, then this crate) and the process
//! environment, and writes every `OUTCRAFT_*` variable to
//! `OUT_DIR/build_env.rs` as:
//!
//! - `BUILD_ENV: &[(&str, &str)]` - name/value pairs sorted by name
//!
//! The site has no server to ask at runtime, so settings are baked into the
//! bundle the same way a front-end bundler inlines its `.env`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const PREFIX: &str = "OUTCRAFT_";
const CATALOG: &str = "static/assets/data/catalog.json";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());

    for dotenv in [manifest_dir.join("../.env"), manifest_dir.join(".env")] {
        println!("cargo:rerun-if-changed={}", dotenv.display());
        if dotenv.exists()
            && let Err(err) = dotenvy::from_path(&dotenv)
        {
            println!("cargo:warning=failed to read {}: {err}", dotenv.display());
        }
    }

    watch_known_keys(&manifest_dir);

    let mut vars: Vec<(String, String)> = env::vars()
        .filter(|(key, _)| key.starts_with(PREFIX))
        .collect();
    vars.sort();

    let mut generated = String::from("pub const BUILD_ENV: &[(&str, &str)] = &[\n");
    for (key, value) in &vars {
        let _ = writeln!(generated, "    ({key:?}, {value:?}),");
    }
    generated.push_str("];\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("build_env.rs"), generated).expect("write build_env.rs");
}

/// Rebuild when any setting the site reads changes.
fn watch_known_keys(manifest_dir: &Path) {
    println!("cargo:rerun-if-changed={CATALOG}");
    println!("cargo:rerun-if-env-changed={PREFIX}TEBEX_STORE_URL");

    let Ok(json) = fs::read_to_string(manifest_dir.join(CATALOG)) else {
        return;
    };
    match outcraft_core::Catalog::from_json(&json) {
        Ok(catalog) => {
            for item in catalog.list() {
                println!(
                    "cargo:rerun-if-env-changed={PREFIX}{}",
                    outcraft_core::package_env_key(&item.id)
                );
            }
        }
        Err(err) => println!("cargo:warning=catalog did not parse: {err}"),
    }
}
