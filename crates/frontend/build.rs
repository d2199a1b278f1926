use std::env;
use std::fs;
use std::path::Path;

const API_URL_KEY: &str = "CATALOG_API_URL";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={API_URL_KEY}");

    // An exported variable wins over .env
    if env::var(API_URL_KEY).is_ok() {
        return;
    }

    let env_file = Path::new(".env");
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == API_URL_KEY {
                let value = value.trim().trim_matches('"');
                println!("cargo:rustc-env={API_URL_KEY}={value}");
            }
        }
    }
}
