use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load FLORAMED_* overrides from .env, if present
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // The real environment wins over .env
                    if key.starts_with("FLORAMED_") && env::var(key).is_err() {
                        println!("cargo:rustc-env={key}={value}");
                    }
                }
            }
        }
    }

    for key in [
        "FLORAMED_API_BASE_URL",
        "FLORAMED_NEWS_ENDPOINT",
        "FLORAMED_NEWS_API_KEY",
        "FLORAMED_REQUEST_TIMEOUT_MS",
    ] {
        println!("cargo:rerun-if-env-changed={key}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
