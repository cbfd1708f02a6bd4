// Copies the demo page in static/ to dist/. wasm-pack drops the bundle into
// dist/pkg separately (`wasm-pack build --target web --out-dir dist/pkg`).
use std::{env, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let root = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let static_dir = Path::new(&root).join("static");
    let out_dir = Path::new(&root).join("dist");
    if !static_dir.exists() {
        return;
    }
    if let Err(err) = std::fs::create_dir_all(&out_dir) {
        println!("cargo:warning=could not create dist/: {err}");
        return;
    }

    let options = CopyOptions::new().overwrite(true).content_only(true);
    if let Err(err) = copy(&static_dir, &out_dir, &options) {
        println!("cargo:warning=copying static/ failed: {err}");
    }
}
