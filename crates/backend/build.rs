use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the workspace config.toml next to the built `attrmap` binary
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .ok_or("workspace root not found")?;
    let source_config = workspace_root.join("config.toml");

    if !source_config.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the binary uses its embedded default",
            source_config
        );
        return Ok(());
    }

    let dest_config = profile_dir()?.join("config.toml");
    fs::copy(&source_config, &dest_config)?;
    println!("cargo:warning=Copied config.toml to {:?}", dest_config);

    Ok(())
}

/// target/<profile>, found by walking up from OUT_DIR
/// (target/<profile>/build/attrmap-backend-xxx/out)
fn profile_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let profile = env::var("PROFILE")?;

    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
        .ok_or_else(|| format!("profile directory `{}` not found above {:?}", profile, out_dir).into())
}
