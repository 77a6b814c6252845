//! Digest command handler

use std::path::Path;

use anyhow::Result;

use droid::Synchroniser;

/// Print `<sha1>  <path>`, the line `sha1sum` would print
pub fn cmd_digest(path: &Path, json: bool) -> Result<()> {
    let digest = Synchroniser::new(path).digest()?;

    if json {
        let out = serde_json::json!({
            "path": path.display().to_string(),
            "sha1": digest.as_str(),
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", digest.manifest_line(&path.display().to_string()));
    }
    Ok(())
}
