use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

pub fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<(), String> {
    let Some(path) = path else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, value)
            .map_err(|err| format!("Failed to serialize timeline JSON to stdout: {err}"))?;
        handle
            .write_all(b"\n")
            .map_err(|err| format!("Failed to write timeline JSON to stdout: {err}"))?;
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create timeline output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }

    let mut file = File::create(path)
        .map_err(|err| format!("Failed to create timeline file '{}': {err}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, value).map_err(|err| {
        format!(
            "Failed to serialize timeline JSON '{}': {err}",
            path.display()
        )
    })?;
    file.write_all(b"\n")
        .map_err(|err| format!("Failed to finalize timeline file '{}': {err}", path.display()))?;
    Ok(())
}
