//! Debug dump helpers for development / troubleshooting.
//! Files land in the temp dir; failures are reported, never fatal.

use serde_json::Value;
use std::io::Write;

pub fn debug_dump_html(key: &str, html: &str) -> std::io::Result<()> {
    let path = std::env::temp_dir().join(format!("ugtabs_rs-page-{key}.html"));
    let mut f = std::fs::File::create(&path)?;
    f.write_all(html.as_bytes())?;
    eprintln!("UG_DEBUG: wrote {}", path.display());
    Ok(())
}

pub fn debug_dump_extracted_json(key: &str, json: &Value) -> std::io::Result<()> {
    let path = std::env::temp_dir().join(format!("ugtabs_rs-{key}-extracted.json"));
    let mut f = std::fs::File::create(&path)?;
    let s = serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string());
    f.write_all(s.as_bytes())?;
    eprintln!("UG_DEBUG: wrote pretty-printed extracted JSON to {}", path.display());
    Ok(())
}
