//! Recording of fetched pages as replayable test fixtures (`test-mode` only).
//!
//! A page fetched from `url` is stored as `page_<page_key(url)>.html`, the
//! name `tests/common.rs` reads it back under.

use std::env;
use std::fs;
use std::path::PathBuf;

use url::Url;

use super::net::page_key;

/// `UG_FIXDIR`, or `tests/fixtures` in the crate.
fn fixture_dir() -> PathBuf {
    env::var_os("UG_FIXDIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        PathBuf::from,
    )
}

fn page_fixture_path(url: &Url) -> PathBuf {
    fixture_dir().join(format!("page_{}.html", page_key(url)))
}

/// Writes `body` as the fixture for `url` when `UG_RECORD=1`. Failures are reported, not raised.
pub(crate) fn maybe_record_page(url: &Url, body: &str) {
    if env::var("UG_RECORD").ok().as_deref() != Some("1") {
        return;
    }
    let path = page_fixture_path(url);
    let written = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| fs::write(&path, body));
    match written {
        Ok(()) => {
            if env::var("UG_DEBUG").ok().as_deref() == Some("1") {
                eprintln!("UG_RECORD: {url} -> {}", path.display());
            }
        }
        Err(e) => eprintln!("UG_RECORD: cannot write {}: {e}", path.display()),
    }
}
