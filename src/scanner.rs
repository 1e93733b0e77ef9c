//! Pulls puzzle image URLs out of an Apache access log.
//!
//! Every `GET <path>` whose path contains `puzzle` is collected, duplicates
//! are dropped and the origin is prefixed. When any `/p-<word>-<word>`
//! segment appears anywhere in the log, URLs are ordered by the second word
//! of that segment instead of by the whole URL.

use crate::configuration::{Settings, SortFallback};
use crate::error::ScanError;
use log::{debug, info, warn};
use regex::bytes::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

// Logs are scanned as raw bytes with ASCII-only classes, so a stray Latin-1
// user agent neither breaks the read nor widens `\S`/`\w`.
fn puzzle_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u)GET (\S*puzzle\S*)").unwrap())
}

fn sort_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u)(/p-\w+-)(\w*)").unwrap())
}

/// Reads `log_path` and returns its puzzle URLs, deduplicated and ordered.
pub fn scan(log_path: &Path, settings: &Settings) -> Result<Vec<String>, ScanError> {
    let text = fs::read(log_path).map_err(|source| ScanError::Input {
        path: log_path.to_path_buf(),
        source,
    })?;

    let origin = origin_for(log_path, settings);
    debug!("Using origin {} for {}", origin, log_path.display());

    let urls = scan_text(&text, &origin, settings.sort_fallback)?;
    info!("Found {} puzzle urls in {}", urls.len(), log_path.display());
    Ok(urls)
}

/// Scans already loaded log contents. `origin` is prepended verbatim to each
/// path; path bytes that are not UTF-8 are replaced with U+FFFD.
pub fn scan_text<T: AsRef<[u8]>>(
    text: T,
    origin: &str,
    fallback: SortFallback,
) -> Result<Vec<String>, ScanError> {
    let text = text.as_ref();
    let urls: HashSet<String> = puzzle_path()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| format!("{}{}", origin, String::from_utf8_lossy(m.as_bytes())))
        .collect();

    let mut urls: Vec<String> = urls.into_iter().collect();
    urls.sort();

    if !sort_segment().is_match(text) {
        debug!("No /p-<word>-<word> segment in log, ordering by full url");
        return Ok(urls);
    }

    debug!("Ordering by /p-<word>-<word> suffix");
    if fallback == SortFallback::Fail {
        if let Some(url) = urls.iter().find(|u| sort_key(u).is_none()) {
            return Err(ScanError::MissingSortKey(url.clone()));
        }
    }

    // Stable sort keeps the full-url order between equal keys.
    urls.sort_by_cached_key(|url| sort_key(url).unwrap_or(url.as_bytes()).to_vec());
    Ok(urls)
}

fn sort_key(url: &str) -> Option<&[u8]> {
    sort_segment()
        .captures(url.as_bytes())
        .and_then(|c| c.get(2))
        .map(|m| m.as_bytes())
}

/// Origin to prefix onto extracted paths.
///
/// With `host_from_log_name` set, a log named `animal_code.google.com`
/// yields `http://code.google.com`.
pub fn origin_for(log_path: &Path, settings: &Settings) -> String {
    if !settings.host_from_log_name {
        return settings.host.clone();
    }

    let host = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split_once('_'))
        .map(|(_, host)| host)
        .filter(|host| !host.is_empty());

    match host {
        Some(host) => format!("http://{}", host),
        None => {
            warn!(
                "No host in log name {}, falling back to {}",
                log_path.display(),
                settings.host
            );
            settings.host.clone()
        }
    }
}
