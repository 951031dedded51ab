//! URLs for static assets and routes that respect the deployment base path.
use pokefolio_core::DATA_BASE_PATH;

/// Prefix `relative` with the deployment base.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/portfolio` for a project
/// page), generated URLs are prefixed with it. Builds without it fall back to
/// root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of a configuration document under the data directory.
#[must_use]
pub fn data_path(file: &str) -> String {
    let file = file.trim_start_matches('/');
    asset_path(&format!("{DATA_BASE_PATH}{file}"))
}

/// Image and link sources from the config documents: absolute URLs pass
/// through untouched, everything else is treated as a deployed asset.
#[must_use]
pub fn media_src(src: &str) -> String {
    if is_external(src) {
        src.to_string()
    } else {
        asset_path(src)
    }
}

#[must_use]
pub fn is_external(src: &str) -> bool {
    ["http://", "https://", "mailto:", "data:"]
        .iter()
        .any(|scheme| src.starts_with(scheme))
}

/// Base path for the router (e.g. `/portfolio` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
