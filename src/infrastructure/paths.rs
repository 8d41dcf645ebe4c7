//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! usually maps to the user's home directory. Paths from the plugin
//! configuration are written the way users think of them (`~/...`) and have to
//! be rewritten before the plugin can open them.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the data directory, where trace files are written.
///
/// `/host/.local/share/zellij/testimonial-carousel`, normally
/// `~/.local/share/zellij/testimonial-carousel` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("testimonial-carousel")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use testimonial_carousel::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/reviews.toml"), "/host/reviews.toml");
/// assert_eq!(expand_tilde("/etc/reviews.toml"), "/etc/reviews.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Resolves a configured file path to one the plugin can open.
#[must_use]
pub fn resolve(path: &str) -> PathBuf {
    PathBuf::from(expand_tilde(path.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a/b.toml"), "/host/a/b.toml");
        assert_eq!(expand_tilde("~alice/x"), "~alice/x");
        assert_eq!(expand_tilde("relative/x"), "relative/x");
    }

    #[test]
    fn resolve_trims_whitespace() {
        assert_eq!(resolve("  ~/t.toml "), PathBuf::from("/host/t.toml"));
    }

    #[test]
    fn data_dir_is_under_zellij_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/testimonial-carousel")
        );
    }
}
