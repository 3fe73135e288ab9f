//! Version extraction from free-form CLI output.

use regex::Regex;
use std::sync::LazyLock;

/// A dotted version with an optional pre-release or build suffix.
///
/// Letters may be glued to the front (`go1.21.5`, `Python3.11.4`), but the
/// match may not start inside a number, so `x86_64` never looks like a
/// version. Suffixes are limited to pre-release words, numeric revisions,
/// `_NNN` updates and `+build` metadata; platform tags such as
/// `-x86_64-linux` are left out.
static DOTTED_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?:^|[^0-9_.])
        [A-Za-z]*
        (?P<version>
            \d+(?:\.\d+)+
            (?:
                _\d+\b
              | -\d+(?:\.\d+)*\b
              | [-.~\x20]?(?i:alpha|beta|rc|pre|preview|dev|snapshot|nightly)(?:[.\-]?\d+)*\b
            )?
            (?:\+[0-9A-Za-z]+(?:\.[0-9A-Za-z]+)*)?
        )",
    )
    .expect("Invalid regex pattern")
});

/// A lone integer, used only when no dotted version exists.
///
/// Only a `v` may precede it; `sha256` or `x86` are not versions.
static BARE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9A-Za-z_.])[vV]?(?P<version>\d+)\b").expect("Invalid regex pattern")
});

/// Extract a version string from arbitrary CLI output.
///
/// A dotted version anywhere in the text wins over a bare integer; within
/// each tier the first match is taken. Letters glued to the front (such as
/// `v`) are dropped, while a pre-release or build suffix is kept:
///
/// - `Python 3.11.4` -> `3.11.4`
/// - `Node.js v18.16.0` -> `18.16.0`
/// - `go version go1.21.5 linux/amd64` -> `1.21.5`
/// - `openjdk version "1.8.0_302"` -> `1.8.0_302`
/// - `tool 2.0.0-rc1+build5` -> `2.0.0-rc1+build5`
/// - `Git version 2` -> `2`
///
/// Returns `None` when the text contains no version at all.
///
/// ```rust
/// use latest_version::extract_version;
///
/// assert_eq!(extract_version("Python 3.11.4").as_deref(), Some("3.11.4"));
/// assert_eq!(extract_version("usage: tool [-h]"), None);
/// ```
pub fn extract_version(output: &str) -> Option<String> {
    [&*DOTTED_VERSION, &*BARE_VERSION]
        .into_iter()
        .find_map(|re| re.captures(output))
        .and_then(|caps| caps.name("version"))
        .map(|m| m.as_str().trim().to_string())
}
