//! Version parsing and ordering.
//!
//! Version strings reported by real tools have no common grammar, so
//! [`ParsedVersion::parse`] never fails. It splits the text into a run of
//! dotted integers and whatever suffix follows. [`VersionComparator`]
//! orders parsed versions under a [`ComparePolicy`]; both policies are
//! total orders, which keeps selection independent of input order.

use semver::Prerelease;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Characters that separate the numeric run from a suffix.
const SUFFIX_SEPARATORS: &[char] = &['-', '+', '~', '_', '.', ' ', '\t'];

/// How suffixes after the numeric run are ordered.
///
/// # Example
///
/// ```rust
/// use latest_version::{ComparePolicy, ParsedVersion, VersionComparator};
/// use std::cmp::Ordering;
///
/// let a = ParsedVersion::parse("1.0.0+build5");
/// let b = ParsedVersion::parse("1.0.0");
///
/// let default = VersionComparator::default();
/// assert_eq!(default.compare(&a, &b), Ordering::Less);
///
/// let strict = VersionComparator::new(ComparePolicy::Semver);
/// assert_eq!(strict.compare(&a, &b), Ordering::Equal);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
#[non_exhaustive]
pub enum ComparePolicy {
    /// Any suffix marks a pre-release that sorts before the bare release.
    /// Two suffixes compare as plain strings.
    #[default]
    PreReleaseOlder,
    /// Semantic-versioning rules: build metadata after `+` is ignored and
    /// pre-release identifiers are ordered field by field.
    Semver,
}

/// A version string decomposed into comparable parts.
///
/// Parsing is total: text without any digits yields a malformed version
/// that sorts below every well-formed one.
#[derive(Debug, Clone)]
pub struct ParsedVersion {
    raw: String,
    segments: Vec<u64>,
    suffix: Option<String>,
}

impl ParsedVersion {
    /// Parse a raw version string.
    ///
    /// Anything before the first digit (such as a `v` prefix) is skipped.
    /// The dotted integer run that follows becomes the numeric segments;
    /// the rest of the text, if any, is the suffix. Segments too large for
    /// `u64` saturate.
    ///
    /// ```rust
    /// use latest_version::ParsedVersion;
    ///
    /// let v = ParsedVersion::parse("v3.11.4-rc1");
    /// assert_eq!(v.segments(), &[3, 11, 4]);
    /// assert_eq!(v.suffix(), Some("-rc1"));
    ///
    /// assert!(ParsedVersion::parse("unknown").is_malformed());
    /// ```
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
            return Self {
                raw: raw.to_string(),
                segments: Vec::new(),
                suffix: None,
            };
        };

        let rest = &text[start..];
        let mut segments = Vec::new();
        let mut end = 0;
        loop {
            let len = rest[end..]
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len() - end);
            segments.push(rest[end..end + len].parse::<u64>().unwrap_or(u64::MAX));
            end += len;

            // Continue only on a dot followed by another digit.
            let tail = &rest[end..];
            match tail.strip_prefix('.') {
                Some(next) if next.starts_with(|c: char| c.is_ascii_digit()) => end += 1,
                _ => break,
            }
        }

        let remainder = rest[end..].trim();
        let suffix = if remainder.trim_start_matches(SUFFIX_SEPARATORS).is_empty() {
            None
        } else {
            Some(remainder.to_string())
        };

        Self {
            raw: raw.to_string(),
            segments,
            suffix,
        }
    }

    /// The original text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The numeric segments, e.g. `[3, 11, 4]` for `3.11.4`.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// The text after the numeric run, including its leading separator.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// True when no numeric run was found at all.
    pub fn is_malformed(&self) -> bool {
        self.segments.is_empty()
    }

    /// Suffix with its leading separators removed.
    fn suffix_text(&self) -> Option<&str> {
        self.suffix
            .as_deref()
            .map(|s| s.trim_start_matches(SUFFIX_SEPARATORS))
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for ParsedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ParsedVersion {}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders under [`ComparePolicy::PreReleaseOlder`].
impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        VersionComparator::default().compare(self, other)
    }
}

/// Orders [`ParsedVersion`]s under a chosen [`ComparePolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionComparator {
    policy: ComparePolicy,
}

impl VersionComparator {
    /// Create a comparator for the given policy.
    pub fn new(policy: ComparePolicy) -> Self {
        Self { policy }
    }

    /// The policy this comparator applies.
    pub fn policy(&self) -> ComparePolicy {
        self.policy
    }

    /// Compare two parsed versions.
    ///
    /// Malformed versions sort below well-formed ones and compare by raw
    /// text among themselves. Well-formed versions compare numerically
    /// segment by segment, with missing trailing segments read as `0`,
    /// then by suffix according to the policy.
    pub fn compare(&self, a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
        match (a.is_malformed(), b.is_malformed()) {
            (true, true) => return a.raw.cmp(&b.raw),
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        compare_segments(&a.segments, &b.segments).then_with(|| match self.policy {
            ComparePolicy::PreReleaseOlder => compare_plain_suffix(a, b),
            ComparePolicy::Semver => SemverSuffix::of(a).cmp(&SemverSuffix::of(b)),
        })
    }

    /// Parse both strings and compare them.
    pub fn compare_str(&self, a: &str, b: &str) -> Ordering {
        self.compare(&ParsedVersion::parse(a), &ParsedVersion::parse(b))
    }
}

/// Compare two versions under the default policy.
///
/// ```rust
/// use latest_version::{compare, ParsedVersion};
/// use std::cmp::Ordering;
///
/// let a = ParsedVersion::parse("10.0");
/// let b = ParsedVersion::parse("9.9");
/// assert_eq!(compare(&a, &b), Ordering::Greater);
/// ```
pub fn compare(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    VersionComparator::default().compare(a, b)
}

fn compare_segments(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn compare_plain_suffix(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    match (a.suffix_text(), b.suffix_text()) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(y),
    }
}

/// Suffix classification under [`ComparePolicy::Semver`].
///
/// Variant order is significant: invalid pre-release text sorts below valid
/// pre-releases, which sort below a plain release.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SemverSuffix<'a> {
    Invalid(&'a str),
    PreRelease(Prerelease),
    Release,
}

impl<'a> SemverSuffix<'a> {
    fn of(version: &'a ParsedVersion) -> Self {
        let Some(suffix) = version.suffix.as_deref() else {
            return Self::Release;
        };
        let without_build = suffix.split('+').next().unwrap_or_default();
        let pre = without_build.trim_start_matches(SUFFIX_SEPARATORS).trim();
        if pre.is_empty() {
            return Self::Release;
        }
        match Prerelease::new(pre) {
            Ok(pre) => Self::PreRelease(pre),
            Err(_) => Self::Invalid(pre),
        }
    }
}
