//! Per-host selector hints.
//!
//! A [`SelectorChain`] names the container(s) known to hold a site's article
//! body. [`SiteHints`] maps host suffixes to chains and is the crate's only
//! per-site knowledge. The built-in table is small and hand-curated; unknown
//! hosts simply resolve to no hint.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use dom_query::Matcher;
use url::Url;

use crate::error::{Error, Result};

/// Ordered CSS selectors whose matched text is concatenated.
///
/// Parsed from the comma-joined form used by the command line and the site
/// table (`"div#newsct_article, div.byline"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorChain {
    selectors: Vec<String>,
}

impl SelectorChain {
    /// Build a chain from a comma-joined string without validating selectors.
    ///
    /// Blank entries are dropped. Invalid selectors are kept and match
    /// nothing at extraction time.
    #[must_use]
    pub fn parse_lenient(chain: &str) -> Self {
        Self {
            selectors: chain
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Selectors in evaluation order.
    #[must_use]
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// True when the chain holds no selectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl FromStr for SelectorChain {
    type Err = Error;

    /// Strict parse: every selector must be valid CSS and at least one must
    /// be present.
    fn from_str(s: &str) -> Result<Self> {
        let chain = Self::parse_lenient(s);
        if chain.is_empty() {
            return Err(Error::EmptySelectorChain);
        }

        for selector in &chain.selectors {
            if Matcher::new(selector).is_err() {
                return Err(Error::InvalidSelector(selector.clone()));
            }
        }
        Ok(chain)
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selectors.join(", "))
    }
}

/// Built-in host → selector chain rules.
const BUILTIN_HINTS: &[(&str, &str)] = &[
    ("n.news.naver.com", "div#newsct_article, div.byline"),
    ("news.naver.com", "div#newsct_article, div.byline"),
    ("v.daum.net", "section#harmonyContainer"),
    ("www.businesspost.co.kr", "div#tab1"),
    ("www.yna.co.kr", "div#articleWrap"),
    ("www.chosun.com", "div#news_body_area"),
    ("www.hani.co.kr", "div#contents-article"),
    ("www.news1.kr", "div#articleBodyContent"),
];

static BUILTIN: LazyLock<SiteHints> = LazyLock::new(|| {
    BUILTIN_HINTS
        .iter()
        .fold(SiteHints::empty(), |hints, (host, chain)| {
            hints.with_hint(host, SelectorChain::parse_lenient(chain))
        })
});

/// Immutable host-suffix → [`SelectorChain`] lookup.
///
/// Built once (usually at startup) and only read afterwards.
#[derive(Debug, Clone)]
pub struct SiteHints {
    rules: Vec<(String, SelectorChain)>,
}

impl SiteHints {
    /// A table with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in table of known news hosts.
    #[must_use]
    pub fn builtin() -> &'static SiteHints {
        &BUILTIN
    }

    /// Return a new table with `host` registered to `chain`.
    ///
    /// Re-registering a host replaces its chain.
    #[must_use]
    pub fn with_hint(mut self, host: &str, chain: SelectorChain) -> Self {
        let host = normalize_host(host);
        self.rules.retain(|(registered, _)| *registered != host);
        self.rules.push((host, chain));
        self
    }

    /// Number of registered hosts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no hosts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve the hint for a page URL.
    ///
    /// Returns `None` for unparseable URLs, URLs without a host, and hosts
    /// with no registered suffix.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<&SelectorChain> {
        let host = extract_host(url)?;
        self.resolve_host(&host)
    }

    /// Resolve the hint for a bare host name.
    ///
    /// A rule matches when the host equals it or ends with `.` + rule; the
    /// longest matching rule wins.
    #[must_use]
    pub fn resolve_host(&self, host: &str) -> Option<&SelectorChain> {
        let host = normalize_host(host);
        self.rules
            .iter()
            .filter(|(rule, _)| host_matches(&host, rule))
            .max_by_key(|(rule, _)| rule.len())
            .map(|(_, chain)| chain)
    }
}

impl Default for SiteHints {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn host_matches(host: &str, rule: &str) -> bool {
    host == rule
        || host
            .strip_suffix(rule)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Extract the host of an absolute URL.
#[must_use]
pub fn extract_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().map(normalize_host)
}
