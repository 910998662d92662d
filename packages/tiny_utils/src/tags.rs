//! Named markers for tests, and a filter that decides which tagged tests to run.
//!
//! Tags carry no behavior. A test (or a group of tests) declares its tags and asks a
//! [`TagFilter`] whether it should run. Tags declared on a group apply to every test in it, so
//! pass the group's tags together with the test's own.
//!
//! ```rust
//! use tiny_utils::{Tag, TagFilter};
//!
//! let filter = TagFilter::new().exclude(Tag::NoTimeout);
//!
//! assert!(filter.accepts([Tag::Fast]));
//! assert!(!filter.accepts([Tag::Fast, Tag::NoTimeout]));
//! ```

use std::collections::BTreeSet;
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Environment variable listing the tags a test must carry (at least one of them) to run.
pub const INCLUDE_VARIABLE: &str = "TINY_TEST_TAGS_INCLUDE";

/// Environment variable listing the tags that prevent a test from running.
pub const EXCLUDE_VARIABLE: &str = "TINY_TEST_TAGS_EXCLUDE";

/// A test marker.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Tag {
    /// The test exercises asynchronous or multi-threaded behavior.
    Async,
    /// The test is expected to fail.
    Fail,
    /// The test completes quickly.
    Fast,
    /// The test must not be run under a timeout.
    NoTimeout,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Async, Self::Fail, Self::Fast, Self::NoTimeout];

    /// The name of the tag, such as `NoTimeout`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Async => "Async",
            Self::Fail => "Fail",
            Self::Fast => "Fast",
            Self::NoTimeout => "NoTimeout",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parses a tag name, ignoring ASCII case, `_` and `-`, so `NoTimeout`, `no_timeout` and
    /// `NO-TIMEOUT` are all accepted.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();

        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| Error::InvalidArgument(Some(format!("unknown test tag '{}'", s.trim()))))
    }
}

/// Decides whether a test with a given set of tags should run.
///
/// A test runs if it carries at least one included tag (or nothing is included, meaning
/// everything is) and carries no excluded tag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct TagFilter {
    include: BTreeSet<Tag>,
    exclude: BTreeSet<Tag>,
}

impl TagFilter {
    /// A filter that accepts every test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only run tests that carry `tag` (or any other included tag).
    pub fn include(mut self, tag: Tag) -> Self {
        self.include.insert(tag);
        self
    }

    /// Never run tests that carry `tag`.
    pub fn exclude(mut self, tag: Tag) -> Self {
        self.exclude.insert(tag);
        self
    }

    /// Builds a filter from the comma-separated tag lists in the [`INCLUDE_VARIABLE`] and
    /// [`EXCLUDE_VARIABLE`] environment variables. Unset variables mean no restriction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either variable names an unknown tag.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env()`][Self::from_env] but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either variable names an unknown tag.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            include: parse_list(lookup(INCLUDE_VARIABLE).as_deref())?,
            exclude: parse_list(lookup(EXCLUDE_VARIABLE).as_deref())?,
        })
    }

    /// Whether a test carrying `tags` should run.
    #[must_use]
    pub fn accepts(&self, tags: impl IntoIterator<Item = Tag>) -> bool {
        let mut included = self.include.is_empty();

        for tag in tags {
            if self.exclude.contains(&tag) {
                return false;
            }

            included |= self.include.contains(&tag);
        }

        included
    }
}

fn parse_list(list: Option<&str>) -> Result<BTreeSet<Tag>> {
    list.unwrap_or_default()
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(str::parse)
        .collect()
}
