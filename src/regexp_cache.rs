// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

use crate::uservalidator::Anchoring;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub(crate) struct InvalidRegexError(#[from] regex::Error);

/// Anchored regexes compiled from the field patterns.
///
/// The same pattern is compiled once per [`Anchoring`] and shared between
/// threads, so a lookup of an already compiled pattern does not allocate.
pub(crate) struct RegexCache {
    compiled: DashMap<(&'static str, Anchoring), Arc<Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            compiled: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(
        &self, pattern: &'static str, anchoring: Anchoring
    ) -> Result<Arc<Regex>, InvalidRegexError> {
        let key = (pattern, anchoring);
        if let Some(regex) = self.compiled.get(&key) {
            return Ok(Arc::clone(regex.value()));
        }
        let entry = self.compiled.entry(key).or_try_insert_with(|| {
            Regex::new(&anchored_source(pattern, anchoring)).map(Arc::new)
        })?;
        Ok(Arc::clone(entry.value()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }
}

/// Wraps the pattern in a group so that an alternation inside it stays
/// under the anchors.
fn anchored_source(pattern: &str, anchoring: Anchoring) -> String {
    match anchoring {
        Anchoring::Full => format!("^(?:{})$", pattern),
        Anchoring::Start => format!("^(?:{})", pattern),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{anchored_source, RegexCache};
    use crate::uservalidator::Anchoring;

    #[test]
    fn compiles_each_pattern_once_per_anchoring() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"\d{3}", Anchoring::Full).unwrap();
        let second = cache.get_regex(r"\d{3}", Anchoring::Full).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        let start = cache.get_regex(r"\d{3}", Anchoring::Start).unwrap();
        assert!(!Arc::ptr_eq(&first, &start));
        assert_eq!(cache.len(), 2);

        assert!(first.is_match("123"));
        assert!(!first.is_match("1234"));
        assert!(start.is_match("1234"));
    }

    #[test]
    fn anchors_whole_alternation() {
        assert_eq!(anchored_source("a|b", Anchoring::Full), "^(?:a|b)$");
        assert_eq!(anchored_source("a|b", Anchoring::Start), "^(?:a|b)");
    }

    #[test]
    fn invalid_pattern_is_not_cached() {
        let cache = RegexCache::with_capacity(1);
        assert!(cache.get_regex("(unclosed", Anchoring::Full).is_err());
        assert_eq!(cache.len(), 0);
    }
}
