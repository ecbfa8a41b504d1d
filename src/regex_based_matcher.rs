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


use log::error;

use crate::{
    interfaces, regexp_cache::{InvalidRegexError, RegexCache}, uservalidator::Anchoring
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(8) }
    }

    fn match_value(
        &self, value: &str,
        pattern: &'static str,
        anchoring: Anchoring
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(pattern, anchoring)?;
        Ok(regexp.is_match(value))
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_field(&self, value: &str, pattern: &'static str, anchoring: Anchoring) -> bool {
        // An empty pattern would match the empty prefix of anything.
        if pattern.is_empty() {
            return false;
        }
        match self.match_value(value, pattern, anchoring) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RegexBasedMatcher;
    use crate::{interfaces::MatcherApi, uservalidator::Anchoring};

    #[test]
    fn full_anchoring_requires_whole_value() {
        let matcher = RegexBasedMatcher::new();
        assert!(matcher.match_field("abc", "[a-c]+", Anchoring::Full));
        assert!(!matcher.match_field("abcd", "[a-c]+", Anchoring::Full));
        assert!(!matcher.match_field("xabc", "[a-c]+", Anchoring::Full));
    }

    #[test]
    fn start_anchoring_tolerates_trailing_text() {
        let matcher = RegexBasedMatcher::new();
        assert!(matcher.match_field("abcd", "[a-c]+", Anchoring::Start));
        assert!(!matcher.match_field("xabc", "[a-c]+", Anchoring::Start));
    }

    #[test]
    fn alternation_stays_anchored() {
        let matcher = RegexBasedMatcher::new();
        assert!(!matcher.match_field("1ab", "a|1", Anchoring::Full));
        assert!(matcher.match_field("a", "a|1", Anchoring::Full));
    }

    #[test]
    fn reuses_compiled_patterns() {
        let matcher = RegexBasedMatcher::new();
        for value in ["abc", "abcd", "cab"] {
            matcher.match_field(value, "[a-c]+", Anchoring::Full);
        }
        assert_eq!(matcher.cache.len(), 1);
        matcher.match_field("abcd", "[a-c]+", Anchoring::Start);
        assert_eq!(matcher.cache.len(), 2);
    }

    #[test]
    fn broken_or_empty_pattern_never_matches() {
        let matcher = RegexBasedMatcher::new();
        assert!(!matcher.match_field("abc", "(abc", Anchoring::Full));
        assert!(!matcher.match_field("abc", "", Anchoring::Start));
    }
}
