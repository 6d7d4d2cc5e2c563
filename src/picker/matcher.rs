use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Fuzzy narrowing of picker options
pub struct OptionMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for OptionMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionMatcher").finish_non_exhaustive()
    }
}

impl Default for OptionMatcher {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl OptionMatcher {
    /// Indices of `options` matching every whitespace-separated term in `query`
    ///
    /// Best score first; equal scores keep their original order.
    pub fn filter(&self, query: &str, options: &[String]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..options.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = options
            .iter()
            .enumerate()
            .filter_map(|(idx, option)| {
                terms
                    .iter()
                    .map(|term| self.matcher.fuzzy_match(option, term))
                    .sum::<Option<i64>>()
                    .map(|score| (idx, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}
