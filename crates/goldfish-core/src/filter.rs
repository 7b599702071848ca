// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Filter engine: category and free-text search over the record set.

use crate::category::CategoryFilter;
use crate::record::LocationRecord;

/// Current selection of the filter bar and search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterState {
    /// Records from `all` that pass this state's filters, in input order.
    pub fn apply<'a, I>(&self, all: I) -> Vec<&'a LocationRecord>
    where
        I: IntoIterator<Item = &'a LocationRecord>,
    {
        filter(all, &self.category, &self.query)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.query.is_empty()
    }
}

/// Keep the records that satisfy both the category and the search predicate.
///
/// Pure and order-preserving. An empty query disables text search.
pub fn filter<'a, I>(all: I, category: &CategoryFilter, query: &str) -> Vec<&'a LocationRecord>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    let needle = query.to_lowercase();
    all.into_iter()
        .filter(|record| category.matches(record))
        .filter(|record| needle.is_empty() || matches_query(record, &needle))
        .collect()
}

/// Case-insensitive substring match on name, prefecture and `description`.
///
/// The legacy `desc` field is display-only and never searched.
fn matches_query(record: &LocationRecord, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    contains(&record.name)
        || contains(&record.pref)
        || record.description.as_deref().is_some_and(contains)
}
