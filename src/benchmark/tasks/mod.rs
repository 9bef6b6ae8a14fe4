// Copyright 2019 Zhizhesihai (Beijing) Technology Limited.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.

mod sort_directive;

pub use self::sort_directive::*;

mod search_with_sort;

pub use self::search_with_sort::*;

use crate::benchmark::{PerfRunData, QueryMaker};
use crate::core::search::sort_field::Sort;
use crate::error::ErrorKind::UnsupportedOperation;
use crate::error::Result;

use std::sync::{Arc, Mutex};

/// A benchmark task that reads from an index.
///
/// The `with_*` flags tell the harness which phases the task goes through:
/// warming the searcher, searching, traversing the hits and retrieving the
/// stored documents of the hits.
pub trait ReadTask: Send + Sync {
    fn name(&self) -> &str;

    fn supports_params(&self) -> bool {
        false
    }

    /// Configures the task from the parameter string of its invocation.
    fn set_params(&mut self, _params: &str) -> Result<()> {
        bail!(UnsupportedOperation(
            format!("{} does not support params", self.name()).into()
        ))
    }

    fn with_warm(&self) -> bool;

    fn with_search(&self) -> bool;

    fn with_traverse(&self) -> bool;

    fn with_retrieve(&self) -> bool;

    /// Whether the collector computes and keeps a score for every hit.
    fn with_score(&self) -> bool {
        true
    }

    /// Whether the collector tracks the maximum score over all hits.
    fn with_max_score(&self) -> bool {
        true
    }

    /// The sort to search with, `None` for relevance order.
    fn sort(&self) -> Result<Option<&Sort>> {
        Ok(None)
    }

    fn query_maker(&self) -> Arc<Mutex<dyn QueryMaker>>;
}

/// Plain search in relevance order.
pub struct SearchTask {
    run_data: Arc<PerfRunData>,
}

impl SearchTask {
    pub fn new(run_data: Arc<PerfRunData>) -> SearchTask {
        SearchTask { run_data }
    }
}

impl ReadTask for SearchTask {
    fn name(&self) -> &str {
        "Search"
    }

    fn with_warm(&self) -> bool {
        false
    }

    fn with_search(&self) -> bool {
        true
    }

    fn with_traverse(&self) -> bool {
        false
    }

    fn with_retrieve(&self) -> bool {
        false
    }

    fn query_maker(&self) -> Arc<Mutex<dyn QueryMaker>> {
        self.run_data.query_maker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::SimpleQueryMaker;

    #[test]
    fn test_search_task() {
        let run_data = Arc::new(PerfRunData::new(SimpleQueryMaker::new(vec!["q".into()])));
        let mut task = SearchTask::new(run_data);

        assert!(task.with_search());
        assert!(!task.with_warm());
        assert!(!task.with_traverse());
        assert!(!task.with_retrieve());
        assert!(task.with_score());
        assert!(task.with_max_score());
        assert!(task.sort().unwrap().is_none());
        assert!(!task.supports_params());
        assert!(task.set_params("doc").is_err());
        assert_eq!("q", task.query_maker().lock().unwrap().make_query().unwrap());
    }
}
