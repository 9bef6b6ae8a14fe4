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

use crate::benchmark::tasks::{ReadTask, SortDirective};
use crate::benchmark::{PerfRunData, QueryMaker};
use crate::core::search::sort_field::Sort;
use crate::error::ErrorKind::IllegalState;
use crate::error::Result;

use std::sync::{Arc, Mutex};

enum SortState {
    Uncompiled,
    Compiled(SortDirective),
}

/// Sorted search on the fields given by the task's params.
///
/// Params are a sort directive, see `SortDirective`. They must be set exactly
/// once, before the task runs; the compiled sort is read-only afterwards.
pub struct SearchWithSortTask {
    run_data: Arc<PerfRunData>,
    state: SortState,
}

impl SearchWithSortTask {
    pub fn new(run_data: Arc<PerfRunData>) -> SearchWithSortTask {
        SearchWithSortTask {
            run_data,
            state: SortState::Uncompiled,
        }
    }

    pub fn directive(&self) -> Option<&SortDirective> {
        match &self.state {
            SortState::Compiled(directive) => Some(directive),
            SortState::Uncompiled => None,
        }
    }
}

impl ReadTask for SearchWithSortTask {
    fn name(&self) -> &str {
        "SearchWithSort"
    }

    fn supports_params(&self) -> bool {
        true
    }

    fn set_params(&mut self, params: &str) -> Result<()> {
        if let SortState::Compiled(ref directive) = self.state {
            bail!(IllegalState(format!(
                "sort fields were already set to [{}]",
                directive.sort()
            )));
        }
        self.state = SortState::Compiled(SortDirective::parse(params));
        Ok(())
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

    fn with_score(&self) -> bool {
        self.directive().map_or(true, |d| d.track_scores())
    }

    fn with_max_score(&self) -> bool {
        self.directive().map_or(true, |d| d.track_max_score())
    }

    fn sort(&self) -> Result<Option<&Sort>> {
        match &self.state {
            SortState::Compiled(directive) => Ok(Some(directive.sort())),
            SortState::Uncompiled => {
                bail!(IllegalState("No sort field was set".into()));
            }
        }
    }

    fn query_maker(&self) -> Arc<Mutex<dyn QueryMaker>> {
        self.run_data.query_maker()
    }
}
