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

pub mod config;
pub mod tasks;

mod query_maker;

pub use self::query_maker::*;

use crate::error::Result;

use std::sync::{Arc, Mutex};

/// State shared by all tasks of one benchmark run.
pub struct PerfRunData {
    query_maker: Arc<Mutex<dyn QueryMaker>>,
}

impl PerfRunData {
    pub fn new<Q: QueryMaker + 'static>(query_maker: Q) -> PerfRunData {
        PerfRunData {
            query_maker: Arc::new(Mutex::new(query_maker)),
        }
    }

    pub fn query_maker(&self) -> Arc<Mutex<dyn QueryMaker>> {
        Arc::clone(&self.query_maker)
    }

    /// Takes the next query from the shared query maker.
    pub fn next_query(&self) -> Result<String> {
        let mut maker = self.query_maker.lock()?;
        maker.make_query()
    }
}
