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

use crate::error::ErrorKind::IllegalState;
use crate::error::Result;

/// Supplies the queries a search task runs.
pub trait QueryMaker: Send {
    /// Returns the next query to run.
    fn make_query(&mut self) -> Result<String>;

    /// Starts over from the first query.
    fn reset_inputs(&mut self);
}

/// Cycles over a fixed list of query strings.
#[derive(Debug, Clone)]
pub struct SimpleQueryMaker {
    queries: Vec<String>,
    next: usize,
}

impl SimpleQueryMaker {
    pub fn new(queries: Vec<String>) -> SimpleQueryMaker {
        SimpleQueryMaker { queries, next: 0 }
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }
}

impl QueryMaker for SimpleQueryMaker {
    fn make_query(&mut self) -> Result<String> {
        if self.queries.is_empty() {
            bail!(IllegalState("no queries to make".into()));
        }
        let query = self.queries[self.next].clone();
        self.next = (self.next + 1) % self.queries.len();
        Ok(query)
    }

    fn reset_inputs(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_queries() {
        let mut maker = SimpleQueryMaker::new(vec!["a".into(), "b".into()]);
        assert_eq!("a", maker.make_query().unwrap());
        assert_eq!("b", maker.make_query().unwrap());
        assert_eq!("a", maker.make_query().unwrap());
        maker.reset_inputs();
        assert_eq!("a", maker.make_query().unwrap());
    }

    #[test]
    fn test_no_queries() {
        let mut maker = SimpleQueryMaker::new(vec![]);
        assert!(maker.make_query().is_err());
    }
}
