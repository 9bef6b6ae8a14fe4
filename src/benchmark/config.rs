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

use crate::benchmark::tasks::{ReadTask, SearchTask, SearchWithSortTask};
use crate::benchmark::{PerfRunData, SimpleQueryMaker};
use crate::error::ErrorKind::{IllegalArgument, UnsupportedOperation};
use crate::error::{Result, ResultExt};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// One task invocation, e.g. `{"task": "SearchWithSort", "params": "name,byline:int"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskConfig {
    pub task: String,
    #[serde(default)]
    pub params: Option<String>,
}

/// A benchmark run: the queries to search with and the tasks to run them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub queries: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

impl BenchmarkConfig {
    pub fn from_json(json: &str) -> Result<BenchmarkConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BenchmarkConfig> {
        let path = path.as_ref();
        let file = File::open(path)
            .chain_err(|| format!("failed to open benchmark config {}", path.display()))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Creates and configures every task. All params are compiled here, before
    /// any task is handed to a searching thread.
    pub fn build_tasks(&self) -> Result<Vec<Box<dyn ReadTask>>> {
        let run_data = Arc::new(PerfRunData::new(SimpleQueryMaker::new(
            self.queries.clone(),
        )));
        let tasks = self
            .tasks
            .iter()
            .map(|config| create_task(Arc::clone(&run_data), config))
            .collect::<Result<Vec<_>>>()?;
        info!(
            "configured {} tasks over {} queries",
            tasks.len(),
            self.queries.len()
        );
        Ok(tasks)
    }
}

pub fn create_task(run_data: Arc<PerfRunData>, config: &TaskConfig) -> Result<Box<dyn ReadTask>> {
    let mut task: Box<dyn ReadTask> = match config.task.as_str() {
        "Search" => Box::new(SearchTask::new(run_data)),
        "SearchWithSort" => Box::new(SearchWithSortTask::new(run_data)),
        name => {
            bail!(IllegalArgument(format!("unknown task '{}'", name)));
        }
    };
    if let Some(ref params) = config.params {
        if !task.supports_params() {
            bail!(UnsupportedOperation(
                format!("{} does not support params", task.name()).into()
            ));
        }
        task.set_params(params)?;
    }
    Ok(task)
}
