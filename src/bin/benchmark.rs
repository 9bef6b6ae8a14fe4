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

extern crate rucene_bench;

use std::env;
use std::process;
use std::time;

use rucene_bench::benchmark::config::BenchmarkConfig;
use rucene_bench::benchmark::tasks::ReadTask;
use rucene_bench::error::Result;

fn format_elapsed(duration: &time::Duration) -> String {
    let secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    let ms = nanos / 1000000;
    let us = (nanos % 1000000) / 1000;
    let ns = nanos % 1000;
    if secs > 0 {
        format!("{}.{} secs", secs, ms)
    } else if ms > 0 {
        format!("{}.{} ms", ms, us)
    } else {
        format!("{}.{} us", us, ns)
    }
}

fn format_phases(task: &dyn ReadTask) -> String {
    let phases: Vec<&str> = [
        (task.with_warm(), "warm"),
        (task.with_search(), "search"),
        (task.with_traverse(), "traverse"),
        (task.with_retrieve(), "retrieve"),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, phase)| *phase)
    .collect();
    phases.join("+")
}

fn format_task(task: &dyn ReadTask) -> Result<String> {
    let sort = match task.sort()? {
        Some(sort) if sort.is_empty() => "<default>".to_string(),
        Some(sort) => sort.to_string(),
        None => "<relevance>".to_string(),
    };
    Ok(format!(
        "{} [{}] sort={} score={} max_score={}",
        task.name(),
        format_phases(task),
        sort,
        task.with_score(),
        task.with_max_score()
    ))
}

fn run(path: &str) -> Result<()> {
    let start = time::Instant::now();
    let config = BenchmarkConfig::from_file(path)?;
    let tasks = config.build_tasks()?;
    println!(
        "======== {} tasks configured in {} ========",
        tasks.len(),
        format_elapsed(&start.elapsed())
    );
    for task in &tasks {
        println!("{}", format_task(task.as_ref())?);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <tasks.json>", args[0]);
        process::exit(2);
    }
    if let Err(e) = run(&args[1]) {
        eprintln!("benchmark configuration failed: {}", e);
        process::exit(1);
    }
}
