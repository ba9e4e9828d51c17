//! micro — the six-executor dispatch benchmark scenario.
//!
//! A heterogeneous pool of six executors starts partially loaded, and the
//! scheduler drains a 1000-task backlog into it under the linear cost model.
//! Snapshots and round summaries land in `./output/` as CSV for external
//! plotting; a per-executor summary is printed at the end.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};

use ds_actor::Actor;
use ds_core::{SimConfig, SimTime, WorkloadRng};
use ds_cost::CostKind;
use ds_output::{CsvWriter, SimOutputObserver};
use ds_sim::{ExecutorSpec, SimBuilder};

// ── Scenario constants ────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const START:          SimTime = SimTime(0);
const END:            SimTime = SimTime(500);
const BACKLOG:        usize = 1_000;
const DURATION_RANGE: RangeInclusive<u64> = 1..=20;

/// (label, capacity, initial running, initial pending)
const FLEET: [(&str, u32, usize, usize); 6] = [
    ("HPC1", 20, 13, 10),
    ("HPC2", 30, 19, 12),
    ("HPC3", 40, 23, 10),
    ("HPC4", 40, 32, 20),
    ("HPC5", 30, 23, 15),
    ("HPC6", 20, 17, 16),
];

fn main() -> Result<()> {
    let mut rng = WorkloadRng::new(SEED);

    let cost: CostKind = "linear".parse()?;
    let mut builder = SimBuilder::new(SimConfig::new(START, END), cost);
    for (label, capacity, running, pending) in FLEET {
        builder = builder.executor(
            ExecutorSpec::new(label, capacity)
                .running(rng.completion_times(START, running, DURATION_RANGE))
                .pending(rng.durations(pending, DURATION_RANGE)),
        );
    }
    let mut sim = builder
        .scheduler("SCHD", rng.durations(BACKLOG, DURATION_RANGE))
        .build()?;

    let out_dir = Path::new("output");
    fs::create_dir_all(out_dir).context("create output directory")?;
    let writer = CsvWriter::new(out_dir).context("open CSV writers")?;
    let mut observer = SimOutputObserver::new(writer);

    sim.run(&mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e).context("write simulation output");
    }

    println!(
        "simulated {} → {} with {} cost, {} tasks dispatched, {} still backlogged",
        START,
        END,
        cost,
        sim.scheduler.assigned(),
        sim.scheduler.pending_len(),
    );
    for executor in &sim.executors {
        println!(
            "{:>5}  cap {:>2}  completed {:>4}  running {:>2}  pending {:>3}",
            executor.label(),
            executor.capacity(),
            executor.completed(),
            executor.running_len(),
            executor.pending_len(),
        );
    }
    println!("wrote {}", out_dir.join("actor_snapshots.csv").display());

    Ok(())
}
