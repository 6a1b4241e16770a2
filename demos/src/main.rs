// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Random-workload stress driver for the tabset library.
//!
//! Inserts a batch of random keys, re-checks membership, probes
//! unrelated random keys against an oracle, deletes everything, and
//! asserts the set reflects each step. Exits non-zero on any mismatch.

use std::collections::HashSet;

use anyhow::bail;
use clap::Parser;
use tabset::common::RandomSource;
use tabset::common::XorShift64;
use tabset::set::TabulationSet;

#[derive(Debug, Parser)]
#[command(name = "tabset-stress")]
struct Args {
    /// Seed for the key generator and the table's hash-function sampler.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of distinct keys to insert.
    #[arg(long, default_value_t = 1000)]
    keys: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut rng = XorShift64::seeded(args.seed);
    let mut set = TabulationSet::with_seed(args.seed.wrapping_add(1));

    // Distinct keys, insertion order preserved.
    let mut inserted = HashSet::new();
    let mut keys = Vec::with_capacity(args.keys);
    while keys.len() < args.keys {
        let key = rng.next_u32();
        if inserted.insert(key) {
            keys.push(key);
        }
    }

    for &key in &keys {
        set.insert(key)?;
    }
    if set.len() != keys.len() {
        bail!("expected {} live keys, set reports {}", keys.len(), set.len());
    }
    for &key in &keys {
        if !set.contains(key)? {
            bail!("inserted key {key} reported absent");
        }
    }

    let mut unrelated = 0usize;
    for _ in 0..args.keys {
        let key = rng.next_u32();
        if set.contains(key)? != inserted.contains(&key) {
            bail!("membership mismatch for probe key {key}");
        }
        if !inserted.contains(&key) {
            unrelated += 1;
        }
    }

    for &key in &keys {
        if !set.remove(key)? {
            bail!("key {key} vanished before removal");
        }
    }
    if !set.is_empty() {
        bail!("set still reports {} live keys after removal", set.len());
    }
    for &key in &keys {
        if set.contains(key)? {
            bail!("deleted key {key} reported present");
        }
    }

    if set.num_bins() <= 64 {
        print!("{}", set.dump());
    }
    println!(
        "ok: {} keys inserted, verified, and removed ({} unrelated probes, {} rebuilds, {} bins left)",
        keys.len(),
        unrelated,
        set.rebuilds(),
        set.num_bins(),
    );
    Ok(())
}
