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

use std::fmt::Write;

use crate::common::RandomSource;
use crate::common::XorShift64;
use crate::error::Error;
use crate::hash::TabulationHash;
use crate::set::bin::Bin;
use crate::set::bin::BinArray;
use crate::set::probe;

/// Smallest number of bins a table holds; shrinking never goes below it.
pub const MIN_NUM_BINS: usize = 8;

/// Open-addressing `u32` set with linear probing and resampled
/// tabulation hashing.
///
/// The bin array always holds a power-of-two number of bins. Growth and
/// shrink keep two load-factor bounds: at most half the bins are in use
/// (occupied or tombstoned), and above the minimum size at least an
/// eighth are occupied. Independently of load, every `N` operations the
/// table rebuilds at its current size with a freshly sampled hash
/// function, clearing tombstones and bounding probe-chain degradation.
///
/// Single mutable owner, single thread; `contains` takes `&mut self`
/// because every operation counts toward the periodic rehash.
#[derive(Debug)]
pub struct TabulationSet<R: RandomSource = XorShift64> {
    rng: R,
    hash: TabulationHash,
    bins: BinArray,
    /// Bins that are not `Unused` (occupied or tombstoned).
    used: usize,
    /// Bins that are `Occupied`.
    active: usize,
    ops_since_rehash: usize,
    rebuilds: u64,
}

impl TabulationSet<XorShift64> {
    /// Creates an empty set with a time-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(XorShift64::default())
    }

    /// Creates an empty set whose hash functions are sampled from a
    /// deterministically seeded source.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(XorShift64::seeded(seed))
    }
}

impl Default for TabulationSet<XorShift64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> TabulationSet<R> {
    /// Creates an empty set with a custom random source.
    pub fn with_rng(mut rng: R) -> Self {
        let hash = TabulationHash::sample(&mut rng);
        Self {
            rng,
            hash,
            bins: BinArray::unused(MIN_NUM_BINS),
            used: 0,
            active: 0,
            ops_since_rehash: 0,
            rebuilds: 0,
        }
    }

    /// Returns the number of live keys.
    pub fn len(&self) -> usize {
        self.active
    }

    /// Returns true if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Returns the current number of bins.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Returns the number of completed rebuilds (resizes and rehashes)
    /// since creation. Each rebuild swaps in a freshly sampled hash
    /// function.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Adds a key to the set. Idempotent.
    ///
    /// Returns true if the key was newly added.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfMemory`](crate::error::ErrorKind::OutOfMemory)
    /// if a triggered rebuild cannot allocate its new bin array; the set
    /// remains valid and the key, once placed, stays present. An error
    /// means the table could not grow: callers that keep inserting while
    /// ignoring it will eventually exhaust probe headroom and panic, so
    /// treat it as a signal to stop adding keys until a later operation
    /// rebuilds successfully.
    pub fn insert(&mut self, key: u32) -> Result<bool, Error> {
        self.tick()?;

        let hash = self.hash.hash(key);
        let found = probe::find_slot(self.bins.as_slice(), key, hash);
        if self.bins[found] == Bin::Occupied(key) {
            return Ok(false);
        }

        let slot = probe::find_insertion_slot(self.bins.as_slice(), hash);
        let was_unused = self.bins[slot] == Bin::Unused;
        self.bins[slot] = Bin::Occupied(key);
        self.active += 1;
        if was_unused {
            self.used += 1;
        }

        if self.used * 2 > self.bins.len() {
            self.rebuild(self.bins.len() * 2)?;
        }
        Ok(true)
    }

    /// Tests whether a key is in the set.
    ///
    /// Counts toward the periodic rehash like any other operation, since
    /// probe-chain cost accumulates with lookups too.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfMemory`](crate::error::ErrorKind::OutOfMemory)
    /// if a triggered rehash cannot allocate; the set is unchanged.
    pub fn contains(&mut self, key: u32) -> Result<bool, Error> {
        self.tick()?;

        let hash = self.hash.hash(key);
        let slot = probe::find_slot(self.bins.as_slice(), key, hash);
        Ok(self.bins[slot] == Bin::Occupied(key))
    }

    /// Removes a key from the set. No-op if the key is absent.
    ///
    /// Returns true if the key was present.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfMemory`](crate::error::ErrorKind::OutOfMemory)
    /// if a triggered rebuild cannot allocate; the key is still removed.
    pub fn remove(&mut self, key: u32) -> Result<bool, Error> {
        self.tick()?;

        let hash = self.hash.hash(key);
        let slot = probe::find_slot(self.bins.as_slice(), key, hash);
        if self.bins[slot] != Bin::Occupied(key) {
            return Ok(false);
        }

        // Tombstone, never Unused: keys placed further along this probe
        // chain must stay reachable.
        self.bins[slot] = Bin::Tombstone;
        self.active -= 1;

        if self.active * 8 < self.bins.len() && self.bins.len() > MIN_NUM_BINS {
            self.rebuild(self.bins.len() / 2)?;
        }
        Ok(true)
    }

    /// Renders bin states for debugging, eight bins per line.
    ///
    /// `[key]` is a live key, `[*]` a tombstone, `[ ]` an unused bin.
    /// Not part of the functional contract.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (index, bin) in self.bins.iter().enumerate() {
            if index > 0 && index % 8 == 0 {
                out.push('\n');
            }
            match bin {
                Bin::Occupied(key) => {
                    let _ = write!(out, "[{key}]");
                }
                Bin::Tombstone => out.push_str("[*]"),
                Bin::Unused => out.push_str("[ ]"),
            }
        }
        out.push('\n');
        out.push_str("----------------------\n");
        out
    }

    /// Counts one operation; rebuilds at the current size with a fresh
    /// function once the count exceeds the number of bins.
    fn tick(&mut self) -> Result<(), Error> {
        self.ops_since_rehash += 1;
        if self.ops_since_rehash > self.bins.len() {
            self.rebuild(self.bins.len())?;
        }
        Ok(())
    }

    /// Replaces the bin array and hash function, migrating live keys.
    ///
    /// All-or-nothing: the new array is allocated before any existing
    /// state is touched, so on allocation failure the table is exactly as
    /// it was. The old array is released once, after migration. Migration
    /// goes through [`place_raw`], which performs no threshold checks, so
    /// a rebuild can never nest; only the caller decides on further
    /// resizing.
    fn rebuild(&mut self, new_len: usize) -> Result<(), Error> {
        debug_assert!(new_len.is_power_of_two() && new_len >= MIN_NUM_BINS);

        let mut bins = BinArray::try_unused(new_len)?;
        let hash = TabulationHash::sample(&mut self.rng);
        let mut migrated = 0;
        for bin in self.bins.iter() {
            if let Bin::Occupied(key) = bin {
                place_raw(&mut bins, &hash, key);
                migrated += 1;
            }
        }

        self.bins = bins;
        self.hash = hash;
        self.used = migrated;
        self.active = migrated;
        self.ops_since_rehash = 0;
        self.rebuilds += 1;
        Ok(())
    }
}

/// Placement without growth or rehash checks, used only while migrating
/// into a freshly allocated array that is known to have room.
fn place_raw(bins: &mut BinArray, hash: &TabulationHash, key: u32) {
    let slot = probe::find_insertion_slot(bins.as_slice(), hash.hash(key));
    bins[slot] = Bin::Occupied(key);
}
