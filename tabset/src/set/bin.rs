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

//! Bin storage backing one table generation.

use std::ops::Index;
use std::ops::IndexMut;

use crate::error::Error;
use crate::error::ErrorKind;

/// State of a single slot in the bin array.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Bin {
    /// Never occupied since the last rebuild.
    Unused,
    /// Previously held a key; logically empty but still part of a probe
    /// chain.
    Tombstone,
    /// Holds a live key.
    Occupied(u32),
}

/// Fixed-length array of bins. Policy lives in the table, not here.
#[derive(Debug)]
pub(crate) struct BinArray {
    bins: Vec<Bin>,
}

impl BinArray {
    /// Allocates `len` all-`Unused` bins.
    pub fn unused(len: usize) -> Self {
        Self {
            bins: vec![Bin::Unused; len],
        }
    }

    /// Fallibly allocates `len` all-`Unused` bins.
    ///
    /// Used by rebuilds, where allocation failure must leave the previous
    /// array untouched rather than abort the process.
    pub fn try_unused(len: usize) -> Result<Self, Error> {
        let mut bins = Vec::new();
        bins.try_reserve_exact(len).map_err(|src| {
            Error::new(ErrorKind::OutOfMemory, "failed to allocate bin array")
                .with_context("num_bins", len)
                .set_source(src)
        })?;
        bins.resize(len, Bin::Unused);
        Ok(Self { bins })
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn as_slice(&self) -> &[Bin] {
        &self.bins
    }

    pub fn iter(&self) -> impl Iterator<Item = Bin> + '_ {
        self.bins.iter().copied()
    }
}

impl Index<usize> for BinArray {
    type Output = Bin;

    fn index(&self, index: usize) -> &Bin {
        &self.bins[index]
    }
}

impl IndexMut<usize> for BinArray {
    fn index_mut(&mut self, index: usize) -> &mut Bin {
        &mut self.bins[index]
    }
}
