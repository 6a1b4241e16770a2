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

//! An open-addressing hash set for `u32` keys.
//!
//! Collisions are resolved by linear probing, deletions leave tombstones,
//! and the table grows, shrinks, and periodically rebuilds itself with a
//! freshly sampled simple tabulation hash function. Resampling bounds the
//! probe-chain degradation that a fixed function accumulates from
//! tombstones and unlucky key patterns.
//!
//! # Usage
//!
//! ```rust
//! use tabset::set::TabulationSet;
//!
//! let mut set = TabulationSet::with_seed(42);
//! set.insert(7)?;
//! assert!(set.contains(7)?);
//! set.remove(7)?;
//! assert!(!set.contains(7)?);
//! # Ok::<(), tabset::error::Error>(())
//! ```
//!
//! # Notes
//!
//! - The set is single-threaded; wrap it in external synchronization for
//!   shared access.
//! - Operations return [`error::Error`] only for allocation failure while
//!   rebuilding; the table stays valid and usable when that happens.

pub mod common;
pub mod error;
pub mod hash;
pub mod set;
