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

//! Open-addressing hash set for `u32` keys.
//!
//! # Usage
//!
//! ```rust
//! use tabset::set::TabulationSet;
//!
//! let mut set = TabulationSet::with_seed(1);
//! for key in 0..100u32 {
//!     set.insert(key)?;
//! }
//! assert_eq!(set.len(), 100);
//! assert!(set.contains(42)?);
//! # Ok::<(), tabset::error::Error>(())
//! ```

mod bin;
mod probe;
mod table;

pub use self::table::MIN_NUM_BINS;
pub use self::table::TabulationSet;
