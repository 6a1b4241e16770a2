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

//! Linear probe sequences over a bin array.
//!
//! Probe position `i` of hash `h` is `(h + i) & (len - 1)`; the array
//! length is always a power of two. Both searches terminate within `len`
//! steps as long as the table keeps `used * 2 <= len`; running off the
//! end of the sequence means the load-factor bookkeeping is broken and
//! is treated as a fatal defect.

use crate::set::bin::Bin;

#[inline]
fn position(hash: u32, step: usize, len: usize) -> usize {
    (hash as usize + step) & (len - 1)
}

/// Finds the bin holding `key`, or the first `Unused` bin that ends its
/// probe chain (meaning the key is absent).
///
/// Tombstones and non-matching occupied bins are stepped over; a
/// tombstone never matches but does not terminate the scan.
pub(crate) fn find_slot(bins: &[Bin], key: u32, hash: u32) -> usize {
    for step in 0..bins.len() {
        let index = position(hash, step, bins.len());
        match bins[index] {
            Bin::Occupied(occupant) if occupant == key => return index,
            Bin::Unused => return index,
            Bin::Occupied(_) | Bin::Tombstone => {}
        }
    }
    unreachable!("probe sequence exhausted: load-factor bookkeeping is broken");
}

/// Finds the first `Unused` or `Tombstone` bin along the probe sequence.
///
/// Reusing tombstones keeps probe chains short.
pub(crate) fn find_insertion_slot(bins: &[Bin], hash: u32) -> usize {
    for step in 0..bins.len() {
        let index = position(hash, step, bins.len());
        match bins[index] {
            Bin::Unused | Bin::Tombstone => return index,
            Bin::Occupied(_) => {}
        }
    }
    unreachable!("probe sequence exhausted: load-factor bookkeeping is broken");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_slot_returns_match() {
        let bins = [
            Bin::Occupied(9),
            Bin::Occupied(5),
            Bin::Unused,
            Bin::Unused,
        ];
        assert_eq!(find_slot(&bins, 5, 0), 1);
        assert_eq!(find_slot(&bins, 9, 0), 0);
    }

    #[test]
    fn test_find_slot_stops_at_unused() {
        let bins = [
            Bin::Occupied(9),
            Bin::Occupied(5),
            Bin::Unused,
            Bin::Occupied(7),
        ];
        // Key 7 is absent from the chain starting at 0; the scan must end
        // at the first unused bin, not reach index 3.
        assert_eq!(find_slot(&bins, 7, 0), 2);
    }

    #[test]
    fn test_find_slot_skips_tombstones() {
        let bins = [
            Bin::Tombstone,
            Bin::Tombstone,
            Bin::Occupied(5),
            Bin::Unused,
        ];
        assert_eq!(find_slot(&bins, 5, 0), 2);
        assert_eq!(find_slot(&bins, 6, 0), 3);
    }

    #[test]
    fn test_find_slot_wraps_around() {
        let bins = [
            Bin::Unused,
            Bin::Unused,
            Bin::Occupied(1),
            Bin::Occupied(2),
        ];
        // Hash lands on the last bin; the matching scan wraps to index 0.
        assert_eq!(find_slot(&bins, 8, 3), 0);
    }

    #[test]
    fn test_find_insertion_slot_reuses_tombstone() {
        let bins = [
            Bin::Occupied(9),
            Bin::Tombstone,
            Bin::Unused,
            Bin::Unused,
        ];
        assert_eq!(find_insertion_slot(&bins, 0), 1);
    }

    #[test]
    fn test_find_insertion_slot_prefers_first_candidate() {
        let bins = [
            Bin::Occupied(9),
            Bin::Occupied(8),
            Bin::Tombstone,
            Bin::Unused,
        ];
        assert_eq!(find_insertion_slot(&bins, 0), 2);
        assert_eq!(find_insertion_slot(&bins, 3), 3);
    }
}
