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

//! Simple tabulation hashing over 32-bit keys.
//!
//! A sampled function is a set of lookup tables filled with independent
//! uniform words; a key is hashed by XOR-ing one word per 4-bit digit.
//! The family gives strong average-case independence but only
//! probabilistic guarantees against adversarial key sequences, which is
//! why tables resample their function periodically.

use crate::common::RandomSource;

/// Bits consumed per digit of the key.
const DIGIT_BITS: u32 = 4;

/// Number of digits in a 32-bit key.
const NUM_DIGITS: usize = (u32::BITS / DIGIT_BITS) as usize;

/// Entries per sub-table, one per digit value.
const SUB_TABLE_LEN: usize = 1 << DIGIT_BITS;

/// One sampled member of the simple tabulation family.
///
/// Each instance is exclusively owned by one table and is replaced
/// wholesale when the table rebuilds; it is never mutated in place.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabulationHash {
    tables: [[u32; SUB_TABLE_LEN]; NUM_DIGITS],
}

impl TabulationHash {
    /// Samples a fresh function, filling every word independently and
    /// uniformly from `rng`.
    pub fn sample<R: RandomSource>(rng: &mut R) -> Self {
        let mut tables = [[0u32; SUB_TABLE_LEN]; NUM_DIGITS];
        for sub_table in tables.iter_mut() {
            for word in sub_table.iter_mut() {
                *word = rng.next_u32();
            }
        }
        Self { tables }
    }

    /// Hashes a key, least-significant digit first.
    ///
    /// Pure and deterministic for a fixed sampled function.
    pub fn hash(&self, key: u32) -> u32 {
        let mask = (SUB_TABLE_LEN - 1) as u32;
        let mut remaining = key;
        let mut value = 0;
        for sub_table in &self.tables {
            value ^= sub_table[(remaining & mask) as usize];
            remaining >>= DIGIT_BITS;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::XorShift64;

    #[test]
    fn test_hash_is_deterministic() {
        let mut rng = XorShift64::seeded(11);
        let hash = TabulationHash::sample(&mut rng);
        for key in [0u32, 1, 0xdead_beef, u32::MAX] {
            assert_eq!(hash.hash(key), hash.hash(key));
        }
    }

    #[test]
    fn test_hash_is_xor_of_digit_words() {
        let mut rng = XorShift64::seeded(12);
        let hash = TabulationHash::sample(&mut rng);

        let key = 0x1234_5678u32;
        let mut expected = 0;
        for digit_index in 0..NUM_DIGITS {
            let digit = (key >> (digit_index as u32 * DIGIT_BITS)) as usize & (SUB_TABLE_LEN - 1);
            expected ^= hash.tables[digit_index][digit];
        }
        assert_eq!(hash.hash(key), expected);
    }

    #[test]
    fn test_zero_key_hashes_to_xor_of_first_columns() {
        let mut rng = XorShift64::seeded(13);
        let hash = TabulationHash::sample(&mut rng);

        let expected = hash
            .tables
            .iter()
            .fold(0u32, |acc, sub_table| acc ^ sub_table[0]);
        assert_eq!(hash.hash(0), expected);
    }

    #[test]
    fn test_distinct_samples_differ() {
        let mut rng = XorShift64::seeded(14);
        let first = TabulationHash::sample(&mut rng);
        let second = TabulationHash::sample(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_single_digit_change_changes_hash() {
        let mut rng = XorShift64::seeded(15);
        let hash = TabulationHash::sample(&mut rng);

        // Flipping one digit XORs in the difference of two distinct table
        // words, which is almost surely non-zero for a sampled function.
        let base = hash.hash(0x0000_0050);
        let flipped = hash.hash(0x0000_0040);
        let delta = hash.tables[1][5] ^ hash.tables[1][4];
        assert_eq!(base ^ flipped, delta);
    }
}
