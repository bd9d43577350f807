//! Randomized trial search for magic multipliers, run once at process
//! startup to build the slider attack tables.

use crate::bitboard::BitBoard;
use rand::RngCore;
use rand::rngs::StdRng;
use std::collections::HashMap;

const MAX_ATTEMPTS: u32 = 1_000_000;

fn random_sparse_u64(rng: &mut StdRng) -> u64 {
    rng.next_u64() & rng.next_u64() & rng.next_u64()
}

/// Every subset of `mask` (Carry-Rippler enumeration).
fn occupancy_subsets(mask: BitBoard) -> Vec<BitBoard> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset: BitBoard = 0;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

/// Finds a magic number for `mask`/`shift` such that `(occ & mask).wrapping_mul(magic) >> shift`
/// produces no collisions between occupancy subsets mapping to different attack sets.
pub fn find_magic_number(
    mask: BitBoard,
    shift: u32,
    rng: &mut StdRng,
    attacks_for: impl Fn(BitBoard) -> BitBoard,
) -> u64 {
    let subsets = occupancy_subsets(mask);
    let reference: Vec<BitBoard> = subsets.iter().map(|&occ| attacks_for(occ)).collect();

    for _ in 0..MAX_ATTEMPTS {
        let magic = random_sparse_u64(rng);
        if ((mask.wrapping_mul(magic)) >> 56).count_ones() < 6 {
            continue;
        }
        let mut seen: HashMap<u64, BitBoard> = HashMap::with_capacity(subsets.len());
        let mut ok = true;
        for (i, &occ) in subsets.iter().enumerate() {
            let index = (occ.wrapping_mul(magic)) >> shift;
            match seen.get(&index) {
                Some(&existing) if existing != reference[i] => {
                    ok = false;
                    break;
                }
                _ => {
                    seen.insert(index, reference[i]);
                }
            }
        }
        if ok {
            return magic;
        }
    }
    panic!("failed to find magic number within attempt budget");
}
