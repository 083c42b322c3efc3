/*!
# Exclusive Prefix Sums

Serial and blocked-parallel exclusive prefix sums over degree vectors.

Both variants map `d[0..n]` to `s[0..=n]` with `s[0] = 0`,
`s[i+1] = s[i] + d[i]` and `s[n]` holding the total. The parallel variant
partitions the input into fixed-size blocks, reduces each block in parallel,
scans the block sums serially, and finally writes each block's local scan in
parallel starting at its base. The result is bit-identical to the serial
version for any input.
*/

use rayon::prelude::*;

use crate::node::{NumEdges, NumNodes};

/// Elements per block of the parallel variant.
const BLOCK_SIZE: usize = 1 << 20;

/// Serial exclusive prefix sum.
pub fn prefix_sum(degrees: &[NumNodes]) -> Vec<NumEdges> {
    let mut sums = Vec::with_capacity(degrees.len() + 1);
    let mut total: NumEdges = 0;
    for &d in degrees {
        sums.push(total);
        total += d as NumEdges;
    }
    sums.push(total);
    sums
}

/// Blocked parallel exclusive prefix sum; equals [`prefix_sum`] on any input.
pub fn par_prefix_sum(degrees: &[NumNodes]) -> Vec<NumEdges> {
    let local_sums: Vec<NumEdges> = degrees
        .par_chunks(BLOCK_SIZE)
        .map(|block| block.iter().map(|&d| d as NumEdges).sum())
        .collect();

    let mut bulk_prefix = Vec::with_capacity(local_sums.len() + 1);
    let mut total: NumEdges = 0;
    for &block_sum in &local_sums {
        bulk_prefix.push(total);
        total += block_sum;
    }

    let mut prefix = vec![0 as NumEdges; degrees.len() + 1];
    prefix[..degrees.len()]
        .par_chunks_mut(BLOCK_SIZE)
        .zip(degrees.par_chunks(BLOCK_SIZE))
        .enumerate()
        .for_each(|(block, (out, block_degrees))| {
            let mut running = bulk_prefix[block];
            for (slot, &d) in out.iter_mut().zip(block_degrees) {
                *slot = running;
                running += d as NumEdges;
            }
        });
    prefix[degrees.len()] = total;
    prefix
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn small_fixed() {
        let degrees = [3, 1, 4, 1, 5, 9, 2, 6];
        let expected = vec![0, 3, 4, 8, 9, 14, 23, 25, 31];
        assert_eq!(prefix_sum(&degrees), expected);
        assert_eq!(par_prefix_sum(&degrees), expected);
    }

    #[test]
    fn empty() {
        assert_eq!(prefix_sum(&[]), vec![0]);
        assert_eq!(par_prefix_sum(&[]), vec![0]);
    }

    #[test]
    fn parallel_equals_serial() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        for n in [1usize, 100, 10_000] {
            let degrees: Vec<NumNodes> = (0..n).map(|_| rng.random_range(0..50)).collect();
            assert_eq!(par_prefix_sum(&degrees), prefix_sum(&degrees));
        }
    }

    #[test]
    fn parallel_equals_serial_across_blocks() {
        // Spans multiple blocks so all three phases are exercised.
        let rng = &mut Pcg64Mcg::seed_from_u64(23);
        let degrees: Vec<NumNodes> = (0..(1 << 21) + 37).map(|_| rng.random_range(0..4)).collect();
        assert_eq!(par_prefix_sum(&degrees), prefix_sum(&degrees));
    }
}
