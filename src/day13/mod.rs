use crate::grid::*;
use crate::utils::*;

fn as_masks<'a>(lines: impl Iterator<Item = impl Iterator<Item = &'a u8>>) -> Vec<u32> {
    lines.map(|line| line.fold(0, |m, &c| (m << 1) | (c == b'#') as u32)).collect()
}

/// Index of the line before which the pattern mirrors with exactly `smudges` differing cells.
fn reflection(masks: &[u32], smudges: u32) -> Option<usize> {
    (1..masks.len()).find(|&k| {
        let (before, after) = masks.split_at(k);
        before.iter().rev().zip(after).map(|(a, b)| (a ^ b).count_ones()).sum::<u32>() == smudges
    })
}

fn summarize(s: &[u8], smudges: u32) -> usize {
    blocks(s)
        .map(|block| {
            let grid = Grid::parse(block);
            let rows = as_masks(grid.rows().map(|r| r.iter()));
            let cols = as_masks((0..grid.width()).map(|x| grid.column(x)));
            if let Some(k) = reflection(&cols, smudges) {
                k
            } else if let Some(k) = reflection(&rows, smudges) {
                100 * k
            } else {
                panic!("no reflection found in pattern:\n{}", grid)
            }
        })
        .sum()
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    summarize(s, 0)
}

#[inline]
pub fn part2(s: &[u8]) -> usize {
    summarize(s, 1)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

#[test]
fn test_day13_part1() {
    assert_eq!(part1(EXAMPLE), 405);
}

#[test]
fn test_day13_part2() {
    assert_eq!(part2(EXAMPLE), 400);
}
