use ahash::AHashSet;

use crate::grid::*;

const STEPS_1: usize = 64;
const STEPS_2: usize = 26_501_365;

fn parse(s: &[u8]) -> (Grid<u8>, Coord) {
    let grid = Grid::parse(s);
    let start = grid.position(&b'S').unwrap_or_else(|| panic!("no starting position"));
    (grid, start)
}

/// Number of plots where a walk of exactly `steps` steps can end. Those are the plots at a
/// BFS distance of at most `steps` with the same parity.
fn reachable(grid: &Grid<u8>, start: Coord, steps: usize, tiled: bool) -> u64 {
    let open = |c: Coord| {
        if tiled {
            *grid.get_wrapped(c) != b'#'
        } else {
            grid.get(c).map_or(false, |&t| t != b'#')
        }
    };
    let mut seen = AHashSet::new();
    seen.insert(start);
    let mut frontier = vec![start];
    let mut counts = [1, 0];
    for step in 1..=steps {
        let mut next = Vec::with_capacity(frontier.len() + 4);
        for &c in &frontier {
            for n in c.adjacent() {
                if open(n) && seen.insert(n) {
                    next.push(n);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        counts[step % 2] += next.len() as u64;
        frontier = next;
    }
    counts[steps % 2]
}

/// Value at `n` of the quadratic passing through `(0, f[0])`, `(1, f[1])`, `(2, f[2])`.
fn extrapolate(f: [u64; 3], n: u64) -> u64 {
    let [a, b, c] = f.map(|v| v as i128);
    let n = n as i128;
    let (d1, d2) = (b - a, c - 2 * b + a);
    (a + n * d1 + n * (n - 1) / 2 * d2) as u64
}

/// Plots reachable on the infinitely tiled map. The start sits in the middle of a square map
/// with a clear row and column through it, so the count grows quadratically with every
/// additional map width walked.
fn reachable_tiled(grid: &Grid<u8>, start: Coord, steps: usize) -> u64 {
    let w = grid.width();
    assert_eq!(w, grid.height(), "map must be square");
    let (n, rem) = (steps / w, steps % w);
    if n < 3 {
        return reachable(grid, start, steps, true);
    }
    let samples = [0, 1, 2].map(|k| reachable(grid, start, rem + k * w, true));
    extrapolate(samples, n as u64)
}

#[inline]
pub fn part1(s: &[u8]) -> u64 {
    let (grid, start) = parse(s);
    reachable(&grid, start, STEPS_1, false)
}

#[inline]
pub fn part2(s: &[u8]) -> u64 {
    let (grid, start) = parse(s);
    reachable_tiled(&grid, start, STEPS_2)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

#[test]
fn test_day21_part1() {
    let (grid, start) = parse(EXAMPLE);
    assert_eq!(reachable(&grid, start, 6, false), 16);
}

#[test]
fn test_day21_part2() {
    let (grid, start) = parse(EXAMPLE);
    assert_eq!(reachable(&grid, start, 6, true), 16);
    assert_eq!(reachable(&grid, start, 10, true), 50);
    assert_eq!(reachable(&grid, start, 50, true), 1594);
    assert_eq!(reachable(&grid, start, 100, true), 6536);
    assert_eq!(extrapolate([1, 4, 9], 10), 121);
}

#[test]
fn test_day21_tiled_extrapolation() {
    let (grid, start) = parse(b".......\n.......\n.......\n...S...\n.......\n.......\n.......\n");
    for steps in [24, 31, 45, 52, 66] {
        assert_eq!(reachable_tiled(&grid, start, steps), reachable(&grid, start, steps, true));
    }
    assert_eq!(reachable_tiled(&grid, start, 66), 4489);
}
