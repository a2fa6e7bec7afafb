use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::grid::*;

type Cost = u32;

/// Least heat loss from the top-left to the bottom-right corner, moving between
/// `MIN` and `MAX` blocks in a straight line before each turn.
fn min_heat_loss<const MIN: i64, const MAX: i64>(grid: &Grid<u8>) -> Cost {
    // state = cell index * 2 + axis of the last run (0 = horizontal, 1 = vertical)
    let state = |c: Coord, axis: usize| grid.index_of(c).map(|i| i * 2 + axis);
    let target = grid.size() - Coord::new(1, 1);
    let mut dist = vec![Cost::MAX; grid.cells().len() * 2];
    let mut heap = BinaryHeap::new();
    for axis in 0..2 {
        dist[axis] = 0;
        heap.push(Reverse((0, axis)));
    }
    while let Some(Reverse((cost, s))) = heap.pop() {
        if cost > dist[s] {
            continue;
        }
        let (pos, axis) = (grid.coord_of(s / 2), s % 2);
        if pos == target {
            return cost;
        }
        // the next run is perpendicular to the last one
        let dirs = if axis == 0 { [Coord::UP, Coord::DOWN] } else { [Coord::LEFT, Coord::RIGHT] };
        for d in dirs {
            let mut alt = cost;
            for k in 1..=MAX {
                let next = pos + d * k;
                let Some(t) = state(next, 1 - axis) else { break };
                alt += grid[next] as Cost;
                if k >= MIN && alt < dist[t] {
                    dist[t] = alt;
                    heap.push(Reverse((alt, t)));
                }
            }
        }
    }
    panic!("bottom-right corner is unreachable")
}

fn parse(s: &[u8]) -> Grid<u8> {
    Grid::parse_with(s, |c| {
        assert!(c.is_ascii_digit(), "heat loss must be a digit");
        c - b'0'
    })
}

#[inline]
pub fn part1(s: &[u8]) -> Cost {
    min_heat_loss::<1, 3>(&parse(s))
}

#[inline]
pub fn part2(s: &[u8]) -> Cost {
    min_heat_loss::<4, 10>(&parse(s))
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

#[test]
fn test_day17_part1() {
    assert_eq!(part1(EXAMPLE), 102);
}

#[test]
fn test_day17_part2() {
    assert_eq!(part2(EXAMPLE), 94);
    let s = b"\
111111111111
999999999991
999999999991
999999999991
999999999991
";
    assert_eq!(part2(s), 71);
}
