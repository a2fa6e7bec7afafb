use crate::grid::*;

/// Sum of pairwise distances along one axis, where each empty line counts `factor` times.
fn axis_distances(mut positions: Vec<i64>, factor: i64) -> i64 {
    positions.sort_unstable();
    let (mut total, mut prefix, mut prev, mut shift) = (0, 0, 0, 0);
    for (i, &p) in positions.iter().enumerate() {
        if i > 0 && p > prev + 1 {
            shift += (p - prev - 1) * (factor - 1);
        }
        prev = p;
        let expanded = p + shift;
        total += expanded * i as i64 - prefix;
        prefix += expanded;
    }
    total
}

/// Sum of shortest paths between all galaxy pairs.
pub fn expanded_distances(s: &[u8], factor: i64) -> i64 {
    let grid = Grid::parse(s);
    let galaxies: Vec<_> = grid.iter().filter(|(_, &c)| c == b'#').map(|(c, _)| c).collect();
    let xs = galaxies.iter().map(|c| c.x).collect();
    let ys = galaxies.iter().map(|c| c.y).collect();
    axis_distances(xs, factor) + axis_distances(ys, factor)
}

#[inline]
pub fn part1(s: &[u8]) -> i64 {
    expanded_distances(s, 2)
}

#[inline]
pub fn part2(s: &[u8]) -> i64 {
    expanded_distances(s, 1_000_000)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

#[test]
fn test_day11_part1() {
    assert_eq!(part1(EXAMPLE), 374);
}

#[test]
fn test_day11_part2() {
    assert_eq!(expanded_distances(EXAMPLE, 10), 1030);
    assert_eq!(expanded_distances(EXAMPLE, 100), 8410);
    assert_eq!(part2(EXAMPLE), 82000210);
}
