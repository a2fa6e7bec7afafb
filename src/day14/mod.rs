use ahash::AHashMap;
use tracing::debug;

use crate::grid::*;

const SPINS: usize = 1_000_000_000;

fn tilt_north(grid: &mut Grid<u8>) {
    for x in 0..grid.width() as i64 {
        let mut free = 0;
        for y in 0..grid.height() as i64 {
            let c = Coord::new(x, y);
            match grid[c] {
                b'#' => free = y + 1,
                b'O' => {
                    grid[c] = b'.';
                    grid[Coord::new(x, free)] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn north_load(grid: &Grid<u8>) -> usize {
    grid.rows()
        .enumerate()
        .map(|(y, row)| row.iter().filter(|&&c| c == b'O').count() * (grid.height() - y))
        .sum()
}

fn spin(mut grid: Grid<u8>) -> Grid<u8> {
    // north, west, south, east: tilting up and turning clockwise brings the next side up
    for _ in 0..4 {
        tilt_north(&mut grid);
        grid = grid.rotated();
    }
    grid
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    let mut grid = Grid::parse(s);
    tilt_north(&mut grid);
    north_load(&grid)
}

#[inline]
pub fn part2(s: &[u8]) -> usize {
    let mut grid = Grid::parse(s);
    let mut seen = AHashMap::new();
    let mut loads = Vec::new();
    for i in 0..SPINS {
        if let Some(&start) = seen.get(grid.cells()) {
            let period = i - start;
            debug!(start, period, "spin cycle detected");
            return loads[start + (SPINS - start) % period];
        }
        seen.insert(grid.cells().to_vec(), i);
        loads.push(north_load(&grid));
        grid = spin(grid);
    }
    north_load(&grid)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

#[test]
fn test_day14_part1() {
    assert_eq!(part1(EXAMPLE), 136);
}

#[test]
fn test_day14_part2() {
    assert_eq!(part2(EXAMPLE), 64);
}

#[test]
fn test_day14_spin() {
    let expected = b"\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
";
    assert_eq!(spin(Grid::parse(EXAMPLE)), Grid::parse(expected));
}
