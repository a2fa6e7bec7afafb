use ahash::AHashMap;
use arrayvec::ArrayVec;

use crate::grid::*;

#[derive(Debug, Clone)]
struct PartNumber {
    value: u32,
    symbols: ArrayVec<Coord, 16>,
}

#[inline]
fn is_symbol(c: u8) -> bool {
    c != b'.' && !c.is_ascii_digit()
}

fn part_numbers(grid: &Grid<u8>) -> Vec<PartNumber> {
    let mut out = Vec::with_capacity(1 << 10);
    for y in 0..grid.height() {
        let row = grid.row(y);
        let mut x = 0;
        while x < row.len() {
            if !row[x].is_ascii_digit() {
                x += 1;
                continue;
            }
            let start = x;
            let mut value = 0;
            while x < row.len() && row[x].is_ascii_digit() {
                value = value * 10 + (row[x] - b'0') as u32;
                x += 1;
            }
            let mut symbols = ArrayVec::new();
            for xs in start..x {
                let c = Coord::new(xs as _, y as _);
                for n in grid.neighbors_around(c) {
                    if is_symbol(grid[n]) && !symbols.contains(&n) {
                        symbols.push(n);
                    }
                }
            }
            out.push(PartNumber { value, symbols });
        }
    }
    out
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    let grid = Grid::parse(s);
    part_numbers(&grid).iter().filter(|n| !n.symbols.is_empty()).map(|n| n.value).sum()
}

#[inline]
pub fn part2(s: &[u8]) -> u64 {
    let grid = Grid::parse(s);
    let mut gears = AHashMap::<Coord, Vec<u32>>::new();
    for number in part_numbers(&grid) {
        for &c in number.symbols.iter().filter(|&&c| grid[c] == b'*') {
            gears.entry(c).or_default().push(number.value);
        }
    }
    gears.values().filter(|v| v.len() == 2).map(|v| v[0] as u64 * v[1] as u64).sum()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

#[test]
fn test_day03_part1() {
    assert_eq!(part1(EXAMPLE), 4361);
}

#[test]
fn test_day03_part2() {
    assert_eq!(part2(EXAMPLE), 467835);
}
