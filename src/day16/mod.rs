use crate::grid::*;

#[inline]
fn dir_bit(d: Coord) -> u8 {
    match (d.x, d.y) {
        (0, -1) => 1,
        (1, 0) => 2,
        (0, 1) => 4,
        _ => 8,
    }
}

#[inline]
fn reflect(tile: u8, d: Coord, out: &mut [Coord; 2]) -> usize {
    match tile {
        b'/' => out[0] = Coord::new(-d.y, -d.x),
        b'\\' => out[0] = Coord::new(d.y, d.x),
        b'|' if d.y == 0 => {
            *out = [Coord::UP, Coord::DOWN];
            return 2;
        }
        b'-' if d.x == 0 => {
            *out = [Coord::LEFT, Coord::RIGHT];
            return 2;
        }
        _ => out[0] = d,
    }
    1
}

fn energized(grid: &Grid<u8>, start: Vector) -> usize {
    let mut seen = Grid::new(grid.width(), grid.height(), 0u8);
    let mut stack = vec![start];
    let mut dirs = [Coord::ZERO; 2];
    while let Some(beam) = stack.pop() {
        let Some(mask) = seen.get_mut(beam.position) else { continue };
        let bit = dir_bit(beam.direction);
        if *mask & bit != 0 {
            continue;
        }
        *mask |= bit;
        let n = reflect(grid[beam.position], beam.direction, &mut dirs);
        for &d in &dirs[..n] {
            stack.push(beam.turned(d));
        }
    }
    seen.cells().iter().filter(|&&m| m != 0).count()
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    energized(&Grid::parse(s), Vector::new(Coord::ZERO, Coord::RIGHT))
}

#[inline]
pub fn part2(s: &[u8]) -> usize {
    use rayon::prelude::*;

    let grid = Grid::parse(s);
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let mut starts = Vec::with_capacity(2 * (w + h) as usize);
    for x in 0..w {
        starts.push(Vector::new(Coord::new(x, 0), Coord::DOWN));
        starts.push(Vector::new(Coord::new(x, h - 1), Coord::UP));
    }
    for y in 0..h {
        starts.push(Vector::new(Coord::new(0, y), Coord::RIGHT));
        starts.push(Vector::new(Coord::new(w - 1, y), Coord::LEFT));
    }
    starts.into_par_iter().map(|start| energized(&grid, start)).max().unwrap_or(0)
}

#[cfg(test)]
const EXAMPLE: &[u8] = br"
.|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

#[test]
fn test_day16_part1() {
    assert_eq!(part1(EXAMPLE), 46);
}

#[test]
fn test_day16_part2() {
    assert_eq!(part2(EXAMPLE), 51);
}
