use crate::grid::*;

fn connections(c: u8) -> Option<[Coord; 2]> {
    Some(match c {
        b'|' => [Coord::UP, Coord::DOWN],
        b'-' => [Coord::LEFT, Coord::RIGHT],
        b'L' => [Coord::UP, Coord::RIGHT],
        b'J' => [Coord::UP, Coord::LEFT],
        b'7' => [Coord::DOWN, Coord::LEFT],
        b'F' => [Coord::DOWN, Coord::RIGHT],
        _ => return None,
    })
}

/// Tiles of the main loop, in walking order starting at `S`.
fn find_loop(grid: &Grid<u8>) -> Vec<Coord> {
    let start = grid.position(&b'S').unwrap_or_else(|| panic!("no start tile"));
    let connects_back = |d: Coord| {
        grid.get(start + d)
            .and_then(|&c| connections(c))
            .map_or(false, |conn| conn.contains(&-d))
    };
    let mut dir = Coord::DIRECTIONS
        .into_iter()
        .find(|&d| connects_back(d))
        .unwrap_or_else(|| panic!("start tile is not connected"));

    let mut path = vec![start];
    let mut pos = start + dir;
    while pos != start {
        path.push(pos);
        let conn = connections(grid[pos]).unwrap_or_else(|| panic!("loop broken at {:?}", pos));
        dir = if conn[0] == -dir { conn[1] } else { conn[0] };
        pos += dir;
    }
    path
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    find_loop(&Grid::parse(s)).len() / 2
}

#[inline]
pub fn part2(s: &[u8]) -> i64 {
    let path = find_loop(&Grid::parse(s));
    // shoelace for the area, then Pick's theorem for the interior points
    let n = path.len();
    let twice_area: i64 = (0..n).map(|i| path[i].cross(path[(i + 1) % n])).sum::<i64>().abs();
    twice_area / 2 - n as i64 / 2 + 1
}

#[test]
fn test_day10_part1() {
    let s = b"\
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
";
    assert_eq!(part1(s), 4);
    let s = b"\
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
";
    assert_eq!(part1(s), 8);
}

#[test]
fn test_day10_part2() {
    let s = b"\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";
    assert_eq!(part2(s), 4);
    let s = b"\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";
    assert_eq!(part2(s), 8);
    let s = b"\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";
    assert_eq!(part2(s), 10);
}
