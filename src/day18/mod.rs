use crate::grid::*;
use crate::utils::*;

fn direction(c: u8) -> Coord {
    match c {
        b'R' | b'0' => Coord::RIGHT,
        b'D' | b'1' => Coord::DOWN,
        b'L' | b'2' => Coord::LEFT,
        b'U' | b'3' => Coord::UP,
        _ => panic!("invalid direction: {:?}", char::from(c)),
    }
}

/// Cubic meters of lava held by the dug-out trench and its interior.
fn lagoon_area(plan: impl Iterator<Item = (Coord, i64)>) -> i64 {
    let (mut pos, mut twice_area, mut boundary) = (Coord::ZERO, 0, 0);
    for (dir, len) in plan {
        let next = pos + dir * len;
        twice_area += pos.cross(next);
        boundary += len;
        pos = next;
    }
    // Pick's theorem: interior = area - boundary / 2 + 1
    twice_area.abs() / 2 + boundary / 2 + 1
}

// "R 6 (#70c710)"
#[inline]
pub fn part1(s: &[u8]) -> i64 {
    lagoon_area(lines(s).map(|line| {
        let rest = line.advance(2);
        let len = next_uint(&mut &rest[..rest.memchr(b'(')])
            .unwrap_or_else(|| panic!("missing trench length: {:?}", String::from_utf8_lossy(line)));
        (direction(line[0]), len)
    }))
}

#[inline]
pub fn part2(s: &[u8]) -> i64 {
    lagoon_area(lines(s).map(|line| {
        let hex = &line[line.memchr(b'#') + 1..];
        let len = hex[..5].iter().fold(0, |acc, &c| {
            let d = (c as char).to_digit(16).unwrap_or_else(|| panic!("invalid hex digit"));
            acc * 16 + d as i64
        });
        (direction(hex[5]), len)
    }))
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

#[test]
fn test_day18_part1() {
    assert_eq!(part1(EXAMPLE), 62);
}

#[test]
fn test_day18_part2() {
    assert_eq!(part2(EXAMPLE), 952408144115);
}

#[test]
#[should_panic(expected = "missing trench length")]
fn test_day18_missing_length() {
    part1(b"R x (#70c710)\n");
}
