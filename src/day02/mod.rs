use crate::utils::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(self) -> u32 {
        self.red * self.green * self.blue
    }
}

// "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green" -> (1, max over draws)
fn parse_game(line: &[u8]) -> (u32, Cubes) {
    let mut s = line;
    let id = next_uint(&mut s).unwrap_or_else(|| panic!("missing game id"));
    let mut max = Cubes::default();
    while let Some(n) = next_uint::<u32>(&mut s) {
        let draw = match s.get(1) {
            Some(b'r') => Cubes { red: n, ..Default::default() },
            Some(b'g') => Cubes { green: n, ..Default::default() },
            Some(b'b') => Cubes { blue: n, ..Default::default() },
            c => panic!("unexpected colour {:?}", c.map(|&c| char::from(c))),
        };
        max = max.max(draw);
    }
    (id, max)
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    const BAG: Cubes = Cubes { red: 12, green: 13, blue: 14 };
    lines(s)
        .map(parse_game)
        .filter(|(_, max)| max.red <= BAG.red && max.green <= BAG.green && max.blue <= BAG.blue)
        .map(|(id, _)| id)
        .sum()
}

#[inline]
pub fn part2(s: &[u8]) -> u32 {
    lines(s).map(|line| parse_game(line).1.power()).sum()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

#[test]
fn test_day02_part1() {
    assert_eq!(part1(EXAMPLE), 8);
}

#[test]
fn test_day02_part2() {
    assert_eq!(part2(EXAMPLE), 2286);
}
