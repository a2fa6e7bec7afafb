use crate::utils::*;

// Card numbers are below 100, so each side fits into a bitmask.
fn parse_matches(s: &[u8]) -> Vec<u32> {
    lines(s)
        .map(|line| {
            let line = line.skip_past(b':', 0);
            let k = line.memchr(b'|');
            let mask = |part: &[u8]| uints::<u8>(part).fold(0u128, |m, n| m | (1 << n));
            (mask(&line[..k]) & mask(line.advance(k + 1))).count_ones()
        })
        .collect()
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    parse_matches(s).into_iter().filter(|&n| n > 0).map(|n| 1 << (n - 1)).sum()
}

#[inline]
pub fn part2(s: &[u8]) -> u32 {
    let matches = parse_matches(s);
    let mut copies = vec![1; matches.len()];
    for (i, &n) in matches.iter().enumerate() {
        let end = (i + 1 + n as usize).min(matches.len());
        for j in i + 1..end {
            copies[j] += copies[i];
        }
    }
    copies.into_iter().sum()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

#[test]
fn test_day04_part1() {
    assert_eq!(part1(EXAMPLE), 13);
}

#[test]
fn test_day04_part2() {
    assert_eq!(part2(EXAMPLE), 30);
}
