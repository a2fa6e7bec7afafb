use crate::utils::*;

type Int = u64;

/// Number of integer hold times `t` with `t * (time - t) > record`.
fn ways_to_win(time: Int, record: Int) -> Int {
    let beats = |t: Int| t * (time - t) > record;
    let disc = (time * time) as f64 - 4. * record as f64;
    if disc < 0. {
        return 0;
    }
    let mid = time as f64 / 2.;
    let mut lo = (mid - disc.sqrt() / 2.).floor().max(0.) as Int;
    // float roots are only approximate; nudge onto the exact boundary
    while lo <= time / 2 && !beats(lo) {
        lo += 1;
    }
    while lo > 0 && beats(lo - 1) {
        lo -= 1;
    }
    if lo > time / 2 {
        return 0;
    }
    // solutions are symmetric around time / 2
    time + 1 - 2 * lo
}

fn parse_races(s: &[u8]) -> (Vec<Int>, Vec<Int>) {
    let mut lines = lines(s);
    let times = uints(lines.next().unwrap_or_default()).collect();
    let records = uints(lines.next().unwrap_or_default()).collect();
    (times, records)
}

fn concat_digits(line: &[u8]) -> Int {
    line.iter().filter(|c| c.is_ascii_digit()).fold(0, |acc, &c| acc * 10 + (c - b'0') as Int)
}

#[inline]
pub fn part1(s: &[u8]) -> Int {
    let (times, records) = parse_races(s);
    times.into_iter().zip(records).map(|(t, d)| ways_to_win(t, d)).product()
}

#[inline]
pub fn part2(s: &[u8]) -> Int {
    let mut lines = lines(s);
    let time = concat_digits(lines.next().unwrap_or_default());
    let record = concat_digits(lines.next().unwrap_or_default());
    ways_to_win(time, record)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
Time:      7  15   30
Distance:  9  40  200
";

#[test]
fn test_day06_part1() {
    assert_eq!(part1(EXAMPLE), 288);
}

#[test]
fn test_day06_part2() {
    assert_eq!(part2(EXAMPLE), 71503);
}

#[test]
fn test_day06_exact_roots() {
    // t = 10 and t = 20 tie the record exactly and do not count
    assert_eq!(ways_to_win(30, 200), 9);
    assert_eq!(ways_to_win(7, 9), 4);
    assert_eq!(ways_to_win(4, 100), 0);
}
