use crate::utils::*;

type Int = i64;

/// Next value of the sequence, extrapolated through repeated differences.
fn extrapolate(mut seq: Vec<Int>) -> Int {
    let mut next = 0;
    while seq.iter().any(|&x| x != 0) {
        next += seq[seq.len() - 1];
        for i in 1..seq.len() {
            seq[i - 1] = seq[i] - seq[i - 1];
        }
        seq.pop();
    }
    next
}

fn solve<const BACKWARDS: bool>(s: &[u8]) -> Int {
    lines(s)
        .map(|mut line| {
            let mut seq = Vec::with_capacity(32);
            while !line.is_empty() {
                seq.push(parse_int_fast_signed::<Int, 1, 12>(&mut line));
            }
            if BACKWARDS {
                seq.reverse();
            }
            extrapolate(seq)
        })
        .sum()
}

#[inline]
pub fn part1(s: &[u8]) -> Int {
    solve::<false>(s)
}

#[inline]
pub fn part2(s: &[u8]) -> Int {
    solve::<true>(s)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

#[test]
fn test_day09_part1() {
    assert_eq!(part1(EXAMPLE), 114);
}

#[test]
fn test_day09_part2() {
    assert_eq!(part2(EXAMPLE), 2);
}

#[test]
fn test_day09_negative() {
    assert_eq!(part1(b"-1 -3 -5\n"), -7);
}
