use crate::utils::*;

const WORDS: [&[u8]; 9] =
    [b"one", b"two", b"three", b"four", b"five", b"six", b"seven", b"eight", b"nine"];

#[inline]
fn digit_at<const SPELLED: bool>(line: &[u8], i: usize) -> Option<u32> {
    let d = line.get_digit_at(i);
    if d < 10 {
        return Some(d as u32);
    }
    if SPELLED {
        let rest = line.advance(i);
        for (k, word) in WORDS.iter().enumerate() {
            if rest.starts_with(word) {
                return Some(k as u32 + 1);
            }
        }
    }
    None
}

fn calibration<const SPELLED: bool>(s: &[u8]) -> u32 {
    lines(s)
        .map(|line| {
            let first = (0..line.len()).find_map(|i| digit_at::<SPELLED>(line, i));
            let last = (0..line.len()).rev().find_map(|i| digit_at::<SPELLED>(line, i));
            match (first, last) {
                (Some(a), Some(b)) => a * 10 + b,
                _ => panic!("no digits in line {:?}", String::from_utf8_lossy(line)),
            }
        })
        .sum()
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    calibration::<false>(s)
}

#[inline]
pub fn part2(s: &[u8]) -> u32 {
    calibration::<true>(s)
}

#[test]
fn test_day01_part1() {
    assert_eq!(part1(b"1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n"), 142);
}

#[test]
fn test_day01_part2() {
    let s = b"two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
              4nineeightseven2\nzoneight234\n7pqrstsixteen\n";
    assert_eq!(part2(s), 281);
}

#[test]
fn test_day01_part2_overlap() {
    assert_eq!(part2(b"twone\n"), 21);
    assert_eq!(part2(b"eighthree\n"), 83);
}
