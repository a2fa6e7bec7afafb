use crate::utils::*;

/// Number of ways to place `groups` of damaged springs onto `springs`.
fn arrangements(springs: &[u8], groups: &[usize]) -> u64 {
    let n = springs.len();
    // ways[i][j]: arrangements of springs[i..] with groups[j..]
    let mut ways = vec![vec![0u64; groups.len() + 1]; n + 2];
    ways[n][groups.len()] = 1;
    ways[n + 1][groups.len()] = 1;
    // run[i]: length of the run of possibly-damaged springs starting at i
    let mut run = vec![0; n + 1];
    for i in (0..n).rev() {
        run[i] = if springs[i] == b'.' { 0 } else { run[i + 1] + 1 };
    }
    for i in (0..n).rev() {
        for j in 0..=groups.len() {
            let mut total = 0;
            if springs[i] != b'#' {
                total += ways[i + 1][j];
            }
            if springs[i] != b'.' && j < groups.len() {
                let g = groups[j];
                let fits = run[i] >= g && (i + g == n || springs[i + g] != b'#');
                if fits {
                    total += ways[(i + g + 1).min(n + 1)][j + 1];
                }
            }
            ways[i][j] = total;
        }
    }
    ways[0][0]
}

fn parse_line(line: &[u8]) -> (&[u8], Vec<usize>) {
    let k = line.memchr(b' ');
    (&line[..k], uints(line.advance(k)).collect())
}

#[inline]
pub fn part1(s: &[u8]) -> u64 {
    lines(s)
        .map(|line| {
            let (springs, groups) = parse_line(line);
            arrangements(springs, &groups)
        })
        .sum()
}

#[inline]
pub fn part2(s: &[u8]) -> u64 {
    lines(s)
        .map(|line| {
            let (springs, groups) = parse_line(line);
            let springs = [springs; 5].join(&b'?');
            arrangements(&springs, &groups.repeat(5))
        })
        .sum()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

#[test]
fn test_day12_part1() {
    assert_eq!(part1(EXAMPLE), 21);
}

#[test]
fn test_day12_part2() {
    assert_eq!(part2(EXAMPLE), 525152);
}

#[test]
fn test_day12_single_lines() {
    assert_eq!(arrangements(b"?###????????", &[3, 2, 1]), 10);
    assert_eq!(arrangements(b"#", &[1]), 1);
    assert_eq!(arrangements(b"#", &[]), 0);
    assert_eq!(arrangements(b"...", &[]), 1);
}
