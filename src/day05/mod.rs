use std::ops::Range;

use crate::utils::*;

type Int = i64;

#[derive(Debug, Clone, Copy)]
struct Rule {
    source: Int,
    end: Int,
    offset: Int,
}

#[derive(Debug, Clone, Default)]
struct Map {
    rules: Vec<Rule>, // sorted by source, non-overlapping
}

impl Map {
    pub fn parse(block: &[u8]) -> Self {
        let nums: Vec<Int> = uints(block.skip_past(b'\n', 0)).collect();
        assert_eq!(nums.len() % 3, 0, "map entries come in triples");
        let mut rules: Vec<_> = nums
            .chunks_exact(3)
            .map(|c| Rule { source: c[1], end: c[1] + c[2], offset: c[0] - c[1] })
            .collect();
        rules.sort_unstable_by_key(|r| r.source);
        Self { rules }
    }

    pub fn apply(&self, x: Int) -> Int {
        self.rules.iter().find(|r| (r.source..r.end).contains(&x)).map_or(x, |r| x + r.offset)
    }

    pub fn apply_range(&self, mut range: Range<Int>, out: &mut Vec<Range<Int>>) {
        for rule in &self.rules {
            if range.is_empty() {
                return;
            }
            if rule.end <= range.start {
                continue;
            }
            if rule.source >= range.end {
                break;
            }
            if range.start < rule.source {
                out.push(range.start..rule.source);
                range.start = rule.source;
            }
            let end = range.end.min(rule.end);
            out.push(range.start + rule.offset..end + rule.offset);
            range.start = end;
        }
        if !range.is_empty() {
            out.push(range);
        }
    }
}

fn parse(s: &[u8]) -> (Vec<Int>, Vec<Map>) {
    let mut blocks = blocks(s);
    let seeds = uints(blocks.next().unwrap_or_else(|| panic!("missing seeds"))).collect();
    let maps = blocks.map(Map::parse).collect();
    (seeds, maps)
}

fn lowest_location(maps: &[Map], seeds: Range<Int>) -> Int {
    let mut ranges = vec![seeds];
    let mut next = Vec::new();
    for map in maps {
        next.clear();
        for range in ranges.drain(..) {
            map.apply_range(range, &mut next);
        }
        std::mem::swap(&mut ranges, &mut next);
    }
    ranges.into_iter().map(|r| r.start).min().unwrap_or(Int::MAX)
}

#[inline]
pub fn part1(s: &[u8]) -> Int {
    let (seeds, maps) = parse(s);
    seeds.into_iter().map(|seed| maps.iter().fold(seed, |x, map| map.apply(x))).min().unwrap_or(0)
}

#[inline]
pub fn part2(s: &[u8]) -> Int {
    use rayon::prelude::*;

    let (seeds, maps) = parse(s);
    seeds
        .par_chunks_exact(2)
        .map(|pair| lowest_location(&maps, pair[0]..pair[0] + pair[1]))
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

#[test]
fn test_day05_part1() {
    assert_eq!(part1(EXAMPLE), 35);
}

#[test]
fn test_day05_part2() {
    assert_eq!(part2(EXAMPLE), 46);
}

#[test]
fn test_day05_apply_range() {
    let map = Map::parse(b"x map:\n50 98 2\n52 50 48");
    let mut out = Vec::new();
    map.apply_range(40..60, &mut out);
    assert_eq!(out, vec![40..50, 52..62]);
    out.clear();
    map.apply_range(95..105, &mut out);
    assert_eq!(out, vec![97..100, 50..52, 100..105]);
}

#[test]
#[should_panic(expected = "missing seeds")]
fn test_day05_missing_seeds() {
    part1(b"\n");
}
