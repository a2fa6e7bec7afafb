use tracing::debug;

use crate::utils::*;

const N: usize = 36 * 36 * 36;

#[inline]
fn node_id(name: &[u8]) -> usize {
    name[..3].iter().fold(0, |acc, &c| {
        let d = match c {
            b'0'..=b'9' => c - b'0',
            b'A'..=b'Z' => c - b'A' + 10,
            _ => panic!("invalid node name character: {:?}", char::from(c)),
        };
        acc * 36 + d as usize
    })
}

#[inline]
fn ends_with(id: usize, c: u8) -> bool {
    id % 36 == (c - b'A' + 10) as usize
}

struct Network {
    steps: Vec<bool>, // true = right
    nodes: Vec<[u32; 2]>,
    starts: Vec<usize>,
}

impl Network {
    pub fn parse(s: &[u8]) -> Self {
        let mut lines = lines(s);
        let steps: Vec<_> = lines.next().unwrap_or_default().iter().map(|&c| c == b'R').collect();
        assert!(!steps.is_empty(), "missing instructions");
        let mut nodes = vec![[u32::MAX; 2]; N];
        let mut starts = Vec::new();
        // "AAA = (BBB, CCC)"
        for line in lines {
            let id = node_id(line);
            nodes[id] = [node_id(&line[7..]) as u32, node_id(&line[12..]) as u32];
            if line[2] == b'A' {
                starts.push(id);
            }
        }
        Self { steps, nodes, starts }
    }

    pub fn walk(&self, start: usize, is_end: impl Fn(usize) -> bool) -> usize {
        let mut node = start;
        for (count, &right) in self.steps.iter().cycle().enumerate() {
            if is_end(node) {
                return count;
            }
            node = self.nodes[node][right as usize] as usize;
            assert_ne!(node, u32::MAX as usize, "walked into an undefined node");
        }
        unreachable!()
    }
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    let network = Network::parse(s);
    let end = node_id(b"ZZZ");
    network.walk(node_id(b"AAA"), |id| id == end)
}

#[inline]
pub fn part2(s: &[u8]) -> usize {
    let network = Network::parse(s);
    // every ghost loops back onto its end node with the same period it took to get there
    network
        .starts
        .iter()
        .map(|&start| {
            let steps = network.walk(start, |id| ends_with(id, b'Z'));
            debug!(start, steps, "ghost cycle");
            steps
        })
        .fold(1, lcm)
}

#[test]
fn test_day08_part1() {
    let s = b"\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
    assert_eq!(part1(s), 2);
}

#[test]
fn test_day08_part1_repeat() {
    let s = b"\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";
    assert_eq!(part1(s), 6);
}

#[test]
fn test_day08_part2() {
    let s = b"\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
    assert_eq!(part2(s), 6);
}
