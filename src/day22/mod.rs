use crate::grid::*;

const GROUND: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Brick {
    lo: Coord3,
    hi: Coord3,
}

impl Brick {
    // "1,0,1~1,2,1"
    fn parse(mut line: &[u8]) -> Self {
        let (a, b) = match (Coord3::parse(&mut line), Coord3::parse(&mut line)) {
            (Some(a), Some(b)) => (a, b),
            _ => panic!("invalid brick: {:?}", String::from_utf8_lossy(line)),
        };
        let lo = Coord3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let hi = Coord3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));
        Self { lo, hi }
    }

    fn footprint(&self) -> impl Iterator<Item = Coord> {
        let (lo, hi) = (self.lo.project(Plane::XY), self.hi.project(Plane::XY));
        (lo.y..=hi.y).flat_map(move |y| (lo.x..=hi.x).map(move |x| Coord::new(x, y)))
    }
}

/// Lets the bricks fall and returns, for each brick in settling order, the bricks it rests on.
fn settle(s: &[u8]) -> Vec<Vec<usize>> {
    let mut bricks: Vec<_> = crate::utils::lines(s).map(Brick::parse).collect();
    bricks.sort_unstable_by_key(|b| b.lo.z);
    let (w, h) = bricks.iter().fold((0, 0), |(w, h), b| (w.max(b.hi.x + 1), h.max(b.hi.y + 1)));
    // top z and owner of the highest settled cube in every column
    let mut top = Grid::new(w as usize, h as usize, (0, GROUND));
    let mut supports = Vec::with_capacity(bricks.len());
    for (i, brick) in bricks.iter().enumerate() {
        let floor = brick.footprint().map(|c| top[c].0).max().unwrap_or(0);
        let mut below = Vec::new();
        for c in brick.footprint() {
            let (z, owner) = top[c];
            if z == floor && owner != GROUND && !below.contains(&owner) {
                below.push(owner);
            }
            top[c] = (floor + 1 + brick.hi.z - brick.lo.z, i);
        }
        supports.push(below);
    }
    supports
}

/// Number of other bricks that fall when brick `i` is removed.
fn chain_reaction(supports: &[Vec<usize>], i: usize) -> usize {
    let mut fallen = vec![false; supports.len()];
    fallen[i] = true;
    let mut count = 0;
    // supporters always settle before the bricks they hold up
    for j in i + 1..supports.len() {
        if !supports[j].is_empty() && supports[j].iter().all(|&k| fallen[k]) {
            fallen[j] = true;
            count += 1;
        }
    }
    count
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    let supports = settle(s);
    let mut required = vec![false; supports.len()];
    for below in &supports {
        if let [only] = below[..] {
            required[only] = true;
        }
    }
    required.iter().filter(|&&r| !r).count()
}

#[inline]
pub fn part2(s: &[u8]) -> usize {
    use rayon::prelude::*;

    let supports = settle(s);
    (0..supports.len()).into_par_iter().map(|i| chain_reaction(&supports, i)).sum()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

#[test]
fn test_day22_part1() {
    assert_eq!(part1(EXAMPLE), 5);
}

#[test]
fn test_day22_part2() {
    assert_eq!(part2(EXAMPLE), 7);
}
