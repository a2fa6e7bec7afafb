use tracing::debug;

use crate::utils::*;

const AREA_MIN: i128 = 200_000_000_000_000;
const AREA_MAX: i128 = 400_000_000_000_000;
const VELOCITY_RANGE: i64 = 1000;

type Vec3 = [i128; 3];

#[derive(Debug, Clone, Copy)]
struct Hailstone {
    p: Vec3,
    v: Vec3,
}

// "19, 13, 30 @ -2,  1, -2"
fn parse(s: &[u8]) -> Vec<Hailstone> {
    lines(s)
        .map(|line| {
            let mut n = ints::<i64>(line).map(i128::from);
            let mut next = || n.next().unwrap_or_else(|| panic!("hailstone needs 6 numbers"));
            let p = [next(), next(), next()];
            let v = [next(), next(), next()];
            Hailstone { p, v }
        })
        .collect()
}

#[inline]
fn cross(a: [i128; 2], b: [i128; 2]) -> i128 {
    a[0] * b[1] - a[1] * b[0]
}

#[inline]
fn xy(v: Vec3) -> [i128; 2] {
    [v[0], v[1]]
}

#[inline]
fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Whether the future paths of two hailstones cross within `lo..=hi` on both x and y.
fn crosses_in(a: &Hailstone, b: &Hailstone, lo: i128, hi: i128) -> bool {
    let mut det = cross(xy(a.v), xy(b.v));
    if det == 0 {
        return false;
    }
    let dp = xy(sub(b.p, a.p));
    let (mut ta, mut tb) = (cross(dp, xy(b.v)), cross(dp, xy(a.v)));
    if det < 0 {
        (det, ta, tb) = (-det, -ta, -tb);
    }
    if ta < 0 || tb < 0 {
        return false;
    }
    // the crossing point is a.p + a.v * ta / det, compared without dividing
    (0..2).all(|i| {
        let c = a.p[i] * det + a.v[i] * ta;
        lo * det <= c && c <= hi * det
    })
}

fn crossings_in(s: &[u8], lo: i128, hi: i128) -> usize {
    let stones = parse(s);
    let mut count = 0;
    for (i, a) in stones.iter().enumerate() {
        count += stones[i + 1..].iter().filter(|b| crosses_in(a, b, lo, hi)).count();
    }
    count
}

fn exact_div(a: i128, b: i128) -> Option<i128> {
    (b != 0 && a % b == 0).then(|| a / b)
}

/// Time at which a rock thrown from `p` with velocity `v` meets the hailstone, if ever.
fn collision_time(stone: &Hailstone, p: Vec3, v: Vec3) -> Option<i128> {
    let (dp, dv) = (sub(stone.p, p), sub(v, stone.v));
    let t = (0..3).find_map(|i| exact_div(dp[i], dv[i])).or_else(|| (dp == [0; 3]).then_some(0))?;
    (t >= 0 && (0..3).all(|i| dp[i] == t * dv[i])).then_some(t)
}

/// Finds the rock trajectory assuming its x and y velocity, by looking at the first two
/// hailstones in the frame of the rock: both of their paths then go through the rock's start.
fn rock_with_velocity(stones: &[Hailstone], vx: i128, vy: i128) -> Option<(Vec3, Vec3)> {
    let (a, b) = (&stones[0], &stones[1]);
    let (da, db) = ([a.v[0] - vx, a.v[1] - vy], [b.v[0] - vx, b.v[1] - vy]);
    let det = cross(da, db);
    let dp = xy(sub(b.p, a.p));
    let ta = exact_div(cross(dp, db), det)?;
    let tb = exact_div(cross(dp, da), det)?;
    if ta < 0 || tb < 0 || ta == tb {
        return None;
    }
    // both collisions happen at the same z
    let vz = exact_div(a.p[2] + ta * a.v[2] - b.p[2] - tb * b.v[2], ta - tb)?;
    let v = [vx, vy, vz];
    let p = [0, 1, 2].map(|i| a.p[i] + ta * (a.v[i] - v[i]));
    stones.iter().all(|stone| collision_time(stone, p, v).is_some()).then_some((p, v))
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    crossings_in(s, AREA_MIN, AREA_MAX)
}

#[inline]
pub fn part2(s: &[u8]) -> i128 {
    use rayon::prelude::*;

    let stones = parse(s);
    assert!(stones.len() >= 2, "need at least two hailstones");
    let found = (-VELOCITY_RANGE..=VELOCITY_RANGE).into_par_iter().find_map_any(|vx| {
        (-VELOCITY_RANGE..=VELOCITY_RANGE)
            .find_map(|vy| rock_with_velocity(&stones, vx.into(), vy.into()))
    });
    let Some((p, v)) = found else { panic!("no rock velocity within range hits every hailstone") };
    debug!(?p, ?v, "rock");
    p.iter().sum()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

#[test]
fn test_day24_part1() {
    assert_eq!(crossings_in(EXAMPLE, 7, 27), 2);
}

#[test]
fn test_day24_part2() {
    let stones = parse(EXAMPLE);
    assert_eq!(rock_with_velocity(&stones, -3, 1), Some(([24, 13, 10], [-3, 1, 2])));
    assert_eq!(part2(EXAMPLE), 47);
}
