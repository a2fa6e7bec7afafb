use arrayvec::ArrayVec;

use crate::utils::*;

const N_BOXES: usize = 256;
const BOX_CAP: usize = 64;

#[inline]
fn hash(s: &[u8]) -> u8 {
    s.iter().fold(0u8, |h, &c| h.wrapping_add(c).wrapping_mul(17))
}

fn steps(s: &[u8]) -> impl Iterator<Item = &[u8]> {
    trim_newlines(s).split(|&c| c == b',').map(trim_newlines).filter(|step| !step.is_empty())
}

#[derive(Debug, Clone, Copy)]
struct Lens<'a> {
    label: &'a [u8],
    focal: u8,
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    steps(s).map(|step| hash(step) as u32).sum()
}

#[inline]
pub fn part2(s: &[u8]) -> usize {
    let mut boxes: Vec<ArrayVec<Lens, BOX_CAP>> = vec![ArrayVec::new(); N_BOXES];
    for step in steps(s) {
        let k = step.memchr2(b'=', b'-');
        let label = &step[..k];
        let lenses = &mut boxes[hash(label) as usize];
        let slot = lenses.iter().position(|lens| lens.label == label);
        match (step.get(k), slot) {
            (Some(b'='), Some(i)) => lenses[i].focal = step.get_digit_at(k + 1),
            (Some(b'='), None) => lenses.push(Lens { label, focal: step.get_digit_at(k + 1) }),
            (Some(b'-'), Some(i)) => {
                lenses.remove(i);
            }
            (Some(b'-'), None) => {}
            _ => panic!("invalid step: {:?}", String::from_utf8_lossy(step)),
        }
    }
    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses.iter().enumerate().map(move |(i, lens)| (b + 1) * (i + 1) * lens.focal as usize)
        })
        .sum()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

#[test]
fn test_day15_hash() {
    assert_eq!(hash(b"HASH"), 52);
    assert_eq!(hash(b"rn"), 0);
}

#[test]
fn test_day15_part1() {
    assert_eq!(part1(EXAMPLE), 1320);
}

#[test]
fn test_day15_part2() {
    assert_eq!(part2(EXAMPLE), 145);
}
