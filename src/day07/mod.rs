use crate::utils::*;

const ORDER: &[u8; 13] = b"23456789TJQKA";
const JOKER: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    pub fn of(cards: &[u8; 5]) -> Self {
        let mut counts = [0u8; 14];
        for &c in cards {
            counts[c as usize] += 1;
        }
        let jokers = counts[JOKER as usize];
        counts[JOKER as usize] = 0;
        counts.sort_unstable_by(|a, b| b.cmp(a));
        // jokers always join the largest group
        match (counts[0] + jokers, counts[1]) {
            (5, _) => Self::FiveOfAKind,
            (4, _) => Self::FourOfAKind,
            (3, 2) => Self::FullHouse,
            (3, _) => Self::ThreeOfAKind,
            (2, 2) => Self::TwoPair,
            (2, _) => Self::OnePair,
            _ => Self::HighCard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Hand {
    kind: HandType,
    cards: [u8; 5], // card strengths: 1..=13, or JOKER
    bid: u32,
}

impl Hand {
    pub fn parse<const WILD: bool>(line: &[u8]) -> Self {
        let mut cards = [0; 5];
        for (i, c) in cards.iter_mut().enumerate() {
            let card = line[i];
            *c = if WILD && card == b'J' {
                JOKER
            } else {
                match ORDER.iter().position(|&o| o == card) {
                    Some(p) => p as u8 + 1,
                    None => panic!("invalid card: {:?}", char::from(card)),
                }
            };
        }
        let bid = uints(line.advance(5)).next().unwrap_or(0);
        Self { kind: HandType::of(&cards), cards, bid }
    }
}

fn total_winnings<const WILD: bool>(s: &[u8]) -> u32 {
    let mut hands: Vec<_> = lines(s).map(Hand::parse::<WILD>).collect();
    hands.sort_unstable();
    hands.iter().zip(1..).map(|(hand, rank)| hand.bid * rank).sum()
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    total_winnings::<false>(s)
}

#[inline]
pub fn part2(s: &[u8]) -> u32 {
    total_winnings::<true>(s)
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

#[test]
fn test_day07_part1() {
    assert_eq!(part1(EXAMPLE), 6440);
}

#[test]
fn test_day07_part2() {
    assert_eq!(part2(EXAMPLE), 5905);
}

#[test]
fn test_day07_hand_types() {
    let kind = |s: &[u8]| Hand::parse::<true>(s).kind;
    assert_eq!(kind(b"JJJJJ 1"), HandType::FiveOfAKind);
    assert_eq!(kind(b"KTJJT 1"), HandType::FourOfAKind);
    assert_eq!(kind(b"2233J 1"), HandType::FullHouse);
    assert_eq!(kind(b"2345J 1"), HandType::OnePair);
    assert_eq!(Hand::parse::<false>(b"2233J 1").kind, HandType::TwoPair);
}
