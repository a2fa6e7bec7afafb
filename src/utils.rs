use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use std::fmt::Debug;
use std::iter;

use memchr::{memchr, memchr2, memmem};

pub trait Integer:
    Copy
    + From<u8>
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + Rem<Output = Self>
    + Default
    + Debug
    + PartialEq
    + Eq
    + Ord
    + PartialOrd
    + iter::Sum
    + iter::Product
{
}

impl Integer for u8 {}
impl Integer for u16 {}
impl Integer for u32 {}
impl Integer for u64 {}
impl Integer for u128 {}
impl Integer for usize {}
impl Integer for i16 {}
impl Integer for i32 {}
impl Integer for i64 {}
impl Integer for i128 {}

#[inline]
pub fn parse_int_fast_skip_custom<
    T: Integer,
    const MIN_DIGITS: usize,
    const MAX_DIGITS: usize,
    const SKIP: usize,
>(
    s: &mut &[u8],
) -> T {
    let mut v = T::default();
    for _ in 0..MIN_DIGITS {
        let d = s.get_digit();
        assert!(d < 10, "expected a digit, found {:?}", s.first().map(|&c| char::from(c)));
        *s = s.advance(1);
        v = v * T::from(10u8) + T::from(d);
    }
    for _ in MIN_DIGITS..MAX_DIGITS {
        let d = s.get_digit();
        if d < 10 {
            *s = s.advance(1);
            v = v * T::from(10u8) + T::from(d);
        } else {
            *s = s.advance(SKIP);
            return v;
        }
    }
    *s = s.advance(SKIP);
    v
}

#[inline]
pub fn parse_int_fast<T: Integer, const MIN_DIGITS: usize, const MAX_DIGITS: usize>(
    s: &mut &[u8],
) -> T {
    parse_int_fast_skip_custom::<T, MIN_DIGITS, MAX_DIGITS, 1>(s)
}

#[inline]
pub fn parse_int_fast_signed<
    T: Integer + Neg<Output = T>,
    const MIN_DIGITS: usize,
    const MAX_DIGITS: usize,
>(
    s: &mut &[u8],
) -> T {
    let neg = s.first() == Some(&b'-');
    if neg {
        *s = s.advance(1);
    }
    let num = parse_int_fast::<T, MIN_DIGITS, MAX_DIGITS>(s);
    if neg {
        -num
    } else {
        num
    }
}

#[inline]
fn take_digits<T: Integer>(s: &mut &[u8]) -> T {
    let mut v = T::default();
    while let Some(&c) = s.first() {
        if !c.is_ascii_digit() {
            break;
        }
        v = v * T::from(10u8) + T::from(c - b'0');
        *s = s.advance(1);
    }
    v
}

/// Skips to the next run of digits and parses it, leaving the cursor right after it.
#[inline]
pub fn next_uint<T: Integer>(s: &mut &[u8]) -> Option<T> {
    let start = s.iter().position(u8::is_ascii_digit)?;
    *s = s.advance(start);
    Some(take_digits(s))
}

/// Same as [`next_uint`], but a `-` directly in front of the digits negates the number.
#[inline]
pub fn next_int<T: Integer + Neg<Output = T>>(s: &mut &[u8]) -> Option<T> {
    let start = s.iter().position(u8::is_ascii_digit)?;
    let neg = start > 0 && s[start - 1] == b'-';
    *s = s.advance(start);
    let num = take_digits::<T>(s);
    Some(if neg { -num } else { num })
}

pub fn uints<T: Integer>(mut s: &[u8]) -> impl Iterator<Item = T> + '_ {
    iter::from_fn(move || next_uint(&mut s))
}

pub fn ints<T: Integer + Neg<Output = T>>(mut s: &[u8]) -> impl Iterator<Item = T> + '_ {
    iter::from_fn(move || next_int(&mut s))
}

#[inline]
pub fn trim_newlines(mut s: &[u8]) -> &[u8] {
    while let [b'\n' | b'\r' | b' ', rest @ ..] = s {
        s = rest;
    }
    while let [rest @ .., b'\n' | b'\r' | b' '] = s {
        s = rest;
    }
    s
}

/// Non-empty lines of the input.
pub fn lines(s: &[u8]) -> impl Iterator<Item = &[u8]> {
    s.split(|&c| c == b'\n').filter(|line| !line.is_empty())
}

/// Chunks of the input separated by blank lines.
pub fn blocks(s: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = trim_newlines(s);
    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let k = memmem::find(rest, b"\n\n").unwrap_or(rest.len());
        let block = &rest[..k];
        rest = trim_newlines(rest.advance(k));
        Some(block)
    })
}

pub fn gcd<T: Integer>(mut a: T, mut b: T) -> T {
    while b != T::default() {
        (a, b) = (b, a % b);
    }
    a
}

pub fn lcm<T: Integer>(a: T, b: T) -> T {
    a / gcd(a, b) * b
}

pub trait SliceExt<T: Copy> {
    /// Drops the first `n` items, or everything if there are fewer.
    fn advance(&self, n: usize) -> &Self;
}

impl<T: Copy> SliceExt<T> for [T] {
    #[inline]
    fn advance(&self, n: usize) -> &Self {
        &self[n.min(self.len())..]
    }
}

pub trait ByteSliceExt: SliceExt<u8> {
    /// Position of the first `c`, or the length of the slice if there is none.
    fn memchr(&self, c: u8) -> usize;
    fn memchr2(&self, c1: u8, c2: u8) -> usize;

    /// Digit value of the first byte; anything that is not a digit maps to a value >= 10.
    #[inline]
    fn get_digit(&self) -> u8 {
        self.get_digit_at(0)
    }

    fn get_digit_at(&self, i: usize) -> u8;

    #[inline]
    fn skip_past(&self, c: u8, i: usize) -> &Self {
        self.advance(1 + i + self.memchr(c))
    }
}

impl ByteSliceExt for [u8] {
    #[inline]
    fn memchr(&self, c: u8) -> usize {
        memchr(c, self).unwrap_or(self.len())
    }

    #[inline]
    fn memchr2(&self, c1: u8, c2: u8) -> usize {
        memchr2(c1, c2, self).unwrap_or(self.len())
    }

    #[inline]
    fn get_digit_at(&self, i: usize) -> u8 {
        self.get(i).map_or(u8::MAX, |c| c.wrapping_sub(b'0'))
    }
}

#[test]
fn test_parse_int_fast() {
    let mut s: &[u8] = b"12,345\n-7 x";
    assert_eq!(parse_int_fast::<u32, 1, 3>(&mut s), 12);
    assert_eq!(parse_int_fast::<u32, 1, 3>(&mut s), 345);
    assert_eq!(parse_int_fast_signed::<i32, 1, 3>(&mut s), -7);
    assert_eq!(s, b"x");
}

#[test]
fn test_next_int() {
    let mut s: &[u8] = b"Game 12: -3 red, 4-5";
    assert_eq!(next_int::<i64>(&mut s), Some(12));
    assert_eq!(next_int::<i64>(&mut s), Some(-3));
    assert_eq!(next_int::<i64>(&mut s), Some(4));
    assert_eq!(next_int::<i64>(&mut s), Some(-5));
    assert_eq!(next_int::<i64>(&mut s), None);
    assert_eq!(uints::<u8>(b"1-2, 3").collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_lines_and_blocks() {
    let s = b"ab\ncd\n\nef\n\n\ngh\n";
    assert_eq!(lines(s).count(), 4);
    let chunks: Vec<_> = blocks(s).collect();
    assert_eq!(chunks, vec![&b"ab\ncd"[..], &b"ef"[..], &b"gh"[..]]);
    assert_eq!(blocks(b"\n\n").count(), 0);
}

#[test]
fn test_gcd_lcm() {
    assert_eq!(gcd(12u64, 18), 6);
    assert_eq!(gcd(7u64, 0), 7);
    assert_eq!(lcm(4u64, 6), 12);
    assert_eq!([2u64, 3, 4].into_iter().fold(1, lcm), 12);
}

#[test]
fn test_byte_slice_ext() {
    let s: &[u8] = b"abc:def";
    assert_eq!(s.memchr(b':'), 3);
    assert_eq!(s.memchr(b'!'), 7);
    assert_eq!(s.skip_past(b':', 0), b"def");
    assert_eq!(b"7x".get_digit(), 7);
    assert!(b"x".get_digit() >= 10);
    assert!(b"".get_digit() >= 10);
}
