use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use crate::utils::*;

// Field order matters: the derived ordering is row-major.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub y: i64,
    pub x: i64,
}

impl Coord {
    pub const ZERO: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(0, -1);
    pub const DOWN: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const DIRECTIONS: [Self; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { y, x }
    }

    #[inline]
    pub fn adjacent(self) -> [Self; 4] {
        Self::DIRECTIONS.map(|d| self + d)
    }

    pub fn around(self) -> [Self; 8] {
        let (x, y) = (self.x, self.y);
        [
            Self::new(x + 1, y - 1),
            Self::new(x, y - 1),
            Self::new(x - 1, y - 1),
            Self::new(x - 1, y),
            Self::new(x - 1, y + 1),
            Self::new(x, y + 1),
            Self::new(x + 1, y + 1),
            Self::new(x + 1, y),
        ]
    }

    #[inline]
    pub fn manhattan(self, other: Self) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Quarter turn clockwise, with y pointing down.
    #[inline]
    pub const fn clockwise(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        Self::new(self.y, -self.x)
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn cross(self, other: Self) -> i64 {
        self.x * other.y - self.y * other.x
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Coord {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for Coord {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Coord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    XY,
    YZ,
    XZ,
}

// Ordered by z first, then y, then x.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    pub z: i64,
    pub y: i64,
    pub x: i64,
}

impl Coord3 {
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { z, y, x }
    }

    pub fn parse(s: &mut &[u8]) -> Option<Self> {
        Some(Self::new(next_int(s)?, next_int(s)?, next_int(s)?))
    }

    pub fn project(self, plane: Plane) -> Coord {
        match plane {
            Plane::XY => Coord::new(self.x, self.y),
            Plane::YZ => Coord::new(self.y, self.z),
            Plane::XZ => Coord::new(self.x, self.z),
        }
    }

    #[inline]
    pub fn manhattan(self, other: Self) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

impl Debug for Coord3 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Coord3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coord3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i64> for Coord3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A position together with a heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    pub position: Coord,
    pub direction: Coord,
}

impl Vector {
    #[inline]
    pub const fn new(position: Coord, direction: Coord) -> Self {
        Self { position, direction }
    }

    #[inline]
    pub fn step(self) -> Self {
        Self::new(self.position + self.direction, self.direction)
    }

    #[inline]
    pub fn turned(self, direction: Coord) -> Self {
        Self::new(self.position + direction, direction)
    }

    /// Same position with the direction folded onto its axis.
    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(self.position, self.direction.abs())
    }
}

/// Dense, row-major 2D grid.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self { cells: vec![fill; width * height], width, height }
    }

    pub fn from_vec(cells: Vec<T>, width: usize) -> Self {
        assert!(width > 0 && cells.len() % width == 0, "grid is not rectangular");
        let height = cells.len() / width;
        Self { cells, width, height }
    }

    /// Parses a block of equally wide lines, mapping each byte through `f`.
    pub fn parse_with(s: &[u8], mut f: impl FnMut(u8) -> T) -> Self {
        let mut width = 0;
        let mut cells = Vec::with_capacity(s.len());
        for line in lines(s) {
            if width == 0 {
                width = line.len();
            }
            assert_eq!(line.len(), width, "grid rows must have equal width");
            cells.extend(line.iter().map(|&c| f(c)));
        }
        Self::from_vec(cells, width)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Coord {
        Coord::new(self.width as _, self.height as _)
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        (0..self.width as i64).contains(&c.x) && (0..self.height as i64).contains(&c.y)
    }

    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.y as usize * self.width + c.x as usize)
    }

    #[inline]
    pub fn coord_of(&self, i: usize) -> Coord {
        Coord::new((i % self.width) as _, (i / self.width) as _)
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Option<&T> {
        self.index_of(c).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        self.index_of(c).map(move |i| &mut self.cells[i])
    }

    /// Lookup on the grid repeated infinitely in every direction.
    #[inline]
    pub fn get_wrapped(&self, c: Coord) -> &T {
        let x = c.x.rem_euclid(self.width as i64);
        let y = c.y.rem_euclid(self.height as i64);
        &self.cells[y as usize * self.width + x as usize]
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.cells.iter())
    }

    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.adjacent().into_iter().filter(|&n| self.contains(n))
    }

    pub fn neighbors_around(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.around().into_iter().filter(|&n| self.contains(n))
    }

    pub fn position(&self, value: &T) -> Option<Coord>
    where
        T: PartialEq,
    {
        self.cells.iter().position(|v| v == value).map(|i| self.coord_of(i))
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn column(&self, x: usize) -> impl Iterator<Item = &T> {
        self.cells.iter().skip(x).step_by(self.width)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid { cells: self.cells.iter().map(f).collect(), width: self.width, height: self.height }
    }

    fn remapped(&self, width: usize, height: usize, f: impl Fn(usize, usize) -> usize) -> Self
    where
        T: Clone,
    {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..height {
            for x in 0..width {
                cells.push(self.cells[f(x, y)].clone());
            }
        }
        Self { cells, width, height }
    }

    pub fn transposed(&self) -> Self
    where
        T: Clone,
    {
        let w = self.width;
        self.remapped(self.height, self.width, |x, y| x * w + y)
    }

    /// Quarter turn clockwise.
    pub fn rotated(&self) -> Self
    where
        T: Clone,
    {
        let (w, h) = (self.width, self.height);
        self.remapped(h, w, |x, y| (h - 1 - x) * w + y)
    }
}

impl Grid<u8> {
    pub fn parse(s: &[u8]) -> Self {
        Self::parse_with(s, |c| c)
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, c: Coord) -> &T {
        match self.index_of(c) {
            Some(i) => &self.cells[i],
            None => panic!("{:?} is outside of the {}x{} grid", c, self.width, self.height),
        }
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, c: Coord) -> &mut T {
        match self.index_of(c) {
            Some(i) => &mut self.cells[i],
            None => panic!("{:?} is outside of the {}x{} grid", c, self.width, self.height),
        }
    }
}

impl Display for Grid<u8> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

impl Debug for Grid<u8> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
const LETTERS: &[u8] = b"\
abcdefghij
klmnopqrst
uvwxyABCDE
FGHIJKLMNO
PQRSTUVWXY
";

#[test]
fn test_grid_coords() {
    let grid = Grid::parse(LETTERS);
    assert_eq!((grid.width(), grid.height()), (10, 5));
    let coords: Vec<_> = grid.coords().collect();
    assert_eq!(coords.len(), 50);
    assert!(coords.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(coords.last(), Some(&Coord::new(9, 4)));
    assert_eq!(grid[Coord::new(2, 1)], b'm');
    assert_eq!(grid.get(Coord::new(10, 0)), None);
    assert_eq!(grid.position(&b'A'), Some(Coord::new(5, 2)));
}

#[test]
fn test_grid_rotations() {
    let grid = Grid::parse(LETTERS);
    let rotated = grid.rotated();
    assert_eq!(rotated.size(), Coord::new(5, 10));
    assert_eq!(rotated.row(0), b"PFuka");
    assert_eq!(rotated.rotated().rotated().rotated(), grid);
    assert_eq!(grid.transposed().transposed(), grid);
    assert_eq!(grid.transposed().row(1), b"blvGQ");
}

#[test]
fn test_grid_neighbors() {
    let grid = Grid::parse(LETTERS);
    assert_eq!(grid.neighbors(Coord::ZERO).count(), 2);
    assert_eq!(grid.neighbors_around(Coord::ZERO).count(), 3);
    assert_eq!(grid.neighbors_around(Coord::new(4, 2)).count(), 8);
    assert_eq!(*grid.get_wrapped(Coord::new(-1, -1)), b'Y');
    assert_eq!(grid.column(1).copied().collect::<Vec<_>>(), b"blvGQ");
}

#[test]
fn test_coord_turns() {
    assert_eq!(Coord::RIGHT.clockwise(), Coord::DOWN);
    assert_eq!(Coord::UP.clockwise(), Coord::RIGHT);
    assert_eq!(Coord::RIGHT.counter_clockwise(), Coord::UP);
    assert_eq!(Coord::LEFT.clockwise().clockwise(), Coord::RIGHT);
    assert_eq!(Coord::new(1, 2).manhattan(Coord::new(-2, 0)), 5);
    assert_eq!(Coord3::new(1, 2, 3).project(Plane::XZ), Coord::new(1, 3));
    let v = Vector::new(Coord::ZERO, Coord::LEFT);
    assert_eq!(v.step().position, Coord::new(-1, 0));
    assert_eq!(v.abs().direction, Coord::RIGHT);
}
