use ahash::AHashMap;
use arrayvec::ArrayVec;
use tracing::debug;

use crate::grid::*;

type Edges = ArrayVec<(usize, u32), 4>;

fn downhill(tile: u8) -> Option<Coord> {
    match tile {
        b'^' => Some(Coord::UP),
        b'>' => Some(Coord::RIGHT),
        b'v' => Some(Coord::DOWN),
        b'<' => Some(Coord::LEFT),
        _ => None,
    }
}

/// The maze collapsed to its junctions: the entrance, the exit and every cell with more than
/// two open neighbors, connected by the lengths of the corridors between them.
struct Trails {
    edges: Vec<Edges>,
    start: usize,
    end: usize,
}

impl Trails {
    fn parse(s: &[u8], slippery: bool) -> Self {
        let grid = Grid::parse(s);
        let open = |c: Coord| grid.get(c).map_or(false, |&t| t != b'#');
        let (w, h) = (grid.width() as i64, grid.height() as i64);
        let entrance = (0..w).map(|x| Coord::new(x, 0)).find(|&c| open(c));
        let exit = (0..w).map(|x| Coord::new(x, h - 1)).find(|&c| open(c));
        let (Some(entrance), Some(exit)) = (entrance, exit) else {
            panic!("maze must be open at the top and bottom rows")
        };

        let mut junctions = vec![entrance, exit];
        junctions.extend(grid.coords().filter(|&c| {
            open(c) && c.adjacent().into_iter().filter(|&n| open(n)).count() > 2
        }));
        let index: AHashMap<Coord, usize> =
            junctions.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        assert!(junctions.len() <= 64, "too many junctions");

        let can_step = |from: Coord, d: Coord| {
            open(from + d) && (!slippery || downhill(grid[from]).map_or(true, |s| s == d))
        };
        let mut edges = vec![Edges::new(); junctions.len()];
        for (i, &junction) in junctions.iter().enumerate() {
            'corridor: for d in Coord::DIRECTIONS {
                if !can_step(junction, d) {
                    continue;
                }
                let (mut pos, mut dir, mut len) = (junction + d, d, 1);
                while !index.contains_key(&pos) {
                    let Some(next) =
                        [dir, dir.clockwise(), dir.counter_clockwise()].into_iter().find(|&n| can_step(pos, n))
                    else {
                        continue 'corridor;
                    };
                    pos += next;
                    dir = next;
                    len += 1;
                }
                edges[i].push((index[&pos], len));
            }
        }
        Self { edges, start: 0, end: 1 }
    }

    fn longest(&self, node: usize, visited: u64) -> Option<u32> {
        if node == self.end {
            return Some(0);
        }
        let edges = &self.edges[node];
        // once next to the exit, any other move would cut it off
        if let Some(&(_, len)) = edges.iter().find(|&&(next, _)| next == self.end) {
            return Some(len);
        }
        edges
            .iter()
            .filter(|&&(next, _)| visited & (1 << next) == 0)
            .filter_map(|&(next, len)| Some(len + self.longest(next, visited | (1 << next))?))
            .max()
    }

    fn longest_hike(&self) -> u32 {
        debug!(junctions = self.edges.len(), "compressed maze");
        self.longest(self.start, 1 << self.start).unwrap_or_else(|| panic!("exit is unreachable"))
    }
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    Trails::parse(s, true).longest_hike()
}

#[inline]
pub fn part2(s: &[u8]) -> u32 {
    Trails::parse(s, false).longest_hike()
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
";

#[test]
fn test_day23_part1() {
    assert_eq!(part1(EXAMPLE), 94);
}

#[test]
fn test_day23_part2() {
    assert_eq!(part2(EXAMPLE), 154);
}
