use std::collections::VecDeque;

use ahash::AHashMap;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::utils::*;

const CUT: usize = 3;

// "jqt: rhn xhk nvd"
fn parse<'a>(s: &'a [u8]) -> UnGraph<(), ()> {
    let mut graph = UnGraph::default();
    let mut nodes = AHashMap::<&'a [u8], NodeIndex>::new();
    let mut node = |graph: &mut UnGraph<(), ()>, name: &'a [u8]| {
        *nodes.entry(name).or_insert_with(|| graph.add_node(()))
    };
    for line in lines(s) {
        let colon = line.memchr(b':');
        let a = node(&mut graph, &line[..colon]);
        for name in line.advance(colon + 1).split(|&c| c == b' ').filter(|w| !w.is_empty()) {
            let b = node(&mut graph, name);
            graph.add_edge(a, b, ());
        }
    }
    graph
}

/// Unit-capacity flow network over an undirected graph; each wire carries flow in one
/// direction at most.
struct Flow<'a> {
    graph: &'a UnGraph<(), ()>,
    flow: Vec<i8>, // relative to the (source, target) order of the edge
}

impl<'a> Flow<'a> {
    fn new(graph: &'a UnGraph<(), ()>) -> Self {
        Self { graph, flow: vec![0; graph.edge_count()] }
    }

    /// Residual capacity when crossing edge `e` starting from node `from`.
    fn residual(&self, e: EdgeIndex, from: NodeIndex) -> i8 {
        let forward = self.graph.edge_endpoints(e).map_or(false, |(a, _)| a == from);
        let f = self.flow[e.index()];
        if forward {
            1 - f
        } else {
            1 + f
        }
    }

    /// Pushes one more unit from `s` to `t` if possible; otherwise returns the number of
    /// nodes still reachable from `s`.
    fn augment(&mut self, s: NodeIndex, t: NodeIndex) -> Result<(), usize> {
        let mut pred: Vec<Option<(NodeIndex, EdgeIndex)>> = vec![None; self.graph.node_count()];
        let mut seen = vec![false; self.graph.node_count()];
        seen[s.index()] = true;
        let mut queue = VecDeque::from([s]);
        let mut reached = 1;
        while let Some(u) = queue.pop_front() {
            if u == t {
                break;
            }
            for edge in self.graph.edges(u) {
                let v = if edge.source() == u { edge.target() } else { edge.source() };
                if seen[v.index()] || self.residual(edge.id(), u) <= 0 {
                    continue;
                }
                seen[v.index()] = true;
                pred[v.index()] = Some((u, edge.id()));
                reached += 1;
                queue.push_back(v);
            }
        }
        if !seen[t.index()] {
            return Err(reached);
        }
        let mut v = t;
        while let Some((u, e)) = pred[v.index()] {
            let forward = self.graph.edge_endpoints(e).map_or(false, |(a, _)| a == u);
            self.flow[e.index()] += if forward { 1 } else { -1 };
            v = u;
        }
        Ok(())
    }
}

/// Splits the graph by removing exactly three wires; returns the sizes of both halves.
fn split(graph: &UnGraph<(), ()>) -> (usize, usize) {
    let n = graph.node_count();
    let source = NodeIndex::new(0);
    for sink in graph.node_indices().skip(1) {
        let mut flow = Flow::new(graph);
        for k in 0..=CUT {
            match flow.augment(source, sink) {
                Ok(()) => continue,
                Err(size) if k == CUT => {
                    debug!(?sink, size, "found minimum cut");
                    return (size, n - size);
                }
                Err(_) => panic!("{:?} is cut off by fewer than {} wires", sink, CUT),
            }
        }
        // more than three paths, so the sink is on the same side as the source
    }
    panic!("no cut of exactly {} wires", CUT)
}

#[inline]
pub fn part1(s: &[u8]) -> usize {
    let graph = parse(s);
    assert!(graph.node_count() >= 2, "graph needs at least two components");
    let (a, b) = split(&graph);
    a * b
}

#[inline]
pub fn part2(_: &[u8]) -> usize {
    0
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

#[test]
fn test_day25_part1() {
    assert_eq!(part1(EXAMPLE), 54);
}

#[test]
fn test_day25_part2() {
    assert_eq!(part2(EXAMPLE), 0);
}
