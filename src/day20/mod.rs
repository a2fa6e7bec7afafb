use std::collections::VecDeque;

use ahash::AHashMap;
use tracing::debug;

use crate::utils::*;

const BUTTON: usize = usize::MAX;
const MAX_PRESSES: u64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcaster,
    FlipFlop,
    Conjunction,
    Sink,
}

#[derive(Debug, Clone)]
struct Module {
    kind: Kind,
    outputs: Vec<(usize, u32)>, // (target module, input slot at the target)
    inputs: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Pulse {
    to: usize,
    slot: u32,
    high: bool,
}

struct Machine<'a> {
    names: AHashMap<&'a [u8], usize>,
    modules: Vec<Module>,
    state: Vec<u64>, // flip-flop: on/off; conjunction: bitmask of remembered high inputs
    broadcaster: usize,
    queue: VecDeque<Pulse>,
}

impl<'a> Machine<'a> {
    fn module_id(&mut self, name: &'a [u8]) -> usize {
        let n = self.modules.len();
        let id = *self.names.entry(name).or_insert(n);
        if id == n {
            self.modules.push(Module { kind: Kind::Sink, outputs: vec![], inputs: vec![] });
        }
        id
    }

    // "%a -> inv, con"
    pub fn parse(s: &'a [u8]) -> Self {
        let mut m = Self {
            names: AHashMap::new(),
            modules: Vec::new(),
            state: Vec::new(),
            broadcaster: BUTTON,
            queue: VecDeque::new(),
        };
        let mut edges = Vec::new();
        for line in lines(s) {
            let (kind, name) = match line[0] {
                b'%' => (Kind::FlipFlop, &line[1..line.memchr(b' ')]),
                b'&' => (Kind::Conjunction, &line[1..line.memchr(b' ')]),
                _ => (Kind::Broadcaster, &line[..line.memchr(b' ')]),
            };
            let id = m.module_id(name);
            m.modules[id].kind = kind;
            if kind == Kind::Broadcaster {
                m.broadcaster = id;
            }
            let targets = line.skip_past(b'>', 1);
            for target in targets.split(|&c| c == b',').map(trim_newlines) {
                let to = m.module_id(target);
                edges.push((id, to));
            }
        }
        assert_ne!(m.broadcaster, BUTTON, "no broadcaster module");
        for (from, to) in edges {
            let slot = m.modules[to].inputs.len() as u32;
            assert!(slot < 64, "too many inputs for a conjunction");
            m.modules[to].inputs.push(from);
            m.modules[from].outputs.push((to, slot));
        }
        m.state = vec![0; m.modules.len()];
        m
    }

    /// Presses the button once, reporting every pulse as it is delivered.
    pub fn press(&mut self, mut on_pulse: impl FnMut(&Pulse)) {
        self.queue.push_back(Pulse { to: self.broadcaster, slot: 0, high: false });
        while let Some(pulse) = self.queue.pop_front() {
            on_pulse(&pulse);
            let module = &self.modules[pulse.to];
            let state = &mut self.state[pulse.to];
            let out = match module.kind {
                Kind::Broadcaster => pulse.high,
                Kind::FlipFlop if pulse.high => continue,
                Kind::FlipFlop => {
                    *state ^= 1;
                    *state != 0
                }
                Kind::Conjunction => {
                    if pulse.high {
                        *state |= 1 << pulse.slot;
                    } else {
                        *state &= !(1 << pulse.slot);
                    }
                    *state != (1u64 << module.inputs.len()) - 1
                }
                Kind::Sink => continue,
            };
            for &(to, slot) in &module.outputs {
                self.queue.push_back(Pulse { to, slot, high: out });
            }
        }
    }
}

#[inline]
pub fn part1(s: &[u8]) -> u64 {
    let mut machine = Machine::parse(s);
    let mut counts = [0u64; 2];
    for _ in 0..1000 {
        machine.press(|p| counts[p.high as usize] += 1);
    }
    counts[0] * counts[1]
}

#[inline]
pub fn part2(s: &[u8]) -> u64 {
    let mut machine = Machine::parse(s);
    let rx = match machine.names.get(&b"rx"[..]) {
        Some(&rx) => rx,
        None => panic!("no module named rx"),
    };
    // rx is fed by a single conjunction; it fires low once all of its inputs
    // send high during the same press, and each input does so periodically
    let feeder = match machine.modules[rx].inputs[..] {
        [feeder] if machine.modules[feeder].kind == Kind::Conjunction => feeder,
        _ => panic!("rx must be fed by exactly one conjunction"),
    };
    let inputs = machine.modules[feeder].inputs.clone();
    let mut first_high = vec![0u64; inputs.len()];
    let mut presses = 0;
    while first_high.contains(&0) {
        assert!(presses < MAX_PRESSES, "an input of the rx feeder never sends a high pulse");
        presses += 1;
        machine.press(|p| {
            if p.to == feeder && p.high && first_high[p.slot as usize] == 0 {
                first_high[p.slot as usize] = presses;
            }
        });
    }
    debug!(?inputs, ?first_high, "feeder input periods");
    first_high.into_iter().fold(1, lcm)
}

#[test]
fn test_day20_part1() {
    let s = b"\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";
    assert_eq!(part1(s), 32000000);
    let s = b"\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";
    assert_eq!(part1(s), 11687500);
}

#[test]
fn test_day20_part2() {
    let s = b"\
broadcaster -> a
%a -> ix, b
%b -> iy
&ix -> con
&iy -> con
&con -> rx
";
    assert_eq!(part2(s), 4);
}

#[test]
#[should_panic(expected = "never sends a high pulse")]
fn test_day20_silent_feeder_input() {
    let s = b"\
broadcaster -> a
%a -> con
&idle -> con
&con -> rx
";
    part2(s);
}
