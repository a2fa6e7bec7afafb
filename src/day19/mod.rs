use ahash::AHashMap;

use crate::utils::*;

type Part = [u32; 4];
type Ranges = [(u32, u32); 4]; // half-open per category

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Accept,
    Reject,
    Workflow(usize),
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    category: usize,
    less: bool,
    value: u32,
    target: Target,
}

#[derive(Debug, Clone, Default)]
struct Workflow {
    rules: Vec<Rule>,
    fallback: Option<Target>,
}

struct System {
    workflows: Vec<Workflow>,
    start: usize,
}

fn category(c: u8) -> usize {
    match c {
        b'x' => 0,
        b'm' => 1,
        b'a' => 2,
        b's' => 3,
        _ => panic!("invalid category: {:?}", char::from(c)),
    }
}

impl System {
    // "px{a<2006:qkq,m>2090:A,rfg}"
    pub fn parse<'a>(s: &'a [u8]) -> Self {
        let mut names = AHashMap::<&'a [u8], usize>::new();
        let mut target = |name: &'a [u8]| -> Target {
            match name {
                b"A" => Target::Accept,
                b"R" => Target::Reject,
                _ => {
                    let n = names.len();
                    Target::Workflow(*names.entry(name).or_insert(n))
                }
            }
        };
        let mut workflows = Vec::new();
        for line in lines(s) {
            let k = line.memchr(b'{');
            let Target::Workflow(index) = target(&line[..k]) else {
                panic!("workflow cannot be named A or R")
            };
            let mut workflow = Workflow::default();
            let body = &line[k + 1..line.len() - 1];
            for rule in body.split(|&c| c == b',') {
                let colon = rule.memchr(b':');
                if colon == rule.len() {
                    workflow.fallback = Some(target(rule));
                    continue;
                }
                let value = uints(&rule[2..colon])
                    .next()
                    .unwrap_or_else(|| panic!("missing rule value: {:?}", String::from_utf8_lossy(rule)));
                workflow.rules.push(Rule {
                    category: category(rule[0]),
                    less: rule[1] == b'<',
                    value,
                    target: target(&rule[colon + 1..]),
                });
            }
            if workflows.len() <= index {
                workflows.resize(index + 1, None);
            }
            workflows[index] = Some(workflow);
        }
        let start = match target(&b"in"[..]) {
            Target::Workflow(i) => i,
            _ => unreachable!(),
        };
        // every referenced name, "in" included, must be defined
        workflows.resize(names.len(), None);
        let workflows = workflows
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                w.unwrap_or_else(|| {
                    let name = names.iter().find(|&(_, &j)| j == i).map(|(&name, _)| name);
                    panic!("undefined workflow: {:?}", String::from_utf8_lossy(name.unwrap_or_default()))
                })
            })
            .collect();
        Self { workflows, start }
    }

    fn fallback(&self, w: usize) -> Target {
        self.workflows[w].fallback.unwrap_or_else(|| panic!("workflow without a fallback rule"))
    }

    pub fn accepts(&self, part: &Part) -> bool {
        let mut w = self.start;
        loop {
            let workflow = &self.workflows[w];
            let target = workflow
                .rules
                .iter()
                .find(|r| {
                    let v = part[r.category];
                    if r.less {
                        v < r.value
                    } else {
                        v > r.value
                    }
                })
                .map_or_else(|| self.fallback(w), |r| r.target);
            match target {
                Target::Accept => return true,
                Target::Reject => return false,
                Target::Workflow(next) => w = next,
            }
        }
    }

    pub fn count_accepted(&self, target: Target, mut ranges: Ranges) -> u64 {
        let w = match target {
            Target::Accept => return ranges.iter().map(|&(lo, hi)| (hi - lo) as u64).product(),
            Target::Reject => return 0,
            Target::Workflow(w) => w,
        };
        let mut total = 0;
        for rule in &self.workflows[w].rules {
            let (lo, hi) = ranges[rule.category];
            // split into the matching and the non-matching half
            let (pass, fail) = if rule.less {
                ((lo, hi.min(rule.value)), (lo.max(rule.value), hi))
            } else {
                ((lo.max(rule.value + 1), hi), (lo, hi.min(rule.value + 1)))
            };
            if pass.0 < pass.1 {
                let mut sub = ranges;
                sub[rule.category] = pass;
                total += self.count_accepted(rule.target, sub);
            }
            if fail.0 >= fail.1 {
                return total;
            }
            ranges[rule.category] = fail;
        }
        total + self.count_accepted(self.fallback(w), ranges)
    }
}

#[inline]
pub fn part1(s: &[u8]) -> u32 {
    let mut blocks = blocks(s);
    let system = System::parse(blocks.next().unwrap_or_else(|| panic!("missing workflows")));
    lines(blocks.next().unwrap_or_else(|| panic!("missing part ratings")))
        .map(|line| {
            let mut part = [0; 4];
            for (p, v) in part.iter_mut().zip(uints(line)) {
                *p = v;
            }
            part
        })
        .filter(|part| system.accepts(part))
        .map(|part| part.iter().sum::<u32>())
        .sum()
}

#[inline]
pub fn part2(s: &[u8]) -> u64 {
    let system = System::parse(blocks(s).next().unwrap_or_else(|| panic!("missing workflows")));
    system.count_accepted(Target::Workflow(system.start), [(1, 4001); 4])
}

#[cfg(test)]
const EXAMPLE: &[u8] = b"\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

#[test]
fn test_day19_part1() {
    assert_eq!(part1(EXAMPLE), 19114);
}

#[test]
fn test_day19_part2() {
    assert_eq!(part2(EXAMPLE), 167409079868000);
}

#[test]
#[should_panic(expected = "undefined workflow: \"rhg\"")]
fn test_day19_undefined_workflow() {
    part2(b"in{s<1351:px,A}\npx{a<2006:R,rhg}\n");
}

#[test]
#[should_panic(expected = "missing part ratings")]
fn test_day19_missing_ratings() {
    part1(b"in{A}\n");
}
