use regex::Regex;
use rustc_hash::FxHashMap;

const TARGET: &str = "shiny gold";

type Rules<'a> = FxHashMap<&'a str, Vec<(u64, &'a str)>>;

pub fn solve(part: u8, input: &str) -> String {
    let re_contents = Regex::new(r"(\d+) (\w+ \w+) bags?").unwrap();
    let rules: Rules = input.trim().lines().map(|line| {
        let (outer, contents) = line.split_once(" bags contain ").expect(line);
        let inner = re_contents.captures_iter(contents)
            .map(|m| (m[1].parse().unwrap(), m.get(2).unwrap().as_str()))
            .collect();
        (outer, inner)
    }).collect();

    if part == 1 {
        let mut memo = FxHashMap::default();
        rules.keys()
            .filter(|&&bag| reaches_target(bag, &rules, &mut memo, 0))
            .count().to_string()
    } else {
        let mut memo = FxHashMap::default();
        bags_inside(TARGET, &rules, &mut memo, 0).to_string()
    }
}

fn reaches_target<'a>(
    bag: &'a str,
    rules: &Rules<'a>,
    memo: &mut FxHashMap<&'a str, bool>,
    depth: usize,
) -> bool {
    assert!(depth <= rules.len(), "containment cycle involving {}", bag);
    if let Some(&known) = memo.get(bag) {
        return known;
    }
    let found = rules[bag].iter().any(|&(_, inner)| {
        inner == TARGET || reaches_target(inner, rules, memo, depth + 1)
    });
    memo.insert(bag, found);
    found
}

fn bags_inside<'a>(
    bag: &'a str,
    rules: &Rules<'a>,
    memo: &mut FxHashMap<&'a str, u64>,
    depth: usize,
) -> u64 {
    assert!(depth <= rules.len(), "containment cycle involving {}", bag);
    if let Some(&known) = memo.get(bag) {
        return known;
    }
    let total = rules[bag].iter()
        .map(|&(count, inner)| count * (1 + bags_inside(inner, rules, memo, depth + 1)))
        .sum();
    memo.insert(bag, total);
    total
}

#[test]
fn sample() {
    let input = "\
light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.";
    assert_eq!(solve(1, input), "4");
    assert_eq!(solve(2, input), "32");
}

#[test]
fn deeply_nested() {
    let input = "\
shiny gold bags contain 2 dark red bags.
dark red bags contain 2 dark orange bags.
dark orange bags contain 2 dark yellow bags.
dark yellow bags contain 2 dark green bags.
dark green bags contain 2 dark blue bags.
dark blue bags contain 2 dark violet bags.
dark violet bags contain no other bags.";
    assert_eq!(solve(2, input), "126");
}
