use rustc_hash::FxHashMap;

enum Rule {
    Literal(u8),
    // alternation over sequences of sub-rule ids
    Alt(Vec<Vec<usize>>),
}

pub fn solve(part: u8, input: &str) -> String {
    let (rule_block, messages) = input.trim().split_once("\n\n").expect("missing blank line");
    let mut rules: FxHashMap<usize, Rule> = rule_block.lines().map(parse_rule).collect();

    if part == 2 {
        // the looping replacements the puzzle patches in
        rules.insert(8, Rule::Alt(vec![vec![42], vec![42, 8]]));
        rules.insert(11, Rule::Alt(vec![vec![42, 31], vec![42, 11, 31]]));
    }

    messages.lines().filter(|message| {
        let mut memo = FxHashMap::default();
        let cap = rules.len() * (message.len() + 2);
        ends(0, 0, message.as_bytes(), &rules, &mut memo, cap)
            .contains(&message.len())
    }).count().to_string()
}

fn parse_rule(line: &str) -> (usize, Rule) {
    let (id, def) = line.split_once(": ").expect(line);
    let id = id.parse().expect(line);
    let rule = if let Some(lit) = def.strip_prefix('"') {
        Rule::Literal(lit.as_bytes()[0])
    } else {
        Rule::Alt(def.split(" | ").map(|seq| {
            seq.split_whitespace().map(|sub| sub.parse().expect(line)).collect()
        }).collect())
    };
    (id, rule)
}

// all positions where `rule` can stop matching, starting from `pos`;
// memoised on (rule, pos) so the looping part-2 rules stay tractable
fn ends(
    rule: usize,
    pos: usize,
    text: &[u8],
    rules: &FxHashMap<usize, Rule>,
    memo: &mut FxHashMap<(usize, usize), Vec<usize>>,
    fuel: usize,
) -> Vec<usize> {
    assert!(fuel > 0, "rule {} recurses without consuming input", rule);
    if let Some(known) = memo.get(&(rule, pos)) {
        return known.clone();
    }
    let result = match &rules[&rule] {
        Rule::Literal(b) => {
            if text.get(pos) == Some(b) { vec![pos + 1] } else { vec![] }
        }
        Rule::Alt(alternatives) => {
            let mut result = vec![];
            for seq in alternatives {
                let mut positions = vec![pos];
                for &sub in seq {
                    positions = positions.iter()
                        .flat_map(|&p| ends(sub, p, text, rules, memo, fuel - 1))
                        .collect();
                }
                result.extend(positions);
            }
            result.sort_unstable();
            result.dedup();
            result
        }
    };
    memo.insert((rule, pos), result.clone());
    result
}

#[test]
fn sample() {
    let input = "\
0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: \"a\"
5: \"b\"

ababbb
bababa
abbbab
aaabbb
aaaabbb";
    assert_eq!(solve(1, input), "2");
}

#[test]
fn looping_rules() {
    let input = "\
42: 9 14 | 10 1
9: 14 27 | 1 26
10: 23 14 | 28 1
1: \"a\"
11: 42 31
5: 1 14 | 15 1
19: 14 1 | 14 14
12: 24 14 | 19 1
16: 15 1 | 14 14
31: 14 17 | 1 13
6: 14 14 | 1 14
2: 1 24 | 14 4
0: 8 11
13: 14 3 | 1 12
15: 1 | 14
17: 14 2 | 1 7
23: 25 1 | 22 14
28: 16 1
4: 1 1
20: 14 14 | 1 15
3: 5 14 | 16 1
27: 1 6 | 14 18
14: \"b\"
21: 14 1 | 1 14
25: 1 1 | 1 14
22: 14 14
8: 42
26: 14 22 | 1 20
18: 15 15
7: 14 5 | 1 21
24: 14 1

abbbbbabbbaaaababbaabbbbabababbbabbbbbbabaaaa
bbabbbbaabaabba
babbbbaabbbbbabbbbbbaabaaabaaa
aaabbbbbbaaaabaababaabababbabaaabbababababaaa
bbbbbbbaaaabbbbaaabbabaaa
bbbababbbbaaaaaaaabbababaaababaabab
ababaaaaaabaaab
ababaaaaabbbaba
baabbaaaabbaaaababbaababb
abbbbabbbbaaaababbbbbbaaaababb
aaaaabbaabaaaaababaa
aaaabbaaaabbaaa
aaaabbaabbaaaaaaabbbabbbaaabbaabaaa
babaaabbbaaabaababbaabababaaab
aabbbbbaabbbaaaaaabbbbbababaaaaabbaaabba";
    assert_eq!(solve(1, input), "3");
    assert_eq!(solve(2, input), "12");
}
