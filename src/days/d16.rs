use rustc_hash::FxHashMap;

struct Notes<'a> {
    fields: Vec<(&'a str, [(u64, u64); 2])>,
    own: Vec<u64>,
    nearby: Vec<Vec<u64>>,
}

pub fn solve(part: u8, input: &str) -> String {
    let notes = parse(input);

    if part == 1 {
        notes.nearby.iter().flatten()
            .filter(|&&value| !notes.fields.iter().any(|(_, ranges)| in_ranges(ranges, value)))
            .sum::<u64>().to_string()
    } else {
        let assignment = assign_columns(&notes);
        assignment.iter()
            .filter(|(name, _)| name.starts_with("departure"))
            .map(|(_, &column)| notes.own[column])
            .product::<u64>().to_string()
    }
}

fn parse(input: &str) -> Notes {
    let mut sections = input.trim().split("\n\n");
    let fields = sections.next().expect("missing field section").lines().map(|line| {
        let (name, ranges) = line.split_once(": ").expect(line);
        let mut ranges = ranges.split(" or ").map(|range| {
            let (lo, hi) = range.split_once('-').expect(line);
            (lo.parse().expect(line), hi.parse().expect(line))
        });
        let parsed = [ranges.next().expect(line), ranges.next().expect(line)];
        assert!(ranges.next().is_none(), "more than two ranges in {}", line);
        (name, parsed)
    }).collect();

    let ticket = |line: &str| line.split(',').map(|n| n.parse().expect(n)).collect();
    let own = ticket(sections.next().expect("missing own ticket section")
        .lines().nth(1).expect("missing own ticket"));
    let nearby = sections.next().expect("missing nearby section")
        .lines().skip(1).map(ticket).collect();
    Notes { fields, own, nearby }
}

fn in_ranges(ranges: &[(u64, u64); 2], value: u64) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&value))
}

// constraint elimination: repeatedly pin the field with a single viable column
fn assign_columns<'a>(notes: &Notes<'a>) -> FxHashMap<&'a str, usize> {
    let valid_tickets: Vec<&Vec<u64>> = notes.nearby.iter()
        .chain(std::iter::once(&notes.own))
        .filter(|ticket| {
            ticket.iter().all(|&value| {
                notes.fields.iter().any(|(_, ranges)| in_ranges(ranges, value))
            })
        })
        .collect();

    let columns = notes.own.len();
    let mut candidates: FxHashMap<&str, Vec<usize>> = notes.fields.iter().map(|(name, ranges)| {
        let viable = (0..columns).filter(|&column| {
            valid_tickets.iter().all(|ticket| in_ranges(ranges, ticket[column]))
        }).collect();
        (*name, viable)
    }).collect();

    let mut assignment = FxHashMap::default();
    while !candidates.is_empty() {
        let (&name, viable) = candidates.iter()
            .find(|(_, viable)| viable.len() == 1)
            .expect("field constraints do not resolve to a unique assignment");
        let column = viable[0];
        assignment.insert(name, column);
        candidates.remove(name);
        for viable in candidates.values_mut() {
            viable.retain(|&c| c != column);
        }
    }
    assignment
}

#[test]
fn error_rate() {
    let input = "\
class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12";
    assert_eq!(solve(1, input), "71");
}

#[test]
fn column_assignment() {
    let input = "\
class: 0-1 or 4-19
row: 0-5 or 8-19
seat: 0-13 or 16-19

your ticket:
11,12,13

nearby tickets:
3,9,18
15,1,5
5,14,9";
    let assignment = assign_columns(&parse(input));
    assert_eq!(assignment["row"], 0);
    assert_eq!(assignment["class"], 1);
    assert_eq!(assignment["seat"], 2);
}
