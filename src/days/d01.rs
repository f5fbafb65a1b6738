pub fn solve(part: u8, input: &str) -> String {
    let mut entries: Vec<i64> = input.trim().lines()
        .map(|line| line.parse().expect(line))
        .collect();
    entries.sort_unstable();

    if part == 1 {
        let (a, b) = find_pair(&entries, 2020).expect("no pair sums to 2020");
        (a * b).to_string()
    } else {
        for (base_at, &base) in entries.iter().enumerate() {
            if let Some((a, b)) = find_pair(&entries[base_at + 1..], 2020 - base) {
                return (base * a * b).to_string();
            }
        }
        panic!("no triple sums to 2020");
    }
}

// two-pointer scan over a sorted slice
fn find_pair(sorted: &[i64], target: i64) -> Option<(i64, i64)> {
    let (mut low, mut high) = (0, sorted.len().checked_sub(1)?);
    while low < high {
        match (sorted[low] + sorted[high]).cmp(&target) {
            std::cmp::Ordering::Less => low += 1,
            std::cmp::Ordering::Greater => high -= 1,
            std::cmp::Ordering::Equal => return Some((sorted[low], sorted[high])),
        }
    }
    None
}

#[test]
fn sample() {
    let input = "1721\n979\n366\n299\n675\n1456";
    assert_eq!(solve(1, input), "514579");
    assert_eq!(solve(2, input), "241861950");
}
