use itertools::Itertools;

pub fn solve(part: u8, input: &str) -> String {
    let mut jolts: Vec<u64> = input.trim().lines()
        .map(|line| line.parse().expect(line))
        .collect();
    jolts.push(0); // the charging outlet
    jolts.sort_unstable();
    let device = jolts.last().unwrap() + 3;
    jolts.push(device);

    if part == 1 {
        let diffs = jolts.iter().tuple_windows().map(|(a, b)| b - a).counts();
        (diffs.get(&1).copied().unwrap_or(0) * diffs.get(&3).copied().unwrap_or(0)).to_string()
    } else {
        // paths[j] = number of chains ending at joltage j
        let mut paths = vec![0u64; device as usize + 1];
        paths[0] = 1;
        for &jolt in &jolts[1..] {
            let jolt = jolt as usize;
            paths[jolt] = paths[jolt.saturating_sub(3)..jolt].iter().sum();
        }
        paths[device as usize].to_string()
    }
}

#[test]
fn small_sample() {
    let input = "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4";
    assert_eq!(solve(1, input), "35");
    assert_eq!(solve(2, input), "8");
}

#[test]
fn larger_sample() {
    let input = "28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n4\n2\n34\n10\n3";
    assert_eq!(solve(1, input), "220");
    assert_eq!(solve(2, input), "19208");
}
