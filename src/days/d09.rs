const PREAMBLE: usize = 25;

pub fn solve(part: u8, input: &str) -> String {
    let stream: Vec<i64> = input.trim().lines()
        .map(|line| line.parse().expect(line))
        .collect();
    let rogue = first_invalid(&stream, PREAMBLE).expect("every value is a valid sum");

    if part == 1 {
        rogue.to_string()
    } else {
        weakness(&stream, rogue).expect("no contiguous run sums to the rogue value").to_string()
    }
}

fn first_invalid(stream: &[i64], preamble: usize) -> Option<i64> {
    stream.windows(preamble + 1).find_map(|window| {
        let (&target, pool) = window.split_last().unwrap();
        let is_sum = pool.iter().enumerate().any(|(i, &a)| {
            pool[i + 1..].iter().any(|&b| a != b && a + b == target)
        });
        (!is_sum).then_some(target)
    })
}

// min + max of the contiguous run summing to target, found with a sliding window
fn weakness(stream: &[i64], target: i64) -> Option<i64> {
    let (mut start, mut sum) = (0, 0);
    for end in 0..stream.len() {
        sum += stream[end];
        while sum > target && start < end {
            sum -= stream[start];
            start += 1;
        }
        if sum == target && end > start {
            let run = &stream[start..=end];
            return Some(run.iter().min()? + run.iter().max()?);
        }
    }
    None
}

#[test]
fn sample() {
    let stream: Vec<i64> = "35 20 15 25 47 40 62 55 65 95 102 117 150 182 127 219 299 277 309 576"
        .split_whitespace().map(|n| n.parse().unwrap()).collect();
    assert_eq!(first_invalid(&stream, 5), Some(127));
    assert_eq!(weakness(&stream, 127), Some(62));
}
