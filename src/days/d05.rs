use bitvec::prelude::*;

pub fn solve(part: u8, input: &str) -> String {
    // B/R are high halves, so a pass is just a 10-bit seat ID in disguise
    let mut seen = bitarr![0; 1024];
    for line in input.trim().lines() {
        let id = line.bytes().fold(0usize, |id, b| match b {
            b'B' | b'R' => id * 2 + 1,
            b'F' | b'L' => id * 2,
            _ => panic!("unexpected character {} in {}", b as char, line),
        });
        seen.set(id, true);
    }

    if part == 1 {
        seen.last_one().expect("no boarding passes").to_string()
    } else {
        (1..1023).find(|&id| !seen[id] && seen[id - 1] && seen[id + 1])
            .expect("no vacant seat with occupied neighbours").to_string()
    }
}

#[test]
fn sample() {
    assert_eq!(solve(1, "FBFBBFFRLR"), "357");
    assert_eq!(solve(1, "BFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL"), "820");
}

#[test]
fn missing_seat() {
    // IDs 5, 6, 8, 9 - seat 7 is the gap
    let input = "FFFFFFFRLR\nFFFFFFFRRL\nFFFFFFBLLL\nFFFFFFBLLR";
    assert_eq!(solve(2, input), "7");
}
