pub fn solve(part: u8, input: &str) -> String {
    let starters: Vec<u32> = input.trim().split(',')
        .map(|n| n.parse().expect(n))
        .collect();
    let final_turn = if part == 1 { 2020 } else { 30_000_000 };
    play(&starters, final_turn).to_string()
}

// flat last-spoken table indexed by the number itself; spoken numbers never
// exceed the turn count, so the table is bounded by final_turn
fn play(starters: &[u32], final_turn: u32) -> u32 {
    let mut last_spoken = vec![0u32; final_turn as usize];
    let mut previous = 0;
    for turn in 1..=final_turn {
        let speak = match starters.get(turn as usize - 1) {
            Some(&starter) => starter,
            None => match last_spoken[previous as usize] {
                0 => 0,
                seen => turn - 1 - seen,
            },
        };
        if turn > 1 {
            last_spoken[previous as usize] = turn - 1;
        }
        previous = speak;
    }
    previous
}

#[test]
fn part1_samples() {
    assert_eq!(play(&[0, 3, 6], 2020), 436);
    assert_eq!(play(&[1, 3, 2], 2020), 1);
    assert_eq!(play(&[2, 1, 3], 2020), 10);
    assert_eq!(play(&[3, 1, 2], 2020), 1836);
}

#[test]
fn part2_sample() {
    assert_eq!(play(&[0, 3, 6], 30_000_000), 175594);
}
