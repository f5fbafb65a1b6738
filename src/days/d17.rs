use rustc_hash::FxHashSet;

use super::life;

const GENERATIONS: usize = 6;

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        boot::<3>(input).to_string()
    } else {
        boot::<4>(input).to_string()
    }
}

// the initial plane sits at zero on every extra axis
fn boot<const D: usize>(input: &str) -> usize {
    let mut active: FxHashSet<[i64; D]> = input.trim().lines().enumerate()
        .flat_map(|(x, line)| {
            line.bytes().enumerate().filter(|&(_, b)| b == b'#').map(move |(y, _)| {
                let mut cell = [0; D];
                cell[0] = x as i64;
                cell[1] = y as i64;
                cell
            })
        })
        .collect();

    let offsets = life::moore_offsets::<D>();
    for _ in 0..GENERATIONS {
        active = life::evolve(&active, &offsets, 3, 2..=3);
    }
    active.len()
}

#[test]
fn sample() {
    let input = ".#.\n..#\n###";
    assert_eq!(solve(1, input), "112");
    assert_eq!(solve(2, input), "848");
}
