const SUBJECT: u64 = 7;
const MODULUS: u64 = 20201227;

pub fn solve(part: u8, input: &str) -> String {
    assert!(part == 1, "day 25 has no part 2");
    let mut lines = input.trim().lines();
    let card: u64 = lines.next().expect("missing card key").parse().unwrap();
    let door: u64 = lines.next().expect("missing door key").parse().unwrap();

    // brute-force discrete log of the card key, then apply the door key
    let mut value = 1;
    let mut loops = 0;
    while value != card {
        value = value * SUBJECT % MODULUS;
        loops += 1;
        assert!(loops < MODULUS, "card key is not a power of the subject");
    }
    transform(door, loops).to_string()
}

fn transform(subject: u64, loops: u64) -> u64 {
    (0..loops).fold(1, |value, _| value * subject % MODULUS)
}

#[test]
fn sample() {
    assert_eq!(solve(1, "5764801\n17807724"), "14897079");
    // and the handshake agrees from the other side
    assert_eq!(solve(1, "17807724\n5764801"), "14897079");
}
