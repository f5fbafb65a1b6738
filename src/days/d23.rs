use arrayvec::ArrayVec;

pub fn solve(part: u8, input: &str) -> String {
    let labels: Vec<u32> = input.trim().bytes()
        .map(|b| (b as char).to_digit(10).expect(input.trim()))
        .collect();
    assert!(labels.len() == 9, "expected nine cup labels");

    if part == 1 {
        let mut cups = ring(&labels, 9);
        play(&mut cups, labels[0], 100);
        // the labels clockwise of cup 1
        let mut output = String::new();
        let mut cup = cups[1];
        while cup != 1 {
            output.push(char::from_digit(cup, 10).unwrap());
            cup = cups[cup as usize];
        }
        output
    } else {
        let mut cups = ring(&labels, 1_000_000);
        play(&mut cups, labels[0], 10_000_000);
        let first = cups[1];
        let second = cups[first as usize];
        (first as u64 * second as u64).to_string()
    }
}

// index = cup label, value = next cup clockwise; index 0 is never a cup
fn ring(labels: &[u32], cup_count: u32) -> Vec<u32> {
    let mut cups = vec![0u32; cup_count as usize + 1];
    let mut previous = labels[0];
    for &label in &labels[1..] {
        cups[previous as usize] = label;
        previous = label;
    }
    for label in labels.len() as u32 + 1..=cup_count {
        cups[previous as usize] = label;
        previous = label;
    }
    cups[previous as usize] = labels[0];
    cups
}

fn play(cups: &mut [u32], mut current: u32, moves: u32) {
    let highest = cups.len() as u32 - 1;
    for _ in 0..moves {
        let mut lifted = ArrayVec::<u32, 3>::new();
        let mut cup = current;
        for _ in 0..3 {
            cup = cups[cup as usize];
            lifted.push(cup);
        }
        cups[current as usize] = cups[cup as usize];

        let mut destination = if current == 1 { highest } else { current - 1 };
        while lifted.contains(&destination) {
            destination = if destination == 1 { highest } else { destination - 1 };
        }

        cups[lifted[2] as usize] = cups[destination as usize];
        cups[destination as usize] = lifted[0];
        current = cups[current as usize];
    }
}

#[test]
fn hundred_moves() {
    assert_eq!(solve(1, "389125467"), "67384529");
}

#[test]
fn cups_after_one_multiply_to_42() {
    let labels: Vec<u32> = "389125467".bytes().map(|b| (b - b'0') as u32).collect();
    let mut cups = ring(&labels, 9);
    play(&mut cups, labels[0], 100);
    assert_eq!(cups[1] * cups[cups[1] as usize], 42);
}

#[test]
fn ten_million_moves() {
    assert_eq!(solve(2, "389125467"), "149245887792");
}
