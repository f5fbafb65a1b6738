use regex::Regex;
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> String {
    let re_write = Regex::new(r"^mem\[(\d+)\] = (\d+)$").unwrap();
    let mut memory: FxHashMap<u64, u64> = FxHashMap::default();
    let (mut ones, mut zeroes, mut floating): (u64, u64, Vec<u64>) = (0, 0, vec![]);

    for line in input.trim().lines() {
        if let Some(mask) = line.strip_prefix("mask = ") {
            assert!(mask.len() == 36, "mask is not 36 bits: {}", line);
            ones = 0;
            zeroes = 0;
            floating = vec![];
            for (at, bit) in mask.bytes().enumerate() {
                let bit_value = 1 << (35 - at);
                match bit {
                    b'1' => ones |= bit_value,
                    b'0' => zeroes |= bit_value,
                    b'X' => floating.push(bit_value),
                    _ => panic!("unexpected mask bit in {}", line),
                }
            }
        } else {
            let m = re_write.captures(line).expect(line);
            let address: u64 = m[1].parse().unwrap();
            let value: u64 = m[2].parse().unwrap();
            if part == 1 {
                memory.insert(address, value & !zeroes | ones);
            } else {
                // X bits float: write to every combination of the X positions
                let base = address & !floating.iter().sum::<u64>() | ones;
                for combo in 0..1u64 << floating.len() {
                    let address = floating.iter().enumerate()
                        .filter(|&(bit, _)| combo & 1 << bit != 0)
                        .fold(base, |address, (_, &value)| address | value);
                    memory.insert(address, value);
                }
            }
        }
    }
    memory.values().sum::<u64>().to_string()
}

#[test]
fn value_mask() {
    let input = "\
mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0";
    assert_eq!(solve(1, input), "165");
}

#[test]
fn address_mask() {
    let input = "\
mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1";
    assert_eq!(solve(2, input), "208");
}
