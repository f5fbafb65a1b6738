use rustc_hash::FxHashSet;

use super::life;

// axial hex basis: h points east, k points northeast
const HEX_OFFSETS: [[i64; 2]; 6] = [
    [1, 0], [-1, 0], [0, 1], [0, -1], [-1, 1], [1, -1],
];

const DAYS: usize = 100;

pub fn solve(part: u8, input: &str) -> String {
    let mut black: FxHashSet<[i64; 2]> = FxHashSet::default();
    for line in input.trim().lines() {
        let tile = walk(line);
        if !black.remove(&tile) {
            black.insert(tile);
        }
    }

    if part == 1 {
        black.len().to_string()
    } else {
        // hex life: black survives on 1-2 black neighbours, white flips on 2
        for _ in 0..DAYS {
            black = life::evolve(&black, &HEX_OFFSETS, 2, 1..=2);
        }
        black.len().to_string()
    }
}

fn walk(line: &str) -> [i64; 2] {
    let (mut h, mut k) = (0, 0);
    let mut steps = line.bytes();
    while let Some(step) = steps.next() {
        let (dh, dk) = match step {
            b'e' => (1, 0),
            b'w' => (-1, 0),
            b'n' => match steps.next() {
                Some(b'e') => (0, 1),
                Some(b'w') => (-1, 1),
                _ => panic!("dangling n in {}", line),
            },
            b's' => match steps.next() {
                Some(b'e') => (1, -1),
                Some(b'w') => (0, -1),
                _ => panic!("dangling s in {}", line),
            },
            _ => panic!("unexpected step {} in {}", step as char, line),
        };
        h += dh;
        k += dk;
    }
    [h, k]
}

#[cfg(test)]
const SAMPLE: &str = "\
sesenwnenenewseeswwswswwnenewsewsw
neeenesenwnwwswnenewnwwsewnenwseswesw
seswneswswsenwwnwse
nwnwneseeswswnenewneswwnewseswneseene
swweswneswnenwsewnwneneseenw
eesenwseswswnenwswnwnwsewwnwsene
sewnenenenesenwsewnenwwwse
wenwwweseeeweswwwnwwe
wsweesenenewnwwnwsenewsenwwsesesenwne
neeswseenwwswnwswswnw
nenwswwsewswnenenewsenwsenwnesesenew
enewnwewneswsewnwswenweswnenwsenwsw
sweneswneswneneenwnewenewwneswswnese
swwesenesewenwneswnwwneseswwne
enesenwswwswneneswsenwnewswseenwsese
wnwnesenesenenwwnenwsewesewsesesew
nenewswnwewswnenesenwnesewesw
eneswnwswnwsenenwnwnwwseeswneewsenese
neswnwewnwnwseenwseesewsenwsweewe
wseweeenwnesenwwwswnew";

#[test]
fn flip_count() {
    assert_eq!(solve(1, SAMPLE), "10");
}

#[test]
fn hex_life() {
    assert_eq!(solve(2, SAMPLE), "2208");
}

#[test]
fn opposite_walks_cancel() {
    assert_eq!(walk("nwwswee"), [0, 0]);
}
