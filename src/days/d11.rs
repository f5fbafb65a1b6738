use rustc_hash::FxHashMap;

// seats keyed by (row, col); floor cells are simply absent
type Seats = FxHashMap<(i64, i64), bool>;

const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1),
];

// the rule is monotone-dampening on puzzle inputs, but cap the search anyway
const MAX_ROUNDS: usize = 10_000;

pub fn solve(part: u8, input: &str) -> String {
    let mut seats: Seats = FxHashMap::default();
    let mut size = (0, 0);
    for (row, line) in input.trim().lines().enumerate() {
        for (col, cell) in line.bytes().enumerate() {
            size = (size.0.max(row as i64 + 1), size.1.max(col as i64 + 1));
            match cell {
                b'L' => { seats.insert((row as i64, col as i64), false); }
                b'#' => { seats.insert((row as i64, col as i64), true); }
                b'.' => (),
                _ => panic!("unexpected cell {} at ({}, {})", cell as char, row, col),
            }
        }
    }

    let crowded = if part == 1 { 4 } else { 5 };
    for _ in 0..MAX_ROUNDS {
        let next = step(&seats, size, part, crowded);
        if next == seats {
            return seats.values().filter(|&&occupied| occupied).count().to_string();
        }
        seats = next;
    }
    panic!("seat layout did not settle within {} rounds", MAX_ROUNDS);
}

// builds a fresh map; counting only ever reads the previous generation
fn step(seats: &Seats, size: (i64, i64), part: u8, crowded: usize) -> Seats {
    seats.iter().map(|(&pos, &occupied)| {
        let visible = DIRECTIONS.iter().filter(|&&dir| {
            if part == 1 {
                seats.get(&(pos.0 + dir.0, pos.1 + dir.1)) == Some(&true)
            } else {
                first_seat_seen(seats, size, pos, dir) == Some(true)
            }
        }).count();
        let next = match (occupied, visible) {
            (false, 0) => true,
            (true, n) if n >= crowded => false,
            (state, _) => state,
        };
        (pos, next)
    }).collect()
}

fn first_seat_seen(seats: &Seats, size: (i64, i64), from: (i64, i64), dir: (i64, i64)) -> Option<bool> {
    let (mut row, mut col) = (from.0 + dir.0, from.1 + dir.1);
    while (0..size.0).contains(&row) && (0..size.1).contains(&col) {
        if let Some(&occupied) = seats.get(&(row, col)) {
            return Some(occupied);
        }
        row += dir.0;
        col += dir.1;
    }
    None
}

#[test]
fn sample() {
    let input = "\
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL";
    assert_eq!(solve(1, input), "37");
    assert_eq!(solve(2, input), "26");
}

#[test]
fn lonely_seats_all_fill_in_one_round() {
    // a 10x10 grid of empty seats: every seat has zero occupied neighbours
    let seats: Seats = (0..10).flat_map(|r| (0..10).map(move |c| ((r, c), false))).collect();
    let stepped = step(&seats, (10, 10), 1, 4);
    assert!(stepped.values().all(|&occupied| occupied));
}
