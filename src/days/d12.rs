pub fn solve(part: u8, input: &str) -> String {
    let (mut x, mut y) = (0i64, 0i64);
    // part 1 steers the ship by a unit heading; part 2 steers a waypoint
    let (mut dx, mut dy) = if part == 1 { (1, 0) } else { (10, 1) };

    for line in input.trim().lines() {
        let (action, value) = line.split_at(1);
        let value: i64 = value.parse().expect(line);
        match action {
            "N" if part == 1 => y += value,
            "S" if part == 1 => y -= value,
            "E" if part == 1 => x += value,
            "W" if part == 1 => x -= value,
            "N" => dy += value,
            "S" => dy -= value,
            "E" => dx += value,
            "W" => dx -= value,
            "L" | "R" => {
                assert!(value % 90 == 0, "non-quarter turn in {}", line);
                let quarters = if action == "L" { value / 90 } else { 4 - value / 90 % 4 };
                for _ in 0..quarters % 4 {
                    (dx, dy) = (-dy, dx);
                }
            }
            "F" => {
                x += dx * value;
                y += dy * value;
            }
            _ => panic!("unexpected action in {}", line),
        }
    }
    (x.abs() + y.abs()).to_string()
}

#[test]
fn sample() {
    let input = "F10\nN3\nF7\nR90\nF11";
    assert_eq!(solve(1, input), "25");
    assert_eq!(solve(2, input), "286");
}
