pub fn solve(part: u8, input: &str) -> String {
    let grid: Vec<&[u8]> = input.trim().lines().map(|line| line.as_bytes()).collect();

    if part == 1 {
        trees(&grid, 3, 1).to_string()
    } else {
        [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)].iter()
            .map(|&(right, down)| trees(&grid, right, down))
            .product::<u64>().to_string()
    }
}

// the tree pattern repeats to the right, so the column wraps mod row length
fn trees(grid: &[&[u8]], right: usize, down: usize) -> u64 {
    grid.iter().step_by(down).enumerate()
        .filter(|(step, row)| row[step * right % row.len()] == b'#')
        .count() as u64
}

#[test]
fn sample() {
    let input = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#";
    assert_eq!(solve(1, input), "7");
    assert_eq!(solve(2, input), "336");
}
