pub fn solve(part: u8, input: &str) -> String {
    input.trim().split("\n\n").map(|group| {
        let merged = group.lines()
            .map(|line| line.bytes().fold(0u32, |set, b| set | 1 << (b - b'a')))
            .reduce(|a, b| if part == 1 { a | b } else { a & b })
            .expect("empty group");
        merged.count_ones()
    }).sum::<u32>().to_string()
}

#[test]
fn sample() {
    let input = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb";
    assert_eq!(solve(1, input), "11");
    assert_eq!(solve(2, input), "6");
}
