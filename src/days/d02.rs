use regex::Regex;

pub fn solve(part: u8, input: &str) -> String {
    let re = Regex::new(r"^(\d+)-(\d+) (\w): (\w+)$").unwrap();
    input.trim().lines().filter(|line| {
        let m = re.captures(line).expect(line);
        let lo: usize = m[1].parse().unwrap();
        let hi: usize = m[2].parse().unwrap();
        let letter = m[3].as_bytes()[0];
        let password = m[4].as_bytes();

        if part == 1 {
            let count = password.iter().filter(|&&b| b == letter).count();
            (lo..=hi).contains(&count)
        } else {
            // positions are 1-based, and exactly one of the two must match
            (password.get(lo - 1) == Some(&letter)) != (password.get(hi - 1) == Some(&letter))
        }
    }).count().to_string()
}

#[test]
fn sample() {
    let input = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc";
    assert_eq!(solve(1, input), "2");
    assert_eq!(solve(2, input), "1");
}
