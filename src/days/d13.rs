pub fn solve(part: u8, input: &str) -> String {
    let mut lines = input.trim().lines();
    let earliest: i64 = lines.next().expect("missing timestamp line").parse().unwrap();
    let buses: Vec<(i64, i64)> = lines.next().expect("missing schedule line")
        .split(',')
        .enumerate()
        .filter(|&(_, id)| id != "x")
        .map(|(offset, id)| (offset as i64, id.parse().expect(id)))
        .collect();
    assert!(!buses.is_empty(), "no buses are in service");

    if part == 1 {
        let (id, wait) = buses.iter()
            .map(|&(_, id)| (id, (id - earliest % id) % id))
            .min_by_key(|&(_, wait)| wait)
            .unwrap();
        (id * wait).to_string()
    } else {
        // CRT: t ≡ -offset (mod id) for every bus, ids assumed pairwise coprime
        let product: i128 = buses.iter().map(|&(_, id)| id as i128).product();
        let solution: i128 = buses.iter().map(|&(offset, id)| {
            let (id, offset) = (id as i128, offset as i128);
            let rest = product / id;
            let inverse = mod_inv(rest, id).expect("bus ids are not pairwise coprime");
            (id - offset % id) % id * inverse % product * rest % product
        }).sum();
        (solution.rem_euclid(product)).to_string()
    }
}

// extended Euclid: returns (gcd, x, y) with a*x + b*y = gcd
fn egcd(a: i128, b: i128) -> (i128, i128, i128) {
    if a == 0 {
        (b, 0, 1)
    } else {
        let (g, x, y) = egcd(b % a, a);
        (g, y - b / a * x, x)
    }
}

fn mod_inv(a: i128, modulus: i128) -> Option<i128> {
    let (g, x, _) = egcd(a.rem_euclid(modulus), modulus);
    (g == 1).then(|| x.rem_euclid(modulus))
}

#[test]
fn sample() {
    let input = "939\n7,13,x,x,59,x,31,19";
    assert_eq!(solve(1, input), "295");
    assert_eq!(solve(2, input), "1068781");
}

#[test]
fn more_schedules() {
    assert_eq!(solve(2, "0\n17,x,13,19"), "3417");
    assert_eq!(solve(2, "0\n67,7,59,61"), "754018");
    assert_eq!(solve(2, "0\n1789,37,47,1889"), "1202161486");
}
