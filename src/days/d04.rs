use rustc_hash::FxHashMap;

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

pub fn solve(part: u8, input: &str) -> String {
    // records are blank-line separated; fields are whitespace-separated key:value pairs
    input.trim().split("\n\n").filter(|record| {
        let fields: FxHashMap<&str, &str> = record.split_whitespace()
            .map(|field| field.split_once(':').expect(field))
            .collect();
        if !REQUIRED.iter().all(|key| fields.contains_key(key)) {
            return false;
        }
        part == 1 || REQUIRED.iter().all(|key| valid(key, fields[key]))
    }).count().to_string()
}

fn valid(key: &str, value: &str) -> bool {
    let year_in = |range: std::ops::RangeInclusive<u32>| {
        value.len() == 4 && value.parse().map_or(false, |y| range.contains(&y))
    };
    match key {
        "byr" => year_in(1920..=2002),
        "iyr" => year_in(2010..=2020),
        "eyr" => year_in(2020..=2030),
        "hgt" => {
            let (num, unit) = value.split_at(value.len().saturating_sub(2));
            match (num.parse::<u32>(), unit) {
                (Ok(cm), "cm") => (150..=193).contains(&cm),
                (Ok(inches), "in") => (59..=76).contains(&inches),
                _ => false,
            }
        }
        "hcl" => {
            value.len() == 7
                && value.starts_with('#')
                && value[1..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        }
        "ecl" => ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"].contains(&value),
        "pid" => value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()),
        _ => unreachable!(),
    }
}

#[test]
fn sample() {
    let input = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in";
    assert_eq!(solve(1, input), "2");
}

#[test]
fn strict_validation() {
    let invalid = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007";
    assert_eq!(solve(2, invalid), "0");

    let valid = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719";
    assert_eq!(solve(2, valid), "4");
}
