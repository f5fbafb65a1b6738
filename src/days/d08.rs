#[derive(Clone, Copy, PartialEq)]
enum Op {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

enum Outcome {
    Terminated(i64),
    Looped(i64),
}

pub fn solve(part: u8, input: &str) -> String {
    let code: Vec<Op> = input.trim().lines().map(|line| {
        let (op, arg) = line.split_once(' ').expect(line);
        let arg = arg.parse().expect(line);
        match op {
            "acc" => Op::Acc(arg),
            "jmp" => Op::Jmp(arg),
            "nop" => Op::Nop(arg),
            _ => panic!("unknown instruction {}", line),
        }
    }).collect();

    if part == 1 {
        match run(&code) {
            Outcome::Looped(acc) => acc.to_string(),
            Outcome::Terminated(_) => panic!("program terminated without looping"),
        }
    } else {
        let mut code = code;
        for at in 0..code.len() {
            let original = code[at];
            code[at] = match original {
                Op::Jmp(arg) => Op::Nop(arg),
                Op::Nop(arg) => Op::Jmp(arg),
                Op::Acc(_) => continue,
            };
            if let Outcome::Terminated(acc) = run(&code) {
                return acc.to_string();
            }
            code[at] = original;
        }
        panic!("no single jmp/nop flip terminates the program");
    }
}

fn run(code: &[Op]) -> Outcome {
    let mut visited = vec![false; code.len()];
    let (mut ip, mut acc) = (0i64, 0);
    loop {
        if ip as usize == code.len() {
            return Outcome::Terminated(acc);
        }
        if std::mem::replace(&mut visited[ip as usize], true) {
            return Outcome::Looped(acc);
        }
        match code[ip as usize] {
            Op::Acc(arg) => {
                acc += arg;
                ip += 1;
            }
            Op::Jmp(arg) => ip += arg,
            Op::Nop(_) => ip += 1,
        }
    }
}

#[test]
fn sample() {
    let input = "\
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6";
    assert_eq!(solve(1, input), "5");
    assert_eq!(solve(2, input), "8");
}
