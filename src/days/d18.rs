#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(u64),
    Plus,
    Star,
    Open,
    Close,
}

pub fn solve(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let tokens = tokenize(line);
        let mut pos = 0;
        let value = eval(&tokens, &mut pos, part);
        assert!(pos == tokens.len(), "trailing tokens in {}", line);
        value
    }).sum::<u64>().to_string()
}

fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut digits = None;
    for b in line.bytes() {
        if b.is_ascii_digit() {
            digits = Some(digits.unwrap_or(0) * 10 + (b - b'0') as u64);
            continue;
        }
        if let Some(n) = digits.take() {
            tokens.push(Token::Num(n));
        }
        match b {
            b'+' => tokens.push(Token::Plus),
            b'*' => tokens.push(Token::Star),
            b'(' => tokens.push(Token::Open),
            b')' => tokens.push(Token::Close),
            b' ' => (),
            _ => panic!("unexpected character {} in {}", b as char, line),
        }
    }
    if let Some(n) = digits {
        tokens.push(Token::Num(n));
    }
    tokens
}

// part 1: + and * bind equally, left to right
// part 2: + binds tighter, so factors accumulate until a * closes them off
fn eval(tokens: &[Token], pos: &mut usize, part: u8) -> u64 {
    let mut factors = vec![];
    let mut acc = atom(tokens, pos, part);
    loop {
        match tokens.get(*pos) {
            Some(Token::Plus) => {
                *pos += 1;
                acc += atom(tokens, pos, part);
            }
            Some(Token::Star) => {
                *pos += 1;
                let rhs = atom(tokens, pos, part);
                if part == 1 {
                    acc *= rhs;
                } else {
                    factors.push(acc);
                    acc = rhs;
                }
            }
            Some(Token::Close) | None => break,
            Some(token) => panic!("expected an operator, found {:?}", token),
        }
    }
    acc * factors.iter().product::<u64>()
}

fn atom(tokens: &[Token], pos: &mut usize, part: u8) -> u64 {
    match tokens.get(*pos) {
        Some(&Token::Num(n)) => {
            *pos += 1;
            n
        }
        Some(Token::Open) => {
            *pos += 1;
            let inner = eval(tokens, pos, part);
            assert!(tokens.get(*pos) == Some(&Token::Close), "unbalanced parentheses");
            *pos += 1;
            inner
        }
        token => panic!("expected a number or group, found {:?}", token),
    }
}

#[test]
fn flat_precedence() {
    assert_eq!(solve(1, "1 + 2 * 3 + 4 * 5 + 6"), "71");
    assert_eq!(solve(1, "2 * 3 + (4 * 5)"), "26");
    assert_eq!(solve(1, "5 + (8 * 3 + 9 + 3 * 4 * 3)"), "437");
    assert_eq!(solve(1, "5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))"), "12240");
    assert_eq!(solve(1, "((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2"), "13632");
}

#[test]
fn addition_first() {
    assert_eq!(solve(2, "1 + 2 * 3 + 4 * 5 + 6"), "231");
    assert_eq!(solve(2, "2 * 3 + (4 * 5)"), "46");
    assert_eq!(solve(2, "5 + (8 * 3 + 9 + 3 * 4 * 3)"), "1445");
    assert_eq!(solve(2, "5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))"), "669060");
    assert_eq!(solve(2, "((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2"), "23340");
}
