use rustc_hash::FxHashSet;
use std::collections::VecDeque;

type Deck = VecDeque<u8>;

enum Winner {
    One(Deck),
    Two(Deck),
}

pub fn solve(part: u8, input: &str) -> String {
    let (one, two) = input.trim().split_once("\n\n").expect("missing blank line");
    let deck = |block: &str, header: &str| -> Deck {
        let mut lines = block.lines();
        assert!(lines.next() == Some(header), "expected {} header", header);
        lines.map(|line| line.parse().expect(line)).collect()
    };
    let one = deck(one, "Player 1:");
    let two = deck(two, "Player 2:");

    let winner = if part == 1 { combat(one, two) } else { recursive_combat(one, two) };
    score(match winner {
        Winner::One(deck) | Winner::Two(deck) => deck,
    }).to_string()
}

fn score(deck: Deck) -> u64 {
    deck.iter().rev().enumerate()
        .map(|(at, &card)| (at as u64 + 1) * card as u64)
        .sum()
}

fn combat(mut one: Deck, mut two: Deck) -> Winner {
    while !one.is_empty() && !two.is_empty() {
        let (a, b) = (one.pop_front().unwrap(), two.pop_front().unwrap());
        if a > b {
            one.extend([a, b]);
        } else {
            two.extend([b, a]);
        }
    }
    if two.is_empty() { Winner::One(one) } else { Winner::Two(two) }
}

fn recursive_combat(mut one: Deck, mut two: Deck) -> Winner {
    // deck pairs already seen in THIS game; a repeat hands the game to player 1
    let mut history: FxHashSet<(Deck, Deck)> = FxHashSet::default();

    while !one.is_empty() && !two.is_empty() {
        if !history.insert((one.clone(), two.clone())) {
            return Winner::One(one);
        }
        let (a, b) = (one.pop_front().unwrap(), two.pop_front().unwrap());
        let round_to_one = if one.len() >= a as usize && two.len() >= b as usize {
            let sub_one = one.iter().take(a as usize).copied().collect();
            let sub_two = two.iter().take(b as usize).copied().collect();
            matches!(recursive_combat(sub_one, sub_two), Winner::One(_))
        } else {
            a > b
        };
        if round_to_one {
            one.extend([a, b]);
        } else {
            two.extend([b, a]);
        }
    }
    if two.is_empty() { Winner::One(one) } else { Winner::Two(two) }
}

#[cfg(test)]
const SAMPLE: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10";

#[test]
fn combat_score() {
    assert_eq!(solve(1, SAMPLE), "306");
}

#[test]
fn recursive_combat_score() {
    assert_eq!(solve(2, SAMPLE), "291");
}

#[test]
fn recursion_loop_goes_to_player_one() {
    // without the history rule these two decks cycle forever
    let input = "Player 1:\n43\n19\n\nPlayer 2:\n2\n29\n14";
    assert!(matches!(solve(2, input).parse::<u64>(), Ok(_)));
}
