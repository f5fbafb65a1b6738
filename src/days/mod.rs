pub mod life;

mod d01;
mod d02;
mod d03;
mod d04;
mod d05;
mod d06;
mod d07;
mod d08;
mod d09;
mod d10;
mod d11;
mod d12;
mod d13;
mod d14;
mod d15;
mod d16;
mod d17;
mod d18;
mod d19;
mod d20;
mod d21;
mod d22;
mod d23;
mod d24;
mod d25;

pub const DAYS: [fn(u8, &str) -> String; 25] = [
    d01::solve, d02::solve, d03::solve, d04::solve, d05::solve,
    d06::solve, d07::solve, d08::solve, d09::solve, d10::solve,
    d11::solve, d12::solve, d13::solve, d14::solve, d15::solve,
    d16::solve, d17::solve, d18::solve, d19::solve, d20::solve,
    d21::solve, d22::solve, d23::solve, d24::solve, d25::solve,
];
