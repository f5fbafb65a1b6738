mod days;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    let (day_arg, part_arg, fname) = match &args[..] {
        [_, day_arg, part_arg] => (day_arg, part_arg, format!("day{}.in", day_arg)),
        [_, day_arg, part_arg, fname] => (day_arg, part_arg, fname.clone()),
        _ => {
            println!("two or three arguments expected - day number, 1/2 for part, and optionally an input path");
            std::process::exit(1);
        }
    };

    assert!(part_arg == "1" || part_arg == "2");
    let day: usize = day_arg.parse()?;
    let input = std::fs::read_to_string(&fname)?;
    let time = std::time::Instant::now();
    println!("P{}: {}", part_arg, days::DAYS[day - 1](part_arg.parse()?, &input));
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
