use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

pub fn solve(part: u8, input: &str) -> String {
    let foods: Vec<(Vec<&str>, Vec<&str>)> = input.trim().lines().map(|line| {
        let (ingredients, allergens) = line.strip_suffix(')')
            .and_then(|line| line.split_once(" (contains "))
            .expect(line);
        (ingredients.split(' ').collect(), allergens.split(", ").collect())
    }).collect();

    // every allergen starts out suspected of hiding in the intersection of
    // the ingredient lists it appears with
    let mut suspects: FxHashMap<&str, FxHashSet<&str>> = FxHashMap::default();
    for (ingredients, allergens) in &foods {
        let listed: FxHashSet<&str> = ingredients.iter().copied().collect();
        for &allergen in allergens {
            suspects.entry(allergen)
                .and_modify(|set| set.retain(|i| listed.contains(i)))
                .or_insert_with(|| listed.clone());
        }
    }

    // elimination: an allergen pinned to one ingredient clears it elsewhere
    let mut known: FxHashMap<&str, &str> = FxHashMap::default();
    while known.len() < suspects.len() {
        let (&allergen, set) = suspects.iter()
            .filter(|(allergen, _)| !known.contains_key(*allergen))
            .find(|(_, set)| set.len() == 1)
            .expect("allergen constraints do not resolve");
        let ingredient = *set.iter().next().unwrap();
        known.insert(allergen, ingredient);
        for (other, set) in suspects.iter_mut() {
            if *other != allergen {
                set.remove(ingredient);
            }
        }
    }

    if part == 1 {
        let dangerous: FxHashSet<&str> = known.values().copied().collect();
        foods.iter()
            .flat_map(|(ingredients, _)| ingredients)
            .filter(|ingredient| !dangerous.contains(*ingredient))
            .count().to_string()
    } else {
        // canonical dangerous ingredient list: alphabetical by allergen
        known.iter()
            .sorted_by_key(|(allergen, _)| **allergen)
            .map(|(_, ingredient)| *ingredient)
            .join(",")
    }
}

#[test]
fn sample() {
    let input = "\
mxmxvkd kfcds sqjhc nhms (contains dairy, fish)
trh fvjkl sbzzf mxmxvkd (contains dairy)
sqjhc fvjkl (contains soy)
sqjhc mxmxvkd sbzzf (contains fish)";
    assert_eq!(solve(1, input), "5");
    assert_eq!(solve(2, input), "mxmxvkd,sqjhc,fvjkl");
}
