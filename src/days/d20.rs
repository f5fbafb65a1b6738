use rustc_hash::FxHashMap;

type Grid = Vec<Vec<bool>>;

struct Tile {
    id: u64,
    pixels: Grid,
}

const MONSTER: [(usize, usize); 15] = [
    (0, 18),
    (1, 0), (1, 5), (1, 6), (1, 11), (1, 12), (1, 17), (1, 18), (1, 19),
    (2, 1), (2, 4), (2, 7), (2, 10), (2, 13), (2, 16),
];

pub fn solve(part: u8, input: &str) -> String {
    let tiles = parse(input);
    let placed = assemble(&tiles);
    let size = placed.len();

    if part == 1 {
        [(0, 0), (0, size - 1), (size - 1, 0), (size - 1, size - 1)].iter()
            .map(|&(r, c)| placed[r][c].id)
            .product::<u64>().to_string()
    } else {
        let image = stitch(&placed);
        let (monsters, pixels) = count_monsters(&image);
        (pixels - monsters * MONSTER.len()).to_string()
    }
}

fn parse(input: &str) -> Vec<Tile> {
    input.trim().split("\n\n").map(|block| {
        let mut lines = block.lines();
        let header = lines.next().expect("empty tile block");
        let id = header.strip_prefix("Tile ").and_then(|h| h.strip_suffix(':'))
            .expect(header).parse().expect(header);
        let pixels: Grid = lines
            .map(|line| line.bytes().map(|b| b == b'#').collect())
            .collect();
        assert!(pixels.len() == 10 && pixels.iter().all(|row| row.len() == 10),
            "tile {} is not 10x10", id);
        Tile { id, pixels }
    }).collect()
}

fn rotated(grid: &Grid) -> Grid {
    let side = grid.len();
    (0..side).map(|r| (0..side).map(|c| grid[c][side - 1 - r]).collect()).collect()
}

fn flipped(grid: &Grid) -> Grid {
    grid.iter().map(|row| row.iter().rev().copied().collect()).collect()
}

fn orientations(grid: &Grid) -> Vec<Grid> {
    let mut all = vec![grid.clone()];
    for _ in 0..3 {
        all.push(rotated(all.last().unwrap()));
    }
    for i in 0..4 {
        all.push(flipped(&all[i]));
    }
    all
}

fn top(grid: &Grid) -> Vec<bool> { grid[0].clone() }
fn bottom(grid: &Grid) -> Vec<bool> { grid[grid.len() - 1].clone() }
fn left(grid: &Grid) -> Vec<bool> { grid.iter().map(|row| row[0]).collect() }
fn right(grid: &Grid) -> Vec<bool> { grid.iter().map(|row| row[row.len() - 1]).collect() }

// an edge and its mirror share one canonical form for the match census
fn canonical(edge: Vec<bool>) -> Vec<bool> {
    let mut reversed = edge.clone();
    reversed.reverse();
    edge.min(reversed)
}

fn assemble(tiles: &[Tile]) -> Vec<Vec<Tile>> {
    let size = (1..).find(|n| n * n >= tiles.len()).unwrap();
    assert!(size * size == tiles.len(), "{} tiles do not form a square", tiles.len());

    // census of canonical edges; border edges occur exactly once
    let mut census: FxHashMap<Vec<bool>, usize> = FxHashMap::default();
    for tile in tiles {
        for edge in [top, bottom, left, right] {
            *census.entry(canonical(edge(&tile.pixels))).or_default() += 1;
        }
    }
    let unmatched = |edge: Vec<bool>| census[&canonical(edge)] == 1;

    let mut remaining: FxHashMap<u64, &Tile> = tiles.iter().map(|t| (t.id, t)).collect();
    let mut placed: Vec<Vec<Tile>> = vec![];

    // seed with any corner, oriented so its unmatched edges face up and left
    let corner_id = tiles.iter().find(|tile| {
        [top, bottom, left, right].iter()
            .filter(|edge| unmatched(edge(&tile.pixels)))
            .count() == 2
    }).expect("no corner tile found").id;
    let corner = remaining.remove(&corner_id).unwrap();
    let seed = orientations(&corner.pixels).into_iter()
        .find(|grid| unmatched(top(grid)) && unmatched(left(grid)))
        .expect("corner tile cannot face the top-left");
    placed.push(vec![Tile { id: corner.id, pixels: seed }]);

    for at in 1..tiles.len() {
        let (row, col) = (at / size, at % size);
        // match on the left neighbour within a row, on the upper one otherwise
        let wanted: Vec<bool> = if col > 0 {
            right(&placed[row][col - 1].pixels)
        } else {
            bottom(&placed[row - 1][0].pixels)
        };
        let (id, pixels) = remaining.values().find_map(|tile| {
            orientations(&tile.pixels).into_iter()
                .find(|grid| {
                    let edge = if col > 0 { left(grid) } else { top(grid) };
                    edge == wanted
                })
                .map(|grid| (tile.id, grid))
        }).expect("no tile fits the next position");
        remaining.remove(&id);
        if col == 0 {
            placed.push(vec![]);
        }
        placed[row].push(Tile { id, pixels });
    }
    placed
}

// concatenate the tile interiors, borders stripped
fn stitch(placed: &[Vec<Tile>]) -> Grid {
    let mut image = vec![];
    for tile_row in placed {
        for r in 1..9 {
            image.push(tile_row.iter()
                .flat_map(|tile| tile.pixels[r][1..9].iter().copied())
                .collect());
        }
    }
    image
}

fn count_monsters(image: &Grid) -> (usize, usize) {
    let pixels = image.iter().flatten().filter(|&&p| p).count();
    for grid in orientations(image) {
        let side = grid.len();
        let monsters = (0..side.saturating_sub(2)).map(|r| {
            (0..side.saturating_sub(19)).filter(|&c| {
                MONSTER.iter().all(|&(dr, dc)| grid[r + dr][c + dc])
            }).count()
        }).sum::<usize>();
        if monsters > 0 {
            return (monsters, pixels);
        }
    }
    panic!("no sea monsters in any orientation");
}

#[cfg(test)]
const SAMPLE: &str = "\
Tile 2311:
..##.#..#.
##..#.....
#...##..#.
####.#...#
##.##.###.
##...#.###
.#.#.#..##
..#....#..
###...#.#.
..###..###

Tile 1951:
#.##...##.
#.####...#
.....#..##
#...######
.##.#....#
.###.#####
###.##.##.
.###....#.
..#.#..#.#
#...##.#..

Tile 1171:
####...##.
#..##.#..#
##.#..#.#.
.###.####.
..###.####
.##....##.
.#...####.
#.##.####.
####..#...
.....##...

Tile 1427:
###.##.#..
.#..#.##..
.#.##.#..#
#.#.#.##.#
....#...##
...##..##.
...#.#####
.#.####.#.
..#..###.#
..##.#..#.

Tile 1489:
##.#.#....
..##...#..
.##..##...
..#...#...
#####...#.
#..#.#.#.#
...#.#.#..
##.#...##.
..##.##.##
###.##.#..

Tile 2473:
#....####.
#..#.##...
#.##..#...
######.#.#
.#...#.#.#
.#########
.###.#..#.
########.#
##...##.#.
..###.#.#.

Tile 2971:
..#.#....#
#...###...
#.#.###...
##.##..#..
.#####..##
.#..####.#
#..#.#..#.
..####.###
..#.#.###.
...#.#.#.#

Tile 2729:
...#.#.#.#
####.#....
..#.#.....
....#..#.#
.##..##.#.
.#.####...
####.#.#..
##.####...
##..#.##..
#.##...##.

Tile 3079:
#.#.#####.
.#..######
..#.......
######....
####.#..#.
.#...#.##.
#.#####.##
..#.###...
..#.......
..#.###...";

#[test]
fn corner_product() {
    assert_eq!(solve(1, SAMPLE), "20899048083289");
}

#[test]
fn water_roughness() {
    assert_eq!(solve(2, SAMPLE), "273");
}
