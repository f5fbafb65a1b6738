use rustc_hash::FxHashSet;
use std::ops::RangeInclusive;

/// One generation of a sparse life-like automaton over integer coordinates
/// of dimension `D`. Neighbourhood is given by `offsets`; a live cell
/// survives iff its live-neighbour count falls in `survive`, a dead cell is
/// born iff its count equals `birth`. Counting is read-only against the
/// input set, and the scan covers the bounding box of the live cells
/// expanded by 1 on every axis, so an empty set evolves to an empty set.
pub fn evolve<const D: usize>(
    live: &FxHashSet<[i64; D]>,
    offsets: &[[i64; D]],
    birth: usize,
    survive: RangeInclusive<usize>,
) -> FxHashSet<[i64; D]> {
    let Some(bounds) = bounds(live) else { return FxHashSet::default() };

    let mut next = FxHashSet::default();
    let mut cell = bounds.map(|(min, _)| min - 1);
    loop {
        let count = offsets.iter().filter(|off| {
            let mut neighbour = cell;
            for axis in 0..D {
                neighbour[axis] += off[axis];
            }
            live.contains(&neighbour)
        }).count();

        let alive = if live.contains(&cell) {
            survive.contains(&count)
        } else {
            count == birth
        };
        if alive {
            next.insert(cell);
        }

        // odometer-style advance through the expanded box
        let mut axis = 0;
        loop {
            cell[axis] += 1;
            if cell[axis] <= bounds[axis].1 + 1 {
                break;
            }
            cell[axis] = bounds[axis].0 - 1;
            axis += 1;
            if axis == D {
                return next;
            }
        }
    }
}

/// Per-axis (min, max) over the live set, or None when it is empty.
fn bounds<const D: usize>(live: &FxHashSet<[i64; D]>) -> Option<[(i64, i64); D]> {
    let mut cells = live.iter();
    let first = cells.next()?;
    let mut bounds = first.map(|x| (x, x));
    for cell in cells {
        for axis in 0..D {
            bounds[axis].0 = bounds[axis].0.min(cell[axis]);
            bounds[axis].1 = bounds[axis].1.max(cell[axis]);
        }
    }
    Some(bounds)
}

/// All unit offsets of dimension `D` except the zero offset.
pub fn moore_offsets<const D: usize>() -> Vec<[i64; D]> {
    let mut offsets = vec![];
    for i in 0..3usize.pow(D as u32) {
        let mut off = [0i64; D];
        let mut rest = i;
        for axis in 0..D {
            off[axis] = (rest % 3) as i64 - 1;
            rest /= 3;
        }
        if off != [0; D] {
            offsets.push(off);
        }
    }
    offsets
}

#[test]
fn empty_set_stays_empty() {
    let live: FxHashSet<[i64; 3]> = FxHashSet::default();
    assert!(evolve(&live, &moore_offsets::<3>(), 3, 2..=3).is_empty());
}

#[test]
fn stable_block_is_a_fixed_point() {
    // 2x2 block under B3/S23 in two dimensions
    let live: FxHashSet<[i64; 2]> =
        [[0, 0], [0, 1], [1, 0], [1, 1]].into_iter().collect();
    let next = evolve(&live, &moore_offsets::<2>(), 3, 2..=3);
    assert_eq!(next, live);
}

#[test]
fn blinker_oscillates() {
    let row: FxHashSet<[i64; 2]> = [[0, -1], [0, 0], [0, 1]].into_iter().collect();
    let offsets = moore_offsets::<2>();
    let column = evolve(&row, &offsets, 3, 2..=3);
    assert_eq!(column, [[-1, 0], [0, 0], [1, 0]].into_iter().collect());
    assert_eq!(evolve(&column, &offsets, 3, 2..=3), row);
}

#[test]
fn count_is_scan_order_independent() {
    // same set built in two different insertion orders evolves identically
    let cells = [[0i64, 0], [2, 1], [1, 2], [0, 1], [2, 2]];
    let a: FxHashSet<[i64; 2]> = cells.into_iter().collect();
    let b: FxHashSet<[i64; 2]> = cells.into_iter().rev().collect();
    let offsets = moore_offsets::<2>();
    assert_eq!(evolve(&a, &offsets, 3, 2..=3), evolve(&b, &offsets, 3, 2..=3));
}
