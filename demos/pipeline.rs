//! Walk through cursors, algorithms and views on a small data set.
//!
//! Run with `cargo run --example pipeline`.

use tola_ranges::prelude::*;
use tola_ranges::view;

#[derive(Debug, Clone, Copy)]
struct Reading {
    sensor: u8,
    value: i32,
}

fn main() {
    let readings = [
        Reading {
            sensor: 1,
            value: 12,
        },
        Reading {
            sensor: 2,
            value: -3,
        },
        Reading {
            sensor: 1,
            value: 40,
        },
        Reading {
            sensor: 3,
            value: 7,
        },
        Reading {
            sensor: 1,
            value: -1,
        },
    ];

    // Algorithms with projections
    let from_one = count_in(&readings[..], &1, |r: &Reading| r.sensor);
    let all_small = all_of_in(&readings[..], |v: i32| v.abs() < 100, |r: &Reading| r.value);
    println!("sensor 1 readings: {from_one}, all within range: {all_small}");

    // Lazy pipeline: positive values of sensor 1, scaled, newest first
    let scaled = (&readings[..])
        .filter(|r: &Reading| r.sensor == 1 && r.value > 0)
        .transform(|r: &Reading| r.value * 10)
        .reversed()
        .to_vec();
    println!("scaled: {scaled:?}");

    // In-place mutation through SliceMut
    let mut values: Vec<i32> = readings.iter().map(|r| r.value).collect();
    reverse_in(SliceMut::new(&mut values));
    fill_n(SliceMut::new(&mut values).start(), 1, &0);
    println!("reversed, first cleared: {values:?}");

    // Owning views hand back `Dangling` instead of a cursor
    let found: Dangling = find_in(view::repeat_n(5, 3), &5, identity);
    println!("cursor into a temporary: {found:?}");

    // Capability queries
    println!(
        "slice cursor contiguous: {}, `*const str` contiguous: {}",
        satisfies!(SliceCursor<'static, i32>: ContiguousCursor),
        satisfies!(*const str: ContiguousCursor),
    );
}
