//! Demonstration driver: exercises every matrix operation and prints the
//! results. Exits non-zero if any arithmetic error propagates to the top.

use std::collections::BTreeSet;
use std::process::ExitCode;

use densemat::{add, matmul, sub, Matrix, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn print<T: std::fmt::Display>(title: &str, mat: &Matrix<T>) {
    println!("--------------------");
    println!("{title} {mat}");
}

fn tour() -> Result<()> {
    // Construction: broadcast fill, zero-pad, truncation, source-defined
    // iteration order.
    let fill = Matrix::filled(3, 3, 0.5f32);
    print("fill", &fill);

    let padded = Matrix::from_iter(5, 2, vec![-4.1f32, -3.2, -2.3, -1.4]);
    print("padded", &padded);

    let truncated = Matrix::from_iter(1, 4, vec![1.1f64, 1.2, 1.3, 1.4, 1.5, 1.6]);
    print("truncated", &truncated);

    let counted = Matrix::from_iter(2, 4, 1u32..=9);
    print("counted", &counted);

    // A set feeds the buffer in its own (sorted) iteration order.
    let sorted: BTreeSet<i64> = [8, 3, 0, 4, 5, -2].into_iter().collect();
    let from_set = Matrix::from_iter(7, 1, sorted);
    print("from_set", &from_set);

    // Row/column access, by view and by copy.
    let second_row = counted.row(1)?;
    println!("second row, strided: {:?}", second_row.to_vec());
    println!("first row, copied:   {:?}", counted.row_to_vec(0)?);
    println!("first column:        {:?}", counted.col_to_vec(0)?);
    println!("cell (1, 0):         {}", counted.get(1, 0));

    // Writing through a mutable row view mutates the source buffer.
    let mut scratch = counted.clone();
    let mut lane = scratch.row_mut(0)?;
    lane.set(3, 42);
    println!("patched row:         {:?}", lane.as_view().to_vec());

    // The setter family: scalar broadcast and single-invocation producers.
    let mut target = Matrix::from_iter(4, 2, [7, 5, 2, 2, 0, 3, 1, 5]);
    target.set_row(2, -1)?;
    target.set_row_with(1, || -3 + 2)?;
    target.set_col(0, 3)?;
    target.set_col_with(1, || 0)?;
    target.set(1, 0, -5);
    target.set_with(3, 1, || -2 - -4);
    print("after setters", &target);

    // Generation: one invocation per cell, row-major.
    let mut rng = StdRng::seed_from_u64(7);
    let random = Matrix::from_fn(4, 5, || rng.gen_range(0.0f64..1.0));
    print("random", &random);

    let mut next = 0i64;
    let mut counter = || {
        let value = next;
        next += 1;
        value
    };
    let left = Matrix::from_fn(3, 2, &mut counter);
    print("left", &left);
    let right = Matrix::from_fn(2, 4, &mut counter);
    print("right", &right);

    // Integrity is checkable, not enforced: drift the column count and watch
    // the check flip.
    let mut probe = left.clone();
    println!("consistent before drift: {}", probe.is_consistent());
    probe.set_col_count(probe.cols() + 1);
    println!("consistent after drift:  {}", probe.is_consistent());

    // Elementwise transformation leaves the source untouched.
    let bumped = left.map(|x| x + 1);
    print("bumped", &bumped);

    // Arithmetic.
    let ones = Matrix::filled(3, 6, 1);
    let twos = Matrix::filled(3, 6, 2);
    print("sum", &add(&ones, &twos)?);
    print("difference", &sub(&ones, &twos)?);

    let product = matmul(&left, &right)?;
    print("product", &product);

    Ok(())
}

fn main() -> ExitCode {
    match tour() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
