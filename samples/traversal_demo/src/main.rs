//! Tour of `MultiOrderVec`: every traversal order over integer, string, and
//! float payloads, plus the failure paths a caller is expected to handle.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

use multiorder::prelude::*;

/// `f64` under its total order, so floats satisfy the collection's bounds.
#[derive(Debug, Clone, Copy)]
struct Real(f64);

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Real {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

fn print_order<T: fmt::Display>(label: &str, view: &OrderView<T>) -> Result<(), CursorError> {
    print!("{label}: ");
    for element in view {
        print!("{} ", element?);
    }
    println!();
    Ok(())
}

fn print_all_orders<T: fmt::Display + Ord>(
    prefix: &str,
    collection: &MultiOrderVec<T>,
) -> Result<(), CursorError> {
    print_order(&format!("{prefix} - Ascending"), &collection.ascending())?;
    print_order(&format!("{prefix} - Descending"), &collection.descending())?;
    print_order(&format!("{prefix} - SideCross"), &collection.side_cross())?;
    print_order(&format!("{prefix} - Reverse"), &collection.reverse())?;
    print_order(&format!("{prefix} - Regular"), &collection.regular())?;
    print_order(&format!("{prefix} - MiddleOut"), &collection.middle_out())?;
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let empty: MultiOrderVec<i32> = MultiOrderVec::new();
    println!("{empty}");
    println!();

    let mut integers = MultiOrderVec::new();
    for value in [7, 15, 6, 1, 2] {
        integers.add(value);
    }

    println!("Trying to remove non-existent element 8:");
    if let Err(error) = integers.remove(&8) {
        println!("Recovered from: {error}");
    }

    println!("Data in the collection: {integers}");
    println!();

    print_all_orders("Integers", &integers)?;

    let strings: MultiOrderVec<String> = ["banana", "apple", "cherry", "date"]
        .into_iter()
        .map(String::from)
        .collect();
    print_order("Strings - Ascending", &strings.ascending())?;
    print_order("Strings - Descending", &strings.descending())?;
    println!();

    let floats: MultiOrderVec<Real> = [3.14, 3.11, 2.718, 0.577]
        .into_iter()
        .map(Real)
        .collect();
    print_all_orders("Floats", &floats)?;

    // A cursor outlived by a mutation reports instead of misbehaving.
    let view = integers.regular();
    let cursor = view.begin();
    integers.add(42);
    match cursor.read() {
        Err(error) => println!("Stale cursor said: {error}"),
        Ok(value) => println!("Unexpected read: {value}"),
    }

    Ok(())
}
