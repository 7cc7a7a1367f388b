//! Sorts a few sample data sets, printing them before and after.
//!
//! Usage: `sort_demo [ALGORITHM]`. Without an argument every data set is sorted with a different
//! algorithm. With one, e.g. `sort_demo heapsort`, all of them use that algorithm.

use std::env;
use std::fmt;
use std::process;

use classic_sort::Algorithm;

#[derive(Clone, Debug)]
struct Person {
    name: &'static str,
    age: u32,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

fn join<T: fmt::Display>(v: &[T]) -> String {
    let items = v.iter().map(|val| val.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

fn main() {
    let forced = match env::args().nth(1).map(|arg| arg.parse::<Algorithm>()) {
        None => None,
        Some(Ok(algorithm)) => Some(algorithm),
        Some(Err(err)) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let pick = |default: Algorithm| forced.unwrap_or(default);

    let mut numbers = vec![5, 2, 8, 1, 9, 3];
    println!("Original numbers: {}", join(&numbers));
    let algorithm = pick(Algorithm::Quicksort);
    algorithm.sort_by_less(&mut numbers, |a, b| a < b);
    println!("Sorted numbers ({algorithm}): {}", join(&numbers));

    let mut words = vec!["banana", "apple", "cherry", "date"];
    println!("\nOriginal words: {}", join(&words));
    let algorithm = pick(Algorithm::MergeSort);
    algorithm.sort_by_less(&mut words, |a, b| a < b);
    println!("Sorted words ({algorithm}): {}", join(&words));

    let mut people = vec![
        Person {
            name: "Alice",
            age: 30,
        },
        Person { name: "Bob", age: 25 },
        Person {
            name: "Charlie",
            age: 35,
        },
        Person {
            name: "David",
            age: 28,
        },
    ];
    println!("\nOriginal people: {}", join(&people));

    // The predicate decides which part of the record is the key.
    let algorithm = pick(Algorithm::Heapsort);
    algorithm.sort_by_less(&mut people, |a, b| a.age < b.age);
    println!("Sorted people by age ({algorithm}): {}", join(&people));

    let algorithm = pick(Algorithm::InsertionSort);
    algorithm.sort_by_less(&mut people, |a, b| a.name < b.name);
    println!("Sorted people by name ({algorithm}): {}", join(&people));

    let mut decimals = vec![3.3, 1.2, 2.5, 1.75];
    println!("\nOriginal decimals: {}", join(&decimals));
    // f64 is not Ord, a plain `<` is a strict weak ordering as long as there is no NaN.
    let algorithm = pick(Algorithm::BubbleSort);
    algorithm.sort_by_less(&mut decimals, |a, b| a < b);
    println!("Sorted decimals ({algorithm}): {}", join(&decimals));
    println!(
        "Decimals sorted: {}",
        classic_sort::is_sorted(&decimals, |a, b| a < b)
    );
}
