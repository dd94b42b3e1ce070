use std::collections::HashSet;

fn main() {
    let mut numbers = HashSet::from([1, 2, 3, 4]);
    numbers.insert(5);
    let added = numbers.insert(2);
    println!("inserting 2 again added it: {added}");

    numbers.remove(&3);

    // iteration order is unspecified
    for num in &numbers {
        println!("{num}");
    }
}
