fn main() {
    let numbers = [1, 2, 3, 4, 5];
    println!("{}", numbers[2]);

    for num in numbers {
        println!("{num}");
    }

    println!("Array Length: {}", numbers.len());
}
