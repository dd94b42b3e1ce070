fn main() {
    let mut names = vec!["Alice", "Bob"];
    names.push("Charlie");
    if let Some(index) = names.iter().position(|&name| name == "Bob") {
        names.remove(index);
    }

    for name in &names {
        println!("{name}");
    }

    if names.contains(&"Alice") {
        println!("Alice is in the list.");
    }
}
