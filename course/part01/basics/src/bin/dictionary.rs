use std::collections::BTreeMap;

fn main() {
    let students = BTreeMap::from([(1, "Alice"), (2, "Bob"), (3, "Charlie")]);

    if let Some(name) = students.get(&1) {
        println!("{name}");
    }

    for (id, name) in &students {
        println!("ID: {id}, Name: {name}");
    }
}
