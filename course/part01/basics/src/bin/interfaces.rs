use basics::vehicle::{Car, Vehicle};

fn main() {
    let vehicle: &dyn Vehicle = &Car::new("Toyota", 2022);
    println!("{}", vehicle.drive());
}
