use basics::vehicle::Car;

fn main() {
    let mut my_car = Car::new("", 0);
    my_car.brand = "Toyota".to_string();
    my_car.year = 2022;
    println!("{my_car}");
}
