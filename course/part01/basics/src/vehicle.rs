use std::fmt::{Display, Formatter};

pub trait Vehicle {
    fn drive(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub brand: String,
    pub year: u16,
}

impl Car {
    pub fn new(brand: impl Into<String>, year: u16) -> Self {
        Self {
            brand: brand.into(),
            year,
        }
    }
}

impl Display for Car {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Car Brand: {}, Year: {}", self.brand, self.year)
    }
}

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Car is driving".to_string()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Toyota", 2022 => "Car Brand: Toyota, Year: 2022"; "toyota")]
    #[test_case("", 0 => "Car Brand: , Year: 0"; "empty brand")]
    fn display(brand: &str, year: u16) -> String {
        Car::new(brand, year).to_string()
    }

    #[test]
    fn drives_through_trait_object() {
        let vehicle: Box<dyn Vehicle> = Box::new(Car::new("Toyota", 2022));
        assert_eq!("Car is driving", vehicle.drive());
    }
}
