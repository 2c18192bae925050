// Factory Method Pattern - let a factory decide which vehicle to create.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

pub trait Vehicle {
    fn drive(&self) -> String;
}

pub struct Car;

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Driving a car.".to_string()
    }
}

pub struct Bike;

impl Vehicle for Bike {
    fn drive(&self) -> String {
        "Riding a bike.".to_string()
    }
}

pub trait VehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;
}

pub struct CarFactory;

impl VehicleFactory for CarFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car)
    }
}

pub struct BikeFactory;

impl VehicleFactory for BikeFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Bike)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Bike,
}

impl VehicleKind {
    pub fn factory(self) -> Box<dyn VehicleFactory> {
        match self {
            VehicleKind::Car => Box::new(CarFactory),
            VehicleKind::Bike => Box::new(BikeFactory),
        }
    }
}

impl FromStr for VehicleKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "bike" => Ok(VehicleKind::Bike),
            _ => Err(PatternError::UnknownVehicle(s.to_string())),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VehicleKind::Car => write!(f, "car"),
            VehicleKind::Bike => write!(f, "bike"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_create_distinct_vehicles() {
        let factories: Vec<Box<dyn VehicleFactory>> =
            vec![Box::new(CarFactory), Box::new(BikeFactory)];
        let rides: Vec<String> = factories
            .iter()
            .map(|factory| factory.create_vehicle().drive())
            .collect();
        assert_eq!(rides, vec!["Driving a car.", "Riding a bike."]);
    }

    #[test]
    fn test_kind_parse_and_factory() {
        let kind: VehicleKind = " Bike ".parse().unwrap();
        assert_eq!(kind, VehicleKind::Bike);
        assert_eq!(kind.factory().create_vehicle().drive(), "Riding a bike.");
        assert_eq!(kind.to_string(), "bike");
    }

    #[test]
    fn test_unknown_kind() {
        assert!(matches!(
            "boat".parse::<VehicleKind>(),
            Err(PatternError::UnknownVehicle(name)) if name == "boat"
        ));
    }
}
