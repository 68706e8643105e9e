//! Vehicle and car descriptions.
//!
//! A `Car` is a `Vehicle` plus a model label. It embeds the vehicle rather than
//! extending it, and reuses the vehicle's info line when describing itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Info line, e.g. `Make: Toyota, Year:2020`.
    pub fn info(&self) -> String {
        format!("Make: {}, Year:{}", self.make, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn info(&self) -> String {
        self.vehicle.info()
    }

    /// Model line, e.g. `Model: Corolla`.
    pub fn model_line(&self) -> String {
        format!("Model: {}", self.model)
    }

    /// Info line followed by the model line.
    pub fn describe(&self) -> String {
        format!("{}\n{}", self.info(), self.model_line())
    }
}
