//! Shape fixtures.
//!
//! `Circle` and `Square` implement [`Shape`] and declare it as a supertype,
//! so `is_a::<dyn Shape>()` matches both. `Tag` declares nothing beyond its
//! own type.

use vouch_core::instance_of;

/// A planar shape.
pub trait Shape {
    fn area(&self) -> f64;
}

/// A circle with the given radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

/// A square with the given side length.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// A named label that is not a shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag(pub String);

instance_of!(Circle: dyn Shape);
instance_of!(Square: dyn Shape);
instance_of!(Tag);
