// Location model: a named point of the road network

use crate::models::LocationId;
use geo::{Coord, Point};

/// A named stop with its internal index and display coordinate
///
/// The coordinate only drives rendering; travel cost always comes from the
/// distance graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Index into the registry and the distance matrix
    pub id: LocationId,

    /// Unique, case-sensitive display name
    pub name: String,

    /// Position on the map
    pub position: Coord<f64>,
}

impl Location {
    /// Creates a new location
    pub fn new<S: Into<String>>(id: LocationId, name: S, position: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::from(self.position)
    }
}
