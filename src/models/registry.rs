// Location registry: bidirectional name <-> index lookup

use crate::error::{Result, RouteError};
use crate::models::{Location, LocationId};
use geo::Coord;
use std::collections::HashMap;

/// Fixed set of named locations
///
/// Indices are assigned in registration order. Name-to-index goes through a
/// hash map, index-to-name is a direct vector lookup.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    index: HashMap<String, LocationId>,
}

impl LocationRegistry {
    /// Builds a registry from `(name, position)` pairs
    pub fn new<S, I>(entries: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Coord<f64>)>,
    {
        let mut locations = Vec::new();
        let mut index = HashMap::new();

        for (id, (name, position)) in entries.into_iter().enumerate() {
            let name = name.into();
            if index.insert(name.clone(), id).is_some() {
                return Err(RouteError::DuplicateLocation(name));
            }
            locations.push(Location::new(id, name, position));
        }

        if locations.is_empty() {
            return Err(RouteError::MalformedGraph(
                "network has no locations".to_string(),
            ));
        }

        Ok(Self { locations, index })
    }

    /// Resolves a display name to its index
    pub fn resolve_index(&self, name: &str) -> Result<LocationId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::UnknownLocation(name.to_string()))
    }

    /// Resolves every name, failing on the first unknown one
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<LocationId>> {
        names
            .iter()
            .map(|name| self.resolve_index(name.as_ref()))
            .collect()
    }

    /// Inverse of [`resolve_index`](Self::resolve_index)
    pub fn name_of(&self, id: LocationId) -> Result<&str> {
        self.location(id).map(|location| location.name.as_str())
    }

    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.locations.get(id).ok_or(RouteError::InvalidIndex {
            index: id,
            len: self.locations.len(),
        })
    }

    /// Display coordinate consumed by renderers
    pub fn position(&self, id: LocationId) -> Result<Coord<f64>> {
        self.location(id).map(|location| location.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.locations.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_registry() -> LocationRegistry {
        LocationRegistry::new(vec![
            ("Depot", Coord { x: 0.0, y: 0.0 }),
            ("Market", Coord { x: 10.0, y: 5.0 }),
            ("Harbour", Coord { x: 20.0, y: 0.0 }),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_index() {
        let registry = create_test_registry();
        assert_eq!(registry.resolve_index("Depot").unwrap(), 0);
        assert_eq!(registry.resolve_index("Harbour").unwrap(), 2);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = create_test_registry();
        assert!(matches!(
            registry.resolve_index("depot"),
            Err(RouteError::UnknownLocation(name)) if name == "depot"
        ));
    }

    #[test]
    fn test_name_of_inverts_resolve() {
        let registry = create_test_registry();
        for name in registry.names() {
            let id = registry.resolve_index(name).unwrap();
            assert_eq!(registry.name_of(id).unwrap(), name);
        }
    }

    #[test]
    fn test_invalid_index() {
        let registry = create_test_registry();
        assert!(matches!(
            registry.name_of(3),
            Err(RouteError::InvalidIndex { index: 3, len: 3 })
        ));
        assert!(registry.position(42).is_err());
    }

    #[test]
    fn test_position() {
        let registry = create_test_registry();
        assert_eq!(registry.position(1).unwrap(), Coord { x: 10.0, y: 5.0 });
    }

    #[test]
    fn test_resolve_all_stops_on_unknown() {
        let registry = create_test_registry();
        assert_eq!(
            registry.resolve_all(&["Market", "Depot"]).unwrap(),
            vec![1, 0]
        );
        assert!(matches!(
            registry.resolve_all(&["Market", "Nowhere", "Depot"]),
            Err(RouteError::UnknownLocation(name)) if name == "Nowhere"
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = LocationRegistry::new(vec![
            ("Depot", Coord { x: 0.0, y: 0.0 }),
            ("Depot", Coord { x: 1.0, y: 1.0 }),
        ]);
        assert!(matches!(result, Err(RouteError::DuplicateLocation(name)) if name == "Depot"));
    }

    #[test]
    fn test_empty_registry_rejected() {
        let result = LocationRegistry::new(Vec::<(String, Coord<f64>)>::new());
        assert!(matches!(result, Err(RouteError::MalformedGraph(_))));
    }
}
