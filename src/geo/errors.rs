use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("No capacity: no active edge node in any region")]
    NoCapacity,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_capacity_display() {
        let error = RoutingError::NoCapacity;
        assert_eq!(format!("{}", error), "No capacity: no active edge node in any region");
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let error = RoutingError::InvalidCoordinate("latitude 123 out of range".to_string());
        assert_eq!(format!("{}", error), "Invalid coordinate: latitude 123 out of range");
    }
}
