use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Probe timeout after {0}ms")]
    Timeout(u64),

    #[error("Probe I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let error = ProbeError::Timeout(2000);
        assert_eq!(format!("{}", error), "Probe timeout after 2000ms");
    }

    #[test]
    fn test_io_display() {
        let error = ProbeError::Io(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"));
        assert!(format!("{}", error).contains("refused"));
    }
}
