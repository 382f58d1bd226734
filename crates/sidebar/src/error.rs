use std::fmt;

#[derive(Debug)]
pub enum SidebarError {
    /// The platform reported a location that is not an absolute URL.
    InvalidLocation {
        location: String,
        source: url::ParseError,
    },
}

impl fmt::Display for SidebarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidebarError::InvalidLocation { location, source } => {
                write!(f, "invalid page location {location:?}: {source}")
            }
        }
    }
}

impl std::error::Error for SidebarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SidebarError::InvalidLocation { source, .. } => Some(source),
        }
    }
}
