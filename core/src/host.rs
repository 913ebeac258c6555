use std::fmt;

pub const CURSOR_GLOW_ID: &str = "cursorGlow";
pub const SCROLL_INDICATOR_ID: &str = "scrollIndicator";
pub const APP_ROOT_ID: &str = "app";

/// The host page does not match what the script expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    NoWindow,
    NoDocument,
    MissingElement { selector: String },
    WrongElementType { selector: String },
    ObserverUnavailable,
}

impl HostError {
    pub fn missing_id(id: &str) -> Self {
        HostError::MissingElement {
            selector: format!("#{id}"),
        }
    }

    /// Short machine-readable code for the boot overlay.
    pub fn code(&self) -> &'static str {
        match self {
            HostError::NoWindow => "no-window",
            HostError::NoDocument => "no-document",
            HostError::MissingElement { .. } => "missing-element",
            HostError::WrongElementType { .. } => "wrong-element-type",
            HostError::ObserverUnavailable => "observer-unavailable",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            HostError::NoWindow | HostError::NoDocument => "run the page in a browser",
            HostError::MissingElement { .. } | HostError::WrongElementType { .. } => {
                "check index.html against the effects markup contract"
            }
            HostError::ObserverUnavailable => "IntersectionObserver is required for reveal effects",
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoWindow => write!(f, "no window available"),
            HostError::NoDocument => write!(f, "no document available"),
            HostError::MissingElement { selector } => {
                write!(f, "host page is missing required element {selector}")
            }
            HostError::WrongElementType { selector } => {
                write!(f, "element {selector} is not an html element")
            }
            HostError::ObserverUnavailable => write!(f, "could not create intersection observer"),
        }
    }
}

impl std::error::Error for HostError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_formats_selector() {
        let err = HostError::missing_id(CURSOR_GLOW_ID);
        assert_eq!(
            err,
            HostError::MissingElement {
                selector: "#cursorGlow".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "host page is missing required element #cursorGlow"
        );
        assert_eq!(err.code(), "missing-element");
    }
}
