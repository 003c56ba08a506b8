//! SelectScreenUseCase: turns a user's screen choice into a [`TargetRegion`].
//!
//! Users name a screen as `primary`, a zero-based index (`1`), or an OS device
//! name (`\\.\DISPLAY2`).  [`select_target`] resolves that choice against the
//! monitors reported by a [`ScreenEnumerator`].

use std::fmt;
use std::str::FromStr;

use fence_core::TargetRegion;
use thiserror::Error;

/// Error type for screen enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("platform error: {0}")]
    Platform(String),
}

/// Trait for enumerating the displays attached to this machine.
pub trait ScreenEnumerator: Send + Sync {
    /// Returns every attached display with its bounds.
    ///
    /// The primary display MUST be first.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError`] if monitor information cannot be retrieved.
    fn enumerate_screens(&self) -> Result<Vec<TargetRegion>, ScreenError>;
}

/// Which screen to confine the pointer to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenSelector {
    /// The primary display.
    #[default]
    Primary,
    /// The n-th display in enumeration order (primary is 0).
    Index(usize),
    /// The display with this device name.
    Device(String),
}

impl FromStr for ScreenSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("primary") || s.is_empty() {
            return Ok(ScreenSelector::Primary);
        }
        match s.parse::<usize>() {
            Ok(index) => Ok(ScreenSelector::Index(index)),
            Err(_) => Ok(ScreenSelector::Device(s.to_string())),
        }
    }
}

impl fmt::Display for ScreenSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenSelector::Primary => f.write_str("primary"),
            ScreenSelector::Index(index) => write!(f, "{index}"),
            ScreenSelector::Device(name) => f.write_str(name),
        }
    }
}

/// Error type for screen selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("no screens are attached")]
    NoScreens,

    #[error("screen index {index} is out of range ({count} screens attached)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("no screen named {0:?}")]
    UnknownDevice(String),

    #[error("failed to enumerate screens: {0}")]
    Enumeration(#[from] ScreenError),
}

/// Resolves `selector` against the screens reported by `enumerator`.
///
/// `Primary` falls back to the first screen when none is flagged primary.
/// Device names compare case-insensitively.
///
/// # Errors
///
/// Returns a [`SelectError`] if enumeration fails, no screens exist, or the
/// selector matches nothing.
pub fn select_target(
    enumerator: &dyn ScreenEnumerator,
    selector: &ScreenSelector,
) -> Result<TargetRegion, SelectError> {
    let mut screens = enumerator.enumerate_screens()?;
    if screens.is_empty() {
        return Err(SelectError::NoScreens);
    }

    let position = match selector {
        ScreenSelector::Primary => screens.iter().position(|s| s.is_primary).unwrap_or(0),
        ScreenSelector::Index(index) => {
            if *index >= screens.len() {
                return Err(SelectError::IndexOutOfRange {
                    index: *index,
                    count: screens.len(),
                });
            }
            *index
        }
        ScreenSelector::Device(name) => screens
            .iter()
            .position(|s| s.device_name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SelectError::UnknownDevice(name.clone()))?,
    };

    Ok(screens.swap_remove(position))
}
