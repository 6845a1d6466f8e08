//! Touch input boundary.

/// Kinds of touch events a host can forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchAction {
    /// Finger pressed. This is the only action that counts as a tap.
    Down,
    /// Finger lifted.
    Up,
    /// Finger moved while pressed.
    Move,
    /// Gesture aborted by the host.
    Cancel,
}

impl TouchAction {
    /// Maps a platform action code (`0` down, `1` up, `2` move, `3` cancel).
    ///
    /// # Errors
    /// * `UnknownAction` - Any other code
    pub fn from_code(code: i32) -> Result<Self, InputError> {
        match code {
            0 => Ok(TouchAction::Down),
            1 => Ok(TouchAction::Up),
            2 => Ok(TouchAction::Move),
            3 => Ok(TouchAction::Cancel),
            other => Err(InputError::UnknownAction(other)),
        }
    }

    /// Returns true if this action should trigger a tap.
    #[inline]
    pub fn is_tap(self) -> bool {
        self == TouchAction::Down
    }
}

/// Errors raised when decoding host input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// The action code is not one of the known touch actions.
    UnknownAction(i32),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::UnknownAction(code) => {
                write!(f, "unknown touch action code {}", code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
