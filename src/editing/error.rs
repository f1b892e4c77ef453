// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by editing operations

/// Result alias for editing operations
pub type EditResult<T> = Result<T, EditError>;

/// Errors that can occur while editing a session's point list
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// An index addressed the point list outside its current bounds
    #[error("point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// A midpoint operation was requested with no midpoint selected
    #[error("no midpoint is selected")]
    NoMidpointSelected,
}

/// Check `index` against a list of `len` points.
///
/// `inclusive` allows `index == len`, which is the valid position for an
/// insertion at the end.
pub(crate) fn check_index(index: usize, len: usize, inclusive: bool) -> EditResult<()> {
    let in_bounds = if inclusive { index <= len } else { index < len };
    if in_bounds {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_bounds() {
        assert!(check_index(0, 1, false).is_ok());
        assert_eq!(
            check_index(1, 1, false),
            Err(EditError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(check_index(0, 0, false).is_err());
    }

    #[test]
    fn inclusive_bounds_allow_end() {
        assert!(check_index(0, 0, true).is_ok());
        assert!(check_index(3, 3, true).is_ok());
        assert!(check_index(4, 3, true).is_err());
    }

    #[test]
    fn message_names_index_and_len() {
        let err = EditError::IndexOutOfRange { index: 7, len: 2 };
        assert_eq!(err.to_string(), "point index 7 out of range for 2 points");
    }
}
