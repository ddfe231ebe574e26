//! Cargo items and load requests.

use thiserror::Error;

/// A single item that may be stowed.
///
/// # Examples
/// ```
/// use stowage_core::Item;
///
/// let crate_of_parts = Item::new(9, 4);
/// assert_eq!(crate_of_parts.value, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Worth of the item when it makes the load.
    pub value: u32,
    /// Volume the item occupies in the hold.
    pub volume: u16,
}

impl Item {
    /// Construct an item from its value and volume.
    #[must_use]
    pub const fn new(value: u32, volume: u16) -> Self {
        Self { value, volume }
    }
}

/// An immutable load-planning problem: a hold capacity and the candidate
/// items.
///
/// Item identity is positional — index `i` in [`Self::items`] names the same
/// item for the duration of a solve. Values and volumes are unsigned, so the
/// malformed negative inputs the original formulation warns about are
/// unrepresentable.
///
/// # Examples
/// ```
/// use stowage_core::LoadRequest;
///
/// # fn main() -> Result<(), stowage_core::LoadRequestError> {
/// let request = LoadRequest::from_parts(15, &[7, 9], &[3, 4])?;
/// assert_eq!(request.items.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadRequest {
    /// Maximum total volume the hold accepts.
    pub capacity: u16,
    /// Candidate items, addressed by position.
    pub items: Vec<Item>,
}

/// Errors returned by [`LoadRequest::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadRequestError {
    /// The value and volume sequences differ in length.
    #[error("expected one volume per value (got {values} values, {volumes} volumes)")]
    LengthMismatch {
        /// Number of values supplied.
        values: usize,
        /// Number of volumes supplied.
        volumes: usize,
    },
}

impl LoadRequest {
    /// Construct a request from already-paired items.
    #[must_use]
    pub const fn new(capacity: u16, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Construct a request from parallel value and volume sequences.
    ///
    /// Fails fast when the sequences differ in length instead of leaving an
    /// index-out-of-range error for the solvers to trip over.
    pub fn from_parts(
        capacity: u16,
        values: &[u32],
        volumes: &[u16],
    ) -> Result<Self, LoadRequestError> {
        if values.len() != volumes.len() {
            return Err(LoadRequestError::LengthMismatch {
                values: values.len(),
                volumes: volumes.len(),
            });
        }
        let items = values
            .iter()
            .zip(volumes)
            .map(|(&value, &volume)| Item { value, volume })
            .collect();
        Ok(Self { capacity, items })
    }
}
