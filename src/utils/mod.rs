/*!
# Utilities

Small helper traits shared by the algorithms.
*/

use num::{One, Zero};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;

    /// Returns *true* if the value is in `(0, 1]`, ie. a valid probability that is not zero.
    /// Reset/damping probabilities must satisfy this.
    fn is_positive_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }

    fn is_positive_probility(&self) -> bool {
        Self::zero().lt(self) && Self::one().ge(self)
    }
}
