use crate::error::{Error, Result};
use crate::leg::Leg;
use crate::types::Waypoint;

/// An ordered series of legs forming a multi-segment course
///
/// A route owns its legs and must contain at least one. Positional
/// accessors report out-of-range positions as errors; there is no
/// wraparound.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    legs: Vec<Leg>,
}

impl Route {
    /// Create a route from a non-empty list of legs
    pub fn new(legs: Vec<Leg>) -> Result<Self> {
        if legs.is_empty() {
            return Err(Error::EmptyRoute);
        }
        Ok(Self { legs })
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The leg at `index`
    pub fn current_leg(&self, index: usize) -> Result<&Leg> {
        self.leg_at(index as i64)
    }

    /// The leg after the one at `index`
    pub fn next_leg(&self, index: usize) -> Result<&Leg> {
        self.leg_at(index as i64 + 1)
    }

    /// The leg before the one at `index`
    pub fn previous_leg(&self, index: usize) -> Result<&Leg> {
        self.leg_at(index as i64 - 1)
    }

    fn leg_at(&self, position: i64) -> Result<&Leg> {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.legs.get(index))
            .ok_or(Error::LegOutOfBounds {
                position,
                count: self.legs.len(),
            })
    }

    /// The first leg's start waypoint
    ///
    /// Construction forbids an empty route; the check here guards
    /// against that invariant being bypassed.
    pub fn start_waypoint(&self) -> Result<Waypoint> {
        let first = self.legs.first().ok_or(Error::EmptyRoute)?;
        Ok(first.start_waypoint())
    }

    /// The final leg's end waypoint
    pub fn end_waypoint(&self) -> Result<Waypoint> {
        let last = self.legs.last().ok_or(Error::EmptyRoute)?;
        Ok(last.end_waypoint())
    }
}
