//! Squares strictly between two aligned squares, and path obstruction.

use crate::geometry::Delta;
use crate::position::Position;
use crate::square::Square;

/// Iterator over the squares strictly between two squares on one rank, file
/// or diagonal. Yields nothing for unaligned or adjacent squares.
#[derive(Debug, Clone)]
pub struct Between {
    next: Option<Square>,
    end: Square,
    step: (i8, i8),
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next.filter(|&sq| sq != self.end)?;
        self.next = current.offset(self.step.0, self.step.1);
        Some(current)
    }
}

/// Return the squares strictly between `from` and `to`.
pub fn between(from: Square, to: Square) -> Between {
    match Delta::between(from, to).unit_step() {
        Some(step) => Between {
            next: from.offset(step.0, step.1),
            end: to,
            step,
        },
        None => Between {
            next: None,
            end: to,
            step: (0, 0),
        },
    }
}

impl Position {
    /// Return `true` if any square strictly between `from` and `to` is
    /// occupied, by a piece of either color.
    pub fn is_obstructed(&self, from: Square, to: Square) -> bool {
        between(from, to).any(|sq| self.is_occupied(sq))
    }
}
