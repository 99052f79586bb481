use enumset::EnumSetType;

/// The eight compass directions, in clockwise octant order from north.
///
/// The discriminants are the octant encoding used throughout the crate:
/// even octants are cardinal moves, odd octants are diagonal moves.
/// `y` grows southward.
#[derive(EnumSetType, Debug)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The direction for an octant, reduced with Euclidean modulo so any
    /// integer (including negative rotation intermediates) is valid.
    #[inline(always)]
    pub fn from_octant(octant: i32) -> Direction {
        match octant.rem_euclid(8) {
            0 => Direction::North,
            1 => Direction::NorthEast,
            2 => Direction::East,
            3 => Direction::SouthEast,
            4 => Direction::South,
            5 => Direction::SouthWest,
            6 => Direction::West,
            7 => Direction::NorthWest,
            _ => unreachable!(),
        }
    }

    #[inline(always)]
    pub fn octant(self) -> i32 {
        self as i32
    }

    /// Rotates by `steps` octants, clockwise for positive steps.
    #[inline(always)]
    pub fn rotate(self, steps: i32) -> Direction {
        Direction::from_octant(self as i32 + steps)
    }

    #[inline(always)]
    pub fn is_diagonal(self) -> bool {
        self as i32 & 1 != 0
    }

    /// The unit coordinate offset of one step in this direction.
    #[inline(always)]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction of travel from `from` to `to`, or `None` if they coincide.
    ///
    /// The cells need not be adjacent: any pair sharing a row, column, or
    /// 45° diagonal yields the direction of the connecting ray, which is
    /// how arrival directions are recovered for jump-point pairs.
    pub fn between(from: (i32, i32), to: (i32, i32)) -> Option<Direction> {
        match ((to.0 - from.0).signum(), (to.1 - from.1).signum()) {
            (0, 0) => None,
            (0, -1) => Some(Direction::North),
            (1, -1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, 1) => Some(Direction::SouthEast),
            (0, 1) => Some(Direction::South),
            (-1, 1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, -1) => Some(Direction::NorthWest),
            _ => unreachable!(),
        }
    }
}

/// The neighbouring coordinate one tile away in the given direction.
#[inline(always)]
pub fn step((x, y): (i32, i32), dir: Direction) -> (i32, i32) {
    let (dx, dy) = dir.offset();
    (x + dx, y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_in_both_directions() {
        assert_eq!(Direction::North.rotate(2), Direction::East);
        assert_eq!(Direction::North.rotate(-2), Direction::West);
        assert_eq!(Direction::NorthEast.rotate(-3), Direction::West);
        assert_eq!(Direction::NorthWest.rotate(3), Direction::East);
        assert_eq!(Direction::SouthWest.rotate(8), Direction::SouthWest);
        assert_eq!(Direction::SouthWest.rotate(-16), Direction::SouthWest);
    }

    #[test]
    fn opposite_offsets_cancel() {
        for octant in 0..8 {
            let dir = Direction::from_octant(octant);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.rotate(4).offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn diagonals_are_odd_octants() {
        for octant in 0..8 {
            let dir = Direction::from_octant(octant);
            let (dx, dy) = dir.offset();
            assert_eq!(dir.is_diagonal(), dx != 0 && dy != 0);
            assert_eq!(dir.octant(), octant);
        }
    }

    #[test]
    fn between_recovers_ray_directions() {
        assert_eq!(Direction::between((2, 2), (2, 2)), None);
        assert_eq!(Direction::between((2, 2), (2, 0)), Some(Direction::North));
        assert_eq!(Direction::between((2, 2), (6, 2)), Some(Direction::East));
        assert_eq!(
            Direction::between((2, 2), (0, 4)),
            Some(Direction::SouthWest)
        );
        assert_eq!(
            Direction::between((5, 5), (1, 1)),
            Some(Direction::NorthWest)
        );
    }

    #[test]
    fn step_follows_offsets() {
        assert_eq!(step((3, 3), Direction::North), (3, 2));
        assert_eq!(step((3, 3), Direction::SouthEast), (4, 4));
        assert_eq!(step((0, 0), Direction::West), (-1, 0));
    }
}
