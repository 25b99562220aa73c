use std::collections::VecDeque;

use crate::grid::Direction;

pub const DIRECTION_QUEUE_CAPACITY: usize = 3;

/// Turns typed ahead of the movement tick. Full queue drops new input;
/// queued turns are never evicted.
#[derive(Clone, Debug, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(DIRECTION_QUEUE_CAPACITY),
        }
    }

    pub fn try_push(&mut self, direction: Direction) -> bool {
        if self.pending.len() >= DIRECTION_QUEUE_CAPACITY {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    pub fn try_pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.iter().copied()
    }
}
