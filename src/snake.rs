use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::direction_queue::DirectionQueue;
use crate::grid::{Cell, Direction, Grid};

/// Default speed in cells per second.
pub const DEFAULT_VELOCITY: u32 = 10;

/// Body part plus the heading the snake had when it reached that cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    pub heading: Direction,
}

impl Segment {
    pub const fn new(cell: Cell, heading: Direction) -> Self {
        Self { cell, heading }
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    grid: Grid,
    direction: Direction,
    queue: DirectionQueue,
    // head at the front, never shorter than two segments
    body: VecDeque<Segment>,
    growing: bool,
    velocity: u32,
    last_move_at: u64,
}

impl Snake {
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let mut snake = Self {
            grid,
            direction: Direction::Right,
            queue: DirectionQueue::new(),
            body: VecDeque::with_capacity(grid.area().min(64)),
            growing: false,
            velocity: DEFAULT_VELOCITY,
            last_move_at: 0,
        };
        snake.reset(rng);
        snake
    }

    /// Builds a snake from explicit segments, head first.
    pub fn from_segments(
        grid: Grid,
        segments: impl IntoIterator<Item = Segment>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Segment> = segments.into_iter().collect();
        if body.len() < 2 {
            return None;
        }
        Some(Self {
            grid,
            direction,
            queue: DirectionQueue::new(),
            body,
            growing: false,
            velocity: DEFAULT_VELOCITY,
            last_move_at: 0,
        })
    }

    pub fn with_velocity(mut self, velocity: u32) -> Self {
        self.velocity = velocity.max(1);
        self
    }

    /// New head + tail pair stacked on one random cell, random heading.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let start = self.grid.random_cell(rng);
        self.direction = *Direction::ALL.choose(rng).unwrap_or(&Direction::Right);
        self.body.clear();
        self.body.push_back(Segment::new(start, self.direction));
        self.body.push_back(Segment::new(start, self.direction));
        self.queue.clear();
        self.growing = false;
    }

    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        self.queue.try_push(direction)
    }

    pub fn interval_ms(&self) -> f64 {
        1000.0 / self.velocity as f64
    }

    /// Advances one cell when the movement tick is due. Returns whether it moved.
    pub fn step(&mut self, now: u64) -> bool {
        if (now.saturating_sub(self.last_move_at) as f64) < self.interval_ms() {
            return false;
        }
        self.last_move_at = now;

        let wanted = self.queue.try_pop().unwrap_or(self.direction);
        if wanted != self.direction.opposite() {
            self.direction = wanted;
        }

        let new_head = self.grid.step(self.head(), self.direction);
        self.body.push_front(Segment::new(new_head, self.direction));

        if self.growing {
            self.growing = false;
        } else {
            self.body.pop_back();
        }
        true
    }

    pub fn check_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|s| s.cell == head)
    }

    pub fn head(&self) -> Cell {
        self.body[0].cell
    }

    pub fn grow(&mut self) {
        self.growing = true;
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> &DirectionQueue {
        &self.queue
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.body.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().map(|s| s.cell)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Apples eaten: length minus the initial head and tail, plus a
    /// growth that has not reached the body yet.
    pub fn score(&self) -> u32 {
        (self.body.len() - 2) as u32 + u32::from(self.growing)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}
