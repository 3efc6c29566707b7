// Slide carousel controller: no slides, or exactly one active slide and dot

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const HERO_INTERVAL: Duration = Duration::from_millis(5000);
pub const ATTRACTIONS_INTERVAL: Duration = Duration::from_millis(7000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel has no slides")]
    Empty,

    #[error("Slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Auto-advance period must be greater than zero")]
    ZeroPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Empty,
    // index < len
    Active { index: usize, len: usize },
}

#[derive(Debug, Clone)]
pub struct Carousel {
    state: CarouselState,
}

impl Carousel {
    pub fn new(slide_count: usize) -> Self {
        let state = if slide_count == 0 {
            CarouselState::Empty
        } else {
            CarouselState::Active {
                index: 0,
                len: slide_count,
            }
        };
        Self { state }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn len(&self) -> usize {
        match self.state {
            CarouselState::Empty => 0,
            CarouselState::Active { len, .. } => len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state == CarouselState::Empty
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            CarouselState::Empty => None,
            CarouselState::Active { index, .. } => Some(index),
        }
    }

    // Step one slide with wraparound. No-op without slides.
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let CarouselState::Active { index, len } = self.state else {
            return None;
        };

        let next = match direction {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        };
        self.state = CarouselState::Active { index: next, len };
        debug!(from = index, to = next, len, "Carousel advanced");
        Some(next)
    }

    // Jump straight to a slide. Out-of-range indices leave the state untouched.
    pub fn set_index(&mut self, index: usize) -> Result<usize, CarouselError> {
        let len = match self.state {
            CarouselState::Empty => return Err(CarouselError::Empty),
            CarouselState::Active { len, .. } => len,
        };

        if index >= len {
            warn!(index, len, "Rejected carousel jump");
            return Err(CarouselError::IndexOutOfRange { index, len });
        }

        self.state = CarouselState::Active { index, len };
        Ok(index)
    }

    pub fn is_active(&self, slide: usize) -> bool {
        self.current_index() == Some(slide)
    }

    // One flag per slide/indicator; exactly one is set when there are slides
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.len()).map(|slide| self.is_active(slide)).collect()
    }

    pub fn into_shared(self) -> SharedCarousel {
        Arc::new(Mutex::new(self))
    }
}

pub type SharedCarousel = Arc<Mutex<Carousel>>;

// Periodic forward stepping for one carousel. Dropping the handle cancels it.
pub struct AutoAdvance {
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    // Must be called from within a tokio runtime
    pub fn spawn(carousel: &SharedCarousel, period: Duration) -> Result<Self, CarouselError> {
        if period.is_zero() {
            warn!("Refusing to auto-advance with a zero period");
            return Err(CarouselError::ZeroPeriod);
        }

        let carousel: Weak<Mutex<Carousel>> = Arc::downgrade(carousel);

        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            loop {
                ticker.tick().await;
                // The owning view is gone
                let Some(carousel) = carousel.upgrade() else {
                    debug!("Carousel dropped, stopping auto-advance");
                    break;
                };
                carousel.lock().advance(Direction::Forward);
            }
        });

        Ok(Self { handle })
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
