//! Bounded per-body histories for drawing trails.

use std::collections::{BTreeMap, VecDeque};

use crate::ViewError;
use crate::camera::ScreenPoint;

/// Fixed-capacity ring buffer; pushing onto a full buffer drops the oldest point.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer<T = ScreenPoint> {
    points: VecDeque<T>,
    capacity: usize,
}

impl<T> TrailBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self, ViewError> {
        if capacity == 0 {
            return Err(ViewError::InvalidTrailCapacity);
        }
        Ok(Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn push(&mut self, point: T) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Most recently pushed point.
    pub fn latest(&self) -> Option<&T> {
        self.points.back()
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.points.iter()
    }
}

/// Trail buffers keyed by body name, all sharing one capacity.
#[derive(Debug, Clone)]
pub struct Trails {
    capacity: usize,
    buffers: BTreeMap<String, TrailBuffer>,
}

impl Trails {
    pub fn new(capacity: usize) -> Result<Self, ViewError> {
        if capacity == 0 {
            return Err(ViewError::InvalidTrailCapacity);
        }
        Ok(Self {
            capacity,
            buffers: BTreeMap::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a point to `body`'s trail, creating the trail on first use.
    pub fn record(&mut self, body: &str, point: ScreenPoint) {
        if let Some(buffer) = self.buffers.get_mut(body) {
            buffer.push(point);
            return;
        }
        let mut buffer = TrailBuffer {
            points: VecDeque::with_capacity(self.capacity),
            capacity: self.capacity,
        };
        buffer.push(point);
        self.buffers.insert(body.to_string(), buffer);
    }

    pub fn get(&self, body: &str) -> Option<&TrailBuffer> {
        self.buffers.get(body)
    }

    /// Trails in body-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TrailBuffer)> {
        self.buffers.iter().map(|(name, buf)| (name.as_str(), buf))
    }

    pub fn clear(&mut self) {
        self.buffers.values_mut().for_each(TrailBuffer::clear);
    }
}
