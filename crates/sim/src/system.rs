//! Collections of bodies where some orbit other bodies (moons around planets).

use std::collections::HashMap;

use orrery_config::{BodyConfig, ConfigError};
use orrery_orbits::{OrbitalElements, Position, position};
use thiserror::Error;
use tracing::debug;

/// One body of a system: its elements relative to its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: String,
    pub elements: OrbitalElements,
    /// Body this one orbits; `None` means the system origin.
    pub parent: Option<String>,
}

/// Absolute position of one body at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition<'a> {
    pub name: &'a str,
    pub parent: Option<&'a str>,
    pub position: Position,
}

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("body `{0}` is defined more than once")]
    DuplicateBody(String),
    #[error("body `{body}` orbits unknown parent `{parent}`")]
    UnknownParent { body: String, parent: String },
    #[error("parent chain of body `{0}` forms a cycle")]
    ParentCycle(String),
    #[error("invalid body configuration: {0}")]
    InvalidBody(#[from] ConfigError),
}

/// Validated set of bodies with a parent-first evaluation order.
#[derive(Debug, Clone)]
pub struct OrbitSystem {
    bodies: Vec<BodySpec>,
    parents: Vec<Option<usize>>,
    order: Vec<usize>,
}

#[derive(Clone, Copy, PartialEq)]
enum Visit {
    New,
    Active,
    Done,
}

impl OrbitSystem {
    /// Build a system, rejecting duplicate names, missing parents, and parent cycles.
    pub fn new(bodies: Vec<BodySpec>) -> Result<Self, SystemError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            if index.insert(body.name.as_str(), i).is_some() {
                return Err(SystemError::DuplicateBody(body.name.clone()));
            }
        }

        let parents = bodies
            .iter()
            .map(|body| match &body.parent {
                None => Ok(None),
                Some(parent) => index.get(parent.as_str()).copied().map(Some).ok_or_else(|| {
                    SystemError::UnknownParent {
                        body: body.name.clone(),
                        parent: parent.clone(),
                    }
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = evaluation_order(&bodies, &parents)?;
        debug!(bodies = bodies.len(), "built orbit system");

        Ok(Self {
            bodies,
            parents,
            order,
        })
    }

    /// Build a system straight from catalog records.
    pub fn from_configs(configs: &[BodyConfig]) -> Result<Self, SystemError> {
        let bodies = configs
            .iter()
            .map(|cfg| {
                Ok(BodySpec {
                    name: cfg.name.clone(),
                    elements: cfg.elements()?,
                    parent: cfg.parent.clone(),
                })
            })
            .collect::<Result<Vec<_>, SystemError>>()?;
        Self::new(bodies)
    }

    pub fn bodies(&self) -> &[BodySpec] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, name: &str) -> Option<&BodySpec> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Absolute positions of every body at time `t`, in input order.
    pub fn positions_at(&self, t: f64) -> Vec<BodyPosition<'_>> {
        let absolute = self.absolute_positions(t);
        self.bodies
            .iter()
            .zip(absolute)
            .map(|(body, position)| BodyPosition {
                name: &body.name,
                parent: body.parent.as_deref(),
                position,
            })
            .collect()
    }

    /// Absolute position of the named body at time `t`.
    ///
    /// Only the body and its ancestors are propagated.
    pub fn position_of(&self, name: &str, t: f64) -> Option<Position> {
        let mut idx = self.bodies.iter().position(|b| b.name == name)?;
        let mut total = Position::ORIGIN;
        loop {
            total = total + position(&self.bodies[idx].elements, t);
            match self.parents[idx] {
                Some(parent) => idx = parent,
                None => return Some(total),
            }
        }
    }

    /// Sampled orbit outline of every body, shifted onto its parent's absolute
    /// position at time `t` so satellite ellipses follow their primaries.
    pub fn orbit_paths(&self, steps: usize, t: f64) -> Vec<(&str, Vec<Position>)> {
        let absolute = self.absolute_positions(t);
        self.bodies
            .iter()
            .zip(&self.parents)
            .map(|(body, parent)| {
                let offset = parent.map(|p| absolute[p]).unwrap_or(Position::ORIGIN);
                let path = body
                    .elements
                    .path(steps)
                    .into_iter()
                    .map(|p| p + offset)
                    .collect();
                (body.name.as_str(), path)
            })
            .collect()
    }

    fn absolute_positions(&self, t: f64) -> Vec<Position> {
        let mut absolute = vec![Position::ORIGIN; self.bodies.len()];
        for &idx in &self.order {
            let local = position(&self.bodies[idx].elements, t);
            let offset = self.parents[idx]
                .map(|p| absolute[p])
                .unwrap_or(Position::ORIGIN);
            absolute[idx] = local + offset;
        }
        absolute
    }
}

/// Depth-first ordering where every parent precedes its children.
fn evaluation_order(
    bodies: &[BodySpec],
    parents: &[Option<usize>],
) -> Result<Vec<usize>, SystemError> {
    let mut state = vec![Visit::New; bodies.len()];
    let mut order = Vec::with_capacity(bodies.len());

    for start in 0..bodies.len() {
        let mut chain = Vec::new();
        let mut cursor = Some(start);
        while let Some(idx) = cursor {
            match state[idx] {
                Visit::Done => break,
                Visit::Active => return Err(SystemError::ParentCycle(bodies[idx].name.clone())),
                Visit::New => {
                    state[idx] = Visit::Active;
                    chain.push(idx);
                    cursor = parents[idx];
                }
            }
        }
        // Chain runs child -> ancestor; emit ancestors first.
        for &idx in chain.iter().rev() {
            state[idx] = Visit::Done;
            order.push(idx);
        }
    }

    Ok(order)
}
