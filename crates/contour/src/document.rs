//! The typed-entity boundary of the CAD document reader.
//!
//! The engine does not parse DXF files itself; a [`DocumentReader`] collaborator
//! produces a [`Document`] of already-typed entities with their raw
//! floating-point geometry. Entities are an exhaustive sum type so that
//! dispatch is checked by the compiler; anything the reader could not classify
//! arrives as [`Entity::Unsupported`] and fails loudly during dispatch.
//!
//! [`DocumentReader`]: crate::traits::DocumentReader

use serde::{Deserialize, Serialize};

/// One CAD drawing, reduced to the entity list of its modelspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub entities: Vec<Entity>,
}

impl Document {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn modelspace(&self) -> &[Entity] {
        &self.entities
    }
}

/// A resolved block definition referenced by an INSERT entity. Blocks may
/// contain further inserts; the dispatcher bounds that recursion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub entities: Vec<Entity>,
}

/// One drawing entity, tagged with its DXF type name in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Entity {
    Line {
        start: [f64; 2],
        end: [f64; 2],
    },
    Arc {
        center: [f64; 2],
        radius: f64,
        /// Degrees, counterclockwise from the positive x-axis.
        start_angle: f64,
        end_angle: f64,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
    },
    Polyline {
        vertices: Vec<[f64; 2]>,
        /// Readers set this from the polyline's flags; 3D polylines are
        /// rejected during flattening.
        is_2d: bool,
    },
    #[serde(rename = "LWPOLYLINE")]
    LwPolyline {
        vertices: Vec<[f64; 2]>,
    },
    Spline {
        control_points: Vec<[f64; 2]>,
        knots: Vec<f64>,
        degree: usize,
    },
    Insert {
        block: Block,
    },
    /// Any entity type outside the six supported ones, carried by name so the
    /// resulting error can identify it.
    Unsupported {
        name: String,
    },
}

impl Entity {
    /// The DXF type tag of this entity.
    pub fn dxf_type(&self) -> &str {
        match self {
            Entity::Line { .. } => "LINE",
            Entity::Arc { .. } => "ARC",
            Entity::Circle { .. } => "CIRCLE",
            Entity::Polyline { .. } => "POLYLINE",
            Entity::LwPolyline { .. } => "LWPOLYLINE",
            Entity::Spline { .. } => "SPLINE",
            Entity::Insert { .. } => "INSERT",
            Entity::Unsupported { name } => name,
        }
    }
}
