// src/effects/particles.rs  -  Decorative floating particles
use crate::dom::{Document, NodeId, Tag};
use rand::Rng;

pub const CONTAINER_ID:   &str = "particles";
pub const PARTICLE_CLASS: &str = "particle";
pub const DEFAULT_COUNT:  usize = 20;

/// Randomized look of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Edge length, px (3..9)
    pub size:     f64,
    /// Position, percent of the container (0..100)
    pub left:     f64,
    pub top:      f64,
    /// Float animation duration, s (10..25)
    pub duration: f64,
    /// Animation delay, s (0..10)
    pub delay:    f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size:     rng.gen::<f64>() * 6.0 + 3.0,
            left:     rng.gen::<f64>() * 100.0,
            top:      rng.gen::<f64>() * 100.0,
            duration: rng.gen::<f64>() * 15.0 + 10.0,
            delay:    rng.gen::<f64>() * 10.0,
        }
    }

    fn apply(&self, doc: &mut Document, node: NodeId) {
        doc.set_style(node, "width",              &format!("{}px", self.size));
        doc.set_style(node, "height",             &format!("{}px", self.size));
        doc.set_style(node, "left",               &format!("{}%", self.left));
        doc.set_style(node, "top",                &format!("{}%", self.top));
        doc.set_style(node, "animation-duration", &format!("{}s", self.duration));
        doc.set_style(node, "animation-delay",    &format!("{}s", self.delay));
    }
}

/// Fill `#particles` with `count` particles; returns the created nodes.
/// A missing container creates nothing.
pub fn spawn<R: Rng>(doc: &mut Document, count: usize, rng: &mut R) -> Vec<NodeId> {
    let Some(container) = doc.get_by_id(CONTAINER_ID) else {
        return Vec::new();
    };
    let nodes: Vec<NodeId> = (0..count)
        .map(|_| {
            let p = doc.add(container, Tag::Div);
            doc.add_class(p, PARTICLE_CLASS);
            Particle::random(rng).apply(doc, p);
            p
        })
        .collect();
    log::debug!("[particles] spawned {}", nodes.len());
    nodes
}
