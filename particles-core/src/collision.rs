//! Pairwise particle collisions
//!
//! Every unique pair is checked in ascending index order. Pairs are resolved
//! one after another, so a later pair sees the corrections made by earlier
//! ones within the same tick.

use crate::engine::Particle;
use glam::Vec2;

/// A detected overlap between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the second particle's centre towards the first
    pub normal: Vec2,
    /// Penetration depth along the normal
    pub overlap: f32,
}

/// Detect overlap between `a` and `b`.
///
/// Coincident centres have no usable normal and report no contact.
pub fn detect_contact(a: &Particle, b: &Particle) -> Option<Contact> {
    let delta = a.pos - b.pos;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if !(dist_sq > 0.0 && dist_sq < min_dist * min_dist) {
        return None;
    }

    let dist = dist_sq.sqrt();
    Some(Contact {
        normal: delta / dist,
        overlap: min_dist - dist,
    })
}

/// Separate the pair along the contact normal, then exchange momentum along it.
pub fn resolve_contact(a: &mut Particle, b: &mut Particle, contact: &Contact) {
    let normal = contact.normal;
    let (m1, m2) = (a.mass, b.mass);
    let total = m1 + m2;

    // Heavier particles move less
    a.pos += normal * (contact.overlap * (m2 / total));
    b.pos -= normal * (contact.overlap * (m1 / total));

    // 1D elastic collision along the normal; tangential parts are untouched
    let v1n = a.vel.dot(normal);
    let v2n = b.vel.dot(normal);
    let new_v1n = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / total;
    let new_v2n = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / total;

    a.vel += normal * (new_v1n - v1n);
    b.vel += normal * (new_v2n - v2n);
}

/// Resolve every overlapping pair once. Returns the number of contacts resolved.
pub fn resolve_all(particles: &mut [Particle]) -> usize {
    let mut contacts = 0;

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let p1 = &mut head[i];
        for p2 in tail.iter_mut() {
            if let Some(contact) = detect_contact(p1, p2) {
                resolve_contact(p1, p2, &contact);
                contacts += 1;
            }
        }
    }

    contacts
}
