use super::blob::Blob;
use crate::config::REPULSION_STIFFNESS;

/// Push two overlapping blobs apart by nudging their velocities.
///
/// The impulse is `0.3 * overlap * dt` along the center line, equal and
/// opposite on the two blobs. Coincident centers (no normal) and pairs that
/// are not touching are left alone. Returns whether an impulse was applied.
pub fn repel_pair(a: &mut Blob, b: &mut Blob, dt: f32) -> bool {
    let delta = b.position - a.position;
    let distance = delta.length();
    let touching = a.solid_radius + b.solid_radius;

    if distance == 0.0 || distance > touching {
        return false;
    }

    let normal = delta / distance;
    let overlap = touching - distance;
    let force = REPULSION_STIFFNESS * overlap;
    let impulse = normal * force * dt;

    a.velocity -= impulse;
    b.velocity += impulse;
    true
}

/// Every unordered pair, O(n²). Fine for a background of a few dozen blobs.
/// Returns how many pairs were in contact.
pub fn repel_all(blobs: &mut [Blob], dt: f32) -> usize {
    let mut contacts = 0;
    for i in 0..blobs.len() {
        let (head, tail) = blobs.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if repel_pair(a, b, dt) {
                contacts += 1;
            }
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::blob::BlobColor;
    use bevy::math::Vec2;

    fn blob(position: Vec2, solid_radius: f32) -> Blob {
        Blob::new(
            position,
            Vec2::new(0.25, -0.5),
            solid_radius,
            solid_radius + 200.0,
            BlobColor::new(0, 100, 100),
        )
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut a = blob(Vec2::new(0.0, 0.0), 100.0);
        let mut b = blob(Vec2::new(300.0, 0.0), 100.0);
        let (va, vb) = (a.velocity, b.velocity);

        assert!(!repel_pair(&mut a, &mut b, 0.1));
        assert_eq!(a.velocity, va);
        assert_eq!(b.velocity, vb);
    }

    #[test]
    fn exactly_touching_pair_gets_zero_impulse() {
        let mut a = blob(Vec2::new(0.0, 0.0), 100.0);
        let mut b = blob(Vec2::new(200.0, 0.0), 100.0);
        let (va, vb) = (a.velocity, b.velocity);

        assert!(repel_pair(&mut a, &mut b, 0.1));
        assert_eq!(a.velocity, va);
        assert_eq!(b.velocity, vb);
    }

    #[test]
    fn overlap_of_five_gives_equal_and_opposite_impulse() {
        let dt = 0.02;
        let mut a = blob(Vec2::new(100.0, 100.0), 120.0);
        // distance = 120 + 80 - 5 = 195, along a 3-4-5 direction
        let mut b = blob(Vec2::new(100.0 + 117.0, 100.0 + 156.0), 80.0);
        let (va, vb) = (a.velocity, b.velocity);

        assert!(repel_pair(&mut a, &mut b, dt));

        let da = a.velocity - va;
        let db = b.velocity - vb;
        assert!((da + db).length() < 1e-6);

        let expected = Vec2::new(0.6, 0.8) * 0.3 * 5.0 * dt;
        assert!((db - expected).length() < 1e-5);
        assert!((da + expected).length() < 1e-5);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut a = blob(Vec2::new(50.0, 50.0), 100.0);
        let mut b = blob(Vec2::new(50.0, 50.0), 100.0);
        let (va, vb) = (a.velocity, b.velocity);

        assert!(!repel_pair(&mut a, &mut b, 1.0));
        assert_eq!(a.velocity, va);
        assert_eq!(b.velocity, vb);
        assert!(a.velocity.is_finite());
    }

    #[test]
    fn repel_all_visits_every_pair_once() {
        let mut blobs = vec![
            blob(Vec2::new(0.0, 0.0), 100.0),
            blob(Vec2::new(150.0, 0.0), 100.0),
            blob(Vec2::new(75.0, 100.0), 100.0),
            blob(Vec2::new(5000.0, 5000.0), 100.0),
        ];
        let total_before: Vec2 = blobs.iter().map(|b| b.velocity).sum();

        let contacts = repel_all(&mut blobs, 0.016);

        // The first three overlap pairwise; the far blob touches nobody.
        assert_eq!(contacts, 3);
        let total_after: Vec2 = blobs.iter().map(|b| b.velocity).sum();
        assert!((total_after - total_before).length() < 1e-5);
        assert_eq!(blobs[3].velocity, Vec2::new(0.25, -0.5));
    }
}
