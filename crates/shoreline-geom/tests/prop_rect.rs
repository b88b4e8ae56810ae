use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use shoreline_geom::{Rect, Vec2};

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e5)
}

fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (bounded_f32(), bounded_f32()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_rect() -> impl Strategy<Value = Rect> {
    (arb_vec2(), 1.0f32..5_000.0, 1.0f32..5_000.0)
        .prop_map(|(min, w, h)| Rect::new(min, Vec2::new(w, h)))
}

proptest! {
    // A rect always contains its own min corner and center
    #[test]
    fn contains_min_and_center(r in arb_rect()) {
        prop_assert!(r.contains(r.min));
        prop_assert!(r.contains(r.center()));
    }

    // Union covers both inputs' corners
    #[test]
    fn union_covers_inputs(a in arb_rect(), b in arb_rect()) {
        let u = a.union(&b);
        for p in [a.min, b.min] {
            prop_assert!(u.min.x <= p.x && u.min.y <= p.y);
        }
        for p in [a.max(), b.max()] {
            prop_assert!(u.max().x >= p.x - 0.1 && u.max().y >= p.y - 0.1);
        }
    }

    // Every point lies within the enclosing bounds (closed on the max edge)
    #[test]
    fn enclosing_bounds_all_points(pts in prop::collection::vec(arb_vec2(), 1..32)) {
        let r = Rect::enclosing(pts.iter().copied()).unwrap();
        let max = r.max();
        for p in pts {
            prop_assert!(p.x >= r.min.x && p.y >= r.min.y);
            prop_assert!(p.x <= max.x + 0.1 && p.y <= max.y + 0.1);
        }
    }
}
