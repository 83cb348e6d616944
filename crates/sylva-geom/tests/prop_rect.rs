use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use sylva_geom::{Rect, Vec2};

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn vapprox(a: Vec2, b: Vec2) -> bool {
    approx_abs_rel(a.x, b.x, 1e-3, 1e-5) && approx_abs_rel(a.y, b.y, 1e-3, 1e-5)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e5)
}

fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (bounded_f32(), bounded_f32()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_size() -> impl Strategy<Value = Vec2> {
    (1.0f32..500.0, 1.0f32..500.0).prop_map(|(w, h)| Vec2::new(w, h))
}

proptest! {
    // Centre translates with the rectangle
    #[test]
    fn center_translation(pos in arb_vec2(), size in arb_size(), t in arb_vec2()) {
        let r = Rect::new(pos, size);
        let moved = r.translated(t);
        prop_assert!(vapprox(moved.center(), r.center() + t));
        prop_assert_eq!(moved.size, r.size);
    }

    // A non-degenerate rectangle contains its own centre and intersects itself
    #[test]
    fn contains_own_center(pos in arb_vec2(), size in arb_size()) {
        let r = Rect::new(pos, size);
        prop_assert!(r.contains(r.center()));
        prop_assert!(r.intersects(&r));
    }

    // Intersection is symmetric
    #[test]
    fn intersects_symmetric(a in arb_vec2(), sa in arb_size(), b in arb_vec2(), sb in arb_size()) {
        let ra = Rect::new(a, sa);
        let rb = Rect::new(b, sb);
        prop_assert_eq!(ra.intersects(&rb), rb.intersects(&ra));
    }
}
