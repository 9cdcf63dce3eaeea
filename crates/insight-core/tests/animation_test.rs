//! Integration tests for the animation module.

use insight_core::animation::*;
use std::time::Duration;

const MS_16: Duration = Duration::from_millis(16);

#[test]
fn easing_functions_are_monotonic() {
    for easing in [linear, ease_in, ease_out, ease_in_out, ease_in_cubic, ease_out_cubic] {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = easing(t);
            assert!(v >= prev - 0.001, "easing should be monotonic at t={t}");
            prev = v;
        }
    }
}

#[test]
fn tween_at_60fps_completes_on_schedule() {
    let mut tween = Tween::new(0.0, 18.0, Duration::from_millis(350));
    let mut frames = 0;
    while !tween.is_complete() {
        tween.tick(MS_16);
        frames += 1;
        assert!(frames < 100, "tween never completed");
    }
    assert_eq!(frames, 22);
    assert_eq!(tween.current(), 18.0);
}

#[test]
fn animations_share_a_trait_object() {
    let mut anims: Vec<Box<dyn Animation>> = vec![
        Box::new(Tween::new(0.0, 1.0, Duration::from_millis(100))),
        Box::new(Spring::new(0.0, 1.0)),
        Box::new(Oscillator::new(Duration::from_secs(5))),
    ];
    for _ in 0..300 {
        for anim in &mut anims {
            anim.tick(MS_16);
            let v = anim.value();
            assert!((0.0..=1.0).contains(&v));
        }
    }
    assert!(anims[0].is_complete());
    assert!(anims[1].is_complete());
    assert!(!anims[2].is_complete());
}

#[test]
fn easing_names_match_functions() {
    assert_eq!(Easing::EaseOut.apply(0.5), ease_out(0.5));
    assert_eq!(Easing::Linear.function()(0.25), 0.25);
}
