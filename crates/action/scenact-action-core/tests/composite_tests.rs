use scenact_action_core::{act, Ease, SceneNode};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn sequence_carries_leftover_time_into_the_next_child() {
    // Children of 1.0s each; a single 1.5s advance must complete the first
    // child and feed the remaining 0.5s into the second in the same call.
    let mut node = SceneNode::new();
    let mut action = act::sequence(vec![
        act::move_to(1.0, 0.0, 1.0, Ease::Linear).unwrap(),
        act::rotate_to(1.0, 1.0, Ease::Linear).unwrap(),
    ]);
    assert!(action.advance(&mut node, 1.5));
    assert_eq!(node.position.x, 1.0);
    approx(node.rotation, 0.5, 1e-5);
}

#[test]
fn sequence_completes_multiple_children_in_one_large_tick() {
    let mut node = SceneNode::new();
    let mut action = act::sequence(vec![
        act::move_by(1.0, 0.0, 0.5, Ease::Linear).unwrap(),
        act::move_by(1.0, 0.0, 0.5, Ease::Linear).unwrap(),
        act::move_by(1.0, 0.0, 0.5, Ease::Linear).unwrap(),
    ]);
    assert!(!action.advance(&mut node, 2.0));
    approx(node.position.x, 3.0, 1e-4);
}

#[test]
fn empty_sequence_completes_immediately() {
    let mut node = SceneNode::new();
    let mut action = act::sequence(vec![]);
    assert!(!action.advance(&mut node, 0.1));
}

#[test]
fn parallel_children_finish_independently_and_idempotently() {
    let mut node = SceneNode::new();
    let mut action = act::parallel(vec![
        act::move_to(1.0, 0.0, 1.0, Ease::Linear).unwrap(),
        act::rotate_to(180.0, 2.0, Ease::Linear).unwrap(),
    ]);

    assert!(action.advance(&mut node, 1.0));
    assert_eq!(node.position.x, 1.0);
    approx(node.rotation, 90.0, 1e-4);

    // The finished child must not re-apply state on later advances.
    node.position.x = 7.0;
    assert!(action.advance(&mut node, 0.5));
    assert_eq!(node.position.x, 7.0);
    approx(node.rotation, 135.0, 1e-4);

    assert!(!action.advance(&mut node, 0.5));
    assert_eq!(node.rotation, 180.0);
    assert_eq!(node.position.x, 7.0);
}

#[test]
fn empty_parallel_completes_immediately() {
    let mut node = SceneNode::new();
    let mut action = act::parallel(vec![]);
    assert!(!action.advance(&mut node, 0.1));
}

#[test]
fn repeat_forever_never_reports_completion() {
    let mut node = SceneNode::new();
    let mut action = act::forever(act::rotate_by(20.0, 1.0, Ease::PowInOut(3)).unwrap());
    for _ in 0..10_000 {
        assert!(action.advance(&mut node, 1.0));
    }
}

#[test]
fn repeat_restarts_with_leftover_time() {
    // Linear move_by of 1 unit over 1s; 2.5s in one tick crosses two full
    // cycles plus half of a third.
    let mut node = SceneNode::new();
    let mut action = act::forever(act::move_by(1.0, 0.0, 1.0, Ease::Linear).unwrap());
    assert!(action.advance(&mut node, 2.5));
    approx(node.position.x, 2.5, 1e-4);
}

#[test]
fn repeat_of_zero_duration_child_keeps_ticks_finite() {
    let mut node = SceneNode::new();
    let mut action = act::forever(act::scale_to(2.0, 2.0, 0.0, Ease::Linear).unwrap());
    // Must terminate and stay running.
    assert!(action.advance(&mut node, 1.0));
    assert_eq!(node.scale.x, 2.0);
}

#[test]
fn nested_composition_runs_like_the_logo_script() {
    // sequence(move_by, parallel(forever(rotate cycle), forever(bob cycle)))
    let mut node = SceneNode::new();
    let mut action = act::sequence(vec![
        act::move_by(-10.0, 10.0, 0.0, Ease::Linear).unwrap(),
        act::parallel(vec![
            act::forever(act::sequence(vec![
                act::rotate_by(20.0, 8.0, Ease::PowInOut(3)).unwrap(),
                act::rotate_by(-20.0, 8.0, Ease::PowInOut(3)).unwrap(),
            ])),
            act::forever(act::sequence(vec![
                act::move_by(20.0, 10.0, 0.8, Ease::SineInOut).unwrap(),
                act::move_by(-20.0, -10.0, 0.8, Ease::SineInOut).unwrap(),
            ])),
        ]),
    ]);

    // The instantaneous move applies on the first tick, then the loops run.
    assert!(action.advance(&mut node, 0.4));
    approx(node.position.x, -10.0 + 10.0, 1e-3); // half of the 0.8s bob
    for _ in 0..100 {
        assert!(action.advance(&mut node, 0.4));
    }
    // A parallel of forevers never completes; rotation stays within the
    // scripted swing.
    assert!(node.rotation.abs() <= 20.0 + 1e-3);
}

#[test]
fn restart_resets_the_whole_tree() {
    let mut node = SceneNode::new();
    let mut action = act::sequence(vec![
        act::move_to(4.0, 0.0, 1.0, Ease::Linear).unwrap(),
        act::rotate_to(90.0, 1.0, Ease::Linear).unwrap(),
    ]);
    assert!(!action.advance(&mut node, 2.0));

    node.position = scenact_action_core::Vec2::ZERO;
    node.rotation = 0.0;
    action.restart();
    assert!(action.advance(&mut node, 0.5));
    approx(node.position.x, 2.0, 1e-5);
    assert_eq!(node.rotation, 0.0);
}
