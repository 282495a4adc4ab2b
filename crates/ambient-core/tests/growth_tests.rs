// Host-side tests for the growth renderers, via recorded draw commands.

use ambient_core::constants::{GOLDEN_ANGLE, MAX_DEPTH_LIMIT};
use ambient_core::surface::{DrawCommand, DrawList, Paint};
use ambient_core::{AgaveForm, GrowthForm, Placement, TreeForm};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

fn trunk(extent: f32) -> Placement {
    Placement {
        origin: Vec2::new(400.0, 600.0),
        orientation: -FRAC_PI_2,
        extent,
    }
}

fn record(form: &GrowthForm, placement: Placement, progress: f32) -> DrawList {
    let mut list = DrawList::new();
    form.render(&mut list, placement, progress);
    list
}

/// Segment count of a fully grown tree with no extent cut-off.
fn full_tree_segments(max_depth: u32) -> usize {
    let mut total = 0;
    let mut level = 1;
    for depth in 0..=max_depth {
        total += level;
        level *= TreeForm::branch_count(depth);
    }
    total
}

fn stroke_widths(list: &DrawList) -> Vec<f32> {
    list.commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokeLine { stroke, .. } => Some(stroke.width),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_progress_draws_nothing() {
    for form in [
        GrowthForm::Tree(TreeForm::new(8)),
        GrowthForm::Agave(AgaveForm::default()),
    ] {
        let list = record(&form, trunk(200.0), 0.0);
        assert_eq!(list.paint_count(), 0);
        assert!(list.is_empty());
    }
}

#[test]
fn renders_are_pure() {
    for form in [
        GrowthForm::Tree(TreeForm::new(6)),
        GrowthForm::Agave(AgaveForm::default()),
    ] {
        for progress in [0.1, 0.42, 0.77, 1.0] {
            let a = record(&form, trunk(180.0), progress);
            let b = record(&form, trunk(180.0), progress);
            assert_eq!(a.commands(), b.commands());
        }
    }
}

#[test]
fn full_progress_draws_every_segment() {
    let form = GrowthForm::Tree(TreeForm::new(4));
    let full = record(&form, trunk(100.0), 1.0).paint_count();
    assert_eq!(full, full_tree_segments(4));
    for i in 0..=100 {
        let partial = record(&form, trunk(100.0), i as f32 / 100.0).paint_count();
        assert!(partial <= full, "progress {i}%: {partial} > {full}");
    }
}

#[test]
fn segment_count_never_shrinks_as_progress_grows() {
    let form = GrowthForm::Tree(TreeForm::new(6));
    let mut prev = 0;
    for i in 0..=200 {
        let n = record(&form, trunk(220.0), i as f32 / 200.0).paint_count();
        assert!(n >= prev, "step {i}: {n} < {prev}");
        prev = n;
    }
}

#[test]
fn half_progress_reveals_only_the_inner_levels() {
    let tree = TreeForm::new(12);
    let form = GrowthForm::Tree(tree.clone());
    let list = record(&form, trunk(300.0), 0.5);
    let widths = stroke_widths(&list);

    for depth in 0..=5 {
        let w = tree.stroke_for(depth).width;
        assert!(widths.contains(&w), "depth {depth} missing");
    }
    for depth in 7..=12 {
        let w = tree.stroke_for(depth).width;
        assert!(!widths.contains(&w), "depth {depth} drawn too early");
    }
    assert_eq!(list.paint_count(), full_tree_segments(6));
}

#[test]
fn partially_grown_trunk_has_no_children() {
    let form = GrowthForm::Tree(TreeForm::new(4));
    // Trunk reveal 0.2, below the child gate.
    let list = record(&form, trunk(100.0), 0.04);
    assert_eq!(list.paint_count(), 1);
    match &list.commands()[0] {
        DrawCommand::StrokeLine { from, to, .. } => {
            assert!((from.distance(*to) - 20.0).abs() < 1e-3);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn tiny_extent_is_not_drawn() {
    let form = GrowthForm::Tree(TreeForm::new(8));
    assert!(record(&form, trunk(1.0), 1.0).is_empty());
    let form = GrowthForm::Agave(AgaveForm::default());
    assert!(record(&form, trunk(1.0), 1.0).is_empty());
}

#[test]
fn absurd_depth_is_rejected_and_still_bounded() {
    let tree = TreeForm::new(1_000);
    assert!(tree.validate().is_err());
    assert!(TreeForm::new(MAX_DEPTH_LIMIT).validate().is_ok());

    // Extent cut-off ends the recursion long before the depth limit.
    let list = record(&GrowthForm::Tree(tree), trunk(20.0), 1.0);
    assert!(list.paint_count() > 0);
    assert!(list.paint_count() <= full_tree_segments(6));
}

#[test]
fn branches_fan_out_two_or_three_ways() {
    let tree = TreeForm::new(8);
    for depth in 0..20 {
        let n = TreeForm::branch_count(depth);
        assert!(n == 2 || n == 3);
        assert_eq!(tree.child_angles(0.0, depth).len(), n);
        assert_eq!(tree.child_angles(0.3, depth), tree.child_angles(0.3, depth));
    }
}

#[test]
fn tips_are_thinner_and_lighter_than_the_trunk() {
    let tree = TreeForm::new(8);
    let root = tree.stroke_for(0);
    let tip = tree.stroke_for(8);
    assert!(tip.width < root.width);
    assert!(tip.color.a < root.color.a);
}

fn leaf_lengths(list: &DrawList) -> Vec<f32> {
    list.commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillPath {
                paint: Paint::Linear { to, .. },
                ..
            } => Some(to.x),
            _ => None,
        })
        .collect()
}

#[test]
fn agave_draws_every_leaf_outermost_first() {
    let form = GrowthForm::Agave(AgaveForm::default());
    let list = record(&form, trunk(200.0), 1.0);
    assert_eq!(list.paint_count(), 21);

    let lengths = leaf_lengths(&list);
    for pair in lengths.windows(2) {
        assert!(pair[0] > pair[1], "leaves not painted outer-to-inner: {pair:?}");
    }
    assert!((lengths[0] - 200.0).abs() < 1e-3);

    let first_rotation = list.commands().iter().find_map(|c| match c {
        DrawCommand::Rotate(r) => Some(*r),
        _ => None,
    });
    let expected = -FRAC_PI_2 + 20.0 * GOLDEN_ANGLE;
    assert!((first_rotation.unwrap() - expected).abs() < 1e-4);
}

#[test]
fn agave_leaves_appear_outside_in() {
    let form = GrowthForm::Agave(AgaveForm::default());
    // Just past the first leaf's start: only the outermost leaf is visible.
    let early = record(&form, trunk(200.0), 0.5 / 21.0);
    assert_eq!(early.paint_count(), 1);
    let len = leaf_lengths(&early)[0];
    assert!((len - 100.0).abs() < 1e-2);

    let mut prev = 0;
    for i in 0..=84 {
        let n = record(&form, trunk(200.0), i as f32 / 84.0).paint_count();
        assert!(n >= prev);
        prev = n;
    }
    assert_eq!(prev, 21);
}

#[test]
fn agave_leaves_are_wrapped_in_save_restore() {
    let form = GrowthForm::Agave(AgaveForm::new(3));
    let list = record(&form, trunk(120.0), 1.0);
    let saves = list.commands().iter().filter(|c| **c == DrawCommand::Save).count();
    let restores = list.commands().iter().filter(|c| **c == DrawCommand::Restore).count();
    assert_eq!(saves, 3);
    assert_eq!(restores, 3);
    assert_eq!(list.commands().last(), Some(&DrawCommand::Restore));
}
