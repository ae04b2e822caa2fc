use super::*;
use common::shapes::{CollisionPolygon, Rectangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bounds() -> Rectangle {
    Rectangle::from_corners(0.0, 0.0, 100.0, 100.0)
}

fn tree(node_capacity: usize, depth_limit: usize) -> QuadTree {
    let config = Config {
        node_capacity,
        depth_limit,
        ..Config::default()
    };
    QuadTree::new_with_config(bounds(), config).unwrap()
}

fn assert_invariants<S: CollisionPolygon>(tree: &QuadTree<S>) {
    for (index, node) in tree.nodes.iter().enumerate() {
        let id = NodeId(index as u32);
        assert!(node.depth <= tree.config.depth_limit);
        match node.children {
            Some(children) => {
                assert!(node.objects.is_empty(), "internal node {:?} holds objects", id);
                for (child, quadrant) in children.iter().zip(node.extent.quadrants()) {
                    let child = &tree.nodes[child.index()];
                    assert_eq!(child.depth, node.depth + 1);
                    assert_eq!(child.parent, Some(id));
                    assert_eq!(child.extent, quadrant);
                }
            }
            None => {
                for handle in &node.objects {
                    let shape = tree.shapes.get(handle).expect("leaf handle not tracked");
                    assert!(shape.intersects_extent(&node.extent));
                }
            }
        }
    }
    assert_eq!(tree.nodes[0].parent, None);
}

#[test]
fn root_subdivides_on_construction() {
    let qt = tree(2, 3);
    assert_eq!(qt.node_count(), 5);
    assert!(!qt.nodes[0].is_leaf());
    assert_eq!(qt.max_depth(), 1);
    assert_invariants(&qt);
}

#[test]
fn initial_levels_are_clamped_to_depth_limit() {
    let config = Config {
        node_capacity: 4,
        depth_limit: 2,
        initial_levels: 10,
    };
    let qt: QuadTree = QuadTree::new_with_config(bounds(), config).unwrap();
    assert_eq!(qt.node_count(), 1 + 4 + 16);
    assert_eq!(qt.max_depth(), 2);
    assert_invariants(&qt);
}

#[test]
fn full_leaf_splits_on_next_insertion() {
    let mut qt = tree(2, 3);
    assert!(qt.insert(&Entity::point(0, 10.0, 10.0)));
    assert!(qt.insert(&Entity::point(1, 15.0, 15.0)));
    let top_left = qt.nodes[0].children.unwrap()[0];
    assert!(qt.nodes[top_left.index()].is_leaf());
    assert_eq!(qt.nodes[top_left.index()].objects.len(), 2);

    assert!(qt.insert(&Entity::point(2, 12.0, 12.0)));
    assert!(!qt.nodes[top_left.index()].is_leaf());
    assert!(qt.nodes[top_left.index()].objects.is_empty());
    assert_invariants(&qt);
}

#[test]
fn leaves_at_depth_limit_exceed_capacity() {
    let mut qt = tree(1, 3);
    for handle in 0..50 {
        assert!(qt.insert(&Entity::point(handle, 7.0, 7.0)));
    }
    assert_eq!(qt.max_depth(), 3);
    let crowded = qt
        .nodes
        .iter()
        .filter(|node| node.is_leaf() && node.objects.len() > 1)
        .count();
    assert_eq!(crowded, 1);
    assert_invariants(&qt);
}

#[test]
fn subdivision_hands_straddling_objects_to_every_touched_child() {
    // Depth limit 2 keeps the grandchildren as leaves.
    let mut qt = tree(1, 2);
    // Covers the centre of the top-left quadrant, so all four of its children.
    let big = Entity::rectangle(0, Rectangle::new(25.0, 25.0, 10.0, 10.0));
    assert!(qt.insert(&big));
    assert!(qt.insert(&Entity::point(1, 5.0, 5.0)));

    let top_left = qt.nodes[0].children.unwrap()[0];
    let grandchildren = qt.nodes[top_left.index()].children.unwrap();
    for child in grandchildren {
        assert!(qt.nodes[child.index()].objects.contains(&0));
    }
    assert_invariants(&qt);
}

#[test]
fn rejected_insertion_leaves_no_state() {
    let mut qt = tree(2, 3);
    let nodes_before = qt.node_count();
    assert!(!qt.insert(&Entity::point(9, 150.0, 150.0)));
    assert!(!qt.contains(9));
    assert!(qt.is_empty());
    assert_eq!(qt.node_count(), nodes_before);
    assert!(qt.nodes.iter().all(|node| node.objects.is_empty()));
}

#[test]
fn erase_keeps_the_subdivided_shape() {
    let mut qt = tree(1, 3);
    for handle in 0..4 {
        qt.insert(&Entity::point(handle, 10.0 + handle as f32, 10.0));
    }
    let nodes = qt.node_count();
    for handle in 0..4 {
        assert!(qt.erase_handle(handle));
    }
    assert!(qt.is_empty());
    assert_eq!(qt.node_count(), nodes);
    assert!(qt.nodes.iter().all(|node| node.objects.is_empty()));
    assert_invariants(&qt);
}

#[test]
fn random_insert_erase_cycles_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut qt = tree(3, 5);
    let mut live: Vec<u32> = Vec::new();

    for step in 0..2000u32 {
        if live.is_empty() || rng.gen_bool(0.6) {
            let entity = Entity::circle(
                step,
                rng.gen_range(-10.0..110.0),
                rng.gen_range(-10.0..110.0),
                rng.gen_range(0.0..8.0),
            );
            if qt.insert(&entity) {
                live.push(step);
            }
        } else {
            let handle = live.swap_remove(rng.gen_range(0..live.len()));
            assert!(qt.erase_handle(handle));
        }
        if step % 100 == 0 {
            assert_invariants(&qt);
        }
    }

    assert_eq!(qt.len(), live.len());
    assert_invariants(&qt);
    for node in qt.nodes.iter().filter(|node| node.is_leaf()) {
        for handle in &node.objects {
            assert!(live.contains(handle));
        }
    }
}
