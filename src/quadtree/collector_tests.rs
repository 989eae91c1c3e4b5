use crate::geometry::Vec2;
use crate::quadtree::{NodeId, QuadTree, QueryList};

#[test]
fn test_new_list() {
    let list = QueryList::new(8).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.capacity(), 8);
    assert_eq!(list.grow(), 8);
}

#[test]
fn test_zero_growth_is_bumped() {
    let mut list = QueryList::with_growth(0, 0).unwrap();
    assert_eq!(list.grow(), 1);
    list.push(NodeId::ROOT).unwrap();
    assert_eq!(list.capacity(), 1);
}

#[test]
fn test_push_grows_by_the_growth_step() {
    let mut list = QueryList::new(1).unwrap();
    list.push(NodeId(3)).unwrap();
    assert_eq!(list.capacity(), 1);
    list.push(NodeId(5)).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.capacity(), 2);
    assert_eq!(list.grow(), 1);

    let mut list = QueryList::with_growth(2, 3).unwrap();
    for i in 0..6 {
        list.push(NodeId(i)).unwrap();
    }
    // 2 -> 5 -> 8
    assert_eq!(list.capacity(), 8);
    assert_eq!(list.as_slice(), &[NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4), NodeId(5)]);
}

#[test]
fn test_reset_keeps_capacity() {
    let mut list = QueryList::new(2).unwrap();
    for i in 0..5 {
        list.push(NodeId(i)).unwrap();
    }
    let capacity = list.capacity();
    list.reset();
    assert!(list.is_empty());
    assert_eq!(list.get(0), None);
    assert_eq!(list.capacity(), capacity);
}

#[test]
fn test_fill_appends_node_and_children() {
    let mut tree = QuadTree::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)).unwrap();
    let mut list = QueryList::new(1).unwrap();

    // an unsplit root has no children to append
    list.fill(&tree, tree.root()).unwrap();
    assert_eq!(list.len(), 1);

    tree.insert(1, Vec2::new(1.0, 1.0), 1.0).unwrap();
    tree.insert(2, Vec2::new(3.0, 3.0), 1.0).unwrap();
    list.reset();
    list.fill(&tree, tree.root()).unwrap();

    let children = tree.root_node().children().unwrap();
    assert_eq!(list.get(0), Some(tree.root()));
    assert_eq!(&list.as_slice()[1..], &children);
    assert_eq!(list.nodes(&tree).count(), 5);
    let mut payloads: Vec<i32> = list.payloads(&tree).copied().collect();
    payloads.sort();
    assert_eq!(payloads, vec![1, 2]);
}

#[test]
fn test_iteration() {
    let mut list = QueryList::new(4).unwrap();
    list.push(NodeId(1)).unwrap();
    list.push(NodeId(2)).unwrap();
    let collected: Vec<NodeId> = list.iter().collect();
    assert_eq!(collected, vec![NodeId(1), NodeId(2)]);
    let mut count = 0;
    for id in &list {
        assert!(id.index() > 0);
        count += 1;
    }
    assert_eq!(count, 2);
}
