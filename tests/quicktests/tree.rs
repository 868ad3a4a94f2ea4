use ordtree::OrderedTree;

use quickcheck_macros::quickcheck;

fn build(xs: &[String]) -> OrderedTree {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(x.clone()).unwrap();
    }

    tree
}

#[quickcheck]
fn traversal_is_sorted(xs: Vec<String>) -> bool {
    let tree = build(&xs);
    let values: Vec<&str> = tree.iter().collect();

    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn traversal_visits_every_insertion(xs: Vec<String>) -> bool {
    let tree = build(&xs);
    let mut visited = 0;
    tree.traverse_in_order(|_| visited += 1);

    visited == xs.len() && tree.len() == xs.len()
}

#[quickcheck]
fn traversal_matches_sorted_input(xs: Vec<String>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort();

    tree.iter().eq(sorted.iter().map(String::as_str))
}

#[quickcheck]
fn duplicates_are_kept(x: String, times: u8) -> bool {
    let times = usize::from(times % 16) + 1;
    let tree = build(&vec![x.clone(); times]);

    tree.iter().filter(|value| *value == x).count() == times && tree.height() == times
}

#[quickcheck]
fn callback_and_iterator_agree(xs: Vec<String>) -> bool {
    let tree = build(&xs);
    let mut visited = Vec::new();
    tree.traverse_in_order(|value| visited.push(value.to_string()));

    tree.iter().eq(visited.iter().map(String::as_str))
}

#[quickcheck]
fn dismantle_hands_back_every_value(xs: Vec<String>) -> bool {
    let tree = build(&xs);
    let mut released = tree.dismantle();
    released.sort();
    let mut xs = xs;
    xs.sort();

    released == xs
}

#[test]
fn destroying_an_empty_tree_is_a_no_op() {
    OrderedTree::new().destroy();
    assert!(OrderedTree::new().dismantle().is_empty());
}

#[test]
fn end_to_end_scenarios() {
    let cases: [(&[&str], &[&str]); 3] = [
        (&["banana", "apple", "cherry"], &["apple", "banana", "cherry"]),
        (&["b", "b", "a"], &["a", "b", "b"]),
        (&["x"], &["x"]),
    ];

    for (input, expected) in cases {
        let mut tree = OrderedTree::new();
        for value in input {
            tree.insert(value.to_string()).unwrap();
        }
        assert_eq!(tree.iter().collect::<Vec<_>>(), expected);
        tree.destroy();
    }
}
