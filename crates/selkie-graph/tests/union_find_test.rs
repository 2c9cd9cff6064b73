use selkie_graph::{LazyUnionFind, UnionFind, UnionFindError};

#[test]
fn union_find_starts_with_singleton_groups() {
    let uf = UnionFind::new(["a", "b", "c", "a"]);
    assert_eq!(uf.len(), 3);
    assert_eq!(uf.num_groups(), 3);
    assert_eq!(uf.find(&"b"), Some(&"b"));
    assert_eq!(uf.find(&"z"), None);
}

#[test]
fn find_agrees_for_all_members_after_union() {
    let mut uf = UnionFind::new(1..=6);
    uf.union(&1, &2).unwrap();
    uf.union(&3, &4).unwrap();
    uf.union(&5, &3).unwrap();
    let leader = uf.union(&1, &3).unwrap();

    for member in 1..=5 {
        assert_eq!(uf.find(&member), Some(&leader));
    }
    assert_eq!(uf.find(&6), Some(&6));
    assert_eq!(uf.num_groups(), 2);
    assert_eq!(uf.group(&leader).map(<[i32]>::len), Some(5));
}

#[test]
fn union_relabels_the_smaller_group() {
    let mut uf = UnionFind::new(["a", "b", "c"]);
    uf.union(&"b", &"c").unwrap();
    // {a} is smaller than {b, c}, so it takes b's name even though it was passed first.
    assert_eq!(uf.union(&"a", &"b"), Ok("b"));
    assert_eq!(uf.find(&"a"), Some(&"b"));
}

#[test]
fn union_keeps_the_first_leader_on_size_ties() {
    let mut uf = UnionFind::new(["a", "b"]);
    assert_eq!(uf.union(&"a", &"b"), Ok("a"));
}

#[test]
fn union_with_a_merged_away_group_name_is_an_error() {
    let mut uf = UnionFind::new(["a", "b", "c"]);
    uf.union(&"a", &"b").unwrap();
    assert_eq!(
        uf.union(&"b", &"c"),
        Err(UnionFindError::UnknownGroup {
            name: "\"b\"".to_string()
        })
    );
    assert_eq!(uf.num_groups(), 2);
}

#[test]
fn union_of_a_group_with_itself_is_a_no_op() {
    let mut uf = UnionFind::new(["a", "b"]);
    uf.union(&"a", &"b").unwrap();
    assert_eq!(uf.union(&"a", &"a"), Ok("a"));
    assert_eq!(uf.num_groups(), 1);
    assert_eq!(uf.group(&"a").map(<[&str]>::len), Some(2));
}

#[test]
fn union_members_reports_whether_groups_changed() {
    let mut uf = UnionFind::new(0..4);
    assert_eq!(uf.union_members(&0, &1), Ok(true));
    assert_eq!(uf.union_members(&1, &0), Ok(false));
    assert!(uf.same_group(&0, &1));
    assert!(!uf.same_group(&0, &2));
    assert!(uf.union_members(&0, &9).is_err());
}

#[test]
fn lazy_union_find_tracks_group_count() {
    let mut uf = LazyUnionFind::new(5);
    assert!(uf.union(0, 1));
    assert!(uf.union(2, 3));
    assert!(uf.union(1, 3));
    assert!(!uf.union(0, 2));
    assert_eq!(uf.num_groups(), 2);
    assert!(uf.same_group(0, 3));
    assert!(!uf.same_group(4, 0));
    assert_eq!(uf.find(2), uf.find(1));
}
