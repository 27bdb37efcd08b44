use bstree::{Tree, TreeError};

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a hashset, returning `false` as
/// soon as the two disagree on an outcome.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut HashSet<i8>) -> bool {
    for op in ops {
        let agrees = match *op {
            Op::Insert(x) => tree.insert(x).is_ok() == set.insert(x),
            Op::Delete(x) => tree.delete(&x).is_ok() == set.remove(&x),
            Op::Update(old, new) => match tree.update(&old, new) {
                Ok(removed) => {
                    removed == old && set.remove(&old) && set.insert(new)
                }
                Err(TreeError::OldValueNotFound) => !set.contains(&old),
                Err(TreeError::NewValueExists) => set.contains(&old) && set.contains(&new),
                Err(_) => false,
            },
        };
        if !agrees {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && set.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn listing_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut HashSet::new());

    let values = tree.inorder();
    values.len() == tree.len() && values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| !tree.search(x))
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.search(x))
}

#[quickcheck]
fn insert_then_delete_restores_listing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    if tree.search(&x) {
        return tree.insert(x) == Err(TreeError::Duplicate);
    }

    let before = tree.inorder();
    tree.insert(x).is_ok() && tree.delete(&x) == Ok(x) && tree.inorder() == before
}

#[quickcheck]
fn failed_operations_leave_the_tree_alone(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let _ = tree.insert(x);
    let before = tree.inorder();

    tree.insert(x) == Err(TreeError::Duplicate)
        && tree.update(&x, x) == Err(TreeError::NewValueExists)
        && tree.inorder() == before
}

#[quickcheck]
fn height_never_exceeds_len(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.height() < tree.len() as isize && tree.height() >= -1
}
