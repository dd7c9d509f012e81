//! Nested-set index arithmetic for the category forest.
//!
//! Categories live in one global left/right sequence; every structural
//! change is expressed as a plan of interval shifts that the repository
//! executes as bulk updates. Keeping the arithmetic here, free of any
//! database types, lets the invariants be tested without I/O.
//!
//! Invariants maintained across every plan:
//! - `lft < rgt` for every node
//! - intervals are pairwise disjoint or strictly nested
//! - the union of all `lft`/`rgt` values is a gapless `1..=2n` sequence

use uuid::Uuid;

use crate::contract::model::AssetCategory;

/// Open or close a gap in the index sequence: every index >= `at`
/// moves by `width` (positive to open, callers negate for closing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapShift {
    pub at: i64,
    pub width: i64,
}

/// Placement of a freshly created node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertPlan {
    pub lft: i64,
    pub rgt: i64,
    pub depth: i32,
    /// Shift to apply before the insert; `None` for appended roots.
    pub shift: Option<GapShift>,
}

impl InsertPlan {
    /// Insert as the last child of `parent`.
    ///
    /// The gap opens at the parent's current `rgt`, so the parent and all
    /// its ancestors widen while everything right of the parent slides over.
    pub fn as_child_of(parent: &AssetCategory) -> Self {
        InsertPlan {
            lft: parent.rgt,
            rgt: parent.rgt + 1,
            depth: parent.depth + 1,
            shift: Some(GapShift {
                at: parent.rgt,
                width: 2,
            }),
        }
    }

    /// Append a new root after the last tree in the forest.
    ///
    /// `max_rgt` is the highest `rgt` currently stored (0 for an empty
    /// forest); roots sit side by side so no shifting is needed.
    pub fn as_root(max_rgt: i64) -> Self {
        InsertPlan {
            lft: max_rgt + 1,
            rgt: max_rgt + 2,
            depth: 0,
            shift: None,
        }
    }
}

/// Removal of a whole subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePlan {
    pub lft: i64,
    pub rgt: i64,
    /// Number of index positions the subtree occupied.
    pub width: i64,
}

impl DeletePlan {
    /// Delete `node` and everything inside its interval; indexes right of
    /// the subtree close over the hole.
    pub fn for_subtree(node: &AssetCategory) -> Self {
        DeletePlan {
            lft: node.lft,
            rgt: node.rgt,
            width: node.rgt - node.lft + 1,
        }
    }
}

/// Relocation of a subtree, executed in five bulk steps:
///
/// 1. negate `lft`/`rgt` of rows with `lft` in `[lft, rgt]` (parks them
///    outside the positive sequence)
/// 2. close the vacated gap: subtract `width` from indexes > `rgt`
/// 3. open a gap of `width` at `gap_open_at` (negated rows unaffected)
/// 4. re-home parked rows: `lft = index_offset - lft`,
///    `rgt = index_offset - rgt`, `depth += depth_delta` where `lft < 0`
/// 5. point the subtree root's `parent_id` at `new_parent_id`
///
/// `gap_open_at` is expressed in post-step-2 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub lft: i64,
    pub rgt: i64,
    pub width: i64,
    pub gap_open_at: i64,
    pub index_offset: i64,
    pub depth_delta: i32,
    pub new_parent_id: Option<Uuid>,
}

impl MovePlan {
    /// Move `node`'s subtree to be the last child of `parent`.
    ///
    /// Callers must reject moves where `parent` lies inside `node`'s
    /// subtree before building the plan; the arithmetic assumes the
    /// destination survives step 2 intact.
    pub fn under_parent(node: &AssetCategory, parent: &AssetCategory) -> Self {
        let width = node.rgt - node.lft + 1;
        // Parent's rgt after the vacated gap closes.
        let parent_rgt = if parent.rgt > node.rgt {
            parent.rgt - width
        } else {
            parent.rgt
        };
        MovePlan {
            lft: node.lft,
            rgt: node.rgt,
            width,
            gap_open_at: parent_rgt,
            index_offset: parent_rgt - node.lft,
            depth_delta: parent.depth + 1 - node.depth,
            new_parent_id: Some(parent.id),
        }
    }

    /// Detach `node`'s subtree and append it as a new root.
    ///
    /// `max_rgt` is the highest `rgt` before the move.
    pub fn to_root(node: &AssetCategory, max_rgt: i64) -> Self {
        let width = node.rgt - node.lft + 1;
        let destination = max_rgt - width + 1;
        MovePlan {
            lft: node.lft,
            rgt: node.rgt,
            width,
            gap_open_at: destination,
            index_offset: destination - node.lft,
            depth_delta: -node.depth,
            new_parent_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[derive(Debug, Clone)]
    struct Node {
        id: u32,
        lft: i64,
        rgt: i64,
        depth: i32,
    }

    fn category(lft: i64, rgt: i64, depth: i32) -> AssetCategory {
        AssetCategory {
            id: Uuid::new_v4(),
            parent_id: None,
            name: "cat".into(),
            description: None,
            lft,
            rgt,
            depth,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Replays a plan's shifts the way the repository's bulk updates would.
    fn apply_insert(forest: &mut Vec<Node>, id: u32, plan: InsertPlan) {
        if let Some(shift) = plan.shift {
            for node in forest.iter_mut() {
                if node.lft >= shift.at {
                    node.lft += shift.width;
                }
                if node.rgt >= shift.at {
                    node.rgt += shift.width;
                }
            }
        }
        forest.push(Node {
            id,
            lft: plan.lft,
            rgt: plan.rgt,
            depth: plan.depth,
        });
    }

    fn apply_delete(forest: &mut Vec<Node>, plan: DeletePlan) {
        forest.retain(|n| n.lft < plan.lft || n.lft > plan.rgt);
        for node in forest.iter_mut() {
            if node.lft > plan.rgt {
                node.lft -= plan.width;
            }
            if node.rgt > plan.rgt {
                node.rgt -= plan.width;
            }
        }
    }

    fn apply_move(forest: &mut Vec<Node>, plan: MovePlan) {
        // 1: park the subtree at negated indexes
        for node in forest.iter_mut() {
            if node.lft >= plan.lft && node.lft <= plan.rgt {
                node.lft = -node.lft;
                node.rgt = -node.rgt;
            }
        }
        // 2: close the vacated gap
        for node in forest.iter_mut() {
            if node.lft > plan.rgt {
                node.lft -= plan.width;
            }
            if node.rgt > plan.rgt {
                node.rgt -= plan.width;
            }
        }
        // 3: open the destination gap
        for node in forest.iter_mut() {
            if node.lft >= plan.gap_open_at {
                node.lft += plan.width;
            }
            if node.rgt >= plan.gap_open_at {
                node.rgt += plan.width;
            }
        }
        // 4: re-home the parked rows
        for node in forest.iter_mut() {
            if node.lft < 0 {
                node.lft = plan.index_offset - node.lft;
                node.rgt = plan.index_offset - node.rgt;
                node.depth += plan.depth_delta;
            }
        }
    }

    fn assert_well_formed(forest: &[Node]) {
        let mut indexes: Vec<i64> = Vec::new();
        for node in forest {
            assert!(
                node.lft < node.rgt,
                "node {} has lft {} >= rgt {}",
                node.id,
                node.lft,
                node.rgt
            );
            indexes.push(node.lft);
            indexes.push(node.rgt);
        }
        indexes.sort_unstable();
        let expected: Vec<i64> = (1..=forest.len() as i64 * 2).collect();
        assert_eq!(indexes, expected, "index sequence has gaps or duplicates");

        for a in forest {
            for b in forest {
                if a.id == b.id {
                    continue;
                }
                let disjoint = a.rgt < b.lft || b.rgt < a.lft;
                let a_in_b = a.lft > b.lft && a.rgt < b.rgt;
                let b_in_a = b.lft > a.lft && b.rgt < a.rgt;
                assert!(
                    disjoint || a_in_b || b_in_a,
                    "nodes {} [{},{}] and {} [{},{}] overlap",
                    a.id,
                    a.lft,
                    a.rgt,
                    b.id,
                    b.lft,
                    b.rgt
                );
            }
        }
    }

    fn find(forest: &[Node], id: u32) -> &Node {
        forest
            .iter()
            .find(|n| n.id == id)
            .unwrap_or_else(|| panic!("node {id} missing"))
    }

    fn max_rgt(forest: &[Node]) -> i64 {
        forest.iter().map(|n| n.rgt).max().unwrap_or(0)
    }

    fn contains(outer: &Node, inner: &Node) -> bool {
        inner.lft > outer.lft && inner.rgt < outer.rgt
    }

    /// Builds the fixture forest used by the move/delete tests:
    ///
    /// 1:[1,8] { 2:[2,5] { 3:[3,4] }, 4:[6,7] }   5:[9,12] { 6:[10,11] }
    fn fixture() -> Vec<Node> {
        let mut forest = Vec::new();
        let rgt = max_rgt(&forest);
        apply_insert(&mut forest, 1, InsertPlan::as_root(rgt));
        let n1 = category(find(&forest, 1).lft, find(&forest, 1).rgt, 0);
        apply_insert(&mut forest, 2, InsertPlan::as_child_of(&n1));
        let n2 = category(find(&forest, 2).lft, find(&forest, 2).rgt, 1);
        apply_insert(&mut forest, 3, InsertPlan::as_child_of(&n2));
        let n1 = category(find(&forest, 1).lft, find(&forest, 1).rgt, 0);
        apply_insert(&mut forest, 4, InsertPlan::as_child_of(&n1));
        let rgt = max_rgt(&forest);
        apply_insert(&mut forest, 5, InsertPlan::as_root(rgt));
        let n5 = category(find(&forest, 5).lft, find(&forest, 5).rgt, 0);
        apply_insert(&mut forest, 6, InsertPlan::as_child_of(&n5));
        forest
    }

    #[test]
    fn inserts_build_expected_intervals() {
        let forest = fixture();
        assert_well_formed(&forest);

        assert_eq!((find(&forest, 1).lft, find(&forest, 1).rgt), (1, 8));
        assert_eq!((find(&forest, 2).lft, find(&forest, 2).rgt), (2, 5));
        assert_eq!((find(&forest, 3).lft, find(&forest, 3).rgt), (3, 4));
        assert_eq!((find(&forest, 4).lft, find(&forest, 4).rgt), (6, 7));
        assert_eq!((find(&forest, 5).lft, find(&forest, 5).rgt), (9, 12));
        assert_eq!((find(&forest, 6).lft, find(&forest, 6).rgt), (10, 11));
        assert_eq!(find(&forest, 3).depth, 2);
        assert_eq!(find(&forest, 6).depth, 1);
    }

    #[test]
    fn insert_into_empty_forest_starts_at_one() {
        let plan = InsertPlan::as_root(0);
        assert_eq!((plan.lft, plan.rgt, plan.depth), (1, 2, 0));
        assert!(plan.shift.is_none());
    }

    #[test]
    fn delete_subtree_closes_the_gap() {
        let mut forest = fixture();
        let node2 = category(2, 5, 1);

        apply_delete(&mut forest, DeletePlan::for_subtree(&node2));

        assert_well_formed(&forest);
        assert_eq!(forest.len(), 4);
        assert!(forest.iter().all(|n| n.id != 2 && n.id != 3));
        assert_eq!((find(&forest, 1).lft, find(&forest, 1).rgt), (1, 4));
        assert_eq!((find(&forest, 4).lft, find(&forest, 4).rgt), (2, 3));
        assert_eq!((find(&forest, 5).lft, find(&forest, 5).rgt), (5, 8));
    }

    #[test]
    fn move_subtree_to_a_later_parent() {
        let mut forest = fixture();
        let node2 = category(2, 5, 1);
        let node5 = category(9, 12, 0);

        apply_move(&mut forest, MovePlan::under_parent(&node2, &node5));

        assert_well_formed(&forest);
        let n2 = find(&forest, 2);
        let n3 = find(&forest, 3);
        let n5 = find(&forest, 5);
        let n1 = find(&forest, 1);
        assert!(contains(n5, n2), "node 2 should now live under node 5");
        assert!(contains(n2, n3), "node 3 must follow its parent");
        assert!(!contains(n1, n2));
        assert_eq!(n2.depth, 1);
        assert_eq!(n3.depth, 2);
    }

    #[test]
    fn move_subtree_to_an_earlier_parent() {
        let mut forest = fixture();
        let node6 = category(10, 11, 1);
        let node2 = category(2, 5, 1);

        apply_move(&mut forest, MovePlan::under_parent(&node6, &node2));

        assert_well_formed(&forest);
        let n6 = find(&forest, 6);
        let n2 = find(&forest, 2);
        let n5 = find(&forest, 5);
        assert!(contains(n2, n6));
        assert!(!contains(n5, n6));
        assert_eq!(n6.depth, 2);
    }

    #[test]
    fn move_deep_subtree_to_root() {
        let mut forest = fixture();
        let node2 = category(2, 5, 1);

        let rgt = max_rgt(&forest);
        apply_move(&mut forest, MovePlan::to_root(&node2, rgt));

        assert_well_formed(&forest);
        let n2 = find(&forest, 2);
        let n3 = find(&forest, 3);
        let n1 = find(&forest, 1);
        assert_eq!(n2.depth, 0);
        assert_eq!(n3.depth, 1);
        assert!(!contains(n1, n2));
        assert!(contains(n2, n3));
        // Appended after every remaining tree.
        assert_eq!(n2.rgt, max_rgt(&forest));
    }

    #[test]
    fn move_under_current_parent_is_an_identity() {
        let mut forest = fixture();
        let before: Vec<(u32, i64, i64)> = forest.iter().map(|n| (n.id, n.lft, n.rgt)).collect();
        // Node 4 is already the last child of node 1.
        let node4 = category(6, 7, 1);
        let node1 = category(1, 8, 0);

        apply_move(&mut forest, MovePlan::under_parent(&node4, &node1));

        assert_well_formed(&forest);
        let after: Vec<(u32, i64, i64)> = forest.iter().map(|n| (n.id, n.lft, n.rgt)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn category_contains_covers_self_and_descendants() {
        let outer = category(2, 9, 1);
        let inner = category(3, 4, 2);
        let sibling = category(10, 11, 1);

        assert!(outer.contains(&outer));
        assert!(outer.contains(&inner));
        assert!(!outer.contains(&sibling));
        assert!(!inner.contains(&outer));
    }
}
