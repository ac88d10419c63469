//! Family-tree grouping of relatives around the page subject.
//!
//! Relatives are flat records; grouping only looks at `relation`. Each
//! bucket keeps input order. Row order is fixed: parents, then siblings +
//! subject + partner, then children, grandchildren and everyone else.

use super::relative::{Relation, Relative};

/// Relatives partitioned by relation kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyGroups<'a> {
    pub parents: Vec<&'a Relative>,
    pub partner: Vec<&'a Relative>,
    pub siblings: Vec<&'a Relative>,
    pub children: Vec<&'a Relative>,
    pub grandchildren: Vec<&'a Relative>,
    pub other: Vec<&'a Relative>,
}

/// Layout row of the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRowKind {
    Parents,
    Subject,
    Children,
    Grandchildren,
    Other,
}

/// One node position inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSlot<'a> {
    Subject,
    Relative(&'a Relative),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub kind: TreeRowKind,
    pub slots: Vec<TreeSlot<'a>>,
}

/// Partitions relatives into the six buckets.
pub fn group_relatives(relatives: &[Relative]) -> FamilyGroups<'_> {
    let mut groups = FamilyGroups::default();
    for relative in relatives {
        let bucket = match relative.relation {
            Relation::Mother | Relation::Father => &mut groups.parents,
            Relation::Partner => &mut groups.partner,
            Relation::Brother | Relation::Sister => &mut groups.siblings,
            Relation::Son | Relation::Daughter => &mut groups.children,
            Relation::Grandson | Relation::Granddaughter => &mut groups.grandchildren,
            Relation::Other => &mut groups.other,
        };
        bucket.push(relative);
    }
    groups
}

impl<'a> FamilyGroups<'a> {
    /// Lays the buckets out in rows. Empty rows are omitted, except the
    /// subject row which always exists.
    pub fn rows(&self) -> Vec<TreeRow<'a>> {
        let mut rows = Vec::with_capacity(5);
        push_row(&mut rows, TreeRowKind::Parents, &self.parents);

        let mut middle: Vec<TreeSlot<'a>> = self
            .siblings
            .iter()
            .copied()
            .map(TreeSlot::Relative)
            .collect();
        middle.push(TreeSlot::Subject);
        middle.extend(self.partner.iter().copied().map(TreeSlot::Relative));
        rows.push(TreeRow {
            kind: TreeRowKind::Subject,
            slots: middle,
        });

        push_row(&mut rows, TreeRowKind::Children, &self.children);
        push_row(&mut rows, TreeRowKind::Grandchildren, &self.grandchildren);
        push_row(&mut rows, TreeRowKind::Other, &self.other);
        rows
    }
}

fn push_row<'a>(rows: &mut Vec<TreeRow<'a>>, kind: TreeRowKind, members: &[&'a Relative]) {
    if members.is_empty() {
        return;
    }
    rows.push(TreeRow {
        kind,
        slots: members.iter().copied().map(TreeSlot::Relative).collect(),
    });
}
