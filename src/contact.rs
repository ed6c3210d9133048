//! Indices and the grouped result returned by the grouper.

use std::fmt;

/// Position of a contact in the input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactIndex(usize);

impl ContactIndex {
    pub fn new(index: usize) -> Self {
        ContactIndex(index)
    }

    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for ContactIndex {
    fn from(index: usize) -> Self {
        ContactIndex(index)
    }
}

impl fmt::Display for ContactIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Label of a discovered group. Ids are handed out densely from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(usize);

impl GroupId {
    pub(crate) fn first() -> Self {
        GroupId(0)
    }

    pub(crate) fn next(self) -> Self {
        GroupId(self.0 + 1)
    }

    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Contacts partitioned into groups of the same person.
///
/// Groups are ordered by their lowest member index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactGroups {
    groups: Vec<Vec<ContactIndex>>,
}

impl ContactGroups {
    pub(crate) fn from_groups(groups: Vec<Vec<ContactIndex>>) -> Self {
        ContactGroups { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[ContactIndex]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Position of the group holding `contact`, if the contact was part of the input.
    pub fn group_of(&self, contact: ContactIndex) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.contains(&contact))
    }

    pub fn to_indices(&self) -> Vec<Vec<usize>> {
        self.groups
            .iter()
            .map(|group| group.iter().map(|index| index.as_usize()).collect())
            .collect()
    }

    pub fn into_inner(self) -> Vec<Vec<ContactIndex>> {
        self.groups
    }
}

// Renders as `[[0, 2, 3], [1]]`.
impl fmt::Display for ContactGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (j, index) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{index}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
