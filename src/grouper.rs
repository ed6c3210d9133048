//! Groups contacts that share identifying strings, directly or transitively.
//!
//! Contacts are nodes of an implicit graph with an edge between any two
//! contacts that share a string. Each connected component becomes one group.

use crate::{
    assignment::GroupAssignment,
    contact::{ContactGroups, ContactIndex, GroupId},
    error::{GroupingError, Result},
    index::IdentifierIndex,
};

/// Order of contacts within each group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemberOrder {
    /// Ascending contact index.
    #[default]
    Index,
    /// The order the depth-first traversal reached each contact.
    Visit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrouperConfig {
    pub max_contacts: Option<usize>,
    pub member_order: MemberOrder,
}

pub struct ContactGrouperBuilder {
    config: GrouperConfig,
}

impl ContactGrouperBuilder {
    pub fn new() -> Self {
        ContactGrouperBuilder {
            config: GrouperConfig::default(),
        }
    }

    /// Reject inputs with more than `limit` contacts.
    pub fn max_contacts(mut self, limit: usize) -> Self {
        self.config.max_contacts = Some(limit);
        self
    }

    pub fn member_order(mut self, order: MemberOrder) -> Self {
        self.config.member_order = order;
        self
    }

    pub fn build(self) -> ContactGrouper {
        ContactGrouper {
            config: self.config,
        }
    }
}

impl Default for ContactGrouperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Partitions a contact list into groups of the same person.
///
/// Holds configuration only; every call to [`ContactGrouper::group`] builds
/// and drops its own index and assignment buffer.
#[derive(Clone, Debug, Default)]
pub struct ContactGrouper {
    config: GrouperConfig,
}

impl ContactGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ContactGrouperBuilder {
        ContactGrouperBuilder::new()
    }

    pub fn config(&self) -> &GrouperConfig {
        &self.config
    }

    pub fn group<C, S>(&self, contacts: &[C]) -> Result<ContactGroups>
    where
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        if let Some(limit) = self.config.max_contacts {
            if contacts.len() > limit {
                tracing::warn!(contacts = contacts.len(), limit, "rejecting oversized input");
                return Err(GroupingError::InputTooLarge {
                    contacts: contacts.len(),
                    limit,
                });
            }
        }

        let index = IdentifierIndex::build(contacts);
        tracing::debug!(
            contacts = contacts.len(),
            identifiers = index.len(),
            "grouping contacts"
        );

        let mut assignment = GroupAssignment::new(contacts.len());
        let mut visit_order = Vec::new();
        let mut group = GroupId::first();
        for i in 0..contacts.len() {
            let start = ContactIndex::new(i);
            if assignment.is_assigned(start) {
                continue;
            }
            let mut members = Vec::new();
            visit_component(contacts, &index, &mut assignment, start, group, &mut members)?;
            tracing::trace!(group = group.as_usize(), size = members.len(), "found group");
            if self.config.member_order == MemberOrder::Visit {
                visit_order.push(members);
            }
            group = group.next();
        }

        let groups = match self.config.member_order {
            MemberOrder::Index => assignment.into_groups(),
            MemberOrder::Visit => ContactGroups::from_groups(visit_order),
        };
        tracing::debug!(groups = groups.len(), "grouping complete");
        Ok(groups)
    }
}

/// A contact whose neighbors are still being walked.
struct Frame {
    contact: ContactIndex,
    identifier: usize,
    neighbor: usize,
}

impl Frame {
    fn new(contact: ContactIndex) -> Self {
        Frame {
            contact,
            identifier: 0,
            neighbor: 0,
        }
    }
}

/// Depth-first walk from `start`, assigning every reachable contact to `group`.
///
/// Uses an explicit frame stack in place of recursion. Frames advance through
/// the contact's strings in order, and through each string's contacts in
/// insertion order, so contacts are reached in the same order a recursive
/// walk would reach them. The stack never holds more than one frame per
/// contact.
fn visit_component<C, S>(
    contacts: &[C],
    index: &IdentifierIndex<'_>,
    assignment: &mut GroupAssignment,
    start: ContactIndex,
    group: GroupId,
    visited: &mut Vec<ContactIndex>,
) -> Result<()>
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    assignment.assign(start, group)?;
    visited.push(start);
    let mut stack = vec![Frame::new(start)];

    while let Some(frame) = stack.last_mut() {
        let identifiers = contacts[frame.contact.as_usize()].as_ref();
        let Some(identifier) = identifiers.get(frame.identifier) else {
            stack.pop();
            continue;
        };
        let neighbors = index.contacts_with(identifier.as_ref());
        let Some(&neighbor) = neighbors.get(frame.neighbor) else {
            frame.identifier += 1;
            frame.neighbor = 0;
            continue;
        };
        frame.neighbor += 1;

        if !assignment.is_assigned(neighbor) {
            assignment.assign(neighbor, group)?;
            visited.push(neighbor);
            stack.push(Frame::new(neighbor));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example() -> Vec<Vec<&'static str>> {
        vec![
            vec!["John", "john@gmail.com", "john@fb.com"],
            vec!["Dan", "dan@gmail.com", "+1234567"],
            vec!["john123", "+5412312", "john123@skype.com"],
            vec!["john1985", "+5412312", "john@fb.com"],
        ]
    }

    fn extended_example() -> Vec<Vec<&'static str>> {
        let mut contacts = worked_example();
        contacts.push(vec!["Dan", "dan@gmail.com", "+1234567"]);
        contacts.push(vec!["dan@gmail.com", "dan@hotmail.com"]);
        contacts.push(vec!["john@gmail.com"]);
        contacts
    }

    #[test]
    fn groups_worked_example() -> anyhow::Result<()> {
        let groups = ContactGrouper::new().group(&worked_example())?;
        assert_eq!(groups.to_indices(), vec![vec![0, 2, 3], vec![1]]);
        Ok(())
    }

    #[test]
    fn groups_extended_example() -> anyhow::Result<()> {
        let groups = ContactGrouper::new().group(&extended_example())?;
        assert_eq!(groups.to_indices(), vec![vec![0, 2, 3, 6], vec![1, 4, 5]]);
        assert_eq!(groups.to_string(), "[[0, 2, 3, 6], [1, 4, 5]]");
        Ok(())
    }

    #[test]
    fn empty_input_has_no_groups() -> anyhow::Result<()> {
        let contacts: Vec<Vec<String>> = Vec::new();
        assert!(ContactGrouper::new().group(&contacts)?.is_empty());
        Ok(())
    }

    #[test]
    fn unrelated_contacts_are_singletons() -> anyhow::Result<()> {
        let groups = ContactGrouper::new().group(&[["a"], ["b"], ["c"]])?;
        assert_eq!(groups.to_indices(), vec![vec![0], vec![1], vec![2]]);
        Ok(())
    }

    #[test]
    fn empty_contact_is_its_own_group() -> anyhow::Result<()> {
        let contacts = vec![vec!["a"], vec![], vec!["a"]];
        let groups = ContactGrouper::new().group(&contacts)?;
        assert_eq!(groups.to_indices(), vec![vec![0, 2], vec![1]]);
        Ok(())
    }

    #[test]
    fn duplicates_and_repeated_strings_are_harmless() -> anyhow::Result<()> {
        let contacts = vec![vec!["x", "x", "y"], vec!["x", "x", "y"], vec!["z", "z"]];
        let groups = ContactGrouper::new().group(&contacts)?;
        assert_eq!(groups.to_indices(), vec![vec![0, 1], vec![2]]);
        Ok(())
    }

    #[test]
    fn cycles_terminate() -> anyhow::Result<()> {
        let contacts = vec![vec!["a", "b"], vec!["b", "c"], vec!["c", "a"]];
        let groups = ContactGrouper::new().group(&contacts)?;
        assert_eq!(groups.to_indices(), vec![vec![0, 1, 2]]);
        Ok(())
    }

    #[test]
    fn rejects_input_over_limit() {
        let grouper = ContactGrouper::builder().max_contacts(3).build();
        let contacts = extended_example();
        assert!(matches!(
            grouper.group(&contacts),
            Err(GroupingError::InputTooLarge {
                contacts: 7,
                limit: 3
            })
        ));
    }

    #[test]
    fn accepts_input_at_limit() -> anyhow::Result<()> {
        let grouper = ContactGrouper::builder().max_contacts(4).build();
        assert_eq!(grouper.config().max_contacts, Some(4));
        let groups = grouper.group(&worked_example())?;
        assert_eq!(groups.len(), 2);
        Ok(())
    }

    #[test]
    fn visit_order_follows_traversal() -> anyhow::Result<()> {
        // 0 reaches 3 through "b" before 1 and 2 through "a".
        let contacts = vec![vec!["b", "a"], vec!["a"], vec!["a"], vec!["b"]];
        let by_index = ContactGrouper::new().group(&contacts)?;
        let by_visit = ContactGrouper::builder()
            .member_order(MemberOrder::Visit)
            .build()
            .group(&contacts)?;
        assert_eq!(by_index.to_indices(), vec![vec![0, 1, 2, 3]]);
        assert_eq!(by_visit.to_indices(), vec![vec![0, 3, 1, 2]]);
        Ok(())
    }

    #[test]
    fn visit_order_is_depth_first() -> anyhow::Result<()> {
        // 1 is reached from 0 and walks on to 3 before 0 gets to 2.
        let contacts = vec![vec!["a", "c"], vec!["a", "b"], vec!["c"], vec!["b"]];
        let groups = ContactGrouper::builder()
            .member_order(MemberOrder::Visit)
            .build()
            .group(&contacts)?;
        assert_eq!(groups.to_indices(), vec![vec![0, 1, 3, 2]]);
        Ok(())
    }

    #[test]
    fn long_chain_does_not_overflow_stack() -> anyhow::Result<()> {
        let contacts: Vec<Vec<String>> = (0..100_000)
            .map(|i| vec![format!("id{i}"), format!("id{}", i + 1)])
            .collect();
        let groups = ContactGrouper::new().group(&contacts)?;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.iter().next().map(<[_]>::len), Some(100_000));
        Ok(())
    }

    #[test]
    fn repeated_calls_agree() -> anyhow::Result<()> {
        let grouper = ContactGrouper::new();
        let contacts = extended_example();
        assert_eq!(grouper.group(&contacts)?, grouper.group(&contacts)?);
        Ok(())
    }
}
