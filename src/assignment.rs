use crate::contact::{ContactGroups, ContactIndex, GroupId};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Contact {contact} assigned to a group more than once")]
    AlreadyAssigned { contact: ContactIndex },
}

/// One group slot per contact. Each slot may be filled only once.
pub struct GroupAssignment(Vec<Option<GroupId>>);

impl GroupAssignment {
    pub fn new(num_contacts: usize) -> Self {
        GroupAssignment(vec![None; num_contacts])
    }

    pub fn assign(&mut self, contact: ContactIndex, group: GroupId) -> Result<(), Error> {
        let slot = &mut self.0[contact.as_usize()];
        if slot.is_some() {
            return Err(Error::AlreadyAssigned { contact });
        }
        *slot = Some(group);
        Ok(())
    }

    pub fn is_assigned(&self, contact: ContactIndex) -> bool {
        self.0[contact.as_usize()].is_some()
    }

    pub fn group_of(&self, contact: ContactIndex) -> Option<GroupId> {
        self.0[contact.as_usize()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collects contacts into their groups, walking contacts in index order.
    ///
    /// A group's slot is created the first time one of its members is seen, so
    /// groups come out ordered by lowest member. Unassigned contacts are
    /// skipped.
    pub fn into_groups(self) -> ContactGroups {
        let mut groups: Vec<Vec<ContactIndex>> = Vec::new();
        for (i, group) in self.0.into_iter().enumerate() {
            let Some(group) = group else {
                continue;
            };
            let id = group.as_usize();
            if groups.len() <= id {
                groups.resize_with(id + 1, Vec::new);
            }
            groups[id].push(ContactIndex::new(i));
        }
        ContactGroups::from_groups(groups)
    }
}
