use std::collections::HashSet;

use crate::contact::{ContactGroups, ContactIndex};

/// A group of contacts collapsed into one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedContact {
    members: Vec<ContactIndex>,
    identifiers: Vec<String>,
}

impl MergedContact {
    pub fn members(&self) -> &[ContactIndex] {
        &self.members
    }

    /// Every distinct string of the members, in first-seen order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl ContactGroups {
    /// Collapses each group into a single contact.
    ///
    /// `contacts` must be the input these groups were computed from.
    pub fn merge<C, S>(&self, contacts: &[C]) -> Vec<MergedContact>
    where
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.iter()
            .map(|members| {
                let mut seen = HashSet::new();
                let identifiers = members
                    .iter()
                    .flat_map(|member| contacts[member.as_usize()].as_ref())
                    .map(|identifier| identifier.as_ref())
                    .filter(|identifier: &&str| seen.insert(*identifier))
                    .map(str::to_string)
                    .collect();
                MergedContact {
                    members: members.to_vec(),
                    identifiers,
                }
            })
            .collect()
    }
}
