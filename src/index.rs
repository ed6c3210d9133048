use std::collections::HashMap;

use crate::contact::ContactIndex;

/// Maps each identifying string to the contacts that carry it.
///
/// Keys borrow from the input contacts. Contact lists are kept in insertion
/// order, so a contact that repeats a string appears once per occurrence.
pub struct IdentifierIndex<'a> {
    map: HashMap<&'a str, Vec<ContactIndex>>,
}

impl<'a> IdentifierIndex<'a> {
    pub fn build<C, S>(contacts: &'a [C]) -> Self
    where
        C: AsRef<[S]>,
        S: AsRef<str> + 'a,
    {
        let mut map: HashMap<&'a str, Vec<ContactIndex>> = HashMap::new();
        for (i, contact) in contacts.iter().enumerate() {
            for identifier in contact.as_ref() {
                map.entry(identifier.as_ref())
                    .or_default()
                    .push(ContactIndex::new(i));
            }
        }
        IdentifierIndex { map }
    }

    pub fn contacts_with(&self, identifier: &str) -> &[ContactIndex] {
        self.map
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct identifying strings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(raw: &[usize]) -> Vec<ContactIndex> {
        raw.iter().copied().map(ContactIndex::new).collect()
    }

    #[test]
    fn lists_contacts_in_insertion_order() {
        let contacts = vec![
            vec!["John", "john@fb.com"],
            vec!["Dan"],
            vec!["john1985", "john@fb.com"],
        ];
        let index = IdentifierIndex::build(&contacts);
        assert_eq!(index.len(), 4);
        assert_eq!(index.contacts_with("john@fb.com"), indices(&[0, 2]));
        assert_eq!(index.contacts_with("Dan"), indices(&[1]));
    }

    #[test]
    fn unknown_identifier_has_no_contacts() {
        let contacts: Vec<Vec<String>> = vec![Vec::new()];
        let index = IdentifierIndex::build(&contacts);
        assert!(index.is_empty());
        assert!(index.contacts_with("nobody").is_empty());
    }

    #[test]
    fn repeated_identifier_within_contact_is_listed_twice() {
        let contacts = vec![vec!["x", "x"], vec!["x"]];
        let index = IdentifierIndex::build(&contacts);
        assert_eq!(index.contacts_with("x"), indices(&[0, 0, 1]));
    }
}
