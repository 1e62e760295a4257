use std::collections::BTreeMap;

use serde::Serialize;

/// Founder names for one company, in discovery order, unique by exact
/// string match (case-sensitive). Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FounderList {
    names: Vec<String>,
}

impl FounderList {
    /// Appends the name unless an identical one is already present.
    /// Returns true when the name was newly added.
    pub fn insert(&mut self, name: String) -> bool {
        if self.names.iter().any(|existing| *existing == name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Company name → founder list. A company appears at most once; a later
/// insert for the same name overwrites the earlier one. Serializes as a
/// bare JSON object with sorted keys.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ResultMap {
    companies: BTreeMap<String, FounderList>,
}

impl ResultMap {
    pub fn insert(&mut self, company: String, founders: FounderList) {
        self.companies.insert(company, founders);
    }

    pub fn get(&self, company: &str) -> Option<&FounderList> {
        self.companies.get(company)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}
