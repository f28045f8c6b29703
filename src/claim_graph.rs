use crate::term::{Term, Triple};
use std::collections::{BTreeMap, BTreeSet};

/// a set of claims with a locally scoped blank-node namespace: merging
/// renames the incoming side's blanks so unrelated anonymous entities can
/// never end up identified
#[derive(Clone, Debug, Default)]
pub struct ClaimGraph {
    claims: BTreeSet<Triple>,
    blank_labels: BTreeSet<String>,
    next_blank: usize,
}

impl ClaimGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn contains(&self, claim: &Triple) -> bool {
        self.claims.contains(claim)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.claims.iter()
    }

    // insertion assumes the claim's blanks already belong to this scope
    pub fn insert(&mut self, claim: Triple) {
        for term in [&claim.subject, &claim.predicate, &claim.object] {
            if let Term::Blank(label) = term {
                self.blank_labels.insert(label.clone());
            }
        }
        self.claims.insert(claim);
    }

    pub fn extend(&mut self, claims: impl IntoIterator<Item = Triple>) {
        for claim in claims {
            self.insert(claim);
        }
    }

    // mark a label as taken so fresh_blank can never collide with it
    pub fn reserve_label(&mut self, label: &str) {
        self.blank_labels.insert(label.to_string());
    }

    pub fn fresh_blank(&mut self) -> Term {
        loop {
            let label = format!("b{}", self.next_blank);
            self.next_blank += 1;
            if self.blank_labels.insert(label.clone()) {
                return Term::Blank(label);
            }
        }
    }

    /// set union; blanks of `other` are renamed to fresh labels first
    pub fn merge(&mut self, other: &ClaimGraph) {
        let mut renamed: BTreeMap<&str, Term> = BTreeMap::new();
        for label in &other.blank_labels {
            let fresh = self.fresh_blank();
            renamed.insert(label, fresh);
        }
        let rename = |term: &Term| match term {
            Term::Blank(label) => renamed[label.as_str()].clone(),
            other => other.clone(),
        };
        for claim in &other.claims {
            self.claims.insert(Triple::new(
                rename(&claim.subject),
                rename(&claim.predicate),
                rename(&claim.object),
            ));
        }
    }

    pub fn union(mut self, other: &ClaimGraph) -> Self {
        self.merge(other);
        self
    }
}

impl PartialEq for ClaimGraph {
    fn eq(&self, other: &Self) -> bool {
        self.claims == other.claims
    }
}

impl Eq for ClaimGraph {}

impl FromIterator<Triple> for ClaimGraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl IntoIterator for ClaimGraph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.into_iter()
    }
}
