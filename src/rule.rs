use crate::{
    error::RDFEthosError,
    term::{Term, Triple},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Bound(Term),
    Unbound(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Slot; 3]", into = "[Slot; 3]")]
pub struct Atom {
    pub subject: Slot,
    pub predicate: Slot,
    pub object: Slot,
}

impl Atom {
    pub fn new(subject: Slot, predicate: Slot, object: Slot) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    fn slots(&self) -> [&Slot; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    pub(crate) fn apply(&self, substitution: &Substitution) -> Result<Triple, RDFEthosError> {
        let ground = |slot: &Slot| match slot {
            Slot::Bound(term) => Ok(term.clone()),
            Slot::Unbound(variable) => substitution
                .get(variable)
                .cloned()
                .ok_or(RDFEthosError::BadRuleApplication),
        };
        Ok(Triple::new(
            ground(&self.subject)?,
            ground(&self.predicate)?,
            ground(&self.object)?,
        ))
    }

    pub(crate) fn unify(&self, claim: &Triple, substitution: &Substitution) -> Option<Substitution> {
        let mut extended = substitution.clone();
        let terms = [&claim.subject, &claim.predicate, &claim.object];
        for (slot, term) in self.slots().into_iter().zip(terms) {
            match slot {
                Slot::Bound(bound) => {
                    if bound != term {
                        return None;
                    }
                }
                Slot::Unbound(variable) => match extended.get(variable) {
                    Some(existing) if existing != term => return None,
                    Some(_) => {}
                    None => {
                        extended.insert(variable.clone(), term.clone());
                    }
                },
            }
        }
        Some(extended)
    }
}

impl From<[Slot; 3]> for Atom {
    fn from([subject, predicate, object]: [Slot; 3]) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<Atom> for [Slot; 3] {
    fn from(atom: Atom) -> Self {
        [atom.subject, atom.predicate, atom.object]
    }
}

pub(crate) type Substitution = BTreeMap<String, Term>;

/// a Horn clause over claim templates; an empty body makes the rule an axiom
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct Rule {
    if_all: Vec<Atom>,
    then: Vec<Atom>,
}

#[derive(Deserialize)]
struct RawRule {
    if_all: Vec<Atom>,
    then: Vec<Atom>,
}

impl TryFrom<RawRule> for Rule {
    type Error = RDFEthosError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        Self::new(raw.if_all, raw.then)
    }
}

impl Rule {
    pub fn new(if_all: Vec<Atom>, then: Vec<Atom>) -> Result<Self, RDFEthosError> {
        let body_variables: BTreeSet<&str> = if_all
            .iter()
            .flat_map(Atom::slots)
            .filter_map(|slot| match slot {
                Slot::Unbound(variable) => Some(variable.as_str()),
                Slot::Bound(_) => None,
            })
            .collect();
        for slot in then.iter().flat_map(Atom::slots) {
            if let Slot::Unbound(variable) = slot {
                if !body_variables.contains(variable.as_str()) {
                    return Err(RDFEthosError::UnboundRuleVariable(variable.clone()));
                }
            }
        }
        Ok(Self { if_all, then })
    }

    pub fn if_all(&self) -> &[Atom] {
        &self.if_all
    }

    pub fn then(&self) -> &[Atom] {
        &self.then
    }

    /// variables in canonical order (first occurrence across `if_all` then
    /// `then`); positional proof instantiations follow this order, so the wire
    /// format never carries variable names
    pub fn variables(&self) -> Vec<&str> {
        let mut ordered = Vec::new();
        let mut seen = BTreeSet::new();
        for atom in self.if_all.iter().chain(&self.then) {
            for slot in atom.slots() {
                if let Slot::Unbound(variable) = slot {
                    if seen.insert(variable.as_str()) {
                        ordered.push(variable.as_str());
                    }
                }
            }
        }
        ordered
    }
}
