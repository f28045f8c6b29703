use crate::{
    claim_graph::ClaimGraph,
    error::RDFEthosError,
    rule::{Atom, Rule, Slot, Substitution},
    term::{Term, Triple},
    validate::RuleApplication,
};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

// known claims, indexed by predicate for body matching
#[derive(Default)]
struct FactStore {
    all: BTreeSet<Triple>,
    by_predicate: BTreeMap<Term, BTreeSet<Triple>>,
}

impl FactStore {
    fn contains(&self, claim: &Triple) -> bool {
        self.all.contains(claim)
    }

    fn insert(&mut self, claim: Triple) {
        if self.all.insert(claim.clone()) {
            self.by_predicate
                .entry(claim.predicate.clone())
                .or_default()
                .insert(claim);
        }
    }

    fn candidates<'a>(
        &'a self,
        atom: &Atom,
        substitution: &'a Substitution,
    ) -> Box<dyn Iterator<Item = &'a Triple> + 'a> {
        let predicate = match &atom.predicate {
            Slot::Bound(term) => Some(term),
            Slot::Unbound(variable) => substitution.get(variable),
        };
        match predicate {
            Some(predicate) => Box::new(self.by_predicate.get(predicate).into_iter().flatten()),
            None => Box::new(self.all.iter()),
        }
    }
}

impl From<&ClaimGraph> for FactStore {
    fn from(graph: &ClaimGraph) -> Self {
        let mut store = Self::default();
        for claim in graph.iter() {
            store.insert(claim.clone());
        }
        store
    }
}

// every substitution under which all of `atoms` hold in `facts`
fn match_body(
    atoms: &[Atom],
    substitution: &Substitution,
    facts: &FactStore,
    matches: &mut Vec<Substitution>,
) {
    match atoms.split_first() {
        None => matches.push(substitution.clone()),
        Some((first, rest)) => {
            for claim in facts.candidates(first, substitution) {
                if let Some(extended) = first.unify(claim, substitution) {
                    match_body(rest, &extended, facts, matches);
                }
            }
        }
    }
}

/// forward-chain from premises under rules until every goal is reached
pub fn prove(
    premises: &ClaimGraph,
    goals: &[Triple],
    rules: &[Rule],
) -> Result<Vec<RuleApplication>, RDFEthosError> {
    let mut facts = FactStore::from(premises);
    let mut applications = Vec::new();

    let proved = |facts: &FactStore| goals.iter().all(|goal| facts.contains(goal));
    if proved(&facts) {
        return Ok(applications);
    }

    loop {
        let mut grew = false;
        for (index, rule) in rules.iter().enumerate() {
            let mut matches = Vec::new();
            match_body(rule.if_all(), &Substitution::new(), &facts, &mut matches);
            for substitution in matches {
                let head = rule
                    .then()
                    .iter()
                    .map(|atom| atom.apply(&substitution))
                    .collect::<Result<Vec<_>, _>>()?;
                if head.iter().all(|claim| facts.contains(claim)) {
                    continue;
                }
                for claim in head {
                    facts.insert(claim);
                }
                applications.push(RuleApplication {
                    rule_index: index as u32,
                    instantiations: rule
                        .variables()
                        .iter()
                        .map(|variable| substitution[*variable].clone())
                        .collect(),
                });
                grew = true;
                if proved(&facts) {
                    debug!(
                        "proved {} goal(s) in {} step(s)",
                        goals.len(),
                        applications.len()
                    );
                    return Ok(applications);
                }
            }
        }
        if !grew {
            break;
        }
    }

    debug!(
        "saturated at {} claim(s) without reaching the goals",
        facts.all.len()
    );
    Err(RDFEthosError::CannotProve)
}
