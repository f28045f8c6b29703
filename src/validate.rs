use crate::{
    error::RDFEthosError,
    rule::{Rule, Substitution},
    term::{Term, Triple},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// one proof step: a rule plus terms for its variables in canonical order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleApplication {
    pub rule_index: u32,
    pub instantiations: Vec<Term>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatedClaims {
    pub assumed: BTreeSet<Triple>,
    pub implied: BTreeSet<Triple>,
}

/// replay a proof against the rules, splitting the claims it touches into
/// assumed and implied; if some fact set contains every assumed claim, each
/// implied claim is a consequence of that fact set under the rules
pub fn validate(
    rules: &[Rule],
    proof: &[RuleApplication],
) -> Result<ValidatedClaims, RDFEthosError> {
    let mut assumed = BTreeSet::new();
    let mut implied = BTreeSet::new();
    for application in proof {
        let rule = rules
            .get(application.rule_index as usize)
            .ok_or(RDFEthosError::BadRuleIndex)?;
        let variables = rule.variables();
        if variables.len() != application.instantiations.len() {
            return Err(RDFEthosError::BadRuleApplication);
        }
        let substitution: Substitution = variables
            .into_iter()
            .map(String::from)
            .zip(application.instantiations.iter().cloned())
            .collect();
        for atom in rule.if_all() {
            let claim = atom.apply(&substitution)?;
            if !implied.contains(&claim) {
                assumed.insert(claim);
            }
        }
        for atom in rule.then() {
            implied.insert(atom.apply(&substitution)?);
        }
    }
    Ok(ValidatedClaims { assumed, implied })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Atom, Slot};

    const ABILITY: &str = "https://example.com/Ability";
    const FLIGHT: &str = "https://example.com/Flight";
    const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    const PIG: &str = "https://example.com/Pig";

    fn bound(iri: &str) -> Slot {
        Slot::Bound(Term::iri(iri))
    }

    fn var(name: &str) -> Slot {
        Slot::Unbound(name.to_string())
    }

    fn axiom() -> Rule {
        Rule::new(
            vec![],
            vec![Atom::new(
                bound("https://example.com/a"),
                bound("https://example.com/frobs"),
                bound("https://example.com/b"),
            )],
        )
        .unwrap()
    }

    fn gorgadon_rule() -> Rule {
        Rule::new(
            vec![
                Atom::new(var("pig"), bound(ABILITY), bound(FLIGHT)),
                Atom::new(var("pig"), bound(RDF_TYPE), bound(PIG)),
            ],
            vec![Atom::new(
                bound("did:dock:bddap"),
                bound("http://xmlns.com/foaf/0.1/firstName"),
                Slot::Bound(Term::literal(
                    "Gorgadon",
                    "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral",
                )),
            )],
        )
        .unwrap()
    }

    #[test]
    fn empty_proof_validates_to_nothing() {
        let valid = validate(&[], &[]).unwrap();
        assert!(valid.assumed.is_empty());
        assert!(valid.implied.is_empty());

        let valid = validate(&[axiom()], &[]).unwrap();
        assert_eq!(valid, ValidatedClaims::default());
    }

    #[test]
    fn axiom_step_implies_without_assuming() {
        let proof = [RuleApplication {
            rule_index: 0,
            instantiations: vec![],
        }];
        let valid = validate(&[axiom()], &proof).unwrap();
        assert!(valid.assumed.is_empty());
        assert_eq!(valid.implied.len(), 1);
    }

    #[test]
    fn bad_rule_index_is_rejected() {
        let proof = [RuleApplication {
            rule_index: 1,
            instantiations: vec![],
        }];
        assert!(matches!(
            validate(&[axiom()], &proof),
            Err(RDFEthosError::BadRuleIndex)
        ));
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        // rule 0 takes no variables at all
        let proof = [RuleApplication {
            rule_index: 0,
            instantiations: vec![Term::iri("http://example.com")],
        }];
        assert!(matches!(
            validate(&[axiom()], &proof),
            Err(RDFEthosError::BadRuleApplication)
        ));
    }

    #[test]
    fn body_claims_are_assumed_unless_previously_implied() {
        let joe = Term::iri("http://example.com/joeThePig");
        let proof = [RuleApplication {
            rule_index: 0,
            instantiations: vec![joe.clone()],
        }];
        let valid = validate(&[gorgadon_rule()], &proof).unwrap();
        assert_eq!(
            valid.assumed,
            BTreeSet::from([
                Triple::new(joe.clone(), Term::iri(ABILITY), Term::iri(FLIGHT)),
                Triple::new(joe, Term::iri(RDF_TYPE), Term::iri(PIG)),
            ])
        );
        assert_eq!(valid.implied.len(), 1);
    }

    #[test]
    fn validation_is_pure() {
        let proof = [RuleApplication {
            rule_index: 0,
            instantiations: vec![Term::iri("http://example.com/joeThePig")],
        }];
        let rules = [gorgadon_rule()];
        assert_eq!(
            validate(&rules, &proof).unwrap(),
            validate(&rules, &proof).unwrap()
        );
    }

    #[test]
    fn proof_wire_round_trip() {
        let json = r#"[{"rule_index":0,"instantiations":[{"Iri":"http://example.com/joeThePig"}]}]"#;
        let proof: Vec<RuleApplication> = serde_json::from_str(json).unwrap();
        assert_eq!(proof[0].rule_index, 0);
        assert_eq!(serde_json::to_string(&proof).unwrap(), json);
    }
}
