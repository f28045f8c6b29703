//! Composite-claim soundness checking for W3C Verifiable Presentations:
//! presentations are translated into explicit-ethos claim graphs ("issuer I
//! asserts (s, p, o)" rather than "(s, p, o)"), and an attached logic proof is
//! accepted only when every assumption it rests on was actually attested.

mod claim_graph;
mod common;
pub mod context;
mod error;
mod prove;
mod rule;
mod soundness;
mod term;
mod translate;
mod validate;
mod vc;

pub use claim_graph::ClaimGraph;
pub use common::{
    get_claims_from_json, get_dataset_from_nquads, get_proof_from_json, get_rules_from_json,
};
pub use error::RDFEthosError;
pub use prove::prove;
pub use rule::{Atom, Rule, Slot};
pub use soundness::{
    check_soundness, check_soundness_string, prove_composite, prove_composite_string,
    PresentationVerifier,
};
pub use term::{Term, Triple};
pub use translate::translate;
pub use validate::{validate, RuleApplication, ValidatedClaims};
