//! reserved IRIs of the explicit-ethos scheme and the vocabulary needed to
//! pick presentations apart

use oxrdf::NamedNodeRef;

// explicit-ethos vocabulary
pub const CLAIMS_V1: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://www.dock.io/rdf2020#claimsV1");
pub const LOGIC_V1: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://www.dock.io/rdf2020#logicV1");

// RDF reification vocabulary
pub const RDF_SUBJECT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#subject");
pub const RDF_PREDICATE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#predicate");
pub const RDF_OBJECT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#object");
pub const RDF_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");

// credentials vocabulary
pub const VERIFIABLE_CREDENTIAL: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://www.w3.org/2018/credentials#verifiableCredential");
pub const VERIFIABLE_CREDENTIAL_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://www.w3.org/2018/credentials#VerifiableCredential");
pub const VERIFIABLE_PRESENTATION_TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://www.w3.org/2018/credentials#VerifiablePresentation");
pub const ISSUER: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://www.w3.org/2018/credentials#issuer");

// security vocabulary
pub const PROOF: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://w3id.org/security#proof");
