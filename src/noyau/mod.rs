//! Noyau rigoureux : boules complexes en précision arbitraire
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie des échecs (lecture, domaine, conversion…)
//! - constantes.rs : cache des constantes transcendantes (π…)
//! - reel.rs       : boule réelle (centre, rayon, précision) + propagation
//! - complexe.rs   : boule complexe (rectangle) + moteur add/sub/mul/div
//! - fonctions.rs  : exp, ln, pow, log, √, racine n-ième, trig, |z|, arg
//! - lecture.rs    : littéral décimal -> boule (arrondi vers l'extérieur)
//! - format.rs     : boule -> texte (point, plage [c +/- r], point fixe)
//! - conversion.rs : boule -> entier machine (degré de racine, strict)
//! - eval.rs       : nom d'opération -> résultat (une opération par appel)

pub mod complexe;
pub mod constantes;
pub mod conversion;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod lecture;
pub mod reel;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::Erreur;
pub use eval::{evalue_operation, Operation};
pub use format::{format_boule, format_boule_fixe};
pub use lecture::lit_operande;
