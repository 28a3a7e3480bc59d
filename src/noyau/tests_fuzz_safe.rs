//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - opérandes décimaux bornés (3 chiffres entiers, 6 décimales)
//! - budget temps global
//! - on accepte les erreurs attendues (diviseur englobant zéro,
//!   logarithme de zéro, pôle de tangente, degré invalide…)
//! - invariant clé : deux précisions différentes de la même opération
//!   produisent des enclosures qui se chevauchent

use std::time::{Duration, Instant};

use astro_float::RoundingMode;

use super::complexe::BouleComplexe;
use super::eval::{evalue_operation, Operation};
use super::lecture::lit_operande;
use super::reel::BouleReelle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    etat: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { etat: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.etat = self.etat.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.etat >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.next_u32() % n
    }
}

/* ------------------------ Génération d'opérandes ------------------------ */

fn litteral_aleatoire(rng: &mut Rng) -> String {
    let signe = if rng.pick(2) == 0 { "" } else { "-" };
    let entier = rng.pick(1000);
    if rng.pick(2) == 0 {
        format!("{signe}{entier}")
    } else {
        let frac = rng.pick(1_000_000);
        format!("{signe}{entier}.{frac:06}")
    }
}

fn operande_aleatoire(rng: &mut Rng) -> String {
    format!("{},{}", litteral_aleatoire(rng), litteral_aleatoire(rng))
}

/* ------------------------ Chevauchement ------------------------ */

fn se_chevauchent(x: &BouleReelle, y: &BouleReelle) -> bool {
    let ecart = x.centre().sub(y.centre(), 320, RoundingMode::Up).abs();
    let somme = x.rayon().add(y.rayon(), 64, RoundingMode::Up);
    matches!(ecart.cmp(&somme), Some(c) if c <= 0)
}

fn se_chevauchent_complexes(x: &BouleComplexe, y: &BouleComplexe) -> bool {
    se_chevauchent(x.reel(), y.reel()) && se_chevauchent(x.imag(), y.imag())
}

/* ------------------------ Campagnes ------------------------ */

const OPS: [Operation; 14] = [
    Operation::Somme,
    Operation::Difference,
    Operation::Produit,
    Operation::Quotient,
    Operation::Exp,
    Operation::Ln,
    Operation::Puissance,
    Operation::Sqrt,
    Operation::Sin,
    Operation::Cos,
    Operation::Tan,
    Operation::Cotangente,
    Operation::Module,
    Operation::Argument,
];

#[test]
fn fuzz_coherence_entre_precisions() {
    let t0 = Instant::now();
    let max = Duration::from_secs(60);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..120 {
        let ta = operande_aleatoire(&mut rng);
        let tb = operande_aleatoire(&mut rng);
        let op = OPS[rng.pick(OPS.len() as u32) as usize];

        let bas = lit_operande(&ta, 96)
            .and_then(|a| lit_operande(&tb, 96).and_then(|b| evalue_operation(op, &a, &b)));
        let haut = lit_operande(&ta, 224)
            .and_then(|a| lit_operande(&tb, 224).and_then(|b| evalue_operation(op, &a, &b)));

        // erreurs de domaine attendues : on passe au tirage suivant
        if let (Ok(b), Ok(h)) = (bas, haut) {
            if b.est_finie() && h.est_finie() {
                assert!(
                    se_chevauchent_complexes(&b, &h),
                    "désaccord {op:?} sur a={ta:?} b={tb:?}"
                );
            }
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_soustraction_de_soi() {
    let t0 = Instant::now();
    let max = Duration::from_secs(20);
    let mut rng = Rng::new(42);

    for _ in 0..200 {
        let texte = operande_aleatoire(&mut rng);
        let a = lit_operande(&texte, 128).unwrap();
        let d = a.difference(&a);
        assert!(d.englobe_zero(), "a − a n'englobe pas 0 pour {texte:?}");
        budget(t0, max);
    }
}

#[test]
fn fuzz_division_par_soi() {
    let t0 = Instant::now();
    let max = Duration::from_secs(20);
    let mut rng = Rng::new(7);

    for _ in 0..200 {
        let texte = operande_aleatoire(&mut rng);
        let a = lit_operande(&texte, 128).unwrap();
        match a.quotient(&a) {
            Ok(q) => assert!(q.contient_f64(1.0, 0.0), "a/a hors de 1 pour {texte:?}"),
            // opérande englobant zéro : rejet attendu
            Err(_) => assert!(a.englobe_zero(), "rejet inattendu pour {texte:?}"),
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_lecture_ne_panique_jamais() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(1234);

    // soupe de caractères plausibles : soit une boule, soit une Erreur,
    // jamais une panique
    let alphabet: Vec<char> = "0123456789+-.,eE x".chars().collect();
    for _ in 0..500 {
        let long = rng.pick(12) as usize;
        let texte: String = (0..long)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();
        let _ = lit_operande(&texte, 64);
        budget(t0, max);
    }
}

/// Budget global anti-gel.
fn budget(debut: Instant, max: Duration) {
    if debut.elapsed() > max {
        panic!("budget temps dépassé : {max:?}");
    }
}
