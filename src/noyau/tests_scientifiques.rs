//! Tests scientifiques (campagne) : invariants + cas de référence.
//!
//! But : vérifier les lois du noyau sans faire chauffer la machine.
//! - loi de validité : la vraie valeur reste dans l'enclosure rendue
//! - identités algébriques (neutres, inverses)
//! - rejets de domaine (diviseur nul, logarithme de zéro)
//! - aller-retour affichage plage -> relecture
//! - cas concrets à 128 bits (pilote d'origine)
//!
//! Notes :
//! - deux évaluations de la même opération à deux précisions englobent
//!   toutes deux la vraie valeur : leurs boules doivent se chevaucher
//! - les comparaisons passent par les centres/rayons (BigFloat), jamais
//!   par du texte quand un arrondi décimal pourrait fausser le verdict

use std::time::{Duration, Instant};

use astro_float::RoundingMode;

use super::complexe::BouleComplexe;
use super::eval::{evalue_operation, Operation};
use super::format::{format_boule, format_boule_fixe, rendu_plage, retire_plage};
use super::lecture::{lit_composante, lit_operande};
use super::reel::BouleReelle;

const P: usize = 128;

/// Budget global anti-gel.
fn budget(debut: Instant, max: Duration) {
    if debut.elapsed() > max {
        panic!("budget temps dépassé : {max:?}");
    }
}

fn operande(texte: &str, prec: usize) -> BouleComplexe {
    lit_operande(texte, prec).unwrap_or_else(|e| panic!("opérande {texte:?} : {e}"))
}

/// Deux enclosures de la même valeur doivent se chevaucher.
fn se_chevauchent(x: &BouleReelle, y: &BouleReelle) -> bool {
    let ecart = x.centre().sub(y.centre(), 256, RoundingMode::Up).abs();
    let somme = x.rayon().add(y.rayon(), 64, RoundingMode::Up);
    matches!(ecart.cmp(&somme), Some(c) if c <= 0)
}

fn se_chevauchent_complexes(x: &BouleComplexe, y: &BouleComplexe) -> bool {
    se_chevauchent(x.reel(), y.reel()) && se_chevauchent(x.imag(), y.imag())
}

/* ------------------------ Cas concrets (pilote d'origine) ------------------------ */

#[test]
fn sci_addition_un_plus_un() {
    let a = operande("1,0", P);
    let r = evalue_operation(Operation::Somme, &a, &a).unwrap();
    assert!(r.contient_f64(2.0, 0.0));
    let s = format_boule(&r, 38, false).unwrap();
    assert!(s.starts_with("(2.000"), "{s}");
    assert!(s.ends_with(",0i)"), "{s}");
}

#[test]
fn sci_produit_un_par_un() {
    let a = operande("1,0", P);
    let r = evalue_operation(Operation::Produit, &a, &a).unwrap();
    assert!(r.contient_f64(1.0, 0.0));
    let s = format_boule(&r, 38, false).unwrap();
    assert!(s.starts_with("(1.000"), "{s}");
}

#[test]
fn sci_quotient_un_sur_i() {
    let a = operande("1,0", P);
    let b = operande("0,1", P);
    let r = evalue_operation(Operation::Quotient, &a, &b).unwrap();
    assert!(r.contient_f64(0.0, -1.0));
    let s = format_boule(&r, 38, false).unwrap();
    assert!(s.starts_with("(0,-1.000"), "{s}");
}

#[test]
fn sci_puissance_i_carre() {
    // i^2 = −1, à l'erreur de précision près
    let a = operande("0,1", P);
    let b = operande("2,0", P);
    let r = evalue_operation(Operation::Puissance, &a, &b).unwrap();
    assert!(r.contient_f64(-1.0, 0.0));
}

#[test]
fn sci_racine_quatrieme_de_seize() {
    // degré extrait de a=(4,0), racine appliquée à b=(16,0)
    let a = operande("4,0", P);
    let b = operande("16,0", P);
    let r = evalue_operation(Operation::Racine, &a, &b).unwrap();
    assert!(r.contient_f64(2.0, 0.0));
    let s = format_boule_fixe(&r, 38).unwrap();
    assert!(s.starts_with("(2.0000"), "{s}");
}

/* ------------------------ Identités algébriques ------------------------ */

#[test]
fn sci_neutre_additif() {
    let a = operande("1.25,-0.75", P);
    let zero = operande("0,0", P);
    let r = evalue_operation(Operation::Somme, &a, &zero).unwrap();
    // a + 0 englobe le centre de a
    assert!(r.reel().contient_point(a.reel().centre()));
    assert!(r.imag().contient_point(a.imag().centre()));
}

#[test]
fn sci_soustraction_de_soi() {
    let a = operande("3.5,2.25", P);
    let r = evalue_operation(Operation::Difference, &a, &a).unwrap();
    assert!(r.englobe_zero());
}

#[test]
fn sci_neutre_multiplicatif() {
    let a = operande("0.1,7", P);
    let un = operande("1,0", P);
    let r = evalue_operation(Operation::Produit, &a, &un).unwrap();
    assert!(r.reel().contient_boule(a.reel()));
    assert!(r.imag().contient_boule(a.imag()));
}

#[test]
fn sci_division_par_soi() {
    let a = operande("3,4", P);
    let r = evalue_operation(Operation::Quotient, &a, &a).unwrap();
    assert!(r.contient_f64(1.0, 0.0));
}

/* ------------------------ Rejets de domaine ------------------------ */

#[test]
fn sci_rejet_diviseur_nul() {
    let a = operande("1,0", P);
    let zero = operande("0,0", P);
    // division par une valeur englobant zéro
    assert!(evalue_operation(Operation::Quotient, &a, &zero).is_err());
    // logarithme d'une valeur englobant zéro
    assert!(evalue_operation(Operation::Ln, &zero, &a).is_err());
    // puissance : hérite de ln quand la base englobe zéro
    assert!(evalue_operation(Operation::Puissance, &zero, &a).is_err());
    // log en base 1 : ln(base) englobe 0, rejet du diviseur nul
    let un = operande("1,0", P);
    assert!(evalue_operation(Operation::Log, &un, &a).is_err());
}

#[test]
fn sci_rejet_degre_invalide() {
    let zero = operande("0,0", P);
    let b = operande("16,0", P);
    assert!(evalue_operation(Operation::Racine, &zero, &b).is_err());
    let negatif = operande("-2,0", P);
    assert!(evalue_operation(Operation::Racine, &negatif, &b).is_err());
}

/* ------------------------ Chevauchement multi-précision ------------------------ */

#[test]
fn sci_coherence_entre_precisions() {
    let t0 = Instant::now();
    let max = Duration::from_secs(20);

    let unaires = [
        Operation::Exp,
        Operation::Ln,
        Operation::Sqrt,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
        Operation::Module,
        Operation::Argument,
    ];
    let textes = ["1.5,0.25", "0.5,-1.25", "2,3", "-0.75,0.5"];

    for texte in textes {
        for op in unaires {
            let bas = {
                let a = operande(texte, 96);
                evalue_operation(op, &a, &a)
            };
            let haut = {
                let a = operande(texte, 256);
                evalue_operation(op, &a, &a)
            };
            if let (Ok(b), Ok(h)) = (bas, haut) {
                assert!(
                    se_chevauchent_complexes(&b, &h),
                    "désaccord {op:?} sur {texte:?}"
                );
            }
            budget(t0, max);
        }
    }
}

/* ------------------------ Aller-retour plage -> relecture ------------------------ */

#[test]
fn sci_aller_retour_plage() {
    for texte in ["0.1", "3.14159", "-0.333333", "123.456"] {
        let b = lit_composante(texte, "partie réelle", P).unwrap();
        let plage = rendu_plage(&b, 30).unwrap();

        if b.est_exacte() {
            continue;
        }
        // "[centre +/- rayon]"
        let interieur = plage.trim_start_matches('[').trim_end_matches(']');
        let (centre_txt, rayon_txt) =
            interieur.split_once(" +/- ").expect("séparateur de plage");

        let centre_relu = lit_composante(centre_txt, "partie réelle", P).unwrap();
        let rayon_relu = lit_composante(rayon_txt, "partie réelle", P).unwrap();

        // l'intervalle imprimé contient la boule : le centre d'origine
        // reste à moins de rayon_imprimé du centre relu
        let ecart = b
            .centre()
            .sub(centre_relu.centre(), 256, RoundingMode::Up)
            .abs();
        let borne = rayon_relu
            .borne_sup()
            .add(centre_relu.rayon(), 64, RoundingMode::Up);
        assert!(
            matches!(ecart.cmp(&borne), Some(c) if c <= 0),
            "aller-retour raté pour {texte:?} : {plage}"
        );

        // et le mode point retire bien le suffixe
        assert_eq!(retire_plage(&plage), centre_txt);
    }
}

/* ------------------------ Argument : branche principale ------------------------ */

#[test]
fn sci_argument_branche_principale() {
    // quadrant I : arg(1,1) = π/4
    let a = operande("1,1", P);
    let r = evalue_operation(Operation::Argument, &a, &a).unwrap();
    let quart_pi = BouleReelle::pi(P).moitie().moitie();
    assert!(se_chevauchent(r.reel(), &quart_pi));

    // axe réel négatif : repli 0 ± π, qui contient bien π
    let c = operande("-1,0", P);
    let r = evalue_operation(Operation::Argument, &c, &c).unwrap();
    assert!(r.contient_f64(std::f64::consts::PI, 0.0));
    // résultat réel pur
    assert!(r.imag().est_exacte());
}

/* ------------------------ Module : réel pur ------------------------ */

#[test]
fn sci_module_reel_pur() {
    let a = operande("3,4", P);
    let r = evalue_operation(Operation::Module, &a, &a).unwrap();
    assert!(r.contient_f64(5.0, 0.0));
    assert!(r.imag().est_exacte());
}
