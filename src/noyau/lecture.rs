// src/noyau/lecture.rs
//
// Lecture d'un littéral décimal vers une boule réelle correctement
// arrondie (vers l'extérieur) à la précision demandée.
//
// Grammaire (boucle caractère par caractère) :
//   [+|-] chiffres [ '.' chiffres ] [ (e|E) [+|-] chiffres ]
//
// Le littéral est d'abord décomposé EXACTEMENT en rationnel n/10^k
// (réduit), puis encadré à `prec` bits par deux divisions dirigées.
// Le rayon est nul quand la division tombe juste (1, 0.5, 0.25, …)
// et vaut l'écart hi − lo sinon (0.1, …).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use astro_float::{BigFloat, Radix, RoundingMode};

use super::complexe::BouleComplexe;
use super::constantes::avec_constantes;
use super::erreur::Erreur;
use super::reel::{BouleReelle, PREC_RAYON};

/// Garde-fou : au-delà, pow10 deviendrait démesuré.
const EXPOSANT_MAX: i64 = 999_999;

fn pow10(n: u64) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/* ------------------------ Littéral -> rationnel exact ------------------------ */

/// Décompose un littéral décimal en rationnel exact, ou None si mal formé.
fn litteral_en_rationnel(texte: &str) -> Option<BigRational> {
    let chars: Vec<char> = texte.trim().chars().collect();
    let mut i: usize = 0;

    // signe
    let mut negatif = false;
    if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
        negatif = chars[i] == '-';
        i += 1;
    }

    // partie entière (au moins un chiffre)
    let mut mantisse = String::new();
    let debut_entier = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        mantisse.push(chars[i]);
        i += 1;
    }
    if i == debut_entier {
        return None;
    }

    // partie fractionnaire (au moins un chiffre après le point)
    let mut nb_decimales: u64 = 0;
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let debut_frac = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            mantisse.push(chars[i]);
            nb_decimales += 1;
            i += 1;
        }
        if i == debut_frac {
            return None;
        }
    }

    // exposant décimal
    let mut exposant: i64 = 0;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        let mut exp_negatif = false;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            exp_negatif = chars[i] == '-';
            i += 1;
        }
        let debut_exp = i;
        let mut exp_txt = String::new();
        while i < chars.len() && chars[i].is_ascii_digit() {
            exp_txt.push(chars[i]);
            i += 1;
        }
        if i == debut_exp {
            return None;
        }
        exposant = exp_txt.parse::<i64>().ok()?;
        if exp_negatif {
            exposant = -exposant;
        }
    }

    // rien ne doit traîner derrière
    if i != chars.len() {
        return None;
    }
    if exposant.abs() > EXPOSANT_MAX {
        return None;
    }

    let mut n = BigInt::parse_bytes(mantisse.as_bytes(), 10)?;
    if negatif {
        n = -n;
    }

    // valeur = n × 10^(exposant − nb_decimales)
    let net = exposant - nb_decimales as i64;
    let rat = if net >= 0 {
        BigRational::from_integer(n * pow10(net as u64))
    } else {
        BigRational::new(n, pow10((-net) as u64))
    };
    Some(rat)
}

/* ------------------------ Rationnel exact -> boule ------------------------ */

/// Conversion entier exact -> BigFloat (précision suffisante pour être exacte).
fn entier_en_flottant(n: &BigInt) -> BigFloat {
    let bits = n.abs().bits().max(1) as usize + 32;
    avec_constantes(|cc| BigFloat::parse(&n.to_string(), Radix::Dec, bits, RoundingMode::ToEven, cc))
}

/// Encadre n/d (d > 0) à `prec` bits : centre au plus proche,
/// rayon = écart entre les deux divisions dirigées (0 si exacte).
fn rationnel_en_boule(r: &BigRational, prec: usize) -> BouleReelle {
    if r.is_zero() {
        return BouleReelle::nulle(prec);
    }

    let num = entier_en_flottant(r.numer());
    let den = entier_en_flottant(r.denom());

    let bas = num.div(&den, prec, RoundingMode::Down);
    let haut = num.div(&den, prec, RoundingMode::Up);
    let centre = num.div(&den, prec, RoundingMode::ToEven);

    let rayon = match bas.cmp(&haut) {
        Some(0) => BigFloat::new(PREC_RAYON),
        _ => haut.sub(&bas, PREC_RAYON, RoundingMode::Up),
    };
    BouleReelle::nouvelle(centre, rayon, prec)
}

/* ------------------------ API publique ------------------------ */

/// Une composante (réelle ou imaginaire) d'un opérande.
pub fn lit_composante(
    texte: &str,
    composante: &'static str,
    prec: usize,
) -> Result<BouleReelle, Erreur> {
    match litteral_en_rationnel(texte) {
        Some(r) => Ok(rationnel_en_boule(&r, prec)),
        None => Err(Erreur::Lecture {
            composante,
            texte: texte.to_string(),
        }),
    }
}

/// Deux littéraux décimaux -> boule complexe. Aucune boule partielle
/// n'est produite si l'une des composantes est mal formée.
pub fn lit_boule(
    texte_reel: &str,
    texte_imag: &str,
    prec: usize,
) -> Result<BouleComplexe, Erreur> {
    let reel = lit_composante(texte_reel, "partie réelle", prec)?;
    let imag = lit_composante(texte_imag, "partie imaginaire", prec)?;
    Ok(BouleComplexe::nouvelle(reel, imag))
}

/// Opérande CLI "re,im" -> boule complexe.
pub fn lit_operande(texte: &str, prec: usize) -> Result<BouleComplexe, Erreur> {
    let parties: Vec<&str> = texte.split(',').collect();
    if parties.len() != 2 {
        return Err(Erreur::Lecture {
            composante: "opérande complexe (attendu re,im)",
            texte: texte.to_string(),
        });
    }
    lit_boule(parties[0], parties[1], prec)
}
