// src/noyau/conversion.rs
//
// Extraction d'un entier machine depuis une boule réelle (degré de
// racine). Troncature VERS ZÉRO, mais sur les DEUX bornes de
// l'enclosure : si elles ne tombent pas sur le même entier, l'enclosure
// chevauche une frontière et l'appel échoue au lieu de deviner.
// Hors plage i64 => échec aussi.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use astro_float::{BigFloat, Radix, RoundingMode};

use super::constantes::avec_constantes;
use super::erreur::Erreur;
use super::reel::BouleReelle;

/// Troncature vers zéro d'un BigFloat fini, en entier exact.
/// La conversion décimale est dirigée vers zéro : elle ne peut jamais
/// sauter une frontière entière vers le haut (au pire elle redescend,
/// et l'ambiguïté est alors détectée par l'appelant).
fn tronque(x: &BigFloat) -> Result<BigInt, Erreur> {
    if x.is_nan() || x.is_inf_pos() || x.is_inf_neg() {
        return Err(Erreur::Conversion(
            "borne non finie, entier introuvable".into(),
        ));
    }
    if x.is_zero() {
        return Ok(BigInt::zero());
    }

    let (signe, chiffres, e) = avec_constantes(|cc| {
        x.convert_to_radix(Radix::Dec, RoundingMode::ToZero, cc)
    })
    .map_err(|_| Erreur::Conversion("conversion décimale impossible".into()))?;

    // valeur = ±0.d₁d₂… × 10^e : la partie entière tient dans les e
    // premiers chiffres (complétés de zéros si la mantisse est courte)
    if e <= 0 {
        return Ok(BigInt::zero());
    }
    let mut acc = BigInt::zero();
    for k in 0..e as usize {
        let d = chiffres.get(k).copied().unwrap_or(0);
        acc = acc * 10 + BigInt::from(d);
    }
    if matches!(signe, astro_float::Sign::Neg) {
        acc = -acc;
    }
    Ok(acc)
}

/// Boule -> entier machine, troncature vers zéro.
pub fn vers_indice(b: &BouleReelle) -> Result<i64, Erreur> {
    let bas = tronque(&b.borne_inf())?;
    let haut = tronque(&b.borne_sup())?;

    if bas != haut {
        return Err(Erreur::Conversion(
            "l'enclosure chevauche plusieurs entiers".into(),
        ));
    }

    bas.to_i64().ok_or_else(|| {
        Erreur::Conversion("entier hors de la plage machine (i64)".into())
    })
}
