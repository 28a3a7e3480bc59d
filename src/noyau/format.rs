// src/noyau/format.rs
//
// Affichage décimal des boules, à nombre de chiffres significatifs
// contrôlé.
//
// Deux régimes par composante :
// - plage : "[centre +/- rayon]" — le rayon affiché est gonflé de
//   l'erreur d'arrondi décimal du centre, puis arrondi vers le haut à
//   2 chiffres : l'intervalle IMPRIMÉ contient toujours la boule.
//   Une boule exacte (rayon nul) s'imprime sans crochets.
// - point : le centre seul — obtenu en retirant le suffixe de plage,
//   crochets compris, du rendu précédent (retire_plage).
//
// Les retenues d'arrondi décimal passent par BigInt ; le rendu à point
// fixe réutilise l'écriture "entier scalé -> texte" (pow10).

use num_bigint::BigInt;
use num_traits::{One, Zero};

use astro_float::{BigFloat, Radix, RoundingMode};

use super::complexe::BouleComplexe;
use super::constantes::avec_constantes;
use super::erreur::Erreur;
use super::reel::{BouleReelle, PREC_RAYON};

fn pow10(n: u64) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/* ------------------------ Chiffres décimaux d'un BigFloat ------------------------ */

/// Mantisse décimale complète : valeur = ±0.d₁d₂… × 10^e.
/// None pour zéro ; Conversion pour NaN/∞.
fn mantisse_decimale(x: &BigFloat) -> Result<Option<(bool, Vec<u8>, i64)>, Erreur> {
    if x.is_nan() || x.is_inf_pos() || x.is_inf_neg() {
        return Err(Erreur::Conversion(
            "valeur non finie (NaN ou infini)".into(),
        ));
    }
    if x.is_zero() {
        return Ok(None);
    }
    let (signe, chiffres, e) = avec_constantes(|cc| {
        x.convert_to_radix(Radix::Dec, RoundingMode::ToEven, cc)
    })
    .map_err(|_| Erreur::Conversion("conversion décimale impossible".into()))?;
    let negatif = matches!(signe, astro_float::Sign::Neg);
    Ok(Some((negatif, chiffres, e as i64)))
}

/// Arrondit la mantisse à `nb` chiffres (au plus proche, retenue via
/// BigInt). Renvoie (négatif, chiffres de longueur nb, exposant).
fn arrondit_mantisse(
    negatif: bool,
    chiffres: &[u8],
    e: i64,
    nb: usize,
) -> (bool, String, i64) {
    let mut e = e;
    let mut texte: String;

    if chiffres.len() <= nb {
        texte = chiffres.iter().map(|d| (b'0' + d) as char).collect();
        while texte.len() < nb {
            texte.push('0');
        }
    } else {
        let mut prefixe = BigInt::zero();
        for d in &chiffres[..nb] {
            prefixe = prefixe * 10 + BigInt::from(*d);
        }
        if chiffres[nb] >= 5 {
            prefixe += BigInt::one();
        }
        texte = prefixe.to_string();
        if texte.len() > nb {
            // retenue en cascade : 999… -> 1000…, l'exposant monte
            e += 1;
            texte.truncate(nb);
        }
        while texte.len() < nb {
            // zéros de tête perdus par BigInt
            texte.insert(0, '0');
        }
    }
    (negatif, texte, e)
}

/// Arrondit vers le HAUT (plafond sur la valeur absolue) à `nb` chiffres.
fn arrondit_mantisse_haut(chiffres: &[u8], e: i64, nb: usize) -> (String, i64) {
    let mut e = e;
    let mut texte: String;

    if chiffres.len() <= nb {
        texte = chiffres.iter().map(|d| (b'0' + d) as char).collect();
        while texte.len() < nb {
            texte.push('0');
        }
    } else {
        let mut prefixe = BigInt::zero();
        for d in &chiffres[..nb] {
            prefixe = prefixe * 10 + BigInt::from(*d);
        }
        if chiffres[nb..].iter().any(|d| *d != 0) {
            prefixe += BigInt::one();
        }
        texte = prefixe.to_string();
        if texte.len() > nb {
            e += 1;
            texte.truncate(nb);
        }
        while texte.len() < nb {
            texte.insert(0, '0');
        }
    }
    (texte, e)
}

/* ------------------------ Rendus élémentaires ------------------------ */

/// Écriture positionnelle ou scientifique d'une mantisse arrondie.
fn ecrit_mantisse(negatif: bool, chiffres: &str, e: i64) -> String {
    let nb = chiffres.len() as i64;
    let signe = if negatif { "-" } else { "" };

    if e > nb || e < -5 {
        // scientifique : d.ddd…e±k
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            return format!("{signe}{tete}e{}", e - 1);
        }
        return format!("{signe}{tete}.{reste}e{}", e - 1);
    }

    if e >= 1 {
        let (entier, frac) = chiffres.split_at(e as usize);
        if frac.is_empty() {
            return format!("{signe}{entier}");
        }
        return format!("{signe}{entier}.{frac}");
    }

    // 0 < |x| < 1 : zéros de tête
    let zeros = "0".repeat((-e) as usize);
    format!("{signe}0.{zeros}{chiffres}")
}

/// Centre seul, à `nb` chiffres significatifs.
fn rendu_centre(x: &BigFloat, nb: usize) -> Result<String, Erreur> {
    let nb = nb.max(1);
    match mantisse_decimale(x)? {
        None => Ok("0".to_string()),
        Some((negatif, chiffres, e)) => {
            let (negatif, texte, e) = arrondit_mantisse(negatif, &chiffres, e, nb);
            Ok(ecrit_mantisse(negatif, &texte, e))
        }
    }
}

/// Rayon en notation scientifique, 2 chiffres, arrondi vers le haut.
fn rendu_rayon(r: &BigFloat) -> Result<String, Erreur> {
    match mantisse_decimale(r)? {
        None => Ok("0".to_string()),
        Some((_, chiffres, e)) => {
            let (texte, e) = arrondit_mantisse_haut(&chiffres, e, 2);
            let (tete, reste) = texte.split_at(1);
            Ok(format!("{tete}.{reste}e{}", e - 1))
        }
    }
}

/* ------------------------ Plage et point ------------------------ */

/// "[centre +/- rayon]" (ou le centre nu si la boule est exacte).
/// L'intervalle imprimé contient la boule : le rayon affiché absorbe
/// l'erreur d'arrondi décimal du centre (une unité du dernier chiffre).
pub fn rendu_plage(b: &BouleReelle, nb: usize) -> Result<String, Erreur> {
    if !b.est_finie() {
        return Err(Erreur::Conversion(
            "valeur non finie (NaN ou infini)".into(),
        ));
    }
    let nb = nb.max(1);
    if b.est_exacte() {
        return rendu_centre(b.centre(), nb);
    }

    let centre_txt = rendu_centre(b.centre(), nb)?;

    // une unité du dernier chiffre imprimé : 10^(e − nb)
    let rayon_gonfle = match mantisse_decimale(b.centre())? {
        None => b.rayon().clone(),
        Some((_, _, e)) => {
            let unite = avec_constantes(|cc| {
                BigFloat::parse(
                    &format!("1e{}", e - nb as i64),
                    Radix::Dec,
                    PREC_RAYON,
                    RoundingMode::Up,
                    cc,
                )
            });
            b.rayon().add(&unite, PREC_RAYON, RoundingMode::Up)
        }
    };

    Ok(format!("[{centre_txt} +/- {}]", rendu_rayon(&rayon_gonfle)?))
}

/// Retire un éventuel suffixe de plage : crochets et " +/- …".
/// (Contrat du mode point : accepter aussi bien un rendu nu qu'un
/// rendu encadré.)
pub fn retire_plage(texte: &str) -> String {
    let mut s = texte.trim();
    if s.starts_with('[') && s.ends_with(']') {
        s = &s[1..s.len() - 1];
    }
    match s.find(" +/-") {
        Some(idx) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Une composante dans le régime choisi.
fn format_composante(b: &BouleReelle, nb: usize, plage: bool) -> Result<String, Erreur> {
    let s = rendu_plage(b, nb)?;
    if plage {
        Ok(s)
    } else {
        Ok(retire_plage(&s))
    }
}

/// Boule complexe -> "(re,imi)" dans le régime choisi.
pub fn format_boule(z: &BouleComplexe, nb: usize, plage: bool) -> Result<String, Erreur> {
    let re = format_composante(z.reel(), nb, plage)?;
    let im = format_composante(z.imag(), nb, plage)?;
    Ok(format!("({re},{im}i)"))
}

/* ------------------------ Point fixe (entier scalé) ------------------------ */

/// Convertit un entier "scalé" (×10^nb) en texte décimal.
fn scale_en_decimal(mut scale: BigInt, nb: usize) -> String {
    let negatif = scale < BigInt::zero();
    if negatif {
        scale = -scale;
    }

    let echelle = pow10(nb as u64);
    let partie_entiere = &scale / &echelle;
    let partie_frac = &scale % &echelle;

    if nb == 0 {
        return if negatif {
            format!("-{partie_entiere}")
        } else {
            format!("{partie_entiere}")
        };
    }

    let mut frac = partie_frac.to_str_radix(10);
    while frac.len() < nb {
        frac.insert(0, '0');
    }

    if negatif {
        format!("-{partie_entiere}.{frac}")
    } else {
        format!("{partie_entiere}.{frac}")
    }
}

/// Centre en écriture à point fixe : exactement `nb` décimales.
pub fn rendu_fixe(b: &BouleReelle, nb: usize) -> Result<String, Erreur> {
    if !b.est_finie() {
        return Err(Erreur::Conversion(
            "valeur non finie (NaN ou infini)".into(),
        ));
    }
    let (negatif, chiffres, e) = match mantisse_decimale(b.centre())? {
        None => return Ok(scale_en_decimal(BigInt::zero(), nb)),
        Some(t) => t,
    };

    // entier scalé = arrondi de |x|·10^nb, soit les (e + nb) premiers chiffres
    let m = e + nb as i64;
    let mut scale = if m <= 0 {
        // |x|·10^nb < 1 : il ne reste que l'arrondi du premier chiffre
        if m == 0 && chiffres[0] >= 5 {
            BigInt::one()
        } else {
            BigInt::zero()
        }
    } else {
        let m = m as usize;
        let mut acc = BigInt::zero();
        for k in 0..m {
            let d = chiffres.get(k).copied().unwrap_or(0);
            acc = acc * 10 + BigInt::from(d);
        }
        if chiffres.get(m).copied().unwrap_or(0) >= 5 {
            acc += BigInt::one();
        }
        acc
    };
    if negatif {
        scale = -scale;
    }
    Ok(scale_en_decimal(scale, nb))
}

/// Boule complexe -> "(re,imi)" à point fixe.
pub fn format_boule_fixe(z: &BouleComplexe, nb: usize) -> Result<String, Erreur> {
    let re = rendu_fixe(z.reel(), nb)?;
    let im = rendu_fixe(z.imag(), nb)?;
    Ok(format!("({re},{im}i)"))
}
