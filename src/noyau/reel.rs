// src/noyau/reel.rs
//
// Boule réelle : (centre, rayon, précision).
// Invariant : la vraie valeur est dans [centre − rayon, centre + rayon].
// - centre : arrondi au plus proche à `prec` bits
// - rayon  : arithmétique dirigée vers le haut (PREC_RAYON bits), jamais
//   rétréci ; chaque centre arrondi ajoute 1 ulp = 2^(exposant − prec)
// - rayon == 0 : valeur exacte à la précision de travail
//
// Les fonctions élémentaires propagent l'enclosure :
// - exp, ln, sqrt : évaluation aux bornes (fonctions monotones)
// - sin, cos, atan : pente bornée par 1 (Lipschitz)
// - sinh, cosh : pente bornée au bout de l'intervalle en magnitude

use astro_float::{BigFloat, Exponent, RoundingMode};

use super::constantes::{avec_constantes, pi_brut};
use super::erreur::Erreur;

/// Précision interne des calculs de rayon (toujours arrondis vers le haut).
pub const PREC_RAYON: usize = 64;

const HAUT: RoundingMode = RoundingMode::Up;
const BAS: RoundingMode = RoundingMode::Down;
const PROCHE: RoundingMode = RoundingMode::ToEven;

/* ------------------------ Outils bruts (BigFloat) ------------------------ */

/// 2^k (exact).
fn puissance_de_deux(k: i64) -> BigFloat {
    let mut x = BigFloat::from_word(1, PREC_RAYON);
    let e = (k + 1).clamp(Exponent::MIN as i64 + 1, Exponent::MAX as i64) as Exponent;
    x.set_exponent(e);
    x
}

/// Borne d'erreur d'arrondi d'un centre calculé au plus proche à `prec`
/// bits : 1 ulp = 2^(exposant − prec). Zéro exact => erreur nulle.
fn erreur_arrondi(x: &BigFloat, prec: usize) -> BigFloat {
    if x.is_zero() {
        return BigFloat::new(PREC_RAYON);
    }
    match x.exponent() {
        Some(e) => puissance_de_deux(e as i64 - prec as i64),
        // centre non fini : le rayon devient NaN, le formateur refusera
        None => astro_float::NAN,
    }
}

/// Moitié exacte (décrément d'exposant, aucun arrondi).
fn moitie_brute(x: &BigFloat) -> BigFloat {
    if x.is_zero() {
        return x.clone();
    }
    let mut y = x.clone();
    if let Some(e) = y.exponent() {
        y.set_exponent(e.saturating_sub(1));
    }
    y
}

/// max(a, b), NaN si incomparable.
pub fn max_de(a: BigFloat, b: BigFloat) -> BigFloat {
    match a.cmp(&b) {
        Some(c) if c >= 0 => a,
        Some(_) => b,
        None => astro_float::NAN,
    }
}

/* ------------------------ BouleReelle ------------------------ */

#[derive(Clone, Debug)]
pub struct BouleReelle {
    centre: BigFloat,
    rayon: BigFloat,
    prec: usize,
}

impl BouleReelle {
    /* ---- constructions ---- */

    pub fn nulle(prec: usize) -> Self {
        Self {
            centre: BigFloat::new(prec),
            rayon: BigFloat::new(PREC_RAYON),
            prec,
        }
    }

    /// Assemblage interne : le rayon doit déjà être un majorant valide.
    pub(crate) fn nouvelle(centre: BigFloat, rayon: BigFloat, prec: usize) -> Self {
        Self { centre, rayon, prec }
    }

    /// Boule exacte autour d'un centre déjà représentable.
    pub fn exacte(centre: BigFloat, prec: usize) -> Self {
        Self {
            centre,
            rayon: BigFloat::new(PREC_RAYON),
            prec,
        }
    }

    /// f64 => boule exacte (53 bits de mantisse, toujours représentables).
    pub fn de_f64(x: f64, prec: usize) -> Self {
        Self::exacte(BigFloat::from_f64(x, prec.max(64)), prec)
    }

    /// Entier machine => boule exacte.
    pub fn de_entier(n: i64, prec: usize) -> Self {
        let centre = avec_constantes(|cc| {
            BigFloat::parse(&n.to_string(), astro_float::Radix::Dec, prec.max(64), PROCHE, cc)
        });
        Self::exacte(centre, prec)
    }

    /// Boule construite à partir d'un encadrement [lo, hi] déjà dirigé.
    pub fn depuis_intervalle(lo: &BigFloat, hi: &BigFloat, prec: usize) -> Self {
        let (lo, hi) = match lo.cmp(hi) {
            Some(c) if c > 0 => (hi, lo),
            _ => (lo, hi),
        };
        let centre = moitie_brute(&lo.add(hi, prec, PROCHE));
        let demi_ecart = moitie_brute(&hi.sub(lo, PREC_RAYON, HAUT));
        let rayon = demi_ecart.add(&erreur_arrondi(&centre, prec), PREC_RAYON, HAUT);
        Self { centre, rayon, prec }
    }

    /// Boule construite d'un centre fraîchement arrondi et d'un rayon
    /// propagé (l'ulp du centre est ajouté ici, une seule fois).
    fn propage(centre: BigFloat, rayon_propage: BigFloat, prec: usize) -> Self {
        let rayon = rayon_propage.add(&erreur_arrondi(&centre, prec), PREC_RAYON, HAUT);
        Self { centre, rayon, prec }
    }

    /// π avec son erreur d'arrondi.
    pub fn pi(prec: usize) -> Self {
        let centre = pi_brut(prec, PROCHE);
        Self::propage(centre, BigFloat::new(PREC_RAYON), prec)
    }

    /* ---- accès ---- */

    pub fn centre(&self) -> &BigFloat {
        &self.centre
    }

    pub fn rayon(&self) -> &BigFloat {
        &self.rayon
    }

    pub fn prec(&self) -> usize {
        self.prec
    }

    pub fn est_exacte(&self) -> bool {
        self.rayon.is_zero()
    }

    pub fn est_finie(&self) -> bool {
        let ok = |x: &BigFloat| !x.is_nan() && !x.is_inf_pos() && !x.is_inf_neg();
        ok(&self.centre) && ok(&self.rayon)
    }

    /// 0 ∈ [centre − rayon, centre + rayon] ?
    pub fn contient_zero(&self) -> bool {
        matches!(self.centre.abs().cmp(&self.rayon), Some(c) if c <= 0)
    }

    /// Borne inférieure de l'enclosure (arrondie vers −∞).
    pub fn borne_inf(&self) -> BigFloat {
        self.centre.sub(&self.rayon, self.prec, BAS)
    }

    /// Borne supérieure de l'enclosure (arrondie vers +∞).
    pub fn borne_sup(&self) -> BigFloat {
        self.centre.add(&self.rayon, self.prec, HAUT)
    }

    /// Majorant de |x| sur l'enclosure.
    pub fn mag_sup(&self) -> BigFloat {
        self.centre.abs().add(&self.rayon, PREC_RAYON, HAUT)
    }

    /* ---- arithmétique ---- */

    pub fn neg(&self) -> Self {
        Self {
            centre: self.centre.neg(),
            rayon: self.rayon.clone(),
            prec: self.prec,
        }
    }

    pub fn somme(&self, autre: &Self) -> Self {
        let prec = self.prec.min(autre.prec);
        let centre = self.centre.add(&autre.centre, prec, PROCHE);
        let rayon = self.rayon.add(&autre.rayon, PREC_RAYON, HAUT);
        Self::propage(centre, rayon, prec)
    }

    pub fn difference(&self, autre: &Self) -> Self {
        let prec = self.prec.min(autre.prec);
        let centre = self.centre.sub(&autre.centre, prec, PROCHE);
        let rayon = self.rayon.add(&autre.rayon, PREC_RAYON, HAUT);
        Self::propage(centre, rayon, prec)
    }

    /// |m_a|·r_b + |m_b|·r_a + r_a·r_b, puis l'ulp du centre.
    pub fn produit(&self, autre: &Self) -> Self {
        let prec = self.prec.min(autre.prec);
        let centre = self.centre.mul(&autre.centre, prec, PROCHE);

        let t1 = self.centre.abs().mul(&autre.rayon, PREC_RAYON, HAUT);
        let t2 = autre.centre.abs().mul(&self.rayon, PREC_RAYON, HAUT);
        let t3 = self.rayon.mul(&autre.rayon, PREC_RAYON, HAUT);
        let rayon = t1.add(&t2, PREC_RAYON, HAUT).add(&t3, PREC_RAYON, HAUT);

        Self::propage(centre, rayon, prec)
    }

    /// Échec si le diviseur englobe zéro (quotient non borné).
    /// Rayon : (|m_a|·r_b + |m_b|·r_a) / (|m_b|·(|m_b| − r_b)).
    pub fn quotient(&self, autre: &Self) -> Result<Self, Erreur> {
        if autre.contient_zero() {
            return Err(Erreur::Domaine(
                "division par une valeur englobant zéro".into(),
            ));
        }
        let prec = self.prec.min(autre.prec);
        let centre = self.centre.div(&autre.centre, prec, PROCHE);

        let num = self
            .centre
            .abs()
            .mul(&autre.rayon, PREC_RAYON, HAUT)
            .add(&autre.centre.abs().mul(&self.rayon, PREC_RAYON, HAUT), PREC_RAYON, HAUT);
        let marge = autre.centre.abs().sub(&autre.rayon, PREC_RAYON, BAS);
        let denom = autre.centre.abs().mul(&marge, PREC_RAYON, BAS);
        let rayon = num.div(&denom, PREC_RAYON, HAUT);

        Ok(Self::propage(centre, rayon, prec))
    }

    /// Division par un entier non nul (degré de racine, moyenne, …).
    pub fn quotient_entier(&self, n: i64) -> Result<Self, Erreur> {
        self.quotient(&Self::de_entier(n, self.prec))
    }

    /// Moitié exacte des deux champs (aucun nouvel arrondi).
    pub fn moitie(&self) -> Self {
        Self {
            centre: moitie_brute(&self.centre),
            rayon: moitie_brute(&self.rayon),
            prec: self.prec,
        }
    }

    /* ---- fonctions élémentaires ---- */

    /// exp par évaluation aux bornes (monotone croissante).
    pub fn exp(&self) -> Self {
        let prec = self.prec;
        avec_constantes(|cc| {
            let lo = self.borne_inf().exp(prec, BAS, cc);
            let hi = self.borne_sup().exp(prec, HAUT, cc);
            Self::depuis_intervalle(&lo, &hi, prec)
        })
    }

    /// ln par évaluation aux bornes ; l'enclosure doit rester > 0.
    pub fn ln(&self) -> Result<Self, Erreur> {
        let bas = self.borne_inf();
        if bas.is_negative() || bas.is_zero() {
            return Err(Erreur::Domaine(
                "logarithme d'une valeur englobant zéro".into(),
            ));
        }
        let prec = self.prec;
        Ok(avec_constantes(|cc| {
            let lo = bas.ln(prec, BAS, cc);
            let hi = self.borne_sup().ln(prec, HAUT, cc);
            Self::depuis_intervalle(&lo, &hi, prec)
        }))
    }

    /// √ par bornes ; un encadrement touchant zéro retombe sur [0, √hi].
    pub fn sqrt(&self) -> Result<Self, Erreur> {
        let prec = self.prec;
        let hi = self.borne_sup();
        if hi.is_negative() {
            return Err(Erreur::Domaine(
                "racine carrée d'une valeur négative".into(),
            ));
        }
        let bas = self.borne_inf();
        if bas.is_negative() || bas.is_zero() {
            let zero = BigFloat::new(prec);
            let haut = hi.sqrt(prec, HAUT);
            return Ok(Self::depuis_intervalle(&zero, &haut, prec));
        }
        let lo = bas.sqrt(prec, BAS);
        let haut = hi.sqrt(prec, HAUT);
        Ok(Self::depuis_intervalle(&lo, &haut, prec))
    }

    /// sin : pente ≤ 1, le rayon traverse tel quel.
    pub fn sin(&self) -> Self {
        let prec = self.prec;
        let centre = avec_constantes(|cc| self.centre.sin(prec, PROCHE, cc));
        Self::propage(centre, self.rayon.clone(), prec)
    }

    /// cos : pente ≤ 1.
    pub fn cos(&self) -> Self {
        let prec = self.prec;
        let centre = avec_constantes(|cc| self.centre.cos(prec, PROCHE, cc));
        Self::propage(centre, self.rayon.clone(), prec)
    }

    /// atan : pente ≤ 1.
    pub fn atan(&self) -> Self {
        let prec = self.prec;
        let centre = avec_constantes(|cc| self.centre.atan(prec, PROCHE, cc));
        Self::propage(centre, self.rayon.clone(), prec)
    }

    /// sinh : pente ≤ cosh(mag_sup).
    pub fn sinh(&self) -> Self {
        let prec = self.prec;
        avec_constantes(|cc| {
            let centre = self.centre.sinh(prec, PROCHE, cc);
            let pente = self.mag_sup().cosh(PREC_RAYON, HAUT, cc);
            let rayon = pente.mul(&self.rayon, PREC_RAYON, HAUT);
            Self::propage(centre, rayon, prec)
        })
    }

    /// cosh : pente ≤ sinh(mag_sup).
    pub fn cosh(&self) -> Self {
        let prec = self.prec;
        avec_constantes(|cc| {
            let centre = self.centre.cosh(prec, PROCHE, cc);
            let pente = self.mag_sup().sinh(PREC_RAYON, HAUT, cc);
            let rayon = pente.mul(&self.rayon, PREC_RAYON, HAUT);
            Self::propage(centre, rayon, prec)
        })
    }

    /* ---- tests d'appartenance (utilisés par la campagne de tests) ---- */

    /// Le point `x` (exact) est-il dans l'enclosure ?
    pub fn contient_point(&self, x: &BigFloat) -> bool {
        let ecart = self.centre.sub(x, self.prec.max(PREC_RAYON), HAUT).abs();
        matches!(ecart.cmp(&self.rayon), Some(c) if c <= 0)
    }

    /// L'enclosure de `autre` est-elle incluse dans la nôtre ?
    pub fn contient_boule(&self, autre: &Self) -> bool {
        let ecart = self.centre.sub(&autre.centre, PREC_RAYON, HAUT).abs();
        let limite = ecart.add(&autre.rayon, PREC_RAYON, HAUT);
        matches!(limite.cmp(&self.rayon), Some(c) if c <= 0)
    }
}
