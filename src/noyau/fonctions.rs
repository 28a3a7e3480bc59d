// src/noyau/fonctions.rs
//
// Fonctions élémentaires sur BouleComplexe.
// ----------------------------------------
// Décompositions classiques, chaque étage propageant l'enclosure :
// - exp(x+iy) = e^x·(cos y + i sin y)
// - ln(z)     = ln|z| + i·arg(z)          (échec si z englobe 0)
// - z^w       = exp(w·ln z)
// - log_b(z)  = ln z / ln b
// - √z, z^(1/n) = exp(ln z / n)           (disque [0, max|z|^(1/n)] si z englobe 0)
// - sin(x+iy) = sin x·cosh y + i cos x·sinh y
// - cos(x+iy) = cos x·cosh y − i sin x·sinh y
// - tan = sin/cos, cot = 1/tan
// - |z| et arg(z) : bornes du rectangle (coins poussés vers l'extérieur)
//
// Convention de branche : arg principal dans (−π, π]. Un rectangle qui
// contient 0 ou qui traverse l'axe réel négatif reçoit la boule 0 ± π.

use astro_float::{BigFloat, RoundingMode};

use super::complexe::BouleComplexe;
use super::erreur::Erreur;
use super::reel::{max_de, BouleReelle};

const HAUT: RoundingMode = RoundingMode::Up;
const BAS: RoundingMode = RoundingMode::Down;

/* ------------------------ Bornes du rectangle ------------------------ */

/// Encadrement [min |x|, max |x|] d'une composante, bornes dirigées.
fn bornes_abs(b: &BouleReelle) -> (BigFloat, BigFloat) {
    let lo = b.borne_inf().abs();
    let hi = b.borne_sup().abs();
    let haut = max_de(lo.clone(), hi.clone());
    if b.contient_zero() {
        (BigFloat::new(b.prec()), haut)
    } else {
        let bas = match lo.cmp(&hi) {
            Some(c) if c <= 0 => lo,
            _ => hi,
        };
        (bas, haut)
    }
}

/// Encadrement [min |z|, max |z|] du rectangle, bornes dirigées.
fn bornes_module(z: &BouleComplexe) -> (BigFloat, BigFloat) {
    let prec = z.prec();
    let (x_bas, x_haut) = bornes_abs(z.reel());
    let (y_bas, y_haut) = bornes_abs(z.imag());

    let lo = x_bas
        .mul(&x_bas, prec, BAS)
        .add(&y_bas.mul(&y_bas, prec, BAS), prec, BAS)
        .sqrt(prec, BAS);
    let hi = x_haut
        .mul(&x_haut, prec, HAUT)
        .add(&y_haut.mul(&y_haut, prec, HAUT), prec, HAUT)
        .sqrt(prec, HAUT);
    (lo, hi)
}

/// Le rectangle touche-t-il l'axe réel négatif (coupure de branche) ?
fn traverse_la_coupure(z: &BouleComplexe) -> bool {
    z.imag().contient_zero() && z.reel().borne_inf().is_negative()
}

/* ------------------------ Argument (coins) ------------------------ */

/// Boule 0 ± π : enclosure valide de l'argument principal quel que soit
/// le rectangle (repli quand la coupure est traversée).
fn arg_complet(prec: usize) -> BouleReelle {
    let pi_haut = super::constantes::pi_brut(prec, HAUT);
    BouleReelle::depuis_intervalle(&pi_haut.neg(), &pi_haut, prec)
}

/// arg(x, y) en un coin exact du rectangle (0 exclu, coupure exclue).
fn arg_coin(x: &BigFloat, y: &BigFloat, prec: usize) -> BouleReelle {
    if x.is_zero() {
        // axe imaginaire : ±π/2
        let demi_pi = BouleReelle::pi(prec).moitie();
        return if y.is_negative() { demi_pi.neg() } else { demi_pi };
    }
    let ratio = BouleReelle::depuis_intervalle(&y.div(x, prec, BAS), &y.div(x, prec, HAUT), prec);
    let base = ratio.atan();
    if x.is_negative() {
        let pi = BouleReelle::pi(prec);
        if y.is_negative() {
            base.difference(&pi)
        } else {
            base.somme(&pi)
        }
    } else {
        base
    }
}

/// Enclosure de arg sur tout le rectangle : les extrema sont atteints aux
/// coins (rectangle convexe n'entourant pas 0, hors coupure).
fn arg_rectangle(z: &BouleComplexe) -> BouleReelle {
    let prec = z.prec();
    if z.englobe_zero() || traverse_la_coupure(z) {
        return arg_complet(prec);
    }

    let xs = [z.reel().borne_inf(), z.reel().borne_sup()];
    let ys = [z.imag().borne_inf(), z.imag().borne_sup()];

    let mut bas: Option<BigFloat> = None;
    let mut haut: Option<BigFloat> = None;
    for x in &xs {
        for y in &ys {
            let coin = arg_coin(x, y, prec);
            let (b, h) = (coin.borne_inf(), coin.borne_sup());
            bas = Some(match bas {
                None => b,
                Some(v) => match v.cmp(&b) {
                    Some(c) if c <= 0 => v,
                    _ => b,
                },
            });
            haut = Some(match haut {
                None => h,
                Some(v) => max_de(v, h),
            });
        }
    }
    // quatre coins, toujours présents
    BouleReelle::depuis_intervalle(&bas.expect("coins"), &haut.expect("coins"), prec)
}

/* ------------------------ Fonctions élémentaires ------------------------ */

impl BouleComplexe {
    /// e^z, défini partout.
    pub fn exp(&self) -> Self {
        let ex = self.reel().exp();
        let cy = self.imag().cos();
        let sy = self.imag().sin();
        Self::nouvelle(ex.produit(&cy), ex.produit(&sy))
    }

    /// ln z = ln|z| + i·arg z. Échec si le rectangle contient 0.
    pub fn ln(&self) -> Result<Self, Erreur> {
        if self.englobe_zero() {
            return Err(Erreur::Domaine(
                "logarithme d'une valeur englobant zéro".into(),
            ));
        }
        let prec = self.prec();
        let (lo, hi) = bornes_module(self);
        let module = BouleReelle::depuis_intervalle(&lo, &hi, prec);
        let partie_reelle = module.ln()?;
        Ok(Self::nouvelle(partie_reelle, arg_rectangle(self)))
    }

    /// z^w = exp(w · ln z). Hérite de l'échec de ln quand z englobe 0.
    pub fn puissance(&self, exposant: &Self) -> Result<Self, Erreur> {
        Ok(exposant.produit(&self.ln()?).exp())
    }

    /// log_base(z) = ln z / ln base. Échec si base englobe 0 (via ln)
    /// ou si ln(base) englobe 0, c.-à-d. base englobe 1 (via quotient).
    pub fn log_base(&self, base: &Self) -> Result<Self, Erreur> {
        let ln_z = self.ln()?;
        let ln_base = base.ln()?;
        ln_z.quotient(&ln_base)
    }

    /// √z : exp(ln z / 2) hors de zéro ; disque sûr sinon.
    pub fn sqrt(&self) -> Result<Self, Erreur> {
        if self.englobe_zero() {
            let prec = self.prec();
            let (_, hi) = bornes_module(self);
            let s = hi.sqrt(prec, HAUT);
            let zero = BigFloat::new(prec);
            return Ok(Self::nouvelle(
                BouleReelle::depuis_intervalle(&zero, &s, prec),
                BouleReelle::depuis_intervalle(&s.neg(), &s, prec),
            ));
        }
        Ok(self.ln()?.moitie().exp())
    }

    /// Racine n-ième principale : exp(ln z / n). Degré ≤ 0 refusé.
    pub fn racine(&self, degre: i64) -> Result<Self, Erreur> {
        if degre <= 0 {
            return Err(Erreur::Domaine("degré de racine non positif".into()));
        }
        if degre == 1 {
            return Ok(self.clone());
        }
        if self.englobe_zero() {
            let prec = self.prec();
            let (_, hi) = bornes_module(self);
            if hi.is_zero() {
                // 0^(1/n) = 0 : la boule nulle suffit
                return Ok(Self::de_f64(0.0, 0.0, prec));
            }
            // majorant de |z|^(1/n) via la machinerie de boules
            let s = BouleReelle::exacte(hi, prec)
                .ln()?
                .quotient_entier(degre)?
                .exp()
                .borne_sup();
            return Ok(Self::nouvelle(
                BouleReelle::depuis_intervalle(&s.neg(), &s, prec),
                BouleReelle::depuis_intervalle(&s.neg(), &s, prec),
            ));
        }
        Ok(self.ln()?.quotient_entier(degre)?.exp())
    }

    /// sin(x+iy) = sin x·cosh y + i cos x·sinh y.
    pub fn sin(&self) -> Self {
        let sx = self.reel().sin();
        let cx = self.reel().cos();
        let shy = self.imag().sinh();
        let chy = self.imag().cosh();
        Self::nouvelle(sx.produit(&chy), cx.produit(&shy))
    }

    /// cos(x+iy) = cos x·cosh y − i sin x·sinh y.
    pub fn cos(&self) -> Self {
        let sx = self.reel().sin();
        let cx = self.reel().cos();
        let shy = self.imag().sinh();
        let chy = self.imag().cosh();
        Self::nouvelle(cx.produit(&chy), sx.produit(&shy).neg())
    }

    /// tan = sin/cos. Quand l'enclosure de cos z touche zéro, le rectangle
    /// chevauche un pôle (multiple impair de π/2) : détection conservative.
    pub fn tan(&self) -> Result<Self, Erreur> {
        let s = self.sin();
        let c = self.cos();
        match s.quotient(&c) {
            Ok(q) => Ok(q),
            Err(Erreur::Domaine(_)) => Err(Erreur::Domaine(
                "tangente : l'enclosure chevauche un pôle".into(),
            )),
            Err(e) => Err(e),
        }
    }

    /// cot = 1/tan : hérite du pôle de tan et du rejet de division
    /// quand tan z englobe 0.
    pub fn cotangente(&self) -> Result<Self, Erreur> {
        let t = self.tan()?;
        let un = Self::de_f64(1.0, 0.0, self.prec());
        un.quotient(&t)
    }

    /// |z|, rendu réel pur (partie imaginaire exactement nulle).
    pub fn module(&self) -> Self {
        let prec = self.prec();
        let (lo, hi) = bornes_module(self);
        Self::reelle_pure(BouleReelle::depuis_intervalle(&lo, &hi, prec))
    }

    /// arg z dans (−π, π], rendu réel pur.
    pub fn argument(&self) -> Self {
        Self::reelle_pure(arg_rectangle(self))
    }
}
