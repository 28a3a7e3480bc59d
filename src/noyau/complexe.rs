// src/noyau/complexe.rs
//
// Boule complexe : rectangle (Re, Im), deux boules réelles de même
// précision. Loi de validité (toutes opérations) : pour tout z1 dans
// l'enclosure de a et z2 dans celle de b, op(z1, z2) est dans
// l'enclosure du résultat.
//
// Politique de précision mixte : une opération binaire produit sa sortie
// à min(prec_a, prec_b). Le pilote ne fabrique qu'une seule précision,
// les deux ne divergent donc jamais en pratique.

use astro_float::BigFloat;

use super::erreur::Erreur;
use super::reel::BouleReelle;

#[derive(Clone, Debug)]
pub struct BouleComplexe {
    reel: BouleReelle,
    imag: BouleReelle,
}

impl BouleComplexe {
    pub fn nouvelle(reel: BouleReelle, imag: BouleReelle) -> Self {
        Self { reel, imag }
    }

    pub fn de_f64(re: f64, im: f64, prec: usize) -> Self {
        Self {
            reel: BouleReelle::de_f64(re, prec),
            imag: BouleReelle::de_f64(im, prec),
        }
    }

    /// Valeur réelle pure (partie imaginaire exactement nulle).
    pub fn reelle_pure(reel: BouleReelle) -> Self {
        let prec = reel.prec();
        Self {
            reel,
            imag: BouleReelle::nulle(prec),
        }
    }

    pub fn reel(&self) -> &BouleReelle {
        &self.reel
    }

    pub fn imag(&self) -> &BouleReelle {
        &self.imag
    }

    pub fn prec(&self) -> usize {
        self.reel.prec().min(self.imag.prec())
    }

    pub fn est_finie(&self) -> bool {
        self.reel.est_finie() && self.imag.est_finie()
    }

    /// 0 ∈ rectangle ? (les deux composantes englobent zéro)
    pub fn englobe_zero(&self) -> bool {
        self.reel.contient_zero() && self.imag.contient_zero()
    }

    /* ---- moteur arithmétique ---- */

    pub fn somme(&self, autre: &Self) -> Self {
        Self {
            reel: self.reel.somme(&autre.reel),
            imag: self.imag.somme(&autre.imag),
        }
    }

    pub fn difference(&self, autre: &Self) -> Self {
        Self {
            reel: self.reel.difference(&autre.reel),
            imag: self.imag.difference(&autre.imag),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            reel: self.reel.neg(),
            imag: self.imag.neg(),
        }
    }

    /// (a+bi)(c+di) = (ac − bd) + (ad + bc)i
    pub fn produit(&self, autre: &Self) -> Self {
        let ac = self.reel.produit(&autre.reel);
        let bd = self.imag.produit(&autre.imag);
        let ad = self.reel.produit(&autre.imag);
        let bc = self.imag.produit(&autre.reel);
        Self {
            reel: ac.difference(&bd),
            imag: ad.somme(&bc),
        }
    }

    /// a/b = a·conj(b) / (c² + d²).
    /// Si c² + d² englobe zéro, le quotient vrai n'est pas borné :
    /// échec explicite plutôt qu'une boule infinie ou fausse.
    pub fn quotient(&self, autre: &Self) -> Result<Self, Erreur> {
        let c2 = autre.reel.produit(&autre.reel);
        let d2 = autre.imag.produit(&autre.imag);
        let norme = c2.somme(&d2);

        let num_re = self
            .reel
            .produit(&autre.reel)
            .somme(&self.imag.produit(&autre.imag));
        let num_im = self
            .imag
            .produit(&autre.reel)
            .difference(&self.reel.produit(&autre.imag));

        Ok(Self {
            reel: num_re.quotient(&norme)?,
            imag: num_im.quotient(&norme)?,
        })
    }

    /// Division exacte par deux (aucun arrondi).
    pub fn moitie(&self) -> Self {
        Self {
            reel: self.reel.moitie(),
            imag: self.imag.moitie(),
        }
    }

    /// Division par un entier non nul (degré de racine).
    pub fn quotient_entier(&self, n: i64) -> Result<Self, Erreur> {
        Ok(Self {
            reel: self.reel.quotient_entier(n)?,
            imag: self.imag.quotient_entier(n)?,
        })
    }

    /* ---- tests d'appartenance ---- */

    /// Le point exact (x, y) est-il dans le rectangle ?
    pub fn contient_point(&self, x: &BigFloat, y: &BigFloat) -> bool {
        self.reel.contient_point(x) && self.imag.contient_point(y)
    }

    pub fn contient_f64(&self, re: f64, im: f64) -> bool {
        self.contient_point(&BigFloat::from_f64(re, 64), &BigFloat::from_f64(im, 64))
    }
}
