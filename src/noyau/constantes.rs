// src/noyau/constantes.rs
//
// Cache des constantes transcendantes (π, ln 2, …) d'astro-float.
// Le contexte `Consts` mémorise ses calculs : on le partage derrière un
// Mutex global, comme le cache π du noyau rationnel d'origine.
// (Évaluation mono-fil : le verrou ne sert que la signature `&mut`.)

use std::sync::{Mutex, OnceLock};

use astro_float::{BigFloat, Consts, RoundingMode};

static CONSTANTES: OnceLock<Mutex<Consts>> = OnceLock::new();

/// Exécute `f` avec le cache de constantes partagé.
pub fn avec_constantes<T>(f: impl FnOnce(&mut Consts) -> T) -> T {
    let m = CONSTANTES
        .get_or_init(|| Mutex::new(Consts::new().expect("cache de constantes")));
    let mut garde = m.lock().expect("mutex constantes");
    f(&mut garde)
}

/// π brut à `prec` bits, arrondi selon `rm`.
pub fn pi_brut(prec: usize, rm: RoundingMode) -> BigFloat {
    avec_constantes(|cc| cc.pi(prec, rm))
}
