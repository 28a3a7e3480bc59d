// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// - Lecture           : littéral décimal mal formé (avec la composante fautive)
// - OperationInconnue : nom d'opération non reconnu par le pilote
// - Domaine           : résultat mathématiquement indéfini ou non borné
// - Conversion        : boule non représentable en décimal fini, ou
//                       extraction d'entier hors plage / ambiguë
//
// Toute erreur avorte l'invocation entière : aucune reprise interne,
// aucun résultat partiel.

use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Erreur {
    Lecture { composante: &'static str, texte: String },
    OperationInconnue(String),
    Domaine(String),
    Conversion(String),
}

impl fmt::Display for Erreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Erreur::Lecture { composante, texte } => {
                write!(f, "lecture : {composante} invalide : {texte:?}")
            }
            Erreur::OperationInconnue(nom) => {
                write!(f, "opération non supportée : {nom:?}")
            }
            Erreur::Domaine(msg) => write!(f, "domaine : {msg}"),
            Erreur::Conversion(msg) => write!(f, "conversion : {msg}"),
        }
    }
}

impl error::Error for Erreur {}
