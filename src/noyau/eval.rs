//! Noyau — évaluation (une opération par invocation)
//!
//! lit_operande -> Operation::depuis_nom -> evalue_operation -> format
//!
//! Particularités héritées du pilote d'origine :
//! - `root` : le degré est extrait de la partie réelle de `a`
//!   (vers_indice, strict), la racine s'applique à `b`
//! - `log`  : logarithme de `b` en base `a` (opérandes inversés)

use super::complexe::BouleComplexe;
use super::conversion::vers_indice;
use super::erreur::Erreur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Somme,
    Difference,
    Produit,
    Quotient,
    Exp,
    Ln,
    Puissance,
    Log,
    Sqrt,
    Racine,
    Sin,
    Cos,
    Tan,
    Cotangente,
    Module,
    Argument,
}

impl Operation {
    /// Nom CLI -> opération. Les noms sont ceux du pilote d'origine.
    pub fn depuis_nom(nom: &str) -> Result<Self, Erreur> {
        use Operation::*;
        Ok(match nom {
            "add" => Somme,
            "sub" => Difference,
            "mul" => Produit,
            "div" => Quotient,
            "exp" => Exp,
            "ln" => Ln,
            "pow" => Puissance,
            "log" => Log,
            "sqrt" => Sqrt,
            "root" => Racine,
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "ctan" => Cotangente,
            "abs" => Module,
            "arg" => Argument,
            _ => return Err(Erreur::OperationInconnue(nom.to_string())),
        })
    }

    pub fn nom(&self) -> &'static str {
        use Operation::*;
        match self {
            Somme => "add",
            Difference => "sub",
            Produit => "mul",
            Quotient => "div",
            Exp => "exp",
            Ln => "ln",
            Puissance => "pow",
            Log => "log",
            Sqrt => "sqrt",
            Racine => "root",
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Cotangente => "ctan",
            Module => "abs",
            Argument => "arg",
        }
    }
}

/// Applique l'opération. Les unaires portent sur `a` ; toute erreur
/// (domaine, conversion) avorte l'invocation entière.
pub fn evalue_operation(
    op: Operation,
    a: &BouleComplexe,
    b: &BouleComplexe,
) -> Result<BouleComplexe, Erreur> {
    use Operation::*;
    match op {
        Somme => Ok(a.somme(b)),
        Difference => Ok(a.difference(b)),
        Produit => Ok(a.produit(b)),
        Quotient => a.quotient(b),
        Exp => Ok(a.exp()),
        Ln => a.ln(),
        Puissance => a.puissance(b),
        // log de b en base a (ordre du pilote d'origine)
        Log => b.log_base(a),
        Sqrt => a.sqrt(),
        Racine => {
            let degre = vers_indice(a.reel())?;
            b.racine(degre)
        }
        Sin => Ok(a.sin()),
        Cos => Ok(a.cos()),
        Tan => a.tan(),
        Cotangente => a.cotangente(),
        Module => Ok(a.module()),
        Argument => Ok(a.argument()),
    }
}
