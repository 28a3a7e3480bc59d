// src/main.rs
//
// Calculatrice Boules — pilote CLI (une opération par invocation)
// ---------------------------------------------------------------
// But:
// - lire deux opérandes complexes "re,im" et un nom d'opération
// - évaluer UNE opération en boules rigoureuses à la précision voulue
// - imprimer le rapport (précision, opérandes, résultat, point fixe)
//
// Toute erreur (lecture, domaine, conversion, opération inconnue)
// s'affiche sur stderr et termine le processus avec un statut non nul :
// jamais de résultat partiel.
//
// IMPORTANT (structure projet):
// - le noyau vit dans src/noyau/ ; ici, point d'entrée seulement

use clap::Parser;

mod noyau;

use noyau::{evalue_operation, format_boule, format_boule_fixe, lit_operande, Erreur, Operation};

/// Calculatrice rigoureuse sur ℂ : centre ± rayon garantis.
#[derive(Parser, Debug)]
#[command(name = "calculatrice-boules", version, about)]
struct Args {
    /// Précision de travail en bits
    #[arg(long, default_value_t = 128, value_parser = clap::value_parser!(u32).range(2..=4_194_304))]
    prec: u32,

    /// Afficher les plages [centre +/- rayon] plutôt que les centres seuls
    #[arg(long)]
    range: bool,

    /// Opération : add, sub, mul, div, exp, ln, pow, log, sqrt, root,
    /// sin, cos, tan, ctan, abs, arg
    #[arg(long, default_value = "add")]
    op: String,

    /// Premier opérande complexe (format : re,im)
    #[arg(long, default_value = "1,0")]
    a: String,

    /// Second opérande complexe (format : re,im)
    #[arg(long, default_value = "1,0")]
    b: String,
}

fn executer(args: &Args) -> Result<(), Erreur> {
    let prec = args.prec as usize;
    let chiffres = (prec as f64 * std::f64::consts::LOG10_2) as usize;
    println!("Précision : {prec} bits (~{chiffres} chiffres décimaux)");

    let a = lit_operande(&args.a, prec)?;
    let b = lit_operande(&args.b, prec)?;

    let op = Operation::depuis_nom(&args.op)?;
    let resultat = evalue_operation(op, &a, &b)?;

    println!("a : {}", format_boule(&a, chiffres, args.range)?);
    println!("b : {}", format_boule(&b, chiffres, args.range)?);
    println!(
        "{} : {}",
        op.nom(),
        format_boule(&resultat, chiffres, args.range)?
    );
    println!("{} : {}", op.nom(), format_boule_fixe(&resultat, chiffres)?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = executer(&args) {
        eprintln!("erreur : {e}");
        std::process::exit(1);
    }
}
