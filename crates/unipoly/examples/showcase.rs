//! Polynomial Showcase
//!
//! Builds a few polynomials, prints them and divides them.
//!
//! Run with: cargo run --example showcase
//! Set `UNIPOLY_LOG=debug` (or `trace`) to see the division steps.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use unipoly::prelude::*;

fn q(n: i64) -> Q {
    Q::from_integer(n)
}

fn poly(coeffs: &[i64]) -> Polynomial<Q> {
    Polynomial::from_values(coeffs.iter().copied())
}

fn init_logging() {
    let Some(level) = std::env::var("UNIPOLY_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
    else {
        return;
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        std::process::exit(1);
    }
}

fn construction() {
    println!("=== Construction ===");

    println!("{}", poly(&[1, 2, 3]));
    println!("{}", Polynomial::<Q>::zero());

    let pol1 = poly(&[0, 1, 1, 0]);
    println!("pol1 = {pol1}");
    println!("order(pol1) = {}", pol1.order());
    println!("pol1(5) = {}", pol1.evaluate(&q(5)));
    println!("pol1[3] = {}, pol1[10] = {}", pol1.get(3), pol1.get(10));
    println!();
}

fn arithmetic() {
    println!("=== Arithmetic ===");

    let a = poly(&[1, 2, -3]);
    let b = poly(&[0, 1]);
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b = {}", &a + &b);
    println!("a - b = {}", &a - &b);
    println!("a * b = {}", &a * &b);
    println!("5 - a = {}", q(5) - a.clone());
    println!("(x + 1)^3 = {}", poly(&[1, 1]).pow(3));
    println!();
}

fn division() -> PolyResult<()> {
    println!("=== Division ===");

    let p = poly(&[-10, -3, 1]);
    let d = poly(&[2, 1]);
    let (quot, rem) = p.divmod(&d)?;
    println!("({p}) / ({d}) = {quot} remainder {rem}");

    let p = poly(&[5, 2, 0, 1]);
    let d = poly(&[1, 0, 1]);
    println!("({p}) // ({d}) = {}", p.floordiv(&d)?);
    println!("({p}) % ({d}) = {}", p.modulo(&d)?);

    let halves = poly(&[1, 0, 1]).floordiv(q(2))?;
    println!("(x² + 1) / 2 = {halves}");

    match p.divmod(&Polynomial::<Q>::zero()) {
        Ok(_) => println!("unexpected quotient"),
        Err(e) => println!("dividing by zero: {e}"),
    }

    let g = poly(&[2, -3, 1]).gcd(&poly(&[-3, 2, 1]))?;
    println!("gcd(x² - 3x + 2, x² + 2x - 3) = {g}");
    println!();
    Ok(())
}

fn reals() -> PolyResult<()> {
    println!("=== Floating point ===");

    let p = Polynomial::<Real>::from_values([1.0, 1.0, 1.0]);
    let d = Polynomial::<Real>::from_values([0.0, 3.0]);
    let (quot, rem) = p.divmod(&d)?;
    println!("({p}) / ({d}) = {quot} remainder {rem}");
    println!();
    Ok(())
}

fn formatting() {
    println!("=== Formatting ===");

    let p = poly(&[1, 0, -4, 0, 0, 0, 0, 0, 0, 0, 1]);
    println!("default: {p}");

    let opts = FormatOptions::default()
        .with_variable("t")
        .with_exponent_style(ExponentStyle::Caret);
    println!("caret:   {}", p.display_with(&opts));
}

fn main() -> PolyResult<()> {
    init_logging();

    construction();
    arithmetic();
    division()?;
    reals()?;
    formatting();
    Ok(())
}
