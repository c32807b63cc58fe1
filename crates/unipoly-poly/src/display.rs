//! Textual rendering of polynomials.
//!
//! Terms are printed from the highest stored exponent down, skipping zero
//! coefficients:
//! - `-3x² + 2x + 1`
//! - `x¹⁰ - 1/2x`
//! - `0` for a polynomial without nonzero coefficients
//!
//! A leading negative term gets a bare `-`, later terms are joined with
//! ` + ` or ` - ` and printed by magnitude. A magnitude of one is elided
//! except on the constant term. How the variable and its exponents are
//! written is controlled by [`FormatOptions`].

use std::fmt;

use unipoly_rings::traits::{OrderedRing, Ring};

use crate::polynomial::Polynomial;

/// How exponents of two or more are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExponentStyle {
    /// Unicode superscript digits: `x²`.
    #[default]
    Superscript,
    /// ASCII caret: `x^2`.
    Caret,
}

/// Rendering configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Name of the indeterminate.
    pub variable: String,
    /// Exponent notation.
    pub exponent_style: ExponentStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
            exponent_style: ExponentStyle::Superscript,
        }
    }
}

impl FormatOptions {
    /// Sets the name of the indeterminate.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Sets the exponent notation.
    #[must_use]
    pub fn with_exponent_style(mut self, style: ExponentStyle) -> Self {
        self.exponent_style = style;
        self
    }
}

/// A polynomial paired with rendering options.
///
/// Created by [`Polynomial::display_with`].
pub struct PolyFormatter<'a, R: OrderedRing> {
    poly: &'a Polynomial<R>,
    options: &'a FormatOptions,
}

impl<R: OrderedRing + fmt::Display> fmt::Display for PolyFormatter<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_poly(self.poly, self.options, f)
    }
}

impl<R: OrderedRing + fmt::Display> Polynomial<R> {
    /// Renders the polynomial with custom options.
    ///
    /// ```
    /// use unipoly_poly::{ExponentStyle, FormatOptions, Polynomial};
    /// use unipoly_rings::Q;
    ///
    /// let p = Polynomial::<Q>::from_values([1, 0, 1]);
    /// let opts = FormatOptions::default()
    ///     .with_variable("t")
    ///     .with_exponent_style(ExponentStyle::Caret);
    /// assert_eq!(p.display_with(&opts).to_string(), "t^2 + 1");
    /// ```
    #[must_use]
    pub fn display_with<'a>(&'a self, options: &'a FormatOptions) -> PolyFormatter<'a, R> {
        PolyFormatter {
            poly: self,
            options,
        }
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_poly(self, &FormatOptions::default(), f)
    }
}

fn format_poly<R: OrderedRing + fmt::Display>(
    poly: &Polynomial<R>,
    options: &FormatOptions,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut first = true;

    for exp in (0..poly.len()).rev() {
        let c = poly.get(exp);
        if c.is_zero() {
            continue;
        }

        let negative = c.signum() < 0;
        if first {
            if negative {
                f.write_str("-")?;
            }
        } else {
            f.write_str(if negative { " - " } else { " + " })?;
        }
        first = false;

        let magnitude = c.abs();
        if exp == 0 || !magnitude.is_one() {
            write!(f, "{magnitude}")?;
        }
        if exp >= 1 {
            f.write_str(&options.variable)?;
        }
        if exp >= 2 {
            match options.exponent_style {
                ExponentStyle::Superscript => {
                    for d in exp.to_string().chars() {
                        write!(f, "{}", to_superscript(d))?;
                    }
                }
                ExponentStyle::Caret => write!(f, "^{exp}")?,
            }
        }
    }

    if first {
        f.write_str("0")?;
    }
    Ok(())
}

#[inline]
const fn to_superscript(c: char) -> char {
    match c {
        '0' => '\u{2070}',
        '1' => '\u{b9}',
        '2' => '\u{b2}',
        '3' => '\u{b3}',
        '4' => '\u{2074}',
        '5' => '\u{2075}',
        '6' => '\u{2076}',
        '7' => '\u{2077}',
        '8' => '\u{2078}',
        '9' => '\u{2079}',
        _ => c,
    }
}
