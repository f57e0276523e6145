//! Plain-text rendering of t-test results.
//!
//! The layout is the classic NIST-handbook table: one labeled row per
//! quantity, descriptive values in 5 significant digits, the two-tailed
//! probability in scientific notation and alpha in fixed point.
//!
//! ```text
//! _______________________________________________
//! Student t test for two samples (equal variances)
//! _______________________________________________
//!
//! Number of Observations (Sample 1)                      =  249
//! Sample 1 Mean                                          =  20.145
//! ...
//! Alternative Hypothesis              Conclusion
//! Sample 1 Mean != Sample 2 Mean       NOT REJECTED
//! ```

use crate::stats::traits::{Alternative, TTestResult};
use std::fmt;

const LABEL_WIDTH: usize = 55;
const CONCLUSION_WIDTH: usize = 37;
const SIGNIFICANT_DIGITS: usize = 5;

/// Format with `digits` significant digits, `%g` style (trailing zeros dropped).
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = split_exponent(&sci);

    if exp < -4 || exp >= digits as i32 {
        format!("{}{}", trim_fraction(mantissa), c_exponent(exp))
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Format in scientific notation with `decimals` fractional digits and a
/// signed, at least two-digit exponent (`5.273e-30`, `1.000e+00`).
pub fn format_scientific(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{:.*e}", decimals, value);
    let (mantissa, exp) = split_exponent(&sci);
    format!("{}{}", mantissa, c_exponent(exp))
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn c_exponent(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{}{:02}", sign, exp.abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{:<width$}=  {}", label, value, width = LABEL_WIDTH)
}

impl fmt::Display for TTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.variance.title();
        let rule = "_".repeat(title.len() - 1);
        writeln!(f, "{}", rule)?;
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        let sig = |v: f64| format_significant(v, SIGNIFICANT_DIGITS);

        row(f, "Number of Observations (Sample 1)", self.sample1.count)?;
        row(f, "Sample 1 Mean", sig(self.sample1.mean))?;
        row(f, "Sample 1 Standard Deviation", sig(self.sample1.std_dev))?;
        row(f, "Number of Observations (Sample 2)", self.sample2.count)?;
        row(f, "Sample 2 Mean", sig(self.sample2.mean))?;
        row(f, "Sample 2 Standard Deviation", sig(self.sample2.std_dev))?;
        row(f, "Degrees of Freedom", sig(self.degrees_of_freedom))?;
        if let Some(sp) = self.pooled_std_dev {
            row(f, "Pooled Standard Deviation", sig(sp))?;
        }
        row(f, "T Statistic", sig(self.t_statistic))?;
        row(
            f,
            "Probability that difference is due to chance",
            format_scientific(self.two_tailed_probability, 3),
        )?;
        writeln!(f)?;

        row(
            f,
            "Results for Alternative Hypothesis and alpha",
            format!("{:.4}", self.alpha),
        )?;
        writeln!(f)?;

        writeln!(f, "Alternative Hypothesis              Conclusion")?;
        for alternative in Alternative::ALL {
            writeln!(
                f,
                "{:<width$}{}",
                alternative.label(),
                self.conclusions.get(alternative).label(),
                width = CONCLUSION_WIDTH
            )?;
        }
        Ok(())
    }
}
