//! Significance labels

/// Star label for a p-value.
///
/// `****` up to 1e-4, `***` up to 1e-3, `**` up to 0.01, `*` up to 0.05 and
/// `n.s.` above.
pub fn pval_stars(p: f64) -> &'static str {
    if p <= 0.0001 {
        "****"
    } else if p <= 0.001 {
        "***"
    } else if p <= 0.01 {
        "**"
    } else if p <= 0.05 {
        "*"
    } else {
        "n.s."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pval_stars() {
        assert_eq!(pval_stars(0.00001), "****");
        assert_eq!(pval_stars(0.0005), "***");
        assert_eq!(pval_stars(0.01), "**");
        assert_eq!(pval_stars(0.03), "*");
        assert_eq!(pval_stars(0.2), "n.s.");
        assert_eq!(pval_stars(f64::NAN), "n.s.");
    }
}
