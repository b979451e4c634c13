//! Output File Naming
//!
//! Filename convention: `<sanitized-target>_DD_Checklist_<YYYYMMDD>.xlsx`.

use chrono::NaiveDate;

/// Sanitizes a target company name for use in a filename.
///
/// Keeps alphanumerics, spaces, underscores and hyphens; everything else
/// becomes `_`. The result is trimmed and spaces are then replaced with
/// underscores.
pub(crate) fn sanitize_target(target: &str) -> String {
    let kept: String = target
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    kept.trim().replace(' ', "_")
}

/// Output filename for `target` generated on `date`.
pub fn output_filename(target: &str, date: NaiveDate) -> String {
    format!(
        "{}_DD_Checklist_{}.xlsx",
        sanitize_target(target),
        date.format("%Y%m%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(sanitize_target("TechVida Lda"), "TechVida_Lda");
    }

    #[test]
    fn punctuation_is_replaced() {
        assert_eq!(sanitize_target("Farma, S.A."), "Farma__S_A_");
        assert_eq!(sanitize_target("a/b\\c"), "a_b_c");
    }

    #[test]
    fn accented_letters_are_kept() {
        // char::is_alphanumeric is Unicode-aware, like the original.
        assert_eq!(sanitize_target("Farma Saúde SA"), "Farma_Saúde_SA");
    }

    #[test]
    fn hyphen_and_underscore_survive() {
        assert_eq!(sanitize_target("Alpha-Beta_1"), "Alpha-Beta_1");
    }

    #[test]
    fn filename_follows_the_convention() {
        assert_eq!(
            output_filename("TechVida Lda", date()),
            "TechVida_Lda_DD_Checklist_20260828.xlsx"
        );
    }
}
