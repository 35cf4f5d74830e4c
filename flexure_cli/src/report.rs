//! Plain-text and JSON rendering of section results.

use std::fmt::Write;

use flexure_core::{SectionExtra, SectionResult};
use serde::Serialize;

const RULE: &str = "═══════════════════════════════════════";

/// JSON document printed with `--json`
#[derive(Debug, Serialize)]
pub struct ReportJson<'a> {
    pub label: &'a str,
    pub calculation: &'static str,
    pub result: &'a SectionResult,
}

/// Render a result as a fixed-decimal text report.
pub fn render(label: &str, calc_type: &str, result: &SectionResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, label, calc_type, result);
    out
}

fn write_report(out: &mut String, label: &str, calc_type: &str, result: &SectionResult) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    if label.is_empty() {
        writeln!(out, "  SECTION {} RESULTS", calc_type.to_uppercase())?;
    } else {
        writeln!(out, "  SECTION {} RESULTS: {}", calc_type.to_uppercase(), label)?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "Mode:         {}", result.mode())?;
    writeln!(out, "  h0        = {:.2} mm", result.h0_mm)?;
    writeln!(out, "  αs        = {:.4}", result.alpha_s)?;
    writeln!(out, "  αs,max    = {:.4}", result.alpha_s_max)?;
    writeln!(out, "  x         = {:.2} mm", result.x_mm)?;
    writeln!(out, "  ξ         = {:.4}", result.xi())?;
    writeln!(out, "  As        = {:.2} mm²", result.as_mm2)?;
    writeln!(out, "  As'       = {:.2} mm²", result.as_prime_mm2)?;
    writeln!(out, "  Mu        = {:.2} kN·m", result.m_capacity_knm)?;
    writeln!(out)?;

    match &result.extra {
        SectionExtra::Single(_) => {
            writeln!(out, "Singly reinforced: αs ≤ αs,max, tension steel only.")?;
        }
        SectionExtra::Double(extra) => {
            writeln!(out, "Doubly reinforced: x pinned at ξb·h0.")?;
            writeln!(out, "  Mc        = {:.2} kN·m (concrete block)", extra.m_c_knm)?;
            writeln!(out, "  ΔM        = {:.2} kN·m (compression steel)", extra.delta_m_knm)?;
        }
        SectionExtra::Check(extra) => {
            writeln!(out, "Forces (x fixed at ξb·h0, all steel yielded):")?;
            writeln!(out, "  Cc        = {:.1} N", extra.c_c_n)?;
            writeln!(out, "  Cs        = {:.1} N", extra.c_s_n)?;
            writeln!(out, "  Ts        = {:.1} N", extra.t_s_n)?;
            writeln!(out, "  Cc + Cs   = {:.1} N", extra.c_total_n)?;
            writeln!(out, "  Ts - C    = {:.1} N (unbalanced)", extra.unbalanced_force_n)?;
            writeln!(out, "Moments about tension steel:")?;
            writeln!(out, "  Mc        = {:.2} kN·m", extra.m_c_knm)?;
            writeln!(out, "  Mcs       = {:.2} kN·m", extra.m_cs_knm)?;
        }
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexure_core::{check, design, CheckInput, DesignInput, SectionProperties};

    fn beam() -> SectionProperties {
        SectionProperties::new(250.0, 500.0, 62.5, 40.0, 14.3, 360.0, 360.0)
    }

    #[test]
    fn test_single_report() {
        let result = design(&DesignInput::new("L-1", beam(), 200.0)).unwrap();
        let text = render("L-1", "Design", &result);
        assert!(text.contains("SECTION DESIGN RESULTS: L-1"));
        assert!(text.contains("Mode:         single"));
        assert!(text.contains("h0        = 437.50 mm"));
        assert!(text.contains("As'       = 0.00 mm²"));
        assert!(text.contains("Mu        = 200.00 kN·m"));
    }

    #[test]
    fn test_double_report_lists_moment_split() {
        let result = design(&DesignInput::new("", beam(), 325.0)).unwrap();
        let text = render("", "Design", &result);
        assert!(text.contains("SECTION DESIGN RESULTS\n"));
        assert!(text.contains("Mc        = 262.65 kN·m"));
        assert!(text.contains("ΔM        = 62.35 kN·m"));
    }

    #[test]
    fn test_check_report_lists_forces() {
        let result = check(&CheckInput::new("L-3", beam(), 2600.0, 800.0)).unwrap();
        let text = render("L-3", "Check", &result);
        assert!(text.contains("Mode:         check"));
        assert!(text.contains("Ts        = 936000.0 N"));
        assert!(text.contains("(unbalanced)"));
    }

    #[test]
    fn test_json_report() {
        let result = check(&CheckInput::new("L-3", beam(), 2600.0, 800.0)).unwrap();
        let doc = ReportJson {
            label: "L-3",
            calculation: "Check",
            result: &result,
        };
        let value = serde_json::to_value(&doc).unwrap();
        pretty_assertions::assert_eq!(value["result"]["extra"]["mode"], "check");
        pretty_assertions::assert_eq!(value["label"], "L-3");
    }
}
