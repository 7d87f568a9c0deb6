//! Formatted terminal output.
//!
//! We keep formatting code in one place so the lookup code stays clean and
//! output changes are localized.

use crate::app::pipeline::Located;
use crate::domain::FocalMechanism;
use crate::resolver::FocmecRequest;

/// Format resolved mechanisms as a header plus a fixed-width table.
pub fn format_mechanisms(request: &FocmecRequest, mechanisms: &[FocalMechanism]) -> String {
    let mut out = String::new();

    out.push_str("=== focmec - focal mechanisms ===\n");
    out.push_str(&format!(
        "Regime: {} | Model: {}\n",
        request.regime, request.preferred_model
    ));
    out.push_str(&format!(
        "Event: lon={} lat={} depth={} Mw={}",
        opt(request.lon),
        opt(request.lat),
        opt(request.dep),
        opt(request.mw)
    ));
    if let Some(zone) = &request.subduction_zone {
        out.push_str(&format!(" zone={zone}"));
    }
    out.push('\n');

    out.push_str(&format!(
        "\n{:>4}  {:>8}  {:>6}  {:>8}  {:>11}\n",
        "#", "strike", "dip", "rake", "probability"
    ));
    for (i, m) in mechanisms.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>8.1}  {:>6.1}  {:>8.1}  {:>11.4}\n",
            i + 1,
            m.strike,
            m.dip,
            m.rake,
            m.probability
        ));
    }

    let total: f64 = mechanisms.iter().map(|m| m.probability).sum();
    out.push_str(&format!("\nMechanisms: {} | total probability: {:.4}", mechanisms.len(), total));
    out
}

pub fn format_location(located: &Located) -> String {
    format!(
        "Point: lon={} lat={}\nNeotectonic domain: {}\nSubduction zone: {}",
        located.point.lon,
        located.point.lat,
        located.domain.as_deref().unwrap_or("none"),
        located.zone.map(|z| z.display_name()).unwrap_or("none"),
    )
}

fn opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, SubductionZone};

    #[test]
    fn mechanisms_table_lists_every_row() {
        let request = FocmecRequest {
            lon: Some(174.8),
            lat: Some(-41.3),
            mw: Some(6.0),
            ..FocmecRequest::default()
        };
        let mechanisms = vec![
            FocalMechanism::new(210.0, 45.0, -90.0, 0.25),
            FocalMechanism::new(30.0, 60.0, 90.0, 0.25),
        ];
        let text = format_mechanisms(&request, &mechanisms);
        assert!(text.contains("Regime: crust | Model: all"));
        assert!(text.contains("depth=- Mw=6"));
        assert!(text.contains("   210.0"));
        assert!(text.contains("Mechanisms: 2 | total probability: 0.5000"));
    }

    #[test]
    fn location_reports_misses_as_none() {
        let located = Located {
            point: GeoPoint::new(178.0, -39.0),
            domain: None,
            zone: Some(SubductionZone::Hik),
        };
        let text = format_location(&located);
        assert!(text.contains("Neotectonic domain: none"));
        assert!(text.contains("Subduction zone: Hikurangi"));
    }
}
