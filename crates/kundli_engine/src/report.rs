//! Plain-text chart context.
//!
//! A deterministic summary of a [`Kundli`] for grounding downstream
//! consumers such as a chat assistant. Same chart, same text.

use std::fmt::{self, Write};

use chrono::SecondsFormat;

use crate::kundli::Kundli;

/// Number of Shad Bala rows listed in the report.
pub const TOP_SHAD_BALA: usize = 5;

fn yes_no(present: bool) -> &'static str {
    if present { "YES" } else { "NO" }
}

/// Render the chart-context report.
pub fn chart_context(kundli: &Kundli) -> String {
    ChartContext(kundli).to_string()
}

/// Display adapter over a [`Kundli`] that renders the chart-context report.
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a>(pub &'a Kundli);

impl fmt::Display for ChartContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_context(f, self.0)
    }
}

fn write_context(out: &mut impl Write, kundli: &Kundli) -> fmt::Result {
    let birth = &kundli.birth_event;
    let dosh = &kundli.dosh_analysis;

    writeln!(out, "Name: {}", birth.name.as_deref().unwrap_or("Seeker"))?;
    writeln!(
        out,
        "DOB: {}",
        birth.utc_instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    )?;
    writeln!(
        out,
        "Place: {} (lat {}, lon {}) tz {}",
        birth.place.as_deref().unwrap_or(""),
        birth.latitude_deg,
        birth.longitude_deg,
        birth.timezone_label
    )?;
    writeln!(
        out,
        "Ascendant: {:.4}° | Sign {}",
        kundli.ascendant_longitude_deg(),
        kundli.ascendant_sign().number()
    )?;
    writeln!(out, "Kundli Score: {}/100", kundli.kundli_score)?;

    writeln!(out, "\nPlanets:")?;
    for p in kundli.planets() {
        writeln!(
            out,
            "{}: {} {:.2}° | House {} | Nakshatra {} pada {}{}",
            p.planet.english_name(),
            p.sign,
            p.degree_in_sign,
            p.house,
            p.nakshatra,
            p.pada,
            if p.is_retrograde { " (Rx)" } else { "" }
        )?;
    }

    writeln!(out, "\nTop Shad Bala:")?;
    for s in kundli.strongest(TOP_SHAD_BALA) {
        writeln!(
            out,
            "{}: {:.2} rupas ({})",
            s.planet.english_name(),
            s.total_rupas,
            s.label
        )?;
    }

    writeln!(out, "\nDosh:")?;
    if dosh.mangal.present {
        write!(out, "Mangal: YES ({})", dosh.mangal.severity)?;
    } else {
        write!(out, "Mangal: NO")?;
    }
    writeln!(out, " | {}", dosh.mangal.details)?;
    writeln!(
        out,
        "Shani: {} | {}",
        yes_no(dosh.shani.present),
        dosh.shani.details
    )?;
    writeln!(
        out,
        "Rahu/Ketu: {} | {}",
        yes_no(dosh.rahu_ketu.present),
        dosh.rahu_ketu.details
    )?;

    writeln!(out, "\nSarvashtakavarga (sign:points):")?;
    for (i, points) in kundli.sarvashtakavarga.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{}:{points}", i + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::BirthEvent;
    use crate::kundli::compute_kundli;

    fn report() -> String {
        let e = BirthEvent::from_rfc3339("1990-01-15T10:30:00Z", 28.6139, 77.209, "Asia/Kolkata")
            .unwrap()
            .with_name("Asha")
            .with_place("New Delhi");
        chart_context(&compute_kundli(&e).unwrap())
    }

    #[test]
    fn header_lines() {
        let text = report();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name: Asha");
        assert_eq!(lines[1], "DOB: 1990-01-15T10:30:00.000Z");
        assert_eq!(
            lines[2],
            "Place: New Delhi (lat 28.6139, lon 77.209) tz Asia/Kolkata"
        );
        assert!(lines[3].starts_with("Ascendant: 326.4"));
        assert!(lines[3].ends_with("| Sign 11"));
    }

    #[test]
    fn one_line_per_planet_and_five_strongest() {
        let text = report();
        let planets = text
            .lines()
            .skip_while(|l| *l != "Planets:")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .count();
        assert_eq!(planets, 9);
        let shad = text
            .lines()
            .skip_while(|l| *l != "Top Shad Bala:")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .count();
        assert_eq!(shad, TOP_SHAD_BALA);
        assert!(text.contains("Sun: Capricorn 1."));
        assert!(text.contains("Rahu: Pisces"));
        assert!(text.contains("(Rx)"));
    }

    #[test]
    fn sarva_row_is_last() {
        let text = report();
        let last = text.lines().last().unwrap_or_default();
        assert!(last.starts_with("1:"));
        assert_eq!(last.split(' ').count(), 12);
    }

    #[test]
    fn display_adapter_matches_report() {
        let e = BirthEvent::from_rfc3339("2000-01-01T12:00:00Z", 0.0, 0.0, "UTC").unwrap();
        let k = compute_kundli(&e).unwrap();
        let via_format = format!("{}", ChartContext(&k));
        assert_eq!(via_format, chart_context(&k));
        assert!(via_format.starts_with("Name: Seeker\n"));
        assert!(!via_format.ends_with('\n'));
    }

    #[test]
    fn report_is_deterministic() {
        assert_eq!(report(), report());
    }
}
