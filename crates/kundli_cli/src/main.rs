use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use kundli_engine::{
    BirthEvent, Kundli, KundliConfig, KundliError, chart_context, compute_kundli_with_config,
};
use kundli_time::UtcTime;
use kundli_vedic::{
    ayanamsha_deg, deg_to_dms, nakshatra_from_longitude, navamsha_rashi, rashi_from_longitude,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundli", version, about = "Vedic birth chart (Kundli) CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full Kundli for a birth event
    Chart {
        /// Birth instant, RFC 3339 (e.g. 1990-01-15T10:30:00Z)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Timezone label, display only
        #[arg(long, default_value = "UTC")]
        tz: String,
        /// Name of the native
        #[arg(long)]
        name: Option<String>,
        /// Place of birth
        #[arg(long)]
        place: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// TOML file with engine options (node_mode, lagna_mode, kala_clock)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true, value_parser = finite_degrees)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true, value_parser = finite_degrees)]
        lon: f64,
    },
    /// Navamsha (D9) rashi from sidereal longitude
    Navamsha {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true, value_parser = finite_degrees)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true, value_parser = dms_degrees)]
        deg: f64,
    },
    /// Ayanamsa for an instant
    Ayanamsa {
        /// UTC instant, RFC 3339
        #[arg(long, conflicts_with = "jd")]
        date: Option<String>,
        /// Julian Date (UTC)
        #[arg(long)]
        jd: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Full Kundli as JSON
    Json,
    /// Plain-text chart context
    Context,
}

fn finite_degrees(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err("angle must be finite".to_string())
    }
}

/// Angles whose whole degrees fit the DMS degree field.
fn dms_degrees(s: &str) -> Result<f64, String> {
    let value = finite_degrees(s)?;
    if value.abs() <= u32::MAX as f64 {
        Ok(value)
    } else {
        Err(format!("angle magnitude must not exceed {} degrees", u32::MAX))
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<KundliConfig> {
    let Some(path) = path else {
        return Ok(KundliConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: KundliConfig =
        toml::from_str(&text).map_err(|e| KundliError::Config(e.to_string()))?;
    info!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn render_text(kundli: &Kundli) -> String {
    let mut lines = Vec::new();
    let birth = &kundli.birth_event;
    lines.push(format!(
        "Birth: {} at ({}, {}) {}",
        UtcTime::from_datetime(birth.utc_instant),
        birth.latitude_deg,
        birth.longitude_deg,
        birth.timezone_label
    ));
    let asc = rashi_from_longitude(kundli.ascendant_longitude_deg());
    lines.push(format!(
        "Ascendant: {:.4} deg, {} {}",
        kundli.ascendant_longitude_deg(),
        asc.rashi.western_name(),
        asc.dms
    ));
    let cusps: Vec<String> = kundli
        .house_cusps()
        .iter()
        .map(|c| format!("{c:.2}"))
        .collect();
    lines.push(format!("Cusps: {}", cusps.join(" ")));
    lines.push(String::new());
    lines.push(format!(
        "{:<8} {:>9} {:>8} {:<12} {:>10} {:<18} {:>4} {:>5} {:<12}",
        "Planet", "Long", "Speed", "Sign", "Degree", "Nakshatra", "Pada", "House", "Navamsha"
    ));
    for p in kundli.planets() {
        lines.push(format!(
            "{:<8} {:>9.4} {:>8.4} {:<12} {:>10} {:<18} {:>4} {:>5} {:<12}{}",
            p.planet.english_name(),
            p.sidereal_longitude_deg,
            p.speed_deg_per_day,
            p.sign.western_name(),
            deg_to_dms(p.degree_in_sign).to_string(),
            p.nakshatra.name(),
            p.pada,
            p.house,
            kundli.navamsha(p.planet).western_name(),
            if p.is_retrograde { " R" } else { "" }
        ));
    }

    lines.push(String::new());
    lines.push("Shad Bala (rupas):".to_string());
    for s in &kundli.shad_bala {
        lines.push(format!(
            "  {:<8} {:>6.2}  {}",
            s.planet.english_name(),
            s.total_rupas,
            s.label
        ));
    }

    lines.push(String::new());
    lines.push("Ashtakavarga:".to_string());
    for c in &kundli.ashtakavarga {
        let cells: Vec<String> = c.sign_points.iter().map(|p| format!("{p:>2}")).collect();
        lines.push(format!(
            "  {:<8} {}  = {}",
            c.planet.english_name(),
            cells.join(" "),
            c.total_points
        ));
    }
    let sarva: Vec<String> = kundli
        .sarvashtakavarga
        .iter()
        .map(|p| format!("{p:>2}"))
        .collect();
    lines.push(format!("  {:<8} {}", "Sarva", sarva.join(" ")));
    let lagna_sign = kundli.ascendant_sign();
    lines.push(format!(
        "  Lagna sign {}: {} points ({})",
        lagna_sign.western_name(),
        kundli.sarvashtakavarga[lagna_sign.index() as usize],
        kundli.sarva_strength(lagna_sign)
    ));

    let dosh = &kundli.dosh_analysis;
    lines.push(String::new());
    lines.push(format!("Mangal: {} ({})", dosh.mangal.details, dosh.mangal.severity));
    lines.push(format!("Shani: {}", dosh.shani.details));
    lines.push(format!("Rahu-Ketu: {}", dosh.rahu_ketu.details));
    lines.push(format!("Doshas present: {}/3", dosh.count_present()));
    if !dosh.remedies.is_empty() {
        lines.push("Remedies:".to_string());
        for r in &dosh.remedies {
            lines.push(format!("  - {r}"));
        }
    }

    lines.push(String::new());
    lines.push(format!("Kundli score: {}/100", kundli.kundli_score));
    lines.join("\n")
}

fn run_chart(
    event: BirthEvent,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<String> {
    let config = load_config(config_path)?;
    debug!(jd = event.jd(), "computing chart");
    let kundli = compute_kundli_with_config(&event, &config).context("chart computation failed")?;
    info!(score = kundli.kundli_score, "chart computed");
    Ok(match format {
        OutputFormat::Text => render_text(&kundli),
        OutputFormat::Json => serde_json::to_string_pretty(&kundli)?,
        OutputFormat::Context => chart_context(&kundli),
    })
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Chart {
            date,
            lat,
            lon,
            tz,
            name,
            place,
            format,
            config,
        } => {
            let mut event = BirthEvent::from_rfc3339(&date, lat, lon, tz)
                .with_context(|| format!("invalid birth event for {date}"))?;
            if let Some(name) = name {
                event = event.with_name(name);
            }
            if let Some(place) = place {
                event = event.with_place(place);
            }
            debug!(?event, "parsed birth event");
            run_chart(event, format, config.as_deref())
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            Ok(format!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            ))
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            Ok(format!(
                "{} (#{}) - Pada {}, lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra.number(),
                info.pada,
                info.lord.english_name(),
                info.degrees_in_nakshatra
            ))
        }

        Commands::Navamsha { lon } => {
            let rashi = navamsha_rashi(lon);
            Ok(format!("{} ({})", rashi.name(), rashi.western_name()))
        }

        Commands::Dms { deg } => Ok(deg_to_dms(deg).to_string()),

        Commands::Ayanamsa { date, jd } => {
            let jd = match (date, jd) {
                (Some(date), None) => UtcTime::parse(&date)?.jd(),
                (None, Some(jd)) => jd,
                _ => bail!("pass exactly one of --date or --jd"),
            };
            if !jd.is_finite() {
                bail!("Julian Date must be finite");
            }
            let aya = ayanamsha_deg(jd);
            Ok(format!("{aya:.6} deg ({})", deg_to_dms(aya)))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = run(cli)?;
    println!("{output}");
    Ok(())
}
