//! Plain-text rendering of a forecast report for the terminal

use std::fmt::{self, Write};

use crate::data::Beach;
use crate::forecast::{DailyBeachRisk, ForecastReport};

/// Renders `report` as a multi-line summary.
///
/// When `only` is set, the per-beach sections list that beach alone.
pub fn render_text(report: &ForecastReport, only: Option<&Beach>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, report, only).map(|_| out)
}

fn write_report(out: &mut String, report: &ForecastReport, only: Option<&Beach>) -> fmt::Result {
    let moon = &report.moon;
    let current = &report.current;
    let overall = &report.overall;

    writeln!(out, "Riesgo costero en Bahía de Banderas")?;
    writeln!(out, "Generado: {}", report.timestamp.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out)?;
    writeln!(
        out,
        "Luna: {} {} ({}% iluminada) · {}",
        moon.emoji,
        moon.name.label(),
        moon.illumination,
        moon.tidal_effect.label()
    )?;
    writeln!(
        out,
        "Ahora ({}): oleaje {:.1} m {} ({:.0}°) · periodo {:.0} s · marea {:.2} m",
        current.time.format("%d/%m %H:%M"),
        current.swell.height,
        current.swell_direction_label.as_str(),
        current.swell.direction,
        current.swell.period,
        current.tide_height
    )?;
    if let Some(secondary) = &current.secondary_swell {
        writeln!(
            out,
            "Mar de fondo secundario: {:.1} m ({:.0}°) · periodo {:.0} s",
            secondary.height, secondary.direction, secondary.period
        )?;
    }
    writeln!(
        out,
        "Riesgo general: {} {} ({}) en {}",
        overall.risk.emoji,
        overall.risk.level.label(),
        overall.risk.score,
        overall.beach.name
    )?;
    writeln!(out, "{}", overall.risk.description)?;
    writeln!(out)?;

    writeln!(out, "Playas")?;
    for beach_risk in report
        .beaches
        .iter()
        .filter(|b| only.map_or(true, |o| o.id == b.beach.id))
    {
        writeln!(
            out,
            "  {} {:<16} {:>3}  {:<9} NW {:<8} SW {:<8} {}",
            beach_risk.risk.emoji,
            beach_risk.beach.name,
            beach_risk.risk.score,
            beach_risk.risk.level.label(),
            beach_risk.beach.exposure_nw.label(),
            beach_risk.beach.exposure_sw.label(),
            beach_risk.beach.zone.label()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Próximos 7 días")?;
    for day in &report.daily_summary {
        let worst = day
            .beaches
            .iter()
            .filter(|b| only.map_or(true, |o| o.name == b.name))
            .fold(None::<&DailyBeachRisk>, |worst, b| match worst {
                Some(w) if w.risk.score >= b.risk.score => Some(w),
                _ => Some(b),
            });
        write!(
            out,
            "  {}  {:.2} m {:<2} · {:.1} s · marea máx {:.2} m",
            day.date.format("%a %d/%m"),
            day.max_swell_height,
            day.direction_label.as_str(),
            day.avg_period,
            day.max_tide
        )?;
        match worst {
            Some(b) => writeln!(out, "  {} {} ({})", b.risk.emoji, b.name, b.risk.score)?,
            None => writeln!(out)?,
        }
    }

    Ok(())
}
