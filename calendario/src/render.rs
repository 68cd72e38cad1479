use std::io::Write;

use anyhow::Result;
use cal_events::pt_br::{category_label, detail_label, month_name, weekday_abbreviation};
use cal_events::{CalendarEvent, MonthPage};
use cal_time::Date;
use serde::Serialize;

/// Write a year's events, one per line.
pub fn write_year<W: Write>(year: i32, events: &[CalendarEvent], out: &mut W) -> Result<()> {
    writeln!(out, "{year}: {} evento(s)", events.len())?;
    for e in events {
        write_event_line(e, out)?;
    }
    Ok(())
}

/// Write each month of a window with its events.
pub fn write_window<W: Write>(pages: &[MonthPage], out: &mut W) -> Result<()> {
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} {}", month_name(page.month), page.year)?;
        if page.events.is_empty() {
            writeln!(out, "  (nenhum evento)")?;
        }
        for e in &page.events {
            write_event_line(e, out)?;
        }
    }
    Ok(())
}

/// Write the date of Easter Sunday.
pub fn write_easter<W: Write>(year: i32, easter: Date, out: &mut W) -> Result<()> {
    writeln!(out, "Páscoa {year}: {} ({easter})", detail_label(easter))?;
    Ok(())
}

fn write_event_line<W: Write>(e: &CalendarEvent, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "  {}  {}  {:<40} [{}]",
        e.date.to_iso_string(),
        weekday_abbreviation(e.date.weekday()),
        e.name,
        category_label(e.category)
    )?;
    Ok(())
}

#[derive(Serialize)]
struct PageView<'a> {
    year: i32,
    month: u8,
    name: &'static str,
    events: &'a [CalendarEvent],
}

/// Write any serialisable value as pretty JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(value: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write a window as a JSON array of pages.
pub fn write_window_json<W: Write>(pages: &[MonthPage], out: &mut W) -> Result<()> {
    let views: Vec<PageView<'_>> = pages
        .iter()
        .map(|p| PageView {
            year: p.year,
            month: p.month.number(),
            name: month_name(p.month),
            events: &p.events,
        })
        .collect();
    write_json(&views, out)
}

#[cfg(test)]
mod tests {
    use cal_events::{
        all_events_for_year, CustomEventDefinition, DatePolicy, EventAssembler, MonthWindow,
    };
    use cal_time::{easter_sunday, Month};

    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn year_listing() {
        let events = all_events_for_year(2025, &[]);
        let out = render(|b| write_year(2025, &events, b));
        assert!(out.starts_with(&format!("2025: {} evento(s)", events.len())));
        assert!(out.contains("2025-07-14  Seg  Aniversário de Campinas"));
        assert!(out.contains("[Campinas]"));
    }

    #[test]
    fn window_listing_marks_empty_months() {
        let asm = EventAssembler::standard(&[], DatePolicy::Rollover);
        let pages = MonthWindow::starting(2025, Month::August, 4)
            .unwrap()
            .collect(&asm)
            .unwrap();
        let out = render(|b| write_window(&pages, b));
        assert!(out.contains("Agosto 2025"));
        assert!(out.contains("Novembro 2025"));
        assert!(out.contains("Dia dos Pais"));
        assert!(!out.contains("(nenhum evento)"));

        let empty = vec![MonthPage {
            year: 2025,
            month: Month::March,
            events: Vec::new(),
        }];
        let out = render(|b| write_window(&empty, b));
        assert_eq!(out, "Março 2025\n  (nenhum evento)\n");
    }

    #[test]
    fn window_json_shape() {
        let custom =
            vec![CustomEventDefinition::new("x", "X", 0, 10).with_metadata("clientName", "ACME")];
        let asm = EventAssembler::standard(&custom, DatePolicy::Rollover);
        let pages = MonthWindow::starting(2026, Month::January, 1)
            .unwrap()
            .collect(&asm)
            .unwrap();
        let out = render(|b| write_window_json(&pages, b));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["month"], 1);
        assert_eq!(v[0]["name"], "Janeiro");
        let x = v[0]["events"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["id"] == "x")
            .unwrap();
        assert_eq!(x["date"], "2026-01-10");
        assert_eq!(x["clientName"], "ACME");
    }

    #[test]
    fn easter_line() {
        let out = render(|b| write_easter(2025, easter_sunday(2025), b));
        assert_eq!(out, "Páscoa 2025: 20 de Abril (20 April 2025)\n");
    }
}
