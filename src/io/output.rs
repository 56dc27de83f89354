//! Output writers for the computed result set.

use crate::engine::{Outputs, SensitivityGrid};
use crate::formatting::{
    format_currency_compact, format_currency_full, format_months, format_multiple, format_pct,
};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_outputs(&mut self, outputs: &Outputs) -> anyhow::Result<()>;
    fn write_sensitivity(&mut self, grid: &SensitivityGrid) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    hurdle_rate_pct: f64,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, hurdle_rate_pct)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_outputs(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(outputs)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_sensitivity(&mut self, grid: &SensitivityGrid) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(grid)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_outputs(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        self.write_header("ROI Analysis")?;
        self.write_summary(outputs)?;
        self.write_baseline(outputs)?;
        self.write_value_streams(outputs)?;
        self.write_scenarios(outputs)?;
        self.write_do_nothing(outputs)?;
        self.write_channels(outputs)?;
        Ok(())
    }

    fn write_sensitivity(&mut self, grid: &SensitivityGrid) -> anyhow::Result<()> {
        self.write_header("Payback Sensitivity")?;
        writeln!(
            self.writer,
            "Rows: {} | Columns: {}",
            grid.row_label, grid.col_label
        )?;
        writeln!(self.writer)?;

        write!(self.writer, "| |")?;
        for col in grid.col_values {
            write!(self.writer, " {} |", format_pct(col))?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "|---|---|---|---|")?;
        for (r, row) in grid.paybacks.iter().enumerate() {
            write!(self.writer, "| {} |", format_pct(grid.row_values[r]))?;
            for cell in row {
                write!(self.writer, " {} |", format_months(*cell))?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Annual value (expected) | {} |",
            format_currency_compact(outputs.total_annual_value)
        )?;
        writeln!(
            self.writer,
            "| Net present value | {} |",
            format_currency_compact(outputs.net_present_value)
        )?;
        writeln!(
            self.writer,
            "| IRR | {} |",
            outputs
                .irr
                .map(format_pct)
                .unwrap_or_else(|| "n/a".to_string())
        )?;
        writeln!(
            self.writer,
            "| Payback | {} |",
            format_months(outputs.payback_months)
        )?;
        writeln!(
            self.writer,
            "| 3-year ROI | {} |",
            format_pct(outputs.three_year_roi)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_baseline(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Current-State Cost")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Bucket | Annual cost |")?;
        writeln!(self.writer, "|--------|-------------|")?;
        for entry in &outputs.baseline.waterfall {
            writeln!(
                self.writer,
                "| {} | {} |",
                entry.label,
                format_currency_full(entry.value)
            )?;
        }
        writeln!(
            self.writer,
            "| **Total** | **{}** |",
            format_currency_full(outputs.baseline.total_annual_cost)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_value_streams(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Annual Value Streams")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Stream | Annual value |")?;
        writeln!(self.writer, "|--------|--------------|")?;
        for stream in &outputs.value_streams {
            writeln!(
                self.writer,
                "| {} | {} |",
                stream.label,
                format_currency_full(stream.annual_value)
            )?;
        }
        writeln!(
            self.writer,
            "| **Total** | **{}** |",
            format_currency_full(outputs.total_annual_value)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Scenario Outcomes")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Scenario | Annual value | NPV | IRR | Payback | 3-year ROI |"
        )?;
        writeln!(
            self.writer,
            "|----------|--------------|-----|-----|---------|------------|"
        )?;
        let r = &outputs.returns;
        for outcome in [&r.conservative, &r.expected, &r.aggressive] {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                outcome.scenario.label(),
                format_currency_compact(outcome.total_annual_value),
                format_currency_compact(outcome.net_present_value),
                outcome
                    .irr
                    .map(format_pct)
                    .unwrap_or_else(|| "n/a".to_string()),
                format_months(outcome.payback_months),
                format_pct(outcome.three_year_roi),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_do_nothing(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        let p = &outputs.do_nothing;
        writeln!(self.writer, "## Cost of Inaction")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Compounding at {} per quarter:",
            format_pct(p.quarterly_erosion_pct)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Horizon | Erosion | Cumulative loss |")?;
        writeln!(self.writer, "|---------|---------|-----------------|")?;
        for (label, pct, loss) in [
            ("Year 1", p.year1_erosion_pct, p.year1_loss),
            ("Year 2", p.year2_erosion_pct, p.year2_loss),
            ("Year 3", p.year3_erosion_pct, p.year3_loss),
        ] {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                label,
                format_pct(pct),
                format_currency_full(loss)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_channels(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Channel ROAS")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Channel | Current | Optimized | Lift |")?;
        writeln!(self.writer, "|---------|---------|-----------|------|")?;
        for channel in &outputs.channels {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                channel.label,
                format_multiple(channel.current_roas),
                format_multiple(channel.ai_optimized_roas),
                format_pct(channel.lift_pct)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    hurdle_rate_pct: f64,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, hurdle_rate_pct: f64) -> Self {
        Self {
            writer,
            hurdle_rate_pct,
        }
    }

    fn write_headline(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "ROI Analysis".bold().cyan())?;
        writeln!(self.writer)?;

        let npv = format_currency_compact(outputs.net_present_value);
        let npv = if outputs.net_present_value >= 0.0 {
            npv.green()
        } else {
            npv.red()
        };
        let irr = match outputs.irr {
            Some(rate) if rate >= self.hurdle_rate_pct => format_pct(rate).green(),
            Some(rate) => format_pct(rate).yellow(),
            None => "n/a".dimmed(),
        };

        writeln!(
            self.writer,
            "  NPV {}   IRR {}   Payback {}   3-year ROI {}",
            npv,
            irr,
            format_months(outputs.payback_months).bold(),
            format_pct(outputs.three_year_roi).bold(),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(&mut self, title: &str, table: Table) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold())?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_outputs(&mut self, outputs: &Outputs) -> anyhow::Result<()> {
        self.write_headline(outputs)?;

        let mut costs = Table::new();
        costs.load_preset(UTF8_FULL);
        costs.set_header(vec!["Cost bucket", "Annual"]);
        for entry in &outputs.baseline.waterfall {
            costs.add_row(vec![
                Cell::new(&entry.label),
                Cell::new(format_currency_full(entry.value)),
            ]);
        }
        costs.add_row(vec![
            Cell::new("Total"),
            Cell::new(format_currency_full(outputs.baseline.total_annual_cost)),
        ]);
        self.write_section("Current-state cost", costs)?;

        let mut streams = Table::new();
        streams.load_preset(UTF8_FULL);
        streams.set_header(vec!["Value stream", "Annual"]);
        for stream in &outputs.value_streams {
            streams.add_row(vec![
                Cell::new(&stream.label),
                Cell::new(format_currency_full(stream.annual_value)),
            ]);
        }
        streams.add_row(vec![
            Cell::new("Total"),
            Cell::new(format_currency_full(outputs.total_annual_value)),
        ]);
        self.write_section("Annual value streams", streams)?;

        let mut scenarios = Table::new();
        scenarios.load_preset(UTF8_FULL);
        scenarios.set_header(vec!["Scenario", "Annual value", "NPV", "IRR", "Payback"]);
        let r = &outputs.returns;
        for outcome in [&r.conservative, &r.expected, &r.aggressive] {
            scenarios.add_row(vec![
                Cell::new(outcome.scenario.label()),
                Cell::new(format_currency_compact(outcome.total_annual_value)),
                Cell::new(format_currency_compact(outcome.net_present_value)),
                Cell::new(
                    outcome
                        .irr
                        .map(format_pct)
                        .unwrap_or_else(|| "n/a".to_string()),
                ),
                Cell::new(format_months(outcome.payback_months)),
            ]);
        }
        self.write_section("Scenario outcomes", scenarios)?;

        let mut erosion = Table::new();
        erosion.load_preset(UTF8_FULL);
        erosion.set_header(vec!["Do nothing", "Erosion", "Cumulative loss"]);
        let p = &outputs.do_nothing;
        for (label, pct, loss) in [
            ("Year 1", p.year1_erosion_pct, p.year1_loss),
            ("Year 2", p.year2_erosion_pct, p.year2_loss),
            ("Year 3", p.year3_erosion_pct, p.year3_loss),
        ] {
            erosion.add_row(vec![
                Cell::new(label),
                Cell::new(format_pct(pct)),
                Cell::new(format_currency_full(loss)),
            ]);
        }
        self.write_section("Cost of inaction", erosion)?;

        let mut channels = Table::new();
        channels.load_preset(UTF8_FULL);
        channels.set_header(vec!["Channel", "Current ROAS", "Optimized", "Lift"]);
        for channel in &outputs.channels {
            channels.add_row(vec![
                Cell::new(&channel.label),
                Cell::new(format_multiple(channel.current_roas)),
                Cell::new(format_multiple(channel.ai_optimized_roas)),
                Cell::new(format_pct(channel.lift_pct)),
            ]);
        }
        self.write_section("Channel ROAS", channels)?;

        Ok(())
    }

    fn write_sensitivity(&mut self, grid: &SensitivityGrid) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Payback sensitivity".bold().cyan())?;
        writeln!(
            self.writer,
            "rows: {} | columns: {}",
            grid.row_label.as_str().dimmed(),
            grid.col_label.as_str().dimmed()
        )?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        let mut header = vec![Cell::new("")];
        header.extend(grid.col_values.iter().map(|v| Cell::new(format_pct(*v))));
        table.set_header(header);
        for (r, row) in grid.paybacks.iter().enumerate() {
            let mut cells = vec![Cell::new(format_pct(grid.row_values[r]))];
            cells.extend(row.iter().map(|cell| Cell::new(format_months(*cell))));
            table.add_row(cells);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}
