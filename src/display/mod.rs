//! Text renderings of pipeline outputs.

use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::error::{Result, StatysError};
use crate::hypothesis::{CriticalDifference, FriedmanResult, Hypothesis, PairwiseResults, Verdict};
use crate::statistics::Measures;

fn styled() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn banner(text: &str) -> Table {
    let mut table = styled();
    table.add_row(vec![Cell::new(text).set_alignment(CellAlignment::Center)]);
    table
}

fn format_p(p: f64) -> String {
    if p < 0.0001 {
        "< 0.0001".to_string()
    } else {
        format!("{p:.4}")
    }
}

/// Labels for `n` entries: `labels` when it has exactly `n` items, else `arg0..`.
fn resolve_labels(labels: Option<&[&str]>, n: usize) -> Vec<String> {
    match labels {
        Some(l) if l.len() == n => l.iter().map(|s| s.to_string()).collect(),
        _ => (0..n).map(|i| format!("arg{i}")).collect(),
    }
}

fn parse_index(name: &str, key: &str) -> Result<usize> {
    name.strip_prefix("arg")
        .and_then(|i| i.parse().ok())
        .ok_or_else(|| StatysError::argument(format!("key `{key}` is not of the form `argI-argJ`")))
}

/// Lays the pairwise verdicts out on an `n x n` grid, `n * (n - 1)` being
/// the number of entries. The diagonal stays empty.
fn grid(results: &PairwiseResults) -> Result<Vec<Vec<Option<Verdict>>>> {
    let entries = results.len();
    let n = (1.0 + (1.0 + 4.0 * entries as f64).sqrt()) as usize / 2;
    if n * n.saturating_sub(1) != entries {
        return Err(StatysError::argument(format!(
            "{entries} pairwise entries do not form a square grid"
        )));
    }

    let mut cells = vec![vec![None; n]; n];
    for (key, verdict) in results {
        let (a, b) = key
            .split_once('-')
            .ok_or_else(|| StatysError::argument(format!("key `{key}` is not of the form `argI-argJ`")))?;
        let (i, j) = (parse_index(a, key)?, parse_index(b, key)?);
        if i >= n || j >= n || i == j {
            return Err(StatysError::argument(format!(
                "key `{key}` does not fit a grid of {n} samples"
            )));
        }
        cells[i][j] = Some(*verdict);
    }
    Ok(cells)
}

fn grid_table<F>(results: &PairwiseResults, labels: Option<&[&str]>, caption: &str, cell: F) -> Result<String>
where
    F: Fn(&Verdict) -> String,
{
    let cells = grid(results)?;
    let labels = resolve_labels(labels, cells.len());

    let mut table = styled();
    table.set_header(
        std::iter::once(Cell::new(""))
            .chain(labels.iter().map(|l| Cell::new(l).set_alignment(CellAlignment::Center))),
    );

    for (label, row) in labels.iter().zip(&cells) {
        let mut line = vec![Cell::new(label).set_alignment(CellAlignment::Left)];
        line.extend(row.iter().map(|v| {
            let text = v.as_ref().map_or_else(|| "-".to_string(), &cell);
            Cell::new(text).set_alignment(CellAlignment::Right)
        }));
        table.add_row(line);
    }

    Ok(format!("{}\n{}", banner(caption), table))
}

/// Grid of p-values, row sample against column sample.
///
/// `title` heads the grid, "p-values" when absent.
///
/// # Errors
/// [`StatysError::Argument`] when the keys do not form an `argI-argJ` grid.
pub fn p_value_table(results: &PairwiseResults, labels: Option<&[&str]>, title: Option<&str>) -> Result<String> {
    grid_table(results, labels, title.unwrap_or("p-values"), |v| format_p(v.p_value))
}

/// Grid of hypothesis indicators, row sample against column sample.
///
/// `title` heads the grid, "Null hypothesis" when absent.
///
/// # Errors
/// [`StatysError::Argument`] when the keys do not form an `argI-argJ` grid.
pub fn hypothesis_table(results: &PairwiseResults, labels: Option<&[&str]>, title: Option<&str>) -> Result<String> {
    grid_table(results, labels, title.unwrap_or("Null hypothesis"), |v| match v.hypothesis {
        Hypothesis::Rejected => "🔴 1".to_string(),
        Hypothesis::Retained => "🟢 0".to_string(),
    })
}

/// Average ranks, critical difference and groups of every sample.
///
/// `labels` names the treatments when it has one entry per average rank.
pub fn critical_difference_table(results: &Measures<CriticalDifference>, labels: Option<&[&str]>) -> String {
    results
        .iter()
        .map(|(attr, cd)| format!("{}\n{}", banner(&format!("Critical difference: {attr}")), cd.table(labels)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Friedman statistic and Iman-Davenport correction of every sample.
pub fn friedman_table(results: &Measures<FriedmanResult>) -> String {
    let mut table = styled();
    table.set_header(vec![
        Cell::new("Sample").set_alignment(CellAlignment::Center),
        Cell::new("χ²_F").set_alignment(CellAlignment::Center),
        Cell::new("dof").set_alignment(CellAlignment::Center),
        Cell::new("Iman-Davenport").set_alignment(CellAlignment::Center),
        Cell::new("F dof").set_alignment(CellAlignment::Center),
    ]);

    for (attr, r) in results {
        table.add_row(vec![
            Cell::new(attr).set_alignment(CellAlignment::Left),
            Cell::new(format!("{:.4}", r.statistic)).set_alignment(CellAlignment::Right),
            Cell::new(r.dof).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", r.iman_davenport)).set_alignment(CellAlignment::Right),
            Cell::new(format!("({}, {})", r.f_dof.0, r.f_dof.1)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n{}", banner("Friedman test"), table)
}

impl CriticalDifference {
    fn table(&self, labels: Option<&[&str]>) -> Table {
        let labels = resolve_labels(labels, self.average_ranks.len());
        let groups = self.groups();

        let mut order: Vec<usize> = (0..self.average_ranks.len()).collect();
        order.sort_by(|&a, &b| self.average_ranks[a].total_cmp(&self.average_ranks[b]));

        let mut table = styled();
        table.set_header(vec![
            Cell::new("Treatment").set_alignment(CellAlignment::Center),
            Cell::new("Average rank").set_alignment(CellAlignment::Center),
            Cell::new("Groups").set_alignment(CellAlignment::Center),
        ]);

        for i in order {
            let member: Vec<String> = groups
                .iter()
                .enumerate()
                .filter(|(_, g)| g.contains(&i))
                .map(|(g, _)| format!("G{}", g + 1))
                .collect();
            table.add_row(vec![
                Cell::new(&labels[i]).set_alignment(CellAlignment::Left),
                Cell::new(format!("{:.4}", self.average_ranks[i])).set_alignment(CellAlignment::Right),
                Cell::new(member.join(" ")).set_alignment(CellAlignment::Left),
            ]);
        }
        table.add_row(vec![
            Cell::new("CD").set_alignment(CellAlignment::Left),
            Cell::new(format!("{:.4}", self.cd)).set_alignment(CellAlignment::Right),
            Cell::new(""),
        ]);
        table
    }

    /// Table of average ranks, groups and the critical difference.
    pub fn display(&self) -> String {
        format!("{}\n{}", banner("Critical difference"), self.table(None))
    }
}

impl Display for CriticalDifference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
