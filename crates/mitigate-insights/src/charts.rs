//! Dashboard charts as Plotly figure JSON.
//!
//! Each builder takes grouped counts from the store and returns a [`Figure`]
//! with `data` traces and a `layout`, ready for `Plotly.newPlot`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use serde_json::{Value, json};

use mitigate_core::reports::{CategoryCount, DoseCount};

pub const VACCINE_TYPE_TITLE: &str = "Vaccine Type Distribution";
pub const CITIZENS_BY_STATE_TITLE: &str = "Citizen Count by State";
pub const DOSE_DISTRIBUTION_TITLE: &str = "Vaccine Dose Count by Type";

const STATE_BAR_COLOR: &str = "rgba(54, 162, 235, 0.7)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// The three charts on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub vaccine_types: Figure,
    pub citizens_by_state: Figure,
    pub dose_distribution: Figure,
}

impl Dashboard {
    #[must_use]
    pub fn build(
        by_vaccine_type: &[CategoryCount],
        by_state: &[CategoryCount],
        by_dose: &[DoseCount],
    ) -> Self {
        Self {
            vaccine_types: vaccine_type_pie(by_vaccine_type),
            citizens_by_state: citizens_by_state_bar(by_state),
            dose_distribution: dose_distribution_chart(&dose_pivot(by_dose)),
        }
    }
}

fn split(counts: &[CategoryCount]) -> (Vec<&str>, Vec<u64>) {
    counts.iter().map(|c| (c.label.as_str(), c.count)).unzip()
}

#[must_use]
pub fn vaccine_type_pie(counts: &[CategoryCount]) -> Figure {
    let (labels, values) = split(counts);
    Figure {
        data: vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "hoverinfo": "label+value+percent",
            "textinfo": "label+percent",
            "marker": { "line": { "color": "#000000", "width": 1 } },
        })],
        layout: json!({ "title": { "text": VACCINE_TYPE_TITLE } }),
    }
}

#[must_use]
pub fn citizens_by_state_bar(counts: &[CategoryCount]) -> Figure {
    let (labels, values) = split(counts);
    Figure {
        data: vec![json!({
            "type": "bar",
            "x": labels,
            "y": values,
            "text": values,
            "textposition": "outside",
            "marker": { "color": STATE_BAR_COLOR },
            "hovertemplate": "State: %{x}<br>Citizens: %{y}<extra></extra>",
        })],
        layout: json!({
            "title": { "text": CITIZENS_BY_STATE_TITLE },
            "xaxis": { "title": { "text": "State" } },
            "yaxis": { "title": { "text": "Citizens" }, "dtick": 1 },
        }),
    }
}

/// Vaccination counts pivoted to one series per vaccine type over a shared
/// dose axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DosePivot {
    pub doses: Vec<String>,
    pub series: Vec<DoseSeries>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoseSeries {
    pub vaccine_type: String,
    /// One count per entry of [`DosePivot::doses`], zero where absent.
    pub counts: Vec<u64>,
}

/// Integer labels in numeric order, then anything else lexicographically.
fn dose_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[must_use]
pub fn dose_pivot(counts: &[DoseCount]) -> DosePivot {
    let mut doses: Vec<String> = counts
        .iter()
        .map(|c| c.dose.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    doses.sort_by(|a, b| dose_order(a, b));

    let mut by_vaccine: BTreeMap<&str, HashMap<&str, u64>> = BTreeMap::new();
    for c in counts {
        *by_vaccine
            .entry(c.vaccine_type.as_str())
            .or_default()
            .entry(c.dose.as_str())
            .or_default() += c.count;
    }

    let series = by_vaccine
        .into_iter()
        .map(|(vaccine_type, per_dose)| DoseSeries {
            vaccine_type: vaccine_type.to_string(),
            counts: doses
                .iter()
                .map(|d| per_dose.get(d.as_str()).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    DosePivot { doses, series }
}

#[must_use]
pub fn dose_distribution_chart(pivot: &DosePivot) -> Figure {
    let data = pivot
        .series
        .iter()
        .map(|s| {
            json!({
                "type": "bar",
                "name": s.vaccine_type,
                "x": pivot.doses,
                "y": s.counts,
            })
        })
        .collect();
    Figure {
        data,
        layout: json!({
            "title": { "text": DOSE_DISTRIBUTION_TITLE },
            "xaxis": { "title": { "text": "Dose Number" }, "type": "category" },
            "yaxis": { "title": { "text": "Count" } },
            "barmode": "group",
        }),
    }
}
