use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

const PREFIX: &str = "plot_";

/// The HTML element id of a chart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Id(String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Hands out ids derived from column names, unique within one page.
///
/// ```
/// use tabvis_data::ScalarSeries;
/// use tabvis_data::TimeAxis;
/// use tabvis_vis::Id;
/// use tabvis_vis::IdGenerator;
/// use tabvis_vis::layout::ChartLayout;
///
/// let series = ScalarSeries {
///     column: String::from("cpu load"),
///     name: String::from("cpu load"),
///     unit: None,
///     values: vec![Some(0.5)],
/// };
/// let mut ids = IdGenerator::new();
/// let id: Id = ids.issue(&series.column);
/// let chart = ChartLayout::scalar(id, &series, &TimeAxis::Numeric(vec![0.0]));
///
/// assert_eq!(chart.id.as_str(), "plot_cpu_load");
/// assert_eq!(ids.issue("cpu load").as_str(), "plot_cpu_load_2");
/// ```
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: HashMap<String, usize>,
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        Self::default()
    }

    pub fn issue(&mut self, name: &str) -> Id {
        let base = format!("{PREFIX}{}", sanitize(name));
        let mut candidate = base.clone();

        loop {
            let count = self.issued.entry(candidate.clone()).or_insert(0);
            *count += 1;

            if *count == 1 {
                return Id(candidate);
            }

            candidate = format!("{base}_{count}");
        }
    }
}

// Spaces become underscores and parentheses are dropped, so that
// `speed (m/s)` turns into `speed_m_s`.
fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '(' && *c != ')')
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_from_column_names() {
        let mut ids = IdGenerator::new();

        assert_eq!(ids.issue("cpu load").as_str(), "plot_cpu_load");
        assert_eq!(ids.issue("speed (m/s)").as_str(), "plot_speed_m_s");
        assert_eq!(ids.issue("temp'</script>").as_str(), "plot_temp___script_");
    }

    #[test]
    fn colliding_ids_get_a_suffix() {
        let mut ids = IdGenerator::new();

        assert_eq!(ids.issue("a b").as_str(), "plot_a_b");
        assert_eq!(ids.issue("a_b").as_str(), "plot_a_b_2");
        assert_eq!(ids.issue("a(b)").as_str(), "plot_ab");
        assert_eq!(ids.issue("a b").as_str(), "plot_a_b_3");
    }
}
