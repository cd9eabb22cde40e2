use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use log::info;
use log::warn;

use crate::Dataset;
use crate::error::DataError;
use crate::error::Result;
use crate::time::TimeAxis;
use crate::time::parse_datetime;

/// A bound of a time window, either a plain number or a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeBound {
    Numeric(f64),
    DateTime(DateTime<Utc>),
}

impl FromStr for TimeBound {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(n) = s.trim().parse::<f64>() {
            return Ok(TimeBound::Numeric(n));
        }

        parse_datetime(s)
            .map(TimeBound::DateTime)
            .ok_or_else(|| format!("`{s}` is neither a number nor a timestamp"))
    }
}

/// Selects the series and the time window that make it into a report.
#[derive(Debug, Default, Clone)]
pub struct SeriesFilter {
    pub(crate) include: Vec<String>,
    pub(crate) exclude: Vec<String>,
    pub(crate) start: Option<TimeBound>,
    pub(crate) end: Option<TimeBound>,
}

impl SeriesFilter {
    pub fn new(
        include: Vec<String>,
        exclude: Vec<String>,
        start: Option<TimeBound>,
        end: Option<TimeBound>,
    ) -> Self {
        Self {
            include,
            exclude,
            start,
            end,
        }
    }

    pub(crate) fn by_column(&self, column: &str, name: &str) -> bool {
        let listed = |names: &[String]| names.iter().any(|n| n == column || n == name);

        (self.include.is_empty() || listed(&self.include)) && !listed(&self.exclude)
    }

    /// Returns which time samples fall within the window, or `None` when
    /// there is no window.
    pub(crate) fn by_time(&self, time: &TimeAxis) -> Result<Option<Vec<bool>>> {
        if self.start.is_none() && self.end.is_none() {
            return Ok(None);
        }

        let mask = match time {
            TimeAxis::Numeric(ts) => {
                let start = self.start.map(numeric).transpose()?;
                let end = self.end.map(numeric).transpose()?;
                ts.iter().map(|t| within(t, start.as_ref(), end.as_ref())).collect()
            }
            TimeAxis::DateTime(ts) => {
                let start = self.start.map(datetime).transpose()?;
                let end = self.end.map(datetime).transpose()?;
                ts.iter().map(|t| within(t, start.as_ref(), end.as_ref())).collect()
            }
        };

        Ok(Some(mask))
    }
}

fn numeric(bound: TimeBound) -> Result<f64> {
    match bound {
        TimeBound::Numeric(n) => Ok(n),
        TimeBound::DateTime(_) => Err(DataError::TimeBoundMismatch),
    }
}

fn datetime(bound: TimeBound) -> Result<DateTime<Utc>> {
    match bound {
        TimeBound::DateTime(dt) => Ok(dt),
        TimeBound::Numeric(_) => Err(DataError::TimeBoundMismatch),
    }
}

fn within<T: PartialOrd>(value: &T, start: Option<&T>, end: Option<&T>) -> bool {
    match (start, end) {
        (None, None) => true,
        (None, Some(end)) => value.le(end),
        (Some(start), None) => value.ge(start),
        (Some(start), Some(end)) => value.ge(start) && value.le(end),
    }
}

impl Dataset {
    /// Drops the series and the time samples that the `filter` rejects.
    pub fn filter(self, filter: &SeriesFilter) -> Result<Dataset> {
        for name in &filter.include {
            if !self.series.iter().any(|s| s.column() == name || s.name() == name) {
                warn!("the included column `{name}` is not part of the dataset");
            }
        }

        let mask = filter.by_time(&self.time)?;

        let mut series: Vec<_> = self
            .series
            .into_iter()
            .filter(|s| filter.by_column(s.column(), s.name()))
            .collect();
        let mut time = self.time;

        if let Some(mask) = mask {
            time = time.retain(&mask);
            series = series.into_iter().map(|s| s.retain(&mask)).collect();

            info!("kept {} of {} time samples", time.len(), mask.len());
        }

        if time.is_empty() {
            return Err(DataError::EmptyTable);
        }

        Ok(Dataset {
            time_column: self.time_column,
            time,
            series,
            skipped: self.skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::ScalarSeries;
    use crate::series::Series;
    use chrono::TimeZone;

    fn dataset() -> Dataset {
        let scalar = |column: &str, name: &str| {
            Series::Scalar(ScalarSeries {
                column: column.to_owned(),
                name: name.to_owned(),
                unit: None,
                values: vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)],
            })
        };

        Dataset {
            time_column: String::from("time"),
            time: TimeAxis::Numeric(vec![0.0, 1.0, 2.0, 3.0]),
            series: vec![scalar("a [V]", "a"), scalar("b", "b"), scalar("c", "c")],
            skipped: Vec::new(),
        }
    }

    #[test]
    fn parse_time_bounds() {
        assert_eq!("2.5".parse::<TimeBound>(), Ok(TimeBound::Numeric(2.5)));
        assert!(matches!(
            "2024-01-01 00:00:00".parse::<TimeBound>(),
            Ok(TimeBound::DateTime(_))
        ));
        assert!("soon".parse::<TimeBound>().is_err());
    }

    #[test]
    fn include_and_exclude_columns() -> Result<()> {
        let filter = SeriesFilter::new(
            vec![String::from("a"), String::from("b")],
            vec![String::from("b")],
            None,
            None,
        );
        let filtered = dataset().filter(&filter)?;
        let columns: Vec<&str> = filtered.series.iter().map(|s| s.column()).collect();

        assert_eq!(columns, vec!["a [V]"]);
        assert_eq!(filtered.len(), 4);

        Ok(())
    }

    #[test]
    fn time_window_keeps_series_aligned() -> Result<()> {
        let filter = SeriesFilter::new(
            Vec::new(),
            Vec::new(),
            Some(TimeBound::Numeric(1.0)),
            Some(TimeBound::Numeric(2.0)),
        );
        let filtered = dataset().filter(&filter)?;

        assert_eq!(filtered.time, TimeAxis::Numeric(vec![1.0, 2.0]));

        for series in filtered.scalars() {
            assert_eq!(series.values, vec![Some(2.0), Some(3.0)]);
        }

        Ok(())
    }

    #[test]
    fn datetime_window_keeps_series_aligned() -> Result<()> {
        let at = |second: u32| Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, second).unwrap();
        let dataset = Dataset {
            time: TimeAxis::DateTime(vec![at(0), at(1), at(2), at(3)]),
            ..dataset()
        };
        let filter = SeriesFilter::new(
            Vec::new(),
            vec![String::from("c")],
            "2024-03-01 10:00:01".parse().ok(),
            "2024-03-01T10:00:02Z".parse().ok(),
        );
        let filtered = dataset.filter(&filter)?;

        assert_eq!(filtered.time, TimeAxis::DateTime(vec![at(1), at(2)]));
        assert_eq!(filtered.series.len(), 2);

        for series in filtered.scalars() {
            assert_eq!(series.values, vec![Some(2.0), Some(3.0)]);
        }

        Ok(())
    }

    #[test]
    fn numeric_bound_on_datetime_axis_is_rejected() {
        let dataset = Dataset {
            time: TimeAxis::DateTime(vec![Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()]),
            ..dataset()
        };
        let filter = SeriesFilter::new(Vec::new(), Vec::new(), None, Some(TimeBound::Numeric(1.0)));

        assert!(matches!(
            dataset.filter(&filter),
            Err(DataError::TimeBoundMismatch)
        ));
    }

    #[test]
    fn window_bound_kind_must_match_axis() {
        let filter = SeriesFilter::new(
            Vec::new(),
            Vec::new(),
            "2024-01-01".parse().ok(),
            None,
        );

        assert!(matches!(
            dataset().filter(&filter),
            Err(DataError::TimeBoundMismatch)
        ));
    }

    #[test]
    fn window_without_samples_is_empty() {
        let filter = SeriesFilter::new(
            Vec::new(),
            Vec::new(),
            Some(TimeBound::Numeric(10.0)),
            None,
        );

        assert!(matches!(
            dataset().filter(&filter),
            Err(DataError::EmptyTable)
        ));
    }
}
