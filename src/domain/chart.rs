// Chart view models handed to the draw backend
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One vertical bar per weekday.
    Column,
    /// One start/end span per weekday.
    Timeline,
    /// Share-of-total breakdown across weekdays.
    Proportion,
}

/// A single typed cell in a chart data table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Label(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Axis/legend text for this cell. Datetimes print only their
    /// time-of-day component; the calendar date is an anchoring artifact.
    pub fn formatted(&self) -> String {
        match self {
            Cell::Label(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{:.2}", n)
                }
            }
            Cell::DateTime(dt) => dt.format("%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A fully prepared chart: what to draw and how, independent of any
/// particular rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub kind: ChartKind,
    pub table: DataTable,
    pub x_title: Option<String>,
}

impl ChartView {
    pub fn new(kind: ChartKind, table: DataTable) -> Self {
        Self {
            kind,
            table,
            x_title: None,
        }
    }

    pub fn with_x_title(mut self, title: &str) -> Self {
        self.x_title = Some(title.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cell_formatting() {
        assert_eq!(Cell::Label("Mon".to_string()).formatted(), "Mon");
        assert_eq!(Cell::Number(5.0).formatted(), "5");
        assert_eq!(Cell::Number(2.5).formatted(), "2.50");

        let dt = NaiveDate::from_ymd_opt(1899, 12, 31)
            .unwrap()
            .and_hms_opt(8, 30, 15)
            .unwrap();
        assert_eq!(Cell::DateTime(dt).formatted(), "08:30:15");
    }
}
