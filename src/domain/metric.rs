// KPI domain model
use super::icon::{Icon, Tone};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn tone(self) -> Tone {
        match self {
            Trend::Up => Tone::Positive,
            Trend::Down => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub trend: Trend,
    /// Signed percent change, unrelated to `trend`
    pub change: f64,
    pub category: String,
    pub icon: Icon,
}

/// Raw "add KPI" form input, exactly as typed by the user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub value: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
}

/// Form value as sent by clients: typed text or a bare JSON number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(text) => text,
        RawValue::Number(n) => n.to_string(),
    })
}

impl MetricForm {
    /// Validate the form and build a metric from it.
    ///
    /// Returns `None` when a field is blank or the value is not a finite
    /// number. Manually added metrics always start trending up with no change.
    pub fn into_metric(self, id: String) -> Option<Metric> {
        let name = self.name.trim();
        let unit = self.unit.trim();
        let category = self.category.trim();
        let raw_value = self.value.trim();

        if name.is_empty() || unit.is_empty() || category.is_empty() || raw_value.is_empty() {
            return None;
        }

        let value = raw_value.parse::<f64>().ok().filter(|v| v.is_finite())?;

        Some(Metric {
            id,
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            trend: Trend::Up,
            change: 0.0,
            category: category.to_string(),
            icon: Icon::TrendingUp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, value: &str, unit: &str, category: &str) -> MetricForm {
        MetricForm {
            name: name.to_string(),
            value: value.to_string(),
            unit: unit.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_metric() {
        let metric = form("Test", "42", "X", "Energy")
            .into_metric("id-1".to_string())
            .unwrap();

        assert_eq!(metric.id, "id-1");
        assert_eq!(metric.name, "Test");
        assert_eq!(metric.value, 42.0);
        assert_eq!(metric.unit, "X");
        assert_eq!(metric.category, "Energy");
        assert_eq!(metric.trend, Trend::Up);
        assert_eq!(metric.change, 0.0);
        assert_eq!(metric.icon, Icon::TrendingUp);
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert!(form("Test", "", "X", "Energy").into_metric("1".into()).is_none());
        assert!(form("", "42", "X", "Energy").into_metric("1".into()).is_none());
        assert!(form("Test", "42", "  ", "Energy").into_metric("1".into()).is_none());
        assert!(form("Test", "42", "X", "").into_metric("1".into()).is_none());
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        assert!(form("Test", "forty", "X", "Energy").into_metric("1".into()).is_none());
        assert!(form("Test", "NaN", "X", "Energy").into_metric("1".into()).is_none());
        assert!(form("Test", "inf", "X", "Energy").into_metric("1".into()).is_none());
    }

    #[test]
    fn test_form_accepts_numeric_value() {
        let form: MetricForm = serde_json::from_str(
            r#"{"name":"Test","value":42,"unit":"X","category":"Energy"}"#,
        )
        .unwrap();
        assert_eq!(form.into_metric("1".into()).unwrap().value, 42.0);

        let form: MetricForm = serde_json::from_str(r#"{"name":"Test","value":"2.5"}"#).unwrap();
        assert_eq!(form.value, "2.5");
        assert!(form.unit.is_empty());
    }

    #[test]
    fn test_trend_tone() {
        assert_eq!(Trend::Up.tone(), Tone::Positive);
        assert_eq!(Trend::Down.tone(), Tone::Critical);
    }
}
