use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricLabels {
    pub service: String,
    pub version: String,
}

impl Default for MetricLabels {
    fn default() -> Self {
        Self {
            service: "unknown".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(flatten)]
    pub labels: MetricLabels,
    pub counters: BTreeMap<String, i64>,
}

/// In-process counters. Observational only; nothing reads them to make decisions.
pub struct SimpleMetrics {
    labels: MetricLabels,
    counters: Mutex<HashMap<String, i64>>,
}

impl SimpleMetrics {
    pub fn new(labels: Option<MetricLabels>) -> Self {
        Self {
            labels: labels.unwrap_or_default(),
            counters: Mutex::new(HashMap::new()),
        }
    }

    fn make_key(&self, name: &str, labels: &Option<HashMap<String, String>>) -> String {
        if let Some(l) = labels {
            let mut sorted_labels: Vec<_> = l.iter().collect();
            sorted_labels.sort_by_key(|a| a.0);
            let label_str: Vec<String> = sorted_labels
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            format!("{}{{{}}}", name, label_str.join(","))
        } else {
            name.to_string()
        }
    }

    pub fn increment(&self, name: &str, value: i64, labels: Option<HashMap<String, String>>) {
        let key = self.make_key(name, &labels);
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        *counters.entry(key).or_insert(0) += value;
    }

    pub fn counter(&self, name: &str, labels: Option<HashMap<String, String>>) -> i64 {
        let key = self.make_key(name, &labels);
        let counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        counters.get(&key).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        MetricsSnapshot {
            labels: self.labels.clone(),
            counters: counters.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        }
    }
}

pub struct MetricNames;

impl MetricNames {
    pub const GATE_DECISIONS_TOTAL: &'static str = "gate_decisions";
}
