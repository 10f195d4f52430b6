use serde::Serialize;

/// Outcome of one asset, collected instead of being lost to the console.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "status", content = "error")]
pub enum AssetStatus {
    Written,
    /// Primary generation failed but the fallback asset was written.
    Fallback,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetOutcome {
    pub file: String,
    #[serde(flatten)]
    pub status: AssetStatus,
}

/// Per-run record of every asset the pipeline attempted.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub assets: Vec<AssetOutcome>,
}

impl RunReport {
    pub fn record(&mut self, file: &str, result: anyhow::Result<()>) {
        let status = match result {
            Ok(()) => {
                tracing::info!(file, "generated");
                AssetStatus::Written
            }
            Err(err) => {
                tracing::warn!(file, error = ?err, "generation failed");
                AssetStatus::Failed(format!("{err:#}"))
            }
        };
        self.assets.push(AssetOutcome {
            file: file.to_string(),
            status,
        });
    }

    pub fn record_fallback(&mut self, file: &str) {
        tracing::info!(file, "generated fallback");
        self.assets.push(AssetOutcome {
            file: file.to_string(),
            status: AssetStatus::Fallback,
        });
    }

    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::Written))
    }

    pub fn fallbacks(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::Fallback))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&AssetStatus) -> bool) -> usize {
        self.assets.iter().filter(|a| pred(&a.status)).count()
    }
}
