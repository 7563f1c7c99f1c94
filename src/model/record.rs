/// One player's countable fielding events for a match, plus the unweighted
/// runs-saved bias term. Metric counts keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub metrics: Vec<(String, u32)>,
    pub runs_saved: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, metrics: Vec<(String, u32)>, runs_saved: f64) -> Self {
        Self {
            name: name.into(),
            metrics,
            runs_saved,
        }
    }

    pub fn metric(&self, code: &str) -> Option<u32> {
        self.metrics
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, count)| *count)
    }
}
