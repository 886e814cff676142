use serde::Serialize;

/// Summary statistics of a variable, in source document order.
///
/// `names[i]` is the statistic type of `values[i]`. A statistic without a `type` attribute
/// keeps its position with a `None` name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub names: Vec<Option<String>>,
    pub values: Vec<String>,
}

impl Statistics {
    pub fn push(&mut self, name: Option<String>, value: String) {
        self.names.push(name);
        self.values.push(value);
    }
}
