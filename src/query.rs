use std::collections::BTreeMap;

/// A single observation to predict for: a name to value mapping built fresh
/// per prediction request.
#[derive(Debug, Default, Clone)]
pub struct Query(BTreeMap<String, f64>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: f64) -> Self {
        self.0.insert(name.to_owned(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, f64)> for Query {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_work() {
        let query = Query::new().set("Fertilizer", 110.0).set("Labor", 210.0);
        assert_eq!(query.get("Fertilizer"), Some(110.0));
        assert_eq!(query.get("Labor"), Some(210.0));
        assert_eq!(query.get("SoilQuality"), None);
    }

    #[test]
    fn later_set_overrides_earlier() {
        let query = Query::new().set("Humidity", 60.0).set("Humidity", 64.0);
        assert_eq!(query.get("Humidity"), Some(64.0));
    }

    #[test]
    fn from_iterator_works() {
        let query = vec![("Temperature".to_owned(), 29.0)]
            .into_iter()
            .collect::<Query>();
        assert_eq!(query.get("Temperature"), Some(29.0));
    }
}
